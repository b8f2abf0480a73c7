use storage::error::Result;
use storage::models::CompetitionSummary;
use storage::repository::{CompetitionRepository, Repository};

use crate::access::Access;
use crate::policy::Policy;

/// Competitions are visible to anyone signed in; lifecycle management is a
/// manager concern, and only referee managers (or admins) may remove one.
pub struct CompetitionPolicy<'a> {
    access: &'a Access,
}

impl<'a> CompetitionPolicy<'a> {
    pub fn new(access: &'a Access) -> Self {
        Self { access }
    }
}

impl Policy for CompetitionPolicy<'_> {
    fn index(&self) -> bool {
        self.access.authenticated
    }

    fn show(&self) -> bool {
        self.access.authenticated
    }

    fn create(&self) -> bool {
        self.access.manager()
    }

    fn update(&self) -> bool {
        self.access.manager()
    }

    fn destroy(&self) -> bool {
        self.access.admin || self.access.referee_manager()
    }
}

pub struct CompetitionScope<'a> {
    access: &'a Access,
}

impl<'a> CompetitionScope<'a> {
    pub fn new(access: &'a Access) -> Self {
        Self { access }
    }

    pub async fn resolve(
        &self,
        repo: &CompetitionRepository<'_>,
    ) -> Result<Vec<CompetitionSummary>> {
        if self.access.authenticated {
            repo.all().await
        } else {
            Ok(Vec::new())
        }
    }
}
