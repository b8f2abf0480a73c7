use storage::error::Result;
use storage::models::{Race, RaceSummary};
use storage::repository::{RaceRepository, Repository};

use crate::access::Access;
use crate::policy::Policy;
use crate::state::RaceState;

/// Races are run by admins and VAR operators. Once a race is completed its
/// results are locked and only deletion remains available to them.
pub struct RacePolicy<'a, R: RaceState = Race> {
    access: &'a Access,
    race: Option<&'a R>,
}

impl<'a, R: RaceState> RacePolicy<'a, R> {
    pub fn new(access: &'a Access, race: &'a R) -> Self {
        Self {
            access,
            race: Some(race),
        }
    }

    fn operator(&self) -> bool {
        self.access.admin || self.access.var_operator()
    }
}

impl<'a> RacePolicy<'a, Race> {
    /// Policy for actions that happen before a record exists.
    pub fn for_new(access: &'a Access) -> Self {
        Self { access, race: None }
    }
}

impl<R: RaceState> Policy for RacePolicy<'_, R> {
    fn index(&self) -> bool {
        self.access.authenticated
    }

    fn show(&self) -> bool {
        self.access.authenticated
    }

    fn create(&self) -> bool {
        self.operator()
    }

    fn update(&self) -> bool {
        self.operator() && self.race.is_some_and(|race| !race.completed())
    }

    fn destroy(&self) -> bool {
        self.operator() && self.race.is_some()
    }
}

pub struct RaceScope<'a> {
    access: &'a Access,
}

impl<'a> RaceScope<'a> {
    pub fn new(access: &'a Access) -> Self {
        Self { access }
    }

    pub async fn resolve(&self, repo: &RaceRepository<'_>) -> Result<Vec<RaceSummary>> {
        if self.access.authenticated {
            repo.all().await
        } else {
            Ok(Vec::new())
        }
    }
}
