use storage::error::Result;
use storage::models::RaceParticipationSummary;
use storage::repository::{RaceParticipationRepository, Repository};

use crate::access::Access;
use crate::policy::Policy;

/// Start lists and results are edited by admins and VAR operators only.
pub struct RaceParticipationPolicy<'a> {
    access: &'a Access,
}

impl<'a> RaceParticipationPolicy<'a> {
    pub fn new(access: &'a Access) -> Self {
        Self { access }
    }

    fn operator(&self) -> bool {
        self.access.admin || self.access.var_operator()
    }
}

impl Policy for RaceParticipationPolicy<'_> {
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
        self.operator()
    }

    fn destroy(&self) -> bool {
        self.operator()
    }
}

pub struct RaceParticipationScope<'a> {
    access: &'a Access,
}

impl<'a> RaceParticipationScope<'a> {
    pub fn new(access: &'a Access) -> Self {
        Self { access }
    }

    pub async fn resolve(
        &self,
        repo: &RaceParticipationRepository<'_>,
    ) -> Result<Vec<RaceParticipationSummary>> {
        if self.access.authenticated {
            repo.all().await
        } else {
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use storage::models::RoleName;

    use super::*;
    use crate::test_support::{actor, admin, guest};

    #[test]
    fn operators_manage_start_lists() {
        for access in [admin(), actor(RoleName::VarOperator)] {
            let policy = RaceParticipationPolicy::new(&access);
            assert!(policy.create());
            assert!(policy.update());
            assert!(policy.destroy());
        }
    }

    #[test]
    fn referees_only_read() {
        let access = actor(RoleName::InternationalReferee);
        let policy = RaceParticipationPolicy::new(&access);
        assert!(policy.index());
        assert!(policy.show());
        assert!(!policy.create());
        assert!(!policy.destroy());
    }

    #[test]
    fn guests_denied() {
        let access = guest();
        let policy = RaceParticipationPolicy::new(&access);
        assert!(!policy.index());
        assert!(!policy.new_record());
    }
}
