use storage::error::Result;
use storage::models::AthleteSummary;
use storage::repository::{AthleteRepository, Repository};

use crate::access::Access;
use crate::policy::Policy;

/// Athlete records are maintained by admins and VAR operators (imports run
/// under a VAR operator account); removal needs a manager.
pub struct AthletePolicy<'a> {
    access: &'a Access,
}

impl<'a> AthletePolicy<'a> {
    pub fn new(access: &'a Access) -> Self {
        Self { access }
    }
}

impl Policy for AthletePolicy<'_> {
    fn index(&self) -> bool {
        self.access.authenticated
    }

    fn show(&self) -> bool {
        self.access.authenticated
    }

    fn create(&self) -> bool {
        self.access.admin || self.access.var_operator()
    }

    fn update(&self) -> bool {
        self.access.admin || self.access.var_operator()
    }

    fn destroy(&self) -> bool {
        self.access.manager()
    }
}

pub struct AthleteScope<'a> {
    access: &'a Access,
}

impl<'a> AthleteScope<'a> {
    pub fn new(access: &'a Access) -> Self {
        Self { access }
    }

    pub async fn resolve(&self, repo: &AthleteRepository<'_>) -> Result<Vec<AthleteSummary>> {
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
    fn maintenance_is_operator_work() {
        assert!(AthletePolicy::new(&admin()).create());
        assert!(AthletePolicy::new(&actor(RoleName::VarOperator)).update());
        assert!(!AthletePolicy::new(&actor(RoleName::RefereeManager)).create());
        assert!(!AthletePolicy::new(&guest()).index());
    }

    #[test]
    fn destroy_needs_a_manager() {
        assert!(AthletePolicy::new(&actor(RoleName::RefereeManager)).destroy());
        assert!(AthletePolicy::new(&actor(RoleName::JuryPresident)).destroy());
        assert!(!AthletePolicy::new(&actor(RoleName::VarOperator)).destroy());
    }
}
