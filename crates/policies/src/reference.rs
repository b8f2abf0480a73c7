use crate::access::Access;
use crate::policy::Policy;

/// Race formats are seeded reference data; browsing is open to anyone
/// signed in and edits stay with admins.
pub struct RaceTypePolicy<'a> {
    access: &'a Access,
}

impl<'a> RaceTypePolicy<'a> {
    pub fn new(access: &'a Access) -> Self {
        Self { access }
    }
}

impl Policy for RaceTypePolicy<'_> {
    fn index(&self) -> bool {
        self.access.authenticated
    }

    fn show(&self) -> bool {
        self.access.authenticated
    }

    fn create(&self) -> bool {
        self.access.admin
    }

    fn update(&self) -> bool {
        self.access.admin
    }

    fn destroy(&self) -> bool {
        self.access.admin
    }
}

/// Same rules for the penalty catalogue.
pub struct PenaltyPolicy<'a> {
    access: &'a Access,
}

impl<'a> PenaltyPolicy<'a> {
    pub fn new(access: &'a Access) -> Self {
        Self { access }
    }
}

impl Policy for PenaltyPolicy<'_> {
    fn index(&self) -> bool {
        self.access.authenticated
    }

    fn show(&self) -> bool {
        self.access.authenticated
    }

    fn create(&self) -> bool {
        self.access.admin
    }

    fn update(&self) -> bool {
        self.access.admin
    }

    fn destroy(&self) -> bool {
        self.access.admin
    }
}

#[cfg(test)]
mod tests {
    use storage::models::RoleName;

    use super::*;
    use crate::test_support::{actor, admin, guest};

    #[test]
    fn reference_data_is_read_only_for_non_admins() {
        assert!(RaceTypePolicy::new(&actor(RoleName::BroadcastViewer)).index());
        assert!(!RaceTypePolicy::new(&actor(RoleName::RefereeManager)).update());
        assert!(RaceTypePolicy::new(&admin()).update());
        assert!(!PenaltyPolicy::new(&guest()).index());
        assert!(PenaltyPolicy::new(&actor(RoleName::JuryPresident)).show());
        assert!(!PenaltyPolicy::new(&actor(RoleName::JuryPresident)).destroy());
    }
}
