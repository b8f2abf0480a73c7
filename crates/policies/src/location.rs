use crate::access::Access;
use crate::policy::Policy;

/// Camera and judging positions on a course follow the race editing rules.
pub struct RaceLocationPolicy<'a> {
    access: &'a Access,
}

impl<'a> RaceLocationPolicy<'a> {
    pub fn new(access: &'a Access) -> Self {
        Self { access }
    }

    fn operator(&self) -> bool {
        self.access.admin || self.access.var_operator()
    }
}

impl Policy for RaceLocationPolicy<'_> {
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

#[cfg(test)]
mod tests {
    use storage::models::RoleName;

    use super::*;
    use crate::test_support::{actor, guest};

    #[test]
    fn mutation_follows_race_editing() {
        assert!(RaceLocationPolicy::new(&actor(RoleName::VarOperator)).create());
        assert!(!RaceLocationPolicy::new(&actor(RoleName::JuryPresident)).create());
        assert!(RaceLocationPolicy::new(&actor(RoleName::JuryPresident)).show());
        assert!(!RaceLocationPolicy::new(&guest()).show());
    }
}
