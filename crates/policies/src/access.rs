use storage::models::{RoleName, User};

/// Everything the policies need to know about the current actor, computed
/// once up front from an optional authenticated user.
#[derive(Debug, Clone, Default)]
pub struct Access {
    pub authenticated: bool,
    pub admin: bool,
    pub user_id: Option<i64>,
    pub country: Option<String>,
    role: Option<RoleName>,
}

impl Access {
    pub fn of(user: Option<&User>) -> Self {
        match user {
            Some(user) => Self {
                authenticated: true,
                admin: user.admin,
                user_id: Some(user.id),
                country: user.country.clone(),
                role: user.role,
            },
            None => Self::default(),
        }
    }

    pub fn var_operator(&self) -> bool {
        self.role == Some(RoleName::VarOperator)
    }

    pub fn national_referee(&self) -> bool {
        self.role == Some(RoleName::NationalReferee)
    }

    pub fn international_referee(&self) -> bool {
        self.role == Some(RoleName::InternationalReferee)
    }

    pub fn jury_president(&self) -> bool {
        self.role == Some(RoleName::JuryPresident)
    }

    pub fn referee_manager(&self) -> bool {
        self.role == Some(RoleName::RefereeManager)
    }

    pub fn broadcast_viewer(&self) -> bool {
        self.role == Some(RoleName::BroadcastViewer)
    }

    /// Referees of either level.
    pub fn referee(&self) -> bool {
        self.national_referee() || self.international_referee()
    }

    /// Roles that administrate competitions end to end.
    pub fn manager(&self) -> bool {
        self.admin || self.referee_manager() || self.jury_president()
    }

    /// Roles allowed to file incident reports.
    pub fn can_report(&self) -> bool {
        self.referee() || self.var_operator() || self.manager()
    }

    pub fn is(&self, user_id: i64) -> bool {
        self.user_id == Some(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(role: Option<RoleName>, admin: bool) -> User {
        let now = chrono::NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        User {
            id: 7,
            email: "ref@example.com".into(),
            name: "Ref".into(),
            admin,
            role_id: None,
            role,
            country: Some("FRA".into()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn missing_actor_grants_nothing() {
        let access = Access::of(None);
        assert!(!access.authenticated);
        assert!(!access.manager());
        assert!(!access.can_report());
        assert!(!access.is(7));
    }

    #[test]
    fn manager_covers_admin_and_senior_roles() {
        assert!(Access::of(Some(&user_with(None, true))).manager());
        assert!(Access::of(Some(&user_with(Some(RoleName::RefereeManager), false))).manager());
        assert!(Access::of(Some(&user_with(Some(RoleName::JuryPresident), false))).manager());
        assert!(!Access::of(Some(&user_with(Some(RoleName::NationalReferee), false))).manager());
    }

    #[test]
    fn reporting_roles() {
        for role in [
            RoleName::NationalReferee,
            RoleName::InternationalReferee,
            RoleName::VarOperator,
            RoleName::JuryPresident,
            RoleName::RefereeManager,
        ] {
            assert!(Access::of(Some(&user_with(Some(role), false))).can_report());
        }
        assert!(!Access::of(Some(&user_with(Some(RoleName::BroadcastViewer), false))).can_report());
        assert!(!Access::of(Some(&user_with(None, false))).can_report());
    }
}
