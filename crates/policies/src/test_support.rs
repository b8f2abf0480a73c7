use storage::models::{RoleName, User};

use crate::access::Access;

pub fn guest() -> Access {
    Access::of(None)
}

pub fn actor(role: RoleName) -> Access {
    Access::of(Some(&user(1, Some(role), false)))
}

pub fn admin() -> Access {
    Access::of(Some(&user(1, None, true)))
}

pub fn member(id: i64) -> Access {
    Access::of(Some(&user(id, None, false)))
}

pub fn user(id: i64, role: Option<RoleName>, admin: bool) -> User {
    let now = chrono::NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    User {
        id,
        email: format!("user{id}@example.com"),
        name: format!("User {id}"),
        admin,
        role_id: None,
        role,
        country: Some("ITA".into()),
        created_at: now,
        updated_at: now,
    }
}
