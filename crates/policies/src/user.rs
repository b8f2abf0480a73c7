use storage::models::User;

use crate::access::Access;
use crate::policy::Policy;
use crate::state::Owned;

/// Account administration is admin-only, with one carve-out: everyone may
/// view their own account.
pub struct UserPolicy<'a, R: Owned = User> {
    access: &'a Access,
    record: Option<&'a R>,
}

impl<'a, R: Owned> UserPolicy<'a, R> {
    pub fn new(access: &'a Access, record: &'a R) -> Self {
        Self {
            access,
            record: Some(record),
        }
    }
}

impl<'a> UserPolicy<'a, User> {
    pub fn for_new(access: &'a Access) -> Self {
        Self {
            access,
            record: None,
        }
    }
}

impl<R: Owned> Policy for UserPolicy<'_, R> {
    fn index(&self) -> bool {
        self.access.admin
    }

    fn show(&self) -> bool {
        self.access.admin
            || self
                .record
                .is_some_and(|record| self.access.is(record.owner_id()))
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
