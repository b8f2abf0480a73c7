use storage::error::Result;
use storage::models::{Report, ReportSummary};
use storage::repository::{ReportRepository, Repository};

use crate::access::Access;
use crate::policy::Policy;
use crate::state::{Owned, ReportState};

/// Reports belong to their author. Managers can always intervene; the author
/// keeps editing rights until the report is finalized and may withdraw it
/// only while it is still a draft.
pub struct ReportPolicy<'a, R: ReportState + Owned = Report> {
    access: &'a Access,
    report: Option<&'a R>,
}

impl<'a, R: ReportState + Owned> ReportPolicy<'a, R> {
    pub fn new(access: &'a Access, report: &'a R) -> Self {
        Self {
            access,
            report: Some(report),
        }
    }

    fn owns(&self, report: &R) -> bool {
        self.access.is(report.owner_id())
    }
}

impl<'a> ReportPolicy<'a, Report> {
    pub fn for_new(access: &'a Access) -> Self {
        Self {
            access,
            report: None,
        }
    }
}

impl<R: ReportState + Owned> Policy for ReportPolicy<'_, R> {
    fn index(&self) -> bool {
        self.access.authenticated
    }

    fn show(&self) -> bool {
        self.access.manager() || self.report.is_some_and(|report| self.owns(report))
    }

    fn create(&self) -> bool {
        self.access.can_report()
    }

    fn update(&self) -> bool {
        if self.access.manager() {
            return true;
        }
        self.report
            .is_some_and(|report| self.owns(report) && (report.draft() || report.submitted()))
    }

    fn destroy(&self) -> bool {
        if self.access.manager() {
            return true;
        }
        self.report
            .is_some_and(|report| self.owns(report) && report.draft())
    }
}

/// Managers list everything; anyone else who can report sees only their own.
pub struct ReportScope<'a> {
    access: &'a Access,
}

impl<'a> ReportScope<'a> {
    pub fn new(access: &'a Access) -> Self {
        Self { access }
    }

    pub async fn resolve(&self, repo: &ReportRepository<'_>) -> Result<Vec<ReportSummary>> {
        if self.access.manager() {
            return repo.all().await;
        }
        if self.access.can_report() {
            if let Some(user_id) = self.access.user_id {
                return repo.for_user(user_id).await;
            }
        }
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use storage::models::RoleName;

    use super::*;
    use crate::test_support::{actor, admin, guest, member, user};

    struct Stub {
        owner: i64,
        draft: bool,
        submitted: bool,
    }

    impl ReportState for Stub {
        fn draft(&self) -> bool {
            self.draft
        }

        fn submitted(&self) -> bool {
            self.submitted
        }
    }

    impl Owned for Stub {
        fn owner_id(&self) -> i64 {
            self.owner
        }
    }

    fn report(owner: i64, draft: bool, submitted: bool) -> Stub {
        Stub {
            owner,
            draft,
            submitted,
        }
    }

    #[test]
    fn owners_are_isolated_from_each_other() {
        let alice = Access::of(Some(&user(1, Some(RoleName::NationalReferee), false)));
        let bob = Access::of(Some(&user(2, Some(RoleName::NationalReferee), false)));
        let alices_draft = report(1, true, false);

        assert!(ReportPolicy::new(&alice, &alices_draft).show());
        assert!(ReportPolicy::new(&alice, &alices_draft).update());
        assert!(ReportPolicy::new(&alice, &alices_draft).destroy());

        assert!(!ReportPolicy::new(&bob, &alices_draft).show());
        assert!(!ReportPolicy::new(&bob, &alices_draft).update());
        assert!(!ReportPolicy::new(&bob, &alices_draft).destroy());
    }

    #[test]
    fn author_rights_narrow_with_the_lifecycle() {
        let author = member(1);
        let draft = report(1, true, false);
        let submitted = report(1, false, true);
        let finalized = report(1, false, false);

        assert!(ReportPolicy::new(&author, &draft).update());
        assert!(ReportPolicy::new(&author, &submitted).update());
        assert!(!ReportPolicy::new(&author, &finalized).update());

        assert!(ReportPolicy::new(&author, &draft).destroy());
        assert!(!ReportPolicy::new(&author, &submitted).destroy());
        assert!(!ReportPolicy::new(&author, &finalized).destroy());
    }

    #[test]
    fn managers_override_ownership() {
        let finalized = report(1, false, false);
        for access in [
            admin(),
            actor(RoleName::RefereeManager),
            actor(RoleName::JuryPresident),
        ] {
            let policy = ReportPolicy::new(&access, &finalized);
            assert!(policy.show());
            assert!(policy.update());
            assert!(policy.destroy());
        }
    }

    #[test]
    fn guests_are_denied_everywhere() {
        let access = guest();
        let draft = report(1, true, false);
        let policy = ReportPolicy::new(&access, &draft);
        assert!(!policy.index());
        assert!(!policy.show());
        assert!(!policy.update());
        assert!(!policy.destroy());
        assert!(!ReportPolicy::for_new(&access).create());
    }
}
