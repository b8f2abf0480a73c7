use storage::models::{
    Incident, IncidentSummary, Race, RaceSummary, Report, ReportStatus, ReportSummary, User,
    UserSummary,
};

/// Races expose whether results are locked in.
pub trait RaceState {
    fn completed(&self) -> bool;
}

impl RaceState for Race {
    fn completed(&self) -> bool {
        Race::completed(self)
    }
}

impl RaceState for RaceSummary {
    fn completed(&self) -> bool {
        RaceSummary::completed(self)
    }
}

/// Incidents expose whether a jury decision is still open.
pub trait IncidentState {
    fn unofficial(&self) -> bool;
}

impl IncidentState for Incident {
    fn unofficial(&self) -> bool {
        Incident::unofficial(self)
    }
}

impl IncidentState for IncidentSummary {
    fn unofficial(&self) -> bool {
        IncidentSummary::unofficial(self)
    }
}

/// Reports expose the lifecycle stages that still allow author edits.
pub trait ReportState {
    fn draft(&self) -> bool;
    fn submitted(&self) -> bool;
}

impl ReportState for Report {
    fn draft(&self) -> bool {
        self.status == ReportStatus::Draft
    }

    fn submitted(&self) -> bool {
        self.status == ReportStatus::Submitted
    }
}

impl ReportState for ReportSummary {
    fn draft(&self) -> bool {
        self.status == ReportStatus::Draft
    }

    fn submitted(&self) -> bool {
        self.status == ReportStatus::Submitted
    }
}

/// Records attributable to a single user.
pub trait Owned {
    fn owner_id(&self) -> i64;
}

impl Owned for Report {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

impl Owned for ReportSummary {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

// A user record is its own owner, which lets the "show yourself" rule reuse
// the same ownership check reports use.
impl Owned for User {
    fn owner_id(&self) -> i64 {
        self.id
    }
}

impl Owned for UserSummary {
    fn owner_id(&self) -> i64 {
        self.id
    }
}
