mod athlete;
mod competition;
mod incident;
mod magic_link;
mod penalty;
mod race;
mod race_location;
mod race_participation;
mod race_type;
mod report;
mod role;
mod session;
mod user;

pub use athlete::{Athlete, AthleteSummary};
pub use competition::{Competition, CompetitionStatus, CompetitionSummary};
pub use incident::{Incident, IncidentDecision, IncidentStatus, IncidentSummary};
pub use magic_link::{MagicLink, MagicLinkSummary};
pub use penalty::{Penalty, PenaltySeverity, PenaltySummary};
pub use race::{Race, RaceStatus, RaceSummary};
pub use race_location::{LocationKind, RaceLocation, RaceLocationSummary, RaceTypeLocationTemplate};
pub use race_participation::{ParticipationStatus, RaceParticipation, RaceParticipationSummary};
pub use race_type::{RaceType, RaceTypeSummary};
pub use report::{Report, ReportStatus, ReportSummary};
pub use role::{Role, RoleName, RoleSummary};
pub use session::{Session, SessionSummary};
pub use user::{User, UserSummary};
