mod athlete;
mod base;
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

pub use athlete::AthleteRepository;
pub use base::{Argument, Criteria, Repository};
pub use competition::CompetitionRepository;
pub use incident::IncidentRepository;
pub use magic_link::MagicLinkRepository;
pub use penalty::PenaltyRepository;
pub use race::RaceRepository;
pub use race_location::RaceLocationRepository;
pub use race_participation::RaceParticipationRepository;
pub use race_type::RaceTypeRepository;
pub use report::ReportRepository;
pub use role::RoleRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
