mod athlete;
mod competition;
mod incident;
mod location;
mod participation;
mod race;
mod report;
mod user;

pub use athlete::{CreateAthleteRequest, UpdateAthleteRequest};
pub use competition::{CreateCompetitionRequest, UpdateCompetitionRequest};
pub use incident::CreateIncidentRequest;
pub use location::CreateLocationRequest;
pub use participation::{ImportResult, ParticipationImport, ParticipationResult};
pub use race::{CreateRaceRequest, UpdateRaceRequest};
pub use report::{CreateReportRequest, UpdateReportRequest};
pub use user::{CreateUserRequest, UpdateUserRequest};
