//! Authorization decisions for the competition core.
//!
//! A policy is built per (actor, resource) pair and answers boolean action
//! predicates; it never raises and never queries storage. Collection
//! visibility lives in per-entity `Scope` types that resolve through the
//! matching repository with a single filtered query.

mod access;
mod athlete;
mod competition;
mod incident;
mod location;
mod participation;
mod policy;
mod race;
mod reference;
mod report;
mod state;
#[cfg(test)]
mod test_support;
mod user;

pub use access::Access;
pub use athlete::{AthletePolicy, AthleteScope};
pub use competition::{CompetitionPolicy, CompetitionScope};
pub use incident::{IncidentPolicy, IncidentScope};
pub use location::RaceLocationPolicy;
pub use participation::{RaceParticipationPolicy, RaceParticipationScope};
pub use policy::Policy;
pub use race::{RacePolicy, RaceScope};
pub use reference::{PenaltyPolicy, RaceTypePolicy};
pub use report::{ReportPolicy, ReportScope};
pub use state::{IncidentState, Owned, RaceState, ReportState};
pub use user::UserPolicy;
