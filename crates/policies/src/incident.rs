use storage::error::Result;
use storage::models::{Incident, IncidentSummary};
use storage::repository::{IncidentRepository, Repository};

use crate::access::Access;
use crate::policy::Policy;
use crate::state::IncidentState;

/// Incident handling: reporting roles file them, referees and VAR operators
/// may amend them until the jury makes them official, and only the jury
/// president rules on them.
pub struct IncidentPolicy<'a, R: IncidentState = Incident> {
    access: &'a Access,
    incident: Option<&'a R>,
}

impl<'a, R: IncidentState> IncidentPolicy<'a, R> {
    pub fn new(access: &'a Access, incident: &'a R) -> Self {
        Self {
            access,
            incident: Some(incident),
        }
    }

    /// Marking an incident official is a jury ruling.
    pub fn officialize(&self) -> bool {
        self.access.jury_president()
    }

    pub fn apply_penalty(&self) -> bool {
        self.access.jury_president()
    }

    pub fn decline(&self) -> bool {
        self.access.jury_president()
    }

    pub fn no_action(&self) -> bool {
        self.access.jury_president()
    }
}

impl<'a> IncidentPolicy<'a, Incident> {
    pub fn for_new(access: &'a Access) -> Self {
        Self {
            access,
            incident: None,
        }
    }
}

impl<R: IncidentState> Policy for IncidentPolicy<'_, R> {
    fn index(&self) -> bool {
        self.access.authenticated
    }

    fn show(&self) -> bool {
        self.access.authenticated
    }

    fn create(&self) -> bool {
        self.access.can_report()
    }

    fn update(&self) -> bool {
        if self.access.manager() {
            return true;
        }
        (self.access.referee() || self.access.var_operator())
            && self.incident.is_some_and(|incident| incident.unofficial())
    }

    fn destroy(&self) -> bool {
        self.access.admin || self.access.referee_manager()
    }
}

/// Which incidents an actor may list. National referees only see incidents
/// from competitions held in their own country.
pub struct IncidentScope<'a> {
    access: &'a Access,
}

impl<'a> IncidentScope<'a> {
    pub fn new(access: &'a Access) -> Self {
        Self { access }
    }

    pub async fn resolve(&self, repo: &IncidentRepository<'_>) -> Result<Vec<IncidentSummary>> {
        if self.access.manager()
            || self.access.international_referee()
            || self.access.var_operator()
            || self.access.broadcast_viewer()
        {
            return repo.all().await;
        }
        if self.access.national_referee() {
            return match self.access.country.as_deref() {
                Some(country) => repo.for_country(country).await,
                None => Ok(Vec::new()),
            };
        }
        Ok(Vec::new())
    }
}
