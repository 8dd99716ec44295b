use crate::domain::model::ServiceRecord;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The services list is being re-fetched.
    Reload,
    /// A fresh list arrived from the endpoint.
    Receive {
        services: Vec<ServiceRecord>,
        received_at: DateTime<Utc>,
    },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Reload => "reload",
            Action::Receive { .. } => "receive",
        }
    }
}

pub fn reload() -> Action {
    Action::Reload
}

pub fn receive(services: Vec<ServiceRecord>) -> Action {
    Action::Receive {
        services,
        received_at: Utc::now(),
    }
}
