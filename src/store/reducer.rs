use crate::domain::model::{AppState, ServicesState};
use crate::store::action::Action;

pub fn services_reducer(state: &ServicesState, action: &Action) -> ServicesState {
    match action {
        Action::Reload => ServicesState {
            did_invalidate: true,
            ..state.clone()
        },
        Action::Receive {
            services,
            received_at,
        } => ServicesState {
            did_invalidate: false,
            services: services.clone(),
            last_updated: Some(*received_at),
        },
    }
}

pub fn root_reducer(state: &AppState, action: &Action) -> AppState {
    AppState {
        services: services_reducer(&state.services, action),
    }
}
