//! The single application store.
//!
//! State only changes through [`Store::dispatch`]; the reducers in
//! [`reducer`] decide the new state. Asynchronous work goes through
//! [`Store::dispatch_async`], which hands the store to a closure that
//! dispatches plain actions as results come in.

pub mod action;
pub mod reducer;

use crate::domain::model::AppState;
use action::Action;
use std::future::Future;
use std::sync::{Arc, Mutex, RwLock};

type Listener = Arc<dyn Fn(&AppState) + Send + Sync>;

#[derive(Clone)]
pub struct Store {
    state: Arc<RwLock<AppState>>,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn state(&self) -> AppState {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn dispatch(&self, action: Action) {
        tracing::debug!(action = action.name(), "dispatch");

        let next = {
            let mut state = self
                .state
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let next = reducer::root_reducer(&state, &action);
            *state = next.clone();
            next
        };

        // 先複製清單再呼叫，listener 可以再訂閱或讀取 store
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        for listener in &listeners {
            listener(&next);
        }
    }

    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&AppState) + Send + Sync + 'static,
    {
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(Arc::new(listener));
    }

    pub async fn dispatch_async<F, Fut, T>(&self, thunk: F) -> T
    where
        F: FnOnce(Store) -> Fut,
        Fut: Future<Output = T>,
    {
        thunk(self.clone()).await
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("state", &self.state()).finish()
    }
}
