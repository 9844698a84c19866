//! Application module - the role-specific views and their actions
//!
//! Every operation here is a sequential chain of requests against
//! `RequestApi`, finishing with one or more `ViewUpdate`s on the state.
//! Backend data is never cached; each render fetches what it shows.

pub mod capacity;
pub mod catalog;
pub mod enrollment;
pub mod grades;
pub mod session;
pub mod state;

pub use capacity::{decrease_capacities, CapacityOutcome};
pub use state::{
    AppState, CourseAction, CourseRow, ListView, Panels, StudentRow, Tab, TeachingCourse,
    ViewUpdate,
};

use crate::config::Config;
use crate::interface::{RequestApi, SessionStore};

pub struct App<C, S> {
    client: C,
    store: S,
    config: Config,
    state: AppState,
}

impl<C: RequestApi, S: SessionStore> App<C, S> {
    pub fn new(client: C, store: S, config: Config) -> Self {
        Self {
            client,
            store,
            config,
            state: AppState::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Applies a host-originated change, such as typing into a grade field.
    pub fn update(&mut self, update: ViewUpdate) {
        self.state.apply(update);
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        self.state.take_alerts()
    }

    pub fn show_tab(&mut self, tab: Tab) {
        self.update(ViewUpdate::ShowTab(tab));
    }

    fn alert(&mut self, msg: impl Into<String>) {
        self.update(ViewUpdate::Alert(msg.into()));
    }
}
