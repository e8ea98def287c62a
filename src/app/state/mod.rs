mod app_model;
mod app_state;
mod events_state;
mod groups_state;

pub use app_model::AppModel;
pub use app_state::*;
pub use events_state::*;
pub use groups_state::*;

use std::borrow::Cow;

pub trait UpdatableState {
    type Action: Clone;
    type Event;

    fn update_with(&mut self, action: Cow<Self::Action>) -> Vec<Self::Event>;
}

// Progress of an asynchronous fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingState {
    NotStarted,
    InProgress,
    Successful,
    Failed,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::InProgress)
    }
}
