use crate::api::HuddleApiClient;
use crate::app::state::*;
use std::cell::{Ref, RefCell};
use std::sync::Arc;

pub struct AppServices {
    pub huddle_api: Arc<dyn HuddleApiClient + Send + Sync>,
}

// The store: state can be borrowed freely, but only `update_state` writes to it
pub struct AppModel {
    state: RefCell<AppState>,
    services: AppServices,
}

impl AppModel {
    pub fn new(state: AppState, huddle_api: Arc<dyn HuddleApiClient + Send + Sync>) -> Self {
        let services = AppServices { huddle_api };
        let state = RefCell::new(state);
        Self { state, services }
    }

    pub fn get_api(&self) -> Arc<dyn HuddleApiClient + Send + Sync> {
        Arc::clone(&self.services.huddle_api)
    }

    pub fn get_state(&self) -> Ref<'_, AppState> {
        self.state.borrow()
    }

    pub fn map_state<T: ?Sized, F: FnOnce(&AppState) -> &T>(&self, map: F) -> Ref<'_, T> {
        Ref::map(self.state.borrow(), map)
    }

    pub fn map_state_opt<T: ?Sized, F: FnOnce(&AppState) -> Option<&T>>(
        &self,
        map: F,
    ) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.state.borrow(), map).ok()
    }

    pub fn update_state(&self, message: AppAction) -> Vec<AppEvent> {
        debug!("update_state: {:?}", &message);
        let mut state = self.state.borrow_mut();
        state.update_state(message)
    }
}
