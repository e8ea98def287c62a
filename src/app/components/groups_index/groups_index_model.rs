use std::cell::Ref;
use std::rc::Rc;

use crate::api::api_models::Group;
use crate::api::HuddleResult;
use crate::app::state::LoadingState;
use crate::app::{ActionCreators, ActionDispatcher, AppModel};

pub struct GroupsIndexModel {
    app_model: Rc<AppModel>,
    actions: ActionCreators,
}

impl GroupsIndexModel {
    pub fn new(app_model: Rc<AppModel>, dispatcher: Box<dyn ActionDispatcher>) -> Self {
        let actions = ActionCreators::new(app_model.get_api(), dispatcher);
        Self { app_model, actions }
    }

    pub async fn load(&self) -> HuddleResult<()> {
        self.actions.fetch_groups().await.map(|_| ())
    }

    pub fn loading_state(&self) -> LoadingState {
        self.app_model.get_state().groups.loading_state
    }

    pub fn groups(&self) -> Ref<'_, [Group]> {
        self.app_model.map_state(|s| &s.groups.list[..])
    }
}
