use std::cell::Ref;
use std::rc::Rc;

use crate::api::api_models::{Event, Group, GroupId};
use crate::api::HuddleResult;
use crate::app::state::LoadingState;
use crate::app::{ActionCreators, ActionDispatcher, AppModel};

pub struct GroupShowModel {
    pub id: GroupId,
    app_model: Rc<AppModel>,
    actions: ActionCreators,
}

impl GroupShowModel {
    pub fn new(id: GroupId, app_model: Rc<AppModel>, dispatcher: Box<dyn ActionDispatcher>) -> Self {
        let actions = ActionCreators::new(app_model.get_api(), dispatcher);
        Self {
            id,
            app_model,
            actions,
        }
    }

    pub async fn load(&self) -> HuddleResult<()> {
        self.actions.fetch_group(self.id).await.map(|_| ())
    }

    pub fn loading_state(&self) -> LoadingState {
        self.app_model
            .get_state()
            .events
            .group_loading_state(self.id)
    }

    pub fn group(&self) -> Option<Ref<'_, Group>> {
        self.app_model.map_state_opt(|s| s.groups.get(self.id))
    }

    pub fn events(&self) -> Vec<Event> {
        self.app_model
            .get_state()
            .events
            .events_for_group(self.id)
            .cloned()
            .collect()
    }
}
