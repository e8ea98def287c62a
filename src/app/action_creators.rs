use std::sync::Arc;

use crate::api::api_models::*;
use crate::api::{HuddleApiClient, HuddleApiError, HuddleResult};
use crate::app::{ActionDispatcher, AppAction};

// Every async operation of the app: dispatch a start action (loads only), make a single request,
// then dispatch the outcome and hand the payload back to the caller
pub struct ActionCreators {
    api: Arc<dyn HuddleApiClient + Send + Sync>,
    dispatcher: Box<dyn ActionDispatcher>,
}

impl ActionCreators {
    pub fn new(
        api: Arc<dyn HuddleApiClient + Send + Sync>,
        dispatcher: Box<dyn ActionDispatcher>,
    ) -> Self {
        Self { api, dispatcher }
    }

    pub async fn fetch_groups(&self) -> HuddleResult<Vec<Group>> {
        self.dispatcher.dispatch(AppAction::StartLoadingGroups);
        match self.api.get_groups().await {
            Ok(groups) => {
                self.dispatcher.dispatch(AppAction::SetGroups(groups.clone()));
                Ok(groups)
            }
            Err(err) => {
                error!("Could not load groups: {}", err);
                self.dispatcher.dispatch(AppAction::SetGroupsLoadingFailure);
                Err(err)
            }
        }
    }

    pub async fn fetch_group(&self, id: GroupId) -> HuddleResult<GroupEvents> {
        self.dispatcher.dispatch(AppAction::StartLoadingGroupEvents(id));
        match self.api.get_group(id).await {
            // Status is keyed by the id we asked for, whatever the payload says
            Ok(group_events) if group_events.group.id != id => {
                error!(
                    "Asked for group {} but received group {}",
                    id, group_events.group.id
                );
                self.dispatcher
                    .dispatch(AppAction::SetGroupEventsLoadingFailure(id));
                Err(HuddleApiError::UnexpectedResponse(format!(
                    "group {} instead of group {}",
                    group_events.group.id, id
                )))
            }
            Ok(group_events) => {
                self.dispatcher
                    .dispatch(AppAction::SetGroupEvents(group_events.clone()));
                Ok(group_events)
            }
            Err(err) => {
                error!("Could not load group {}: {}", id, err);
                self.dispatcher
                    .dispatch(AppAction::SetGroupEventsLoadingFailure(id));
                Err(err)
            }
        }
    }

    pub async fn create_group(&self, group: NewGroup) -> HuddleResult<Group> {
        let group = self.api.create_group(group).await?;
        self.dispatcher
            .dispatch(AppAction::AddCreatedGroup(group.clone()));
        Ok(group)
    }

    pub async fn create_event(&self, event: NewEvent) -> HuddleResult<Event> {
        let event = self.api.create_event(event).await?;
        self.dispatcher
            .dispatch(AppAction::AddCreatedEvent(event.clone()));
        Ok(event)
    }
}
