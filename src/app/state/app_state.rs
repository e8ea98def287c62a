use std::borrow::Cow;

use crate::api::api_models::*;
use crate::app::state::{EventsEvent, EventsState, GroupsEvent, GroupsState, UpdatableState};

#[derive(Clone, Debug)]
pub enum AppAction {
    StartLoadingGroups,
    SetGroups(Vec<Group>),
    SetGroupsLoadingFailure,
    StartLoadingGroupEvents(GroupId),
    SetGroupEvents(GroupEvents),
    SetGroupEventsLoadingFailure(GroupId),
    AddCreatedGroup(Group),
    AddCreatedEvent(Event),
}

#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    GroupsEvent(GroupsEvent),
    EventsEvent(EventsEvent),
}

pub struct AppState {
    pub groups: GroupsState,
    pub events: EventsState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            groups: Default::default(),
            events: Default::default(),
        }
    }

    pub fn update_state(&mut self, message: AppAction) -> Vec<AppEvent> {
        let mut events = self.groups.update_with(Cow::Borrowed(&message));
        events.append(&mut self.events.update_with(Cow::Owned(message)));
        events
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
