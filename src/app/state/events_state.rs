use std::borrow::Cow;
use std::collections::HashMap;

use crate::api::api_models::{Event, EventId, GroupEvents, GroupId};
use crate::app::state::{AppAction, AppEvent, LoadingState, UpdatableState};

#[derive(Clone, Debug, PartialEq)]
pub enum EventsEvent {
    GroupEventsLoadingStarted(GroupId),
    GroupEventsLoaded(GroupId),
    GroupEventsLoadingFailed(GroupId),
    EventAdded(EventId),
}

impl From<EventsEvent> for AppEvent {
    fn from(events_event: EventsEvent) -> Self {
        Self::EventsEvent(events_event)
    }
}

#[derive(Default)]
pub struct EventsState {
    // Groups never asked for are absent, see `group_loading_state`
    pub groups_loaded: HashMap<GroupId, LoadingState>,
    pub list: Vec<Event>,
}

impl EventsState {
    pub fn group_loading_state(&self, id: GroupId) -> LoadingState {
        self.groups_loaded.get(&id).copied().unwrap_or_default()
    }

    pub fn events_for_group(&self, id: GroupId) -> impl Iterator<Item = &Event> + '_ {
        self.list.iter().filter(move |event| event.group_id == id)
    }
}

impl UpdatableState for EventsState {
    type Action = AppAction;
    type Event = AppEvent;

    fn update_with(&mut self, action: Cow<Self::Action>) -> Vec<Self::Event> {
        match action.into_owned() {
            AppAction::StartLoadingGroupEvents(id) => {
                self.groups_loaded.insert(id, LoadingState::InProgress);
                vec![EventsEvent::GroupEventsLoadingStarted(id).into()]
            }
            AppAction::SetGroupEvents(GroupEvents { group, events }) => {
                let id = group.id;
                self.groups_loaded.insert(id, LoadingState::Successful);
                // Replace the previous batch of that group
                self.list.retain(|event| event.group_id != id);
                self.list.extend(events);
                vec![EventsEvent::GroupEventsLoaded(id).into()]
            }
            AppAction::SetGroupEventsLoadingFailure(id) => {
                self.groups_loaded.insert(id, LoadingState::Failed);
                vec![EventsEvent::GroupEventsLoadingFailed(id).into()]
            }
            AppAction::AddCreatedEvent(event) => {
                let id = event.id;
                self.list.push(event);
                vec![EventsEvent::EventAdded(id).into()]
            }
            _ => vec![],
        }
    }
}
