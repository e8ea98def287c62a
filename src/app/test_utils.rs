use futures::future::BoxFuture;
use futures::FutureExt;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::api_models::*;
use crate::api::{HuddleApiClient, HuddleApiError, HuddleResult};
use crate::app::{ActionDispatcher, AppAction, AppEvent, AppModel};

// Records actions instead of sending them to a dispatch loop
#[derive(Clone)]
pub struct TestDispatcher(Rc<RefCell<Vec<AppAction>>>);

impl TestDispatcher {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(vec![])))
    }

    pub fn actions(&self) -> Vec<AppAction> {
        self.0.borrow().clone()
    }

    pub fn flush(&self, model: &AppModel) -> Vec<AppEvent> {
        let mut buffer = self.0.borrow_mut();
        buffer
            .drain(..)
            .flat_map(|action| model.update_state(action))
            .collect()
    }
}

impl ActionDispatcher for TestDispatcher {
    fn dispatch(&self, action: AppAction) {
        self.0.borrow_mut().push(action);
    }

    fn box_clone(&self) -> Box<dyn ActionDispatcher> {
        Box::new(self.clone())
    }
}

// An in-memory stand-in for the groups service
#[derive(Default)]
pub struct FakeApi {
    groups: Vec<Group>,
    events: Vec<Event>,
    redirects: HashMap<GroupId, GroupId>,
    fail_loads: bool,
    next_id: AtomicU64,
}

impl FakeApi {
    pub fn with_groups(groups: Vec<Group>) -> Self {
        Self {
            groups,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_loads: true,
            ..Default::default()
        }
    }

    pub fn with_event(mut self, id: EventId, group_id: GroupId) -> Self {
        self.events.push(Self::event(id, group_id));
        self
    }

    // Answer requests for `from` with the payload of `to`
    pub fn redirect(mut self, from: GroupId, to: GroupId) -> Self {
        self.redirects.insert(from, to);
        self
    }

    pub fn event(id: EventId, group_id: GroupId) -> Event {
        Event {
            id,
            name: format!("Event {id}"),
            description: "".to_string(),
            start_time: "2021-02-01T18:00".to_string(),
            end_time: "2021-02-01T20:00".to_string(),
            location: "Town hall".to_string(),
            poster_url: None,
            group_id,
        }
    }

    pub fn new_event(group_id: GroupId, name: &str) -> NewEvent {
        NewEvent {
            name: name.to_string(),
            description: "".to_string(),
            start_time: "2021-02-01T18:00".to_string(),
            end_time: "2021-02-01T20:00".to_string(),
            location: "Town hall".to_string(),
            poster: None,
            group_id,
        }
    }

    fn next_id(&self) -> u64 {
        100 + self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    fn blank(field: &str) -> HuddleApiError {
        HuddleApiError::Validation(
            vec![(field.to_string(), "can't be blank".to_string())]
                .into_iter()
                .collect(),
        )
    }

    fn server_error() -> HuddleApiError {
        HuddleApiError::BadStatus(500, "Internal Server Error".to_string())
    }
}

impl HuddleApiClient for FakeApi {
    fn get_groups(&self) -> BoxFuture<'_, HuddleResult<Vec<Group>>> {
        async move {
            if self.fail_loads {
                Err(Self::server_error())
            } else {
                Ok(self.groups.clone())
            }
        }
        .boxed()
    }

    fn get_group(&self, id: GroupId) -> BoxFuture<'_, HuddleResult<GroupEvents>> {
        async move {
            if self.fail_loads {
                return Err(Self::server_error());
            }
            let id = self.redirects.get(&id).copied().unwrap_or(id);
            let group = match self.groups.iter().find(|g| g.id == id) {
                Some(group) => group.clone(),
                None => return Err(HuddleApiError::BadStatus(404, "Not Found".to_string())),
            };
            let events = self
                .events
                .iter()
                .filter(|e| e.group_id == id)
                .cloned()
                .collect();
            Ok(GroupEvents { group, events })
        }
        .boxed()
    }

    fn create_group(&self, group: NewGroup) -> BoxFuture<'_, HuddleResult<Group>> {
        async move {
            if group.name.trim().is_empty() {
                Err(Self::blank("name"))
            } else {
                Ok(Group::new(self.next_id(), &group.name))
            }
        }
        .boxed()
    }

    fn create_event(&self, event: NewEvent) -> BoxFuture<'_, HuddleResult<Event>> {
        async move {
            if event.name.trim().is_empty() {
                return Err(Self::blank("name"));
            }
            Ok(Event {
                id: self.next_id(),
                name: event.name,
                description: event.description,
                start_time: event.start_time,
                end_time: event.end_time,
                location: event.location,
                poster_url: event
                    .poster
                    .map(|poster| format!("/posters/{}", poster.file_name)),
                group_id: event.group_id,
            })
        }
        .boxed()
    }
}
