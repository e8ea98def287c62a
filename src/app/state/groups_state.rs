use std::borrow::Cow;
use std::collections::HashSet;

use crate::api::api_models::{Group, GroupId};
use crate::app::state::{AppAction, AppEvent, LoadingState, UpdatableState};

#[derive(Clone, Debug, PartialEq)]
pub enum GroupsEvent {
    GroupsLoadingStarted,
    GroupsLoaded,
    GroupsLoadingFailed,
    GroupAdded(GroupId),
}

impl From<GroupsEvent> for AppEvent {
    fn from(groups_event: GroupsEvent) -> Self {
        Self::GroupsEvent(groups_event)
    }
}

// Known groups, unique by id
#[derive(Default)]
pub struct GroupsState {
    pub loading_state: LoadingState,
    pub list: Vec<Group>,
}

impl GroupsState {
    pub fn get(&self, id: GroupId) -> Option<&Group> {
        self.list.iter().find(|group| group.id == id)
    }

    fn contains(&self, id: GroupId) -> bool {
        self.get(id).is_some()
    }

    fn append(&mut self, group: Group) -> Vec<AppEvent> {
        if self.contains(group.id) {
            vec![]
        } else {
            let id = group.id;
            self.list.push(group);
            vec![GroupsEvent::GroupAdded(id).into()]
        }
    }
}

impl UpdatableState for GroupsState {
    type Action = AppAction;
    type Event = AppEvent;

    fn update_with(&mut self, action: Cow<Self::Action>) -> Vec<Self::Event> {
        match &*action {
            AppAction::StartLoadingGroups => {
                self.loading_state = LoadingState::InProgress;
                vec![GroupsEvent::GroupsLoadingStarted.into()]
            }
            AppAction::SetGroups(groups) => {
                let mut seen = HashSet::new();
                self.list = groups.iter().filter(|g| seen.insert(g.id)).cloned().collect();
                self.loading_state = LoadingState::Successful;
                vec![GroupsEvent::GroupsLoaded.into()]
            }
            AppAction::SetGroupsLoadingFailure => {
                self.loading_state = LoadingState::Failed;
                vec![GroupsEvent::GroupsLoadingFailed.into()]
            }
            // Metadata found while loading a group never overwrites what we already have
            AppAction::SetGroupEvents(group_events) => self.append(group_events.group.clone()),
            AppAction::AddCreatedGroup(group) => self.append(group.clone()),
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::api::api_models::GroupEvents;

    fn update(state: &mut GroupsState, action: AppAction) -> Vec<AppEvent> {
        state.update_with(Cow::Owned(action))
    }

    fn group_events(group: Group) -> AppAction {
        AppAction::SetGroupEvents(GroupEvents {
            group,
            events: vec![],
        })
    }

    #[test]
    fn test_start_loading() {
        let mut state = GroupsState::default();
        state.list.push(Group::new(1, "One"));
        update(&mut state, AppAction::StartLoadingGroups);
        assert_eq!(state.loading_state, LoadingState::InProgress);
        assert_eq!(state.list.len(), 1);
    }

    #[test]
    fn test_loaded_uses_the_same_loading_field() {
        let mut state = GroupsState::default();
        update(&mut state, AppAction::StartLoadingGroups);
        assert!(state.loading_state.is_loading());

        update(&mut state, AppAction::SetGroups(vec![Group::new(1, "One")]));
        assert_eq!(state.loading_state, LoadingState::Successful);
        assert!(!state.loading_state.is_loading());
    }

    #[test]
    fn test_last_load_wins() {
        let mut state = GroupsState::default();
        let batches = vec![
            vec![Group::new(1, "One"), Group::new(2, "Two")],
            vec![],
            vec![Group::new(3, "Three")],
        ];
        for batch in batches.iter().cloned() {
            update(&mut state, AppAction::StartLoadingGroups);
            update(&mut state, AppAction::SetGroups(batch));
            assert_eq!(state.loading_state, LoadingState::Successful);
        }
        assert_eq!(state.list, batches[2]);
    }

    #[test]
    fn test_loaded_payload_is_deduplicated() {
        let mut state = GroupsState::default();
        update(
            &mut state,
            AppAction::SetGroups(vec![
                Group::new(1, "One"),
                Group::new(1, "Uno"),
                Group::new(2, "Two"),
            ]),
        );
        assert_eq!(state.list, vec![Group::new(1, "One"), Group::new(2, "Two")]);
    }

    #[test]
    fn test_failure() {
        let mut state = GroupsState::default();
        state.list.push(Group::new(1, "One"));
        update(&mut state, AppAction::StartLoadingGroups);
        let events = update(&mut state, AppAction::SetGroupsLoadingFailure);
        assert_eq!(events, vec![AppEvent::GroupsEvent(GroupsEvent::GroupsLoadingFailed)]);
        assert_eq!(state.loading_state, LoadingState::Failed);
        assert_eq!(state.list, vec![Group::new(1, "One")]);
    }

    #[test]
    fn test_discovered_group_appended_once() {
        let mut state = GroupsState::default();
        let first = update(&mut state, group_events(Group::new(7, "Seven")));
        let second = update(&mut state, group_events(Group::new(7, "Seven")));
        assert_eq!(first, vec![AppEvent::GroupsEvent(GroupsEvent::GroupAdded(7))]);
        assert!(second.is_empty());
        assert_eq!(state.list, vec![Group::new(7, "Seven")]);
    }

    #[test]
    fn test_discovered_group_does_not_update_in_place() {
        let mut state = GroupsState::default();
        update(&mut state, AppAction::SetGroups(vec![Group::new(7, "Seven")]));
        update(&mut state, group_events(Group::new(7, "Renamed")));
        assert_eq!(state.get(7).map(|g| &g.name[..]), Some("Seven"));
    }

    #[test]
    fn test_created_group_appended() {
        let mut state = GroupsState::default();
        update(&mut state, AppAction::SetGroups(vec![Group::new(1, "One")]));
        update(&mut state, AppAction::AddCreatedGroup(Group::new(2, "Two")));
        update(&mut state, AppAction::AddCreatedGroup(Group::new(2, "Two")));
        assert_eq!(state.list, vec![Group::new(1, "One"), Group::new(2, "Two")]);
        assert_eq!(state.loading_state, LoadingState::Successful);
    }

    #[test]
    fn test_unrelated_actions_are_ignored() {
        let mut state = GroupsState::default();
        let events = update(&mut state, AppAction::StartLoadingGroupEvents(1));
        assert!(events.is_empty());
        assert_eq!(state.loading_state, LoadingState::NotStarted);
        assert!(state.list.is_empty());
    }
}
