use futures::future::BoxFuture;
use futures::FutureExt;

use super::client::{HuddleApiError, HuddleClient};
use crate::api::api_models::*;

pub type HuddleResult<T> = Result<T, HuddleApiError>;

pub trait HuddleApiClient {
    fn get_groups(&self) -> BoxFuture<'_, HuddleResult<Vec<Group>>>;

    fn get_group(&self, id: GroupId) -> BoxFuture<'_, HuddleResult<GroupEvents>>;

    fn create_group(&self, group: NewGroup) -> BoxFuture<'_, HuddleResult<Group>>;

    fn create_event(&self, event: NewEvent) -> BoxFuture<'_, HuddleResult<Event>>;
}

pub struct HuddleApi {
    client: HuddleClient,
}

impl HuddleApi {
    pub fn new(base_url: &str) -> HuddleResult<Self> {
        Ok(Self {
            client: HuddleClient::new(base_url)?,
        })
    }
}

impl HuddleApiClient for HuddleApi {
    fn get_groups(&self) -> BoxFuture<'_, HuddleResult<Vec<Group>>> {
        async move { self.client.get_groups().send().await }.boxed()
    }

    fn get_group(&self, id: GroupId) -> BoxFuture<'_, HuddleResult<GroupEvents>> {
        async move { self.client.get_group(id).send().await }.boxed()
    }

    fn create_group(&self, group: NewGroup) -> BoxFuture<'_, HuddleResult<Group>> {
        async move { self.client.create_group(&group)?.send().await }.boxed()
    }

    fn create_event(&self, event: NewEvent) -> BoxFuture<'_, HuddleResult<Event>> {
        async move { self.client.create_event(event).send().await }.boxed()
    }
}
