mod api_client;
mod client;
mod multipart;

pub mod api_models;

pub use api_client::{HuddleApi, HuddleApiClient, HuddleResult};
pub use client::HuddleApiError;
