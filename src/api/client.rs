use isahc::http::{method::Method, request::Builder, StatusCode};
use isahc::{AsyncReadResponseExt, HttpClient, Request};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::from_str;
use std::convert::Into;
use std::marker::PhantomData;
use thiserror::Error;

pub use super::api_models::*;
use super::multipart::MultipartForm;

pub(crate) struct HuddleRequest<'a, Body, Response> {
    client: &'a HuddleClient,
    request: Builder,
    body: Body,
    _type: PhantomData<Response>,
}

impl<'a, B, R> HuddleRequest<'a, B, R>
where
    B: Into<isahc::AsyncBody>,
    R: DeserializeOwned,
{
    fn method(mut self, method: Method) -> Self {
        self.request = self.request.method(method);
        self
    }

    // Invalid URIs surface when the request is built, in `send`
    fn uri(mut self, path: String) -> Self {
        let uri = format!("{}{}", self.client.base_url, path);
        self.request = self.request.uri(uri);
        self
    }

    pub(crate) fn json_body<NewBody>(
        self,
        body: NewBody,
    ) -> Result<HuddleRequest<'a, Vec<u8>, R>, HuddleApiError>
    where
        NewBody: Serialize,
    {
        let Self {
            client,
            request,
            _type,
            ..
        } = self;
        Ok(HuddleRequest {
            client,
            request: request.header("Content-Type", "application/json"),
            body: serde_json::to_vec(&body)?,
            _type,
        })
    }

    pub(crate) fn multipart_body(self, form: MultipartForm) -> HuddleRequest<'a, Vec<u8>, R> {
        let Self {
            client,
            request,
            _type,
            ..
        } = self;
        HuddleRequest {
            client,
            request: request.header("Content-Type", form.content_type()),
            body: form.into_body(),
            _type,
        }
    }

    pub(crate) async fn send(self) -> Result<R, HuddleApiError> {
        let Self {
            client,
            request,
            body,
            ..
        } = self;
        let request = request.body(body)?;
        client.send_req(request).await
    }
}

#[derive(Error, Debug)]
pub enum HuddleApiError {
    #[error("Invalid submission: {0}")]
    Validation(FieldErrors),
    #[error("Request failed ({0}): {1}")]
    BadStatus(u16, String),
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
    #[error(transparent)]
    ClientError(#[from] isahc::Error),
    #[error(transparent)]
    HttpError(#[from] isahc::http::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    ParseError(#[from] serde_json::Error),
}

impl HuddleApiError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub(crate) struct HuddleClient {
    base_url: String,
    client: HttpClient,
}

impl HuddleClient {
    pub(crate) fn new(base_url: &str) -> Result<Self, HuddleApiError> {
        let client = HttpClient::builder().build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    // Every endpoint answers in JSON, errors included
    pub(crate) fn request<T>(&self) -> HuddleRequest<'_, (), T> {
        HuddleRequest {
            client: self,
            request: Builder::new().header("Accept", "application/json"),
            body: (),
            _type: PhantomData,
        }
    }

    async fn send_req<B, T>(&self, request: Request<B>) -> Result<T, HuddleApiError>
    where
        B: Into<isahc::AsyncBody>,
        T: DeserializeOwned,
    {
        debug!("{} {}", request.method(), request.uri());
        let mut result = self.client.send_async(request).await?;
        let status = result.status();
        let text = result.text().await?;
        Self::parse_response(status, &text)
    }

    fn parse_response<T>(status: StatusCode, text: &str) -> Result<T, HuddleApiError>
    where
        T: DeserializeOwned,
    {
        match status {
            s if s.is_success() => Ok(from_str(text)?),
            s if s.is_client_error() => match from_str::<FieldErrors>(text) {
                Ok(errors) if !errors.is_empty() => Err(HuddleApiError::Validation(errors)),
                _ => Err(HuddleApiError::BadStatus(s.as_u16(), text.to_string())),
            },
            s => Err(HuddleApiError::BadStatus(s.as_u16(), text.to_string())),
        }
    }
}

impl HuddleClient {
    pub(crate) fn get_groups(&self) -> HuddleRequest<'_, (), Vec<Group>> {
        self.request()
            .method(Method::GET)
            .uri("/groups".to_string())
    }

    pub(crate) fn get_group(&self, id: GroupId) -> HuddleRequest<'_, (), GroupEvents> {
        self.request()
            .method(Method::GET)
            .uri(format!("/groups/{id}"))
    }

    pub(crate) fn create_group(
        &self,
        group: &NewGroup,
    ) -> Result<HuddleRequest<'_, Vec<u8>, Group>, HuddleApiError> {
        self.request()
            .method(Method::POST)
            .uri("/groups".to_string())
            .json_body(GroupParams { group })
    }

    pub(crate) fn create_event(&self, event: NewEvent) -> HuddleRequest<'_, Vec<u8>, Event> {
        self.request()
            .method(Method::POST)
            .uri("/events".to_string())
            .multipart_body(event.into())
    }
}
