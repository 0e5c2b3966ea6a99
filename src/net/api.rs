//! REST API client for the user and category endpoints.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call returns [`ApiError::Unavailable`].
//!
//! DESIGN
//! ======
//! Pages depend on the `AuthApi` / `CategoryApi` traits rather than on
//! `HttpApi`, so submit flows can run against stubs in tests. Status and body
//! interpretation lives in the `parse_*` functions, which are shared by the
//! HTTP client and the stubs.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`; nothing here panics. Pages
//! turn errors into user-facing text with `ApiError::user_message`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{Category, CategoryDraft, DataEnvelope, ErrorBody, LoginRequest, RegisterRequest, TokenPayload};
use crate::config::AppConfig;

pub const LOGIN_PATH: &str = "/api/user/login";
pub const REGISTER_PATH: &str = "/api/user/register";
pub const CATEGORIES_PATH: &str = "/api/category";
pub const CATEGORY_CREATE_PATH: &str = "/api/category/create";
pub const CATEGORY_UPDATE_PATH: &str = "/api/category/update";

pub fn category_path(id: &str) -> String {
    format!("{CATEGORIES_PATH}/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Build the error for a non-success response, keeping any `{error}` text.
pub fn rejection(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.error);
    ApiError::Status { status, message }
}

/// Interpret a login response: `2xx {data: {token}}` yields the token.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for a non-success status and
/// [`ApiError::Decode`] when the success body has no token.
pub fn parse_login_response(status: u16, body: &str) -> Result<String, ApiError> {
    let envelope: DataEnvelope<TokenPayload> = parse_data_envelope(status, body)?;
    Ok(envelope.data.token)
}

/// Interpret a registration response; any success status is enough.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for a non-success status.
pub fn parse_register_response(status: u16, body: &str) -> Result<(), ApiError> {
    parse_empty(status, body)
}

/// Interpret a `{data: T}` response.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for a non-success status and
/// [`ApiError::Decode`] when the body does not match `T`.
pub fn parse_data<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let envelope: DataEnvelope<T> = parse_data_envelope(status, body)?;
    Ok(envelope.data)
}

/// Interpret a response whose body is irrelevant on success.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for a non-success status.
pub fn parse_empty(status: u16, body: &str) -> Result<(), ApiError> {
    if is_success(status) { Ok(()) } else { Err(rejection(status, body)) }
}

fn parse_data_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<DataEnvelope<T>, ApiError> {
    if !is_success(status) {
        return Err(rejection(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Account endpoints.
#[async_trait::async_trait(?Send)]
pub trait AuthApi {
    /// `POST /api/user/login`, returning the issued token.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    async fn login(&self, request: &LoginRequest) -> Result<String, ApiError>;

    /// `POST /api/user/register`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;
}

/// Category CRUD endpoints. Every call carries the bearer token.
#[async_trait::async_trait(?Send)]
pub trait CategoryApi {
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    async fn list_categories(&self, token: &str) -> Result<Vec<Category>, ApiError>;

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    async fn get_category(&self, token: &str, id: &str) -> Result<Category, ApiError>;

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    async fn create_category(&self, token: &str, draft: &CategoryDraft) -> Result<Category, ApiError>;

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    async fn update_category(&self, token: &str, category: &Category) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    async fn delete_category(&self, token: &str, id: &str) -> Result<(), ApiError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// `gloo-net` backed client rooted at the configured API origin.
#[derive(Clone, Debug)]
pub struct HttpApi {
    config: AppConfig,
}

impl HttpApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Send a request and return `(status, body text)`.
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<(u16, String), ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let url = self.config.endpoint(path);
            let mut builder = match method {
                HttpMethod::Get => Request::get(&url),
                HttpMethod::Post => Request::post(&url),
                HttpMethod::Put => Request::put(&url),
                HttpMethod::Delete => Request::delete(&url),
            };
            if let Some(token) = token {
                builder = builder.header("Authorization", &bearer(token));
            }
            let request = match body {
                Some(body) => builder.json(&body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            log::debug!("api: {method:?} {url}");
            let resp = request.send().await.map_err(|e| {
                log::warn!("api: {method:?} {url} failed: {e}");
                ApiError::Network(e.to_string())
            })?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            if !is_success(status) {
                log::warn!("api: {method:?} {url} -> {status}");
            }
            Ok((status, text))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.config, method, path, token, body);
            Err(ApiError::Unavailable)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait::async_trait(?Send)]
impl AuthApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        let (status, body) = self.send(HttpMethod::Post, LOGIN_PATH, None, Some(to_json(request)?)).await?;
        parse_login_response(status, &body)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let (status, body) = self.send(HttpMethod::Post, REGISTER_PATH, None, Some(to_json(request)?)).await?;
        parse_register_response(status, &body)
    }
}

#[async_trait::async_trait(?Send)]
impl CategoryApi for HttpApi {
    async fn list_categories(&self, token: &str) -> Result<Vec<Category>, ApiError> {
        let (status, body) = self.send(HttpMethod::Get, CATEGORIES_PATH, Some(token), None).await?;
        parse_data(status, &body)
    }

    async fn get_category(&self, token: &str, id: &str) -> Result<Category, ApiError> {
        let (status, body) = self.send(HttpMethod::Get, &category_path(id), Some(token), None).await?;
        parse_data(status, &body)
    }

    async fn create_category(&self, token: &str, draft: &CategoryDraft) -> Result<Category, ApiError> {
        let (status, body) =
            self.send(HttpMethod::Post, CATEGORY_CREATE_PATH, Some(token), Some(to_json(draft)?)).await?;
        parse_data(status, &body)
    }

    async fn update_category(&self, token: &str, category: &Category) -> Result<(), ApiError> {
        let (status, body) =
            self.send(HttpMethod::Put, CATEGORY_UPDATE_PATH, Some(token), Some(to_json(category)?)).await?;
        parse_empty(status, &body)
    }

    async fn delete_category(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let (status, body) = self.send(HttpMethod::Delete, &category_path(id), Some(token), None).await?;
        parse_empty(status, &body)
    }
}

/// Canned-response API for driving page flows in tests.
///
/// Every call answers with the same `(status, body)` pair, interpreted by the
/// same `parse_*` functions as `HttpApi`.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct StubApi {
    status: u16,
    body: String,
    pub(crate) calls: std::cell::Cell<usize>,
    pub(crate) last_token: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl StubApi {
    pub(crate) fn responding(status: u16, body: serde_json::Value) -> Self {
        Self { status, body: body.to_string(), ..Self::default() }
    }

    fn answer(&self, token: Option<&str>) -> (u16, &str) {
        self.calls.set(self.calls.get() + 1);
        *self.last_token.borrow_mut() = token.map(str::to_owned);
        (self.status, &self.body)
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl AuthApi for StubApi {
    async fn login(&self, _request: &LoginRequest) -> Result<String, ApiError> {
        let (status, body) = self.answer(None);
        parse_login_response(status, body)
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<(), ApiError> {
        let (status, body) = self.answer(None);
        parse_register_response(status, body)
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl CategoryApi for StubApi {
    async fn list_categories(&self, token: &str) -> Result<Vec<Category>, ApiError> {
        let (status, body) = self.answer(Some(token));
        parse_data(status, body)
    }

    async fn get_category(&self, token: &str, _id: &str) -> Result<Category, ApiError> {
        let (status, body) = self.answer(Some(token));
        parse_data(status, body)
    }

    async fn create_category(&self, token: &str, _draft: &CategoryDraft) -> Result<Category, ApiError> {
        let (status, body) = self.answer(Some(token));
        parse_data(status, body)
    }

    async fn update_category(&self, token: &str, _category: &Category) -> Result<(), ApiError> {
        let (status, body) = self.answer(Some(token));
        parse_empty(status, body)
    }

    async fn delete_category(&self, token: &str, _id: &str) -> Result<(), ApiError> {
        let (status, body) = self.answer(Some(token));
        parse_empty(status, body)
    }
}
