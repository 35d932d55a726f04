#![allow(dead_code)]
use reqwest::{Client, RequestBuilder, StatusCode};

use crate::api::types::ApiError;
use crate::config;

const ACCESS_TOKEN_KEY: &str = "access_token";
const CURRENT_USER_KEY: &str = "current_user";

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Attaches the stored bearer token, when one exists. Session storage is
    /// browser-only; host-side tests run without credentials.
    pub(crate) fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match Self::access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(crate) async fn map_response<T>(&self, response: reqwest::Response) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            let error: ApiError = response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Failed to parse error: {}", e)))?;
            Err(error)
        }
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            Self::clear_session();
            Self::redirect_to_login_if_needed();
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn access_token() -> Option<String> {
        let storage = crate::utils::storage::local_storage().ok()?;
        storage.get_item(ACCESS_TOKEN_KEY).ok().flatten()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn access_token() -> Option<String> {
        None
    }

    pub(crate) fn persist_session(response: &super::types::LoginResponse) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Ok(storage) = crate::utils::storage::local_storage() {
                let _ = storage.set_item(ACCESS_TOKEN_KEY, &response.access_token);
                if let Ok(user_json) = serde_json::to_string(&response.user) {
                    let _ = storage.set_item(CURRENT_USER_KEY, &user_json);
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = response;
    }

    pub(crate) fn clear_session() {
        #[cfg(target_arch = "wasm32")]
        {
            if let Ok(storage) = crate::utils::storage::local_storage() {
                let _ = storage.remove_item(ACCESS_TOKEN_KEY);
                let _ = storage.remove_item(CURRENT_USER_KEY);
            }
        }
    }

    fn redirect_to_login_if_needed() {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let location = window.location();
                if let Ok(pathname) = location.pathname() {
                    if pathname == "/login" {
                        return;
                    }
                }
                let _ = location.set_href("/login");
            }
        }
    }
}
