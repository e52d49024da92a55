// ============================================================================
// API CLIENT - single outbound HTTP channel
// ============================================================================
// Attaches the bearer token to every request, normalizes every failure into
// ApiError, and handles 401 by force-logout. No business logic lives here.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{normalize_failure, ApiError};
use crate::services::session_store::SessionStore;
use crate::utils::constants::API_BASE_URL;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Token attachment happens before every dispatch, unconditionally; for
    /// login/register there is simply no token yet and this is a no-op.
    fn authorize(builder: RequestBuilder) -> RequestBuilder {
        match SessionStore::token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// 401 anywhere means the session is gone: clear it and send the user to
    /// the login entry point - unless we are already there (the login call
    /// itself answering 401 must not redirect-loop).
    fn force_logout() {
        log::warn!("🔒 401 received, clearing session");
        SessionStore::clear();

        if let Some(window) = web_sys::window() {
            let location = window.location();
            let on_login = location
                .pathname()
                .map(|p| p.contains("/login"))
                .unwrap_or(false);
            if !on_login {
                let _ = location.set_href("/login");
            }
        }
    }

    /// Transport-level failure (no response at all) is reported distinctly
    /// from any HTTP status. Retrying is the caller's business, never ours.
    async fn handle(sent: Result<Response, gloo_net::Error>) -> Result<Response, ApiError> {
        let response = sent.map_err(|e| {
            log::error!("❌ Network error: {}", e);
            ApiError::Unreachable
        })?;

        if response.status() == 401 {
            Self::force_logout();
            return Err(ApiError::Unauthorized);
        }

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(normalize_failure(status, &body));
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| {
            log::error!("❌ Parse error: {}", e);
            ApiError::BadResponse
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = Self::authorize(Request::get(&self.url(path)));
        let response = Self::handle(request.send().await).await?;
        Self::decode(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Self::authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|_| ApiError::BadResponse)?;
        let response = Self::handle(request.send().await).await?;
        Self::decode(response).await
    }

    /// POST without a payload (checkout and friends).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = Self::authorize(Request::post(&self.url(path)));
        let response = Self::handle(request.send().await).await?;
        Self::decode(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Self::authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|_| ApiError::BadResponse)?;
        let response = Self::handle(request.send().await).await?;
        Self::decode(response).await
    }

    /// DELETE where the response body is JSON.
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = Self::authorize(Request::delete(&self.url(path)));
        let response = Self::handle(request.send().await).await?;
        Self::decode(response).await
    }

    /// DELETE where the response body does not matter.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = Self::authorize(Request::delete(&self.url(path)));
        Self::handle(request.send().await).await?;
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
