// src/integrations/portal/client.rs
//
// Shared HTTP transport for the portal API
//
// ARCHITECTURE:
// - One reqwest client shared by every remote store
// - Holds the installed bearer credential; when present it is attached to
//   every outbound request, mirroring the session lifecycle
// - Maps portal responses onto the client error taxonomy
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never creates or modifies domain entities directly

use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Error body the portal attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct MessageBody {
    message: Option<String>,
}

/// Portal API transport
pub struct PortalClient {
    base_url: String,
    http_client: Client,
    bearer: RwLock<Option<String>>,
}

impl PortalClient {
    /// Create a transport against a portal base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
            bearer: RwLock::new(None),
        }
    }

    /// Install `token` as the default authorization credential for every
    /// subsequent request. Called when a session is created or restored.
    pub fn install_token(&self, token: &str) {
        *self.bearer.write().unwrap() = Some(token.to_string());
    }

    /// Remove the default authorization credential (logout).
    pub fn discard_token(&self) {
        *self.bearer.write().unwrap() = None;
    }

    pub fn has_token(&self) -> bool {
        self.bearer.read().unwrap().is_some()
    }

    pub(crate) async fn get_json<T>(&self, path: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self.http_client.get(self.url(path));
        self.execute(request).await
    }

    pub(crate) async fn post_json<T>(&self, path: &str, body: &impl Serialize) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self.http_client.post(self.url(path)).json(body);
        self.execute(request).await
    }

    pub(crate) async fn put_json<T>(&self, path: &str, body: &impl Serialize) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self.http_client.put(self.url(path)).json(body);
        self.execute(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer header when a credential is installed.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.bearer.read().unwrap().as_deref() {
            Some(token) => request.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn execute<T>(&self, request: RequestBuilder) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .authorize(request.header(header::ACCEPT, "application/json"))
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Map a portal response onto the error taxonomy:
    /// 2xx → typed body, 401 → Authentication, 403 → Authorization,
    /// 404 → NotFound, 400/409/422 → Validation, everything else → Remote.
    async fn handle_response<T>(response: Response) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return serde_json::from_slice(&bytes)
                .map_err(|e| AppError::Remote(format!("Malformed portal response: {}", e)));
        }

        let message = serde_json::from_slice::<MessageBody>(&bytes)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| status.to_string());

        match status {
            StatusCode::UNAUTHORIZED => Err(AppError::Authentication),
            StatusCode::FORBIDDEN => Err(AppError::Authorization),
            StatusCode::NOT_FOUND => Err(AppError::NotFound),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(AppError::Validation(message))
            }
            _ => Err(AppError::Remote(message)),
        }
    }
}
