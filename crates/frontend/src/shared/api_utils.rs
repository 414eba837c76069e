//! API utilities for frontend-backend communication
//!
//! Provides the API base URL, the error type every remote call returns and
//! JSON request helpers that attach the stored bearer token.

use gloo_net::http::{RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Failure of a remote call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("not authenticated")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("rejected by server: {0}")]
    Validation(String),
    #[error("server responded with HTTP {0}")]
    Server(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response. `body` is used for validation messages.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            400 | 409 | 422 => ApiError::Validation(server_message(body)),
            _ => ApiError::Server(status),
        }
    }

    /// Translation key of the user-visible message
    pub fn message_key(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "error.network",
            ApiError::Unauthorized => "error.unauthorized",
            ApiError::NotFound => "error.not_found",
            ApiError::Validation(_) => "error.validation",
            ApiError::Server(_) => "error.server",
            ApiError::Decode(_) => "error.decode",
        }
    }
}

/// Extracts `error` or `message` from a JSON error body, else the raw text
fn server_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    body.trim().to_string()
}

/// Append a query string built from `query`; empty queries leave the path as is
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Decode(e.to_string()))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    ensure_ok(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = authorized(gloo_net::http::Request::get(&api_url(path)))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = authorized(gloo_net::http::Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

/// POST whose response body is ignored
pub async fn post<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = authorized(gloo_net::http::Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await.map(|_| ())
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = authorized(gloo_net::http::Request::put(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = authorized(gloo_net::http::Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_sales_target::{SalesTargetFilter, TargetType};

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404, "gone"), ApiError::NotFound);
        assert_eq!(ApiError::from_status(500, "boom"), ApiError::Server(500));
    }

    #[test]
    fn test_validation_message_extraction() {
        assert_eq!(
            ApiError::from_status(422, r#"{"error":"email already in use"}"#),
            ApiError::Validation("email already in use".to_string())
        );
        assert_eq!(
            ApiError::from_status(400, r#"{"message":"bad amount"}"#),
            ApiError::Validation("bad amount".to_string())
        );
        assert_eq!(
            ApiError::from_status(400, " plain text \n"),
            ApiError::Validation("plain text".to_string())
        );
    }

    #[test]
    fn test_with_query() {
        let filter = SalesTargetFilter {
            target_type: Some(TargetType::Quarterly),
            active_only: true,
        };
        assert_eq!(
            with_query("/api/sales-targets", &filter).unwrap(),
            "/api/sales-targets?target_type=quarterly&active_only=true"
        );

        let filter = SalesTargetFilter {
            target_type: None,
            active_only: false,
        };
        assert_eq!(
            with_query("/api/sales-targets", &filter).unwrap(),
            "/api/sales-targets?active_only=false"
        );
    }
}
