//! HTTP client for the SafeTrip REST API
//!
//! Wraps `reqwest` with the base URL, the DRF token header and a client-wide
//! timeout. Non-2xx responses are mapped to the uniform [`ApiError`] shape;
//! no call is ever retried here.

use std::collections::HashMap;

use futures::future::{self, Either};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::session::storage;

/// Uniform error shape for every transport operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// 400 with a field-keyed body; user-correctable.
    #[error("Validation failed")]
    Validation { fields: HashMap<String, String> },

    /// Server rejected the request.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// No response was received (connection failure or timeout).
    #[error("Network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Field errors when this is a validation failure, otherwise empty.
    pub fn field_errors(&self) -> HashMap<String, String> {
        match self {
            ApiError::Validation { fields } => fields.clone(),
            _ => HashMap::new(),
        }
    }
}

/// Map a non-2xx response body to an `ApiError`.
///
/// A 400 with an object body is treated as field-keyed validation output
/// (first message per field, DRF-style string arrays flattened). Everything
/// else becomes a remote error with a best-effort message.
pub(crate) fn map_error_body(status: u16, body: &str) -> ApiError {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();

    if status == 400 {
        if let Some(serde_json::Value::Object(map)) = &parsed {
            let mut fields = HashMap::new();
            for (key, value) in map {
                let message = match value {
                    serde_json::Value::Array(items) => items
                        .first()
                        .map(first_message)
                        .unwrap_or_else(|| value.to_string()),
                    other => first_message(other),
                };
                fields.insert(key.clone(), message);
            }
            if !fields.is_empty() {
                return ApiError::Validation { fields };
            }
        }
    }

    let message = parsed
        .as_ref()
        .and_then(|v| {
            v.get("detail")
                .or_else(|| v.get("message"))
                .or_else(|| v.get("error"))
        })
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| "An error occurred".to_string());

    ApiError::Remote { status, message }
}

fn first_message(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Thin request wrapper holding the base URL and the current session token.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    timeout_ms: u32,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client with the persisted session token, if any.
    pub fn new() -> Self {
        let config = AppConfig::get();
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            timeout_ms: config.request_timeout_ms,
            token: storage::load_token(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.header("Authorization", format!("Token {token}")),
            None => req,
        }
    }

    /// Run the request, racing it against the client-wide timeout
    /// (reqwest's builder timeout is not available on wasm).
    async fn execute(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let fut = req.send();
        let timeout = TimeoutFuture::new(self.timeout_ms);

        let response = match future::select(Box::pin(fut), Box::pin(timeout)).await {
            Either::Left((result, _)) => {
                result.map_err(|e| ApiError::Network(e.to_string()))?
            }
            Either::Right(_) => {
                return Err(ApiError::Network(format!(
                    "Request timed out after {}ms",
                    self.timeout_ms
                )))
            }
        };

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "response ok");
            return Ok(response);
        }

        let code = status.as_u16();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = code, "request failed");
        Err(map_error_body(code, &body))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::Network(format!("Malformed response body: {e}")))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.authorize(self.client.get(self.url(path)));
        let response = self.execute(req).await?;
        Self::decode(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = self.authorize(self.client.post(self.url(path)).json(body));
        let response = self.execute(req).await?;
        Self::decode(response).await
    }

    /// POST with an empty body, ignoring any response payload.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let req = self.authorize(self.client.post(self.url(path)));
        self.execute(req).await?;
        Ok(())
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = self.authorize(self.client.patch(self.url(path)).json(body));
        let response = self.execute(req).await?;
        Self::decode(response).await
    }

    pub async fn patch_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let req = self.authorize(self.client.patch(self.url(path)).multipart(form));
        let response = self.execute(req).await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let req = self.authorize(self.client.delete(self.url(path)));
        self.execute(req).await?;
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_keyed_400_becomes_validation() {
        let body = r#"{"name":["This field is required."],"phone":["Too short.","Bad"]}"#;
        let err = map_error_body(400, body);
        match err {
            ApiError::Validation { fields } => {
                assert_eq!(fields["name"], "This field is required.");
                assert_eq!(fields["phone"], "Too short.");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn scalar_field_values_are_kept() {
        let err = map_error_body(400, r#"{"status":"Invalid status value"}"#);
        assert_eq!(
            err.field_errors().get("status").map(String::as_str),
            Some("Invalid status value")
        );
    }

    #[test]
    fn non_400_uses_detail_message() {
        let err = map_error_body(403, r#"{"detail":"Forbidden"}"#);
        assert_eq!(
            err,
            ApiError::Remote {
                status: 403,
                message: "Forbidden".to_string()
            }
        );
    }

    #[test]
    fn message_key_is_a_fallback() {
        let err = map_error_body(500, r#"{"message":"boom"}"#);
        assert_eq!(
            err,
            ApiError::Remote {
                status: 500,
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn unparseable_body_gets_generic_message() {
        let err = map_error_body(502, "<html>bad gateway</html>");
        assert_eq!(
            err,
            ApiError::Remote {
                status: 502,
                message: "An error occurred".to_string()
            }
        );
    }

    #[test]
    fn empty_400_object_is_remote_not_validation() {
        let err = map_error_body(400, "{}");
        assert!(matches!(err, ApiError::Remote { status: 400, .. }));
    }
}
