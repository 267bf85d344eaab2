//! HTTP Client
//!
//! `ApiClient` over reqwest, which uses the browser fetch API on wasm32.
//! Session cookies ride along because every request is same-origin.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use super::{ApiClient, UploadFile};
use crate::error::{ApiError, ApiResult};
use crate::upload::UploadPolicy;

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base: String,
    upload_policy: UploadPolicy,
}

impl HttpApi {
    /// `base` must be absolute (scheme and host); endpoints are appended to it
    pub fn new(base: impl Into<String>, upload_policy: UploadPolicy) -> Self {
        Self {
            client: Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
            upload_policy,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base, endpoint)
    }

    /// Turn a non-success answer into a typed failure
    async fn check(&self, endpoint: &str, response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        warn!(endpoint, status = status.as_u16(), %message, "request rejected");
        Err(ApiError::Validation(message))
    }
}

#[async_trait(?Send)]
impl ApiClient for HttpApi {
    async fn fetch_json(&self, endpoint: &str) -> ApiResult<Value> {
        debug!(endpoint, "GET");
        let response = self.client.get(self.url(endpoint)).send().await?;
        let response = self.check(endpoint, response).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn mutate(&self, endpoint: &str, payload: Value) -> ApiResult<()> {
        debug!(endpoint, "POST");
        let response = self.client.post(self.url(endpoint)).json(&payload).send().await?;
        let response = self.check(endpoint, response).await?;
        // Some routes answer 200 with `{success: false}`
        let text = response.text().await.unwrap_or_default();
        match serde_json::from_str::<Value>(&text) {
            Ok(body) => check_success_body(&body),
            Err(_) => Ok(()),
        }
    }

    async fn upload_file(&self, endpoint: &str, file: UploadFile, owner_id: u32) -> ApiResult<()> {
        self.upload_policy.check(&file.mime)?;
        debug!(endpoint, file = %file.name, owner_id, "UPLOAD");
        let part = Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(&file.mime)
            .map_err(|e| ApiError::validation(e.to_string()))?;
        let form = Form::new()
            .part("file", part)
            .text("item_id", owner_id.to_string());
        let response = self.client.post(self.url(endpoint)).multipart(form).send().await?;
        self.check(endpoint, response).await?;
        Ok(())
    }
}

/// Message for a failed request: the body's `error` field,
/// else the status reason phrase
pub fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
        })
}

/// A 2xx body may still report failure
pub fn check_success_body(body: &Value) -> ApiResult<()> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("request failed");
        return Err(ApiError::validation(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_from_body() {
        let msg = error_message(StatusCode::BAD_REQUEST, r#"{"error": "Existiert bereits"}"#);
        assert_eq!(msg, "Existiert bereits");
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert_eq!(error_message(StatusCode::FORBIDDEN, "<html>"), "Forbidden");
        assert_eq!(error_message(StatusCode::BAD_REQUEST, r#"{"error": 3}"#), "Bad Request");
    }

    #[test]
    fn test_success_body() {
        assert!(check_success_body(&json!({"success": true, "id": 4})).is_ok());
        assert!(check_success_body(&json!([])).is_ok());
        let err = check_success_body(&json!({"success": false, "error": "Name bereits vergeben"})).unwrap_err();
        assert_eq!(err, ApiError::validation("Name bereits vergeben"));
    }

    #[test]
    fn test_url_joins_base() {
        let api = HttpApi::new("http://localhost:5000/", UploadPolicy::default());
        assert_eq!(api.url("/api/get_events"), "http://localhost:5000/api/get_events");
    }
}
