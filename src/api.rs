use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{multipart, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::logic::errors::{describe_transport_failure, TransportFailure};
use crate::model::types::PendingFile;

/// Error reported by the backend, or produced while talking to it.
///
/// Transport failures and malformed bodies are normalized into the same
/// envelope before they get here, so every variant renders the same way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Message(String),
    #[error("{message}")]
    Detailed {
        message: String,
        details: Option<Value>,
    },
    #[error("{0}")]
    Other(Value),
}

impl ApiError {
    /// Build from the `error` field of an `ok: false` envelope
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) => ApiError::Message(s.clone()),
            Some(Value::Object(map)) => match map.get("message").and_then(Value::as_str) {
                Some(message) => ApiError::Detailed {
                    message: message.to_string(),
                    details: map.get("details").filter(|d| !d.is_null()).cloned(),
                },
                None => ApiError::Other(Value::Object(map.clone())),
            },
            Some(Value::Null) | None => ApiError::Message("Unknown error".to_string()),
            Some(other) => ApiError::Other(other.clone()),
        }
    }

    /// Compact JSON of structured error details, if any
    pub fn details_json(&self) -> Option<String> {
        match self {
            ApiError::Detailed {
                details: Some(details),
                ..
            } => Some(details.to_string()),
            _ => None,
        }
    }
}

/// Normalize a raw response body into a JSON envelope.
///
/// Only bodies served as `application/json` are parsed. Anything else,
/// including JSON that fails to parse, becomes `{ok: false, error: <body>}`.
pub fn normalize_body(content_type: &str, body: &str) -> Value {
    if content_type.contains("application/json") {
        if let Ok(value) = serde_json::from_str::<Value>(body) {
            return value;
        }
    }
    json!({ "ok": false, "error": body })
}

/// Envelope for a request that never produced a response
pub fn transport_failure(error: &anyhow::Error) -> Value {
    json!({ "ok": false, "error": describe_transport_failure(error) })
}

pub fn envelope_ok(envelope: &Value) -> bool {
    envelope.get("ok").and_then(Value::as_bool).unwrap_or(false)
}

/// Decode a successful envelope into `T`, or surface its error
pub fn decode_envelope<T: DeserializeOwned>(envelope: Value) -> Result<T, ApiError> {
    if !envelope_ok(&envelope) {
        return Err(ApiError::from_value(envelope.get("error")));
    }
    serde_json::from_value(envelope)
        .map_err(|e| ApiError::Message(format!("Malformed response: {}", e)))
}

/// `/health` as seen by the status display.
///
/// Decoded leniently: a failed envelope still carries whatever model name
/// the backend sent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HealthStatus {
    pub ok: bool,
    pub chunks: u64,
    pub model: Option<String>,
    pub error: Option<String>,
}

impl HealthStatus {
    pub fn from_envelope(envelope: &Value) -> Self {
        let ok = envelope_ok(envelope);
        let chunks = envelope
            .get("chunks")
            .and_then(|c| c.as_u64().or_else(|| c.as_f64().map(|f| f.max(0.0) as u64)))
            .unwrap_or(0);
        let model = envelope
            .get("model")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string);
        let error = if ok {
            None
        } else {
            Some(ApiError::from_value(envelope.get("error")).to_string())
        };

        Self {
            ok,
            chunks,
            model,
            error,
        }
    }
}

/// Per-file outcome of an upload
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UploadFileResult {
    // Checked first: an entry with an error is a failure regardless of other fields
    Failed {
        #[serde(default)]
        file: String,
        error: Value,
    },
    Added {
        #[serde(default)]
        file: String,
        #[serde(rename = "chunksAdded", default)]
        chunks_added: u64,
    },
}

impl UploadFileResult {
    pub fn file(&self) -> &str {
        match self {
            UploadFileResult::Failed { file, .. } | UploadFileResult::Added { file, .. } => file,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub results: Vec<UploadFileResult>,
    #[serde(default)]
    pub chunks: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SuggestResponse {
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Citation {
    pub id: u64,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub citations: Vec<Citation>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResetResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "filesRemoved", default)]
    pub files_removed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PingResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub sample: Option<String>,
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
    #[serde(rename = "topK")]
    top_k: u32,
}

#[derive(Clone)]
pub struct DocQaClient {
    base_url: String,
    client: Client,
}

impl DocQaClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and normalize whatever comes back into an envelope
    async fn fetch_json(&self, request: RequestBuilder) -> Value {
        match Self::send(request).await {
            Ok(envelope) => envelope,
            Err(e) => {
                let failure = TransportFailure::classify(&e);
                tracing::warn!(?failure, "Request to {} failed: {:#}", self.base_url, e);
                transport_failure(&e)
            }
        }
    }

    async fn send(request: RequestBuilder) -> Result<Value> {
        let response = request.send().await.context("Request failed")?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        let status = response.status();
        let text = response.text().await.context("Failed to read response")?;

        tracing::debug!(%status, %content_type, bytes = text.len(), "Backend response");
        Ok(normalize_body(&content_type, &text))
    }

    pub async fn health(&self) -> HealthStatus {
        let envelope = self.fetch_json(self.client.get(self.url("/health"))).await;
        HealthStatus::from_envelope(&envelope)
    }

    pub async fn upload(&self, files: &[PendingFile]) -> Result<UploadResponse, ApiError> {
        let mut form = multipart::Form::new();
        for file in files {
            let bytes = tokio::fs::read(&file.path)
                .await
                .map_err(|e| ApiError::Message(format!("Failed to read {}: {}", file.name, e)))?;
            form = form.part("files", multipart::Part::bytes(bytes).file_name(file.name.clone()));
        }

        let request = self.client.post(self.url("/upload")).multipart(form);
        decode_envelope(self.fetch_json(request).await)
    }

    pub async fn suggest(&self) -> Result<SuggestResponse, ApiError> {
        decode_envelope(self.fetch_json(self.client.get(self.url("/suggest"))).await)
    }

    pub async fn ask(&self, question: &str, top_k: u32) -> Result<AskResponse, ApiError> {
        let request = self
            .client
            .post(self.url("/ask"))
            .json(&AskRequest { question, top_k });
        decode_envelope(self.fetch_json(request).await)
    }

    pub async fn reset(&self) -> Result<ResetResponse, ApiError> {
        decode_envelope(self.fetch_json(self.client.post(self.url("/reset"))).await)
    }

    pub async fn ping(&self) -> Result<PingResponse, ApiError> {
        decode_envelope(self.fetch_json(self.client.get(self.url("/gemini/ping"))).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a loopback port
    async fn serve_once(content_type: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                content_type,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{}", addr)
    }

    #[test]
    fn test_normalize_non_json_body() {
        let v = normalize_body("text/html; charset=utf-8", "Internal Error");
        assert_eq!(v, json!({ "ok": false, "error": "Internal Error" }));
    }

    #[test]
    fn test_normalize_json_body() {
        let v = normalize_body("application/json", r#"{"ok":true,"chunks":42,"model":"m1"}"#);
        assert_eq!(v, json!({ "ok": true, "chunks": 42, "model": "m1" }));
    }

    #[test]
    fn test_normalize_json_content_type_with_invalid_body() {
        let v = normalize_body("application/json", "{not json");
        assert_eq!(v, json!({ "ok": false, "error": "{not json" }));
    }

    #[test]
    fn test_normalize_json_body_without_json_content_type() {
        // Content type decides, not the body
        let v = normalize_body("text/plain", r#"{"ok":true}"#);
        assert!(!envelope_ok(&v));
    }

    #[test]
    fn test_health_from_ok_envelope() {
        let h = HealthStatus::from_envelope(&json!({ "ok": true, "chunks": 42, "model": "m1" }));
        assert!(h.ok);
        assert_eq!(h.chunks, 42);
        assert_eq!(h.model.as_deref(), Some("m1"));
        assert!(h.error.is_none());
    }

    #[test]
    fn test_health_from_failed_envelope() {
        let h = HealthStatus::from_envelope(&json!({ "ok": false, "error": "down" }));
        assert!(!h.ok);
        assert_eq!(h.chunks, 0);
        assert!(h.model.is_none());
        assert_eq!(h.error.as_deref(), Some("down"));
    }

    #[test]
    fn test_error_from_string() {
        let e = ApiError::from_value(Some(&json!("Missing question")));
        assert_eq!(e, ApiError::Message("Missing question".to_string()));
        assert_eq!(e.to_string(), "Missing question");
        assert!(e.details_json().is_none());
    }

    #[test]
    fn test_error_from_structured_value() {
        let e = ApiError::from_value(Some(&json!({
            "message": "No text indexed from uploads",
            "details": [{ "file": "a.pdf", "error": "empty" }]
        })));
        assert_eq!(e.to_string(), "No text indexed from uploads");
        assert_eq!(
            e.details_json().as_deref(),
            Some(r#"[{"error":"empty","file":"a.pdf"}]"#)
        );
    }

    #[test]
    fn test_error_from_unknown_shape_renders_json() {
        let e = ApiError::from_value(Some(&json!({ "code": 7 })));
        assert_eq!(e.to_string(), r#"{"code":7}"#);
    }

    #[test]
    fn test_error_missing() {
        assert_eq!(ApiError::from_value(None).to_string(), "Unknown error");
    }

    #[test]
    fn test_decode_upload_results() {
        let resp: UploadResponse = decode_envelope(json!({
            "ok": true,
            "results": [
                { "file": "a.txt", "chunksAdded": 3 },
                { "file": "b.pdf", "error": "No extractable text" }
            ],
            "chunks": 3
        }))
        .unwrap();

        assert_eq!(resp.chunks, Some(3));
        assert_eq!(
            resp.results[0],
            UploadFileResult::Added {
                file: "a.txt".to_string(),
                chunks_added: 3
            }
        );
        assert!(matches!(resp.results[1], UploadFileResult::Failed { .. }));
        assert_eq!(resp.results[1].file(), "b.pdf");
    }

    #[test]
    fn test_decode_failed_envelope() {
        let result: Result<AskResponse, ApiError> =
            decode_envelope(json!({ "ok": false, "error": "No knowledge uploaded yet" }));
        assert_eq!(
            result.unwrap_err(),
            ApiError::Message("No knowledge uploaded yet".to_string())
        );
    }

    #[test]
    fn test_decode_ask_response() {
        let resp: AskResponse = decode_envelope(json!({
            "ok": true,
            "answer": "42",
            "citations": [{ "id": 1, "source": "a.txt", "score": 0.873 }],
            "model": "gemini-1.5-flash"
        }))
        .unwrap();
        assert_eq!(resp.answer, "42");
        assert_eq!(resp.citations.len(), 1);
        assert_eq!(resp.model.as_deref(), Some("gemini-1.5-flash"));
    }

    #[test]
    fn test_ask_request_wire_format() {
        let body = serde_json::to_value(AskRequest {
            question: "What?",
            top_k: 5,
        })
        .unwrap();
        assert_eq!(body, json!({ "question": "What?", "topK": 5 }));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = DocQaClient::new("http://localhost:5501/".to_string());
        assert_eq!(client.base_url(), "http://localhost:5501");
        assert_eq!(client.url("/health"), "http://localhost:5501/health");
    }

    #[tokio::test]
    async fn test_health_over_http() {
        let base = serve_once("application/json", r#"{"ok":true,"chunks":42,"model":"m1"}"#).await;
        let health = DocQaClient::new(base).health().await;
        assert!(health.ok);
        assert_eq!(health.chunks, 42);
        assert_eq!(health.model.as_deref(), Some("m1"));
    }

    #[tokio::test]
    async fn test_suggest_with_plain_text_body() {
        let base = serve_once("text/plain", "Internal Error").await;
        let result = DocQaClient::new(base).suggest().await;
        assert_eq!(result.unwrap_err(), ApiError::Message("Internal Error".to_string()));
    }

    #[tokio::test]
    async fn test_transport_failure_is_normalized() {
        // Bind then drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let health = DocQaClient::new(format!("http://{}", addr)).health().await;
        assert!(!health.ok);
        let error = health.error.unwrap();
        assert!(error.starts_with("Backend unreachable ("), "{}", error);
    }
}
