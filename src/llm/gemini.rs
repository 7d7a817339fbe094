use std::future::Future;
use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::codec::{self, EncodedImage};
use crate::config::CONFIG;
use crate::llm::{GenerationError, ImageGenerator};
use crate::utils::timing::log_generation_timing;

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(CONFIG.http_timeout_seconds))
        .build()
        .expect("Failed to build HTTP client")
});

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    parts: Option<Vec<GeminiPart>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GeminiPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GeminiInlineData,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}

fn redact_api_key(text: &str) -> String {
    let key = CONFIG.gemini_api_key.trim();
    if key.is_empty() {
        return text.to_string();
    }
    text.replace(key, "[redacted]")
}

fn truncate_for_log(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let truncated: String = value.chars().take(limit).collect();
    format!("{truncated}... (truncated)")
}

fn build_safety_settings() -> Vec<Value> {
    let profile = CONFIG.gemini_safety_settings.as_str();
    let threshold = match profile {
        "standard" => "BLOCK_MEDIUM_AND_ABOVE",
        "permissive" => "OFF",
        _ => {
            warn!(
                "Unknown GEMINI_SAFETY_SETTINGS value '{}', using permissive defaults.",
                profile
            );
            "OFF"
        }
    };

    vec![
        json!({ "category": "HARM_CATEGORY_HARASSMENT", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_HATE_SPEECH", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_CIVIC_INTEGRITY", "threshold": threshold }),
    ]
}

fn summarize_request_parts(parts: &[Value]) -> Vec<Value> {
    parts
        .iter()
        .map(|part| {
            if let Some(text) = part.get("text").and_then(|value| value.as_str()) {
                json!({ "text": truncate_for_log(text, 200) })
            } else if let Some(inline_data) = part.get("inlineData") {
                let mime_type = inline_data
                    .get("mimeType")
                    .and_then(|value| value.as_str())
                    .unwrap_or("unknown");
                let data_len = inline_data
                    .get("data")
                    .and_then(|value| value.as_str())
                    .map(|value| value.len())
                    .unwrap_or(0);
                json!({ "inlineData": { "mimeType": mime_type, "dataLen": data_len } })
            } else {
                json!({ "unknownPart": true })
            }
        })
        .collect()
}

fn summarize_payload(payload: &Value) -> Value {
    let mut summary = Map::new();

    if let Some(contents) = payload.get("contents").and_then(|value| value.as_array()) {
        let mut summarized_contents = Vec::new();
        for content in contents {
            let role = content
                .get("role")
                .and_then(|value| value.as_str())
                .unwrap_or("user");
            let parts = content
                .get("parts")
                .and_then(|value| value.as_array())
                .map(|parts| summarize_request_parts(parts))
                .unwrap_or_default();
            summarized_contents.push(json!({ "role": role, "parts": parts }));
        }
        summary.insert("contents".to_string(), Value::Array(summarized_contents));
    }

    if let Some(config) = payload.get("generationConfig") {
        summary.insert("generationConfig".to_string(), config.clone());
    }

    if let Some(safety) = payload
        .get("safetySettings")
        .and_then(|value| value.as_array())
    {
        summary.insert("safetySettingsCount".to_string(), json!(safety.len()));
    }

    Value::Object(summary)
}

fn summarize_response(response: &GeminiResponse) -> Value {
    let mut text_parts = 0usize;
    let mut image_parts = 0usize;
    let mut text_preview = None;

    let candidates = response.candidates.as_deref().unwrap_or(&[]);
    for candidate in candidates {
        if let Some(content) = &candidate.content {
            if let Some(parts) = &content.parts {
                for part in parts {
                    match part {
                        GeminiPart::Text { text } => {
                            text_parts += 1;
                            if text_preview.is_none() && !text.trim().is_empty() {
                                text_preview = Some(truncate_for_log(text, 200));
                            }
                        }
                        GeminiPart::InlineData { inline_data } => {
                            if inline_data.mime_type.starts_with("image/") {
                                image_parts += 1;
                            }
                        }
                    }
                }
            }
        }
    }

    json!({
        "candidates": response.candidates.as_ref().map(|candidates| candidates.len()).unwrap_or(0),
        "textParts": text_parts,
        "imageParts": image_parts,
        "textPreview": text_preview
    })
}

fn summarize_error_body(body: &str) -> (Option<String>, String) {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return (None, "empty response body".to_string());
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        let message = value
            .pointer("/error/message")
            .and_then(|v| v.as_str())
            .map(|v| v.to_string())
            .or_else(|| {
                value
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(|v| v.to_string())
            });
        return (message, truncate_for_log(&value.to_string(), 2000));
    }

    (None, truncate_for_log(trimmed, 2000))
}

/// First image-typed part of the response, still in marshalled form.
fn extract_first_image(response: GeminiResponse) -> Option<EncodedImage> {
    for candidate in response.candidates.unwrap_or_default() {
        if let Some(content) = candidate.content {
            if let Some(parts) = content.parts {
                for part in parts {
                    if let GeminiPart::InlineData { inline_data } = part {
                        if inline_data.mime_type.starts_with("image/") {
                            return Some(EncodedImage {
                                base64: inline_data.data,
                                mime_type: inline_data.mime_type,
                            });
                        }
                    }
                }
            }
        }
    }
    None
}

/// One generateContent call. Every failure is terminal for the call; the user
/// re-triggers explicitly, so there is no retry here.
async fn call_generate_content(
    model: &str,
    payload: Value,
) -> Result<GeminiResponse, GenerationError> {
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
        model
    );

    if tracing::enabled!(tracing::Level::DEBUG) {
        let payload_summary = summarize_payload(&payload);
        debug!(target: "llm.gemini", model = model, payload = %payload_summary);
    }

    let response = HTTP_CLIENT
        .post(&url)
        .header("x-goog-api-key", &CONFIG.gemini_api_key)
        .timeout(Duration::from_secs(CONFIG.generate_timeout_seconds))
        .json(&payload)
        .send()
        .await
        .map_err(|err| {
            let err_text = redact_api_key(&err.to_string());
            warn!(
                "Gemini request failed to send: {} (timeout={}, connect={}, status={:?})",
                err_text,
                err.is_timeout(),
                err.is_connect(),
                err.status()
            );
            GenerationError::Request(err_text)
        })?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let (message, body_summary) = summarize_error_body(&body);
        warn!("Gemini API error: status={}, body={}", status, body_summary);
        let detail = message.unwrap_or(body_summary);
        return Err(GenerationError::Request(format!(
            "status {}: {}",
            status,
            redact_api_key(&detail)
        )));
    }

    let value = response
        .json::<GeminiResponse>()
        .await
        .map_err(|err| GenerationError::Request(redact_api_key(&err.to_string())))?;
    if tracing::enabled!(tracing::Level::DEBUG) {
        let response_summary = summarize_response(&value);
        debug!(target: "llm.gemini", model = model, response = %response_summary);
    }
    Ok(value)
}

/// Stateless client for the Gemini image model. Every call is an independent
/// request; there is no caching, rate limiting, or batching.
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    model: String,
}

impl GeminiGenerator {
    pub fn from_config() -> Self {
        Self {
            model: CONFIG.gemini_image_model.clone(),
        }
    }
}

impl ImageGenerator for GeminiGenerator {
    fn generate(
        &self,
        image: &EncodedImage,
        instruction: &str,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send {
        async move {
            let parts = vec![
                json!({
                    "inlineData": {
                        "mimeType": image.mime_type.clone(),
                        "data": image.base64.clone()
                    }
                }),
                json!({ "text": instruction }),
            ];
            let payload = json!({
                "contents": [{ "role": "user", "parts": parts }],
                "generationConfig": { "responseModalities": ["IMAGE"] },
                "safetySettings": build_safety_settings(),
            });

            log_generation_timing("gemini", &self.model, "generate_image", || async {
                let response = call_generate_content(&self.model, payload).await?;
                let image =
                    extract_first_image(response).ok_or(GenerationError::MissingImage)?;
                Ok(codec::to_data_url(&image))
            })
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_from(value: Value) -> GeminiResponse {
        serde_json::from_value(value).expect("valid response JSON")
    }

    #[test]
    fn first_image_part_wins_over_text_parts() {
        let response = response_from(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here is your render." },
                        { "inlineData": { "mimeType": "image/png", "data": "AAAA" } },
                        { "inlineData": { "mimeType": "image/webp", "data": "BBBB" } }
                    ]
                }
            }]
        }));

        let image = extract_first_image(response).expect("image part");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.base64, "AAAA");
        assert_eq!(codec::to_data_url(&image), "data:image/png;base64,AAAA");
    }

    #[test]
    fn text_only_responses_yield_no_image() {
        let response = response_from(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "I cannot draw that." }] }
            }]
        }));
        assert!(extract_first_image(response).is_none());

        let empty = response_from(json!({}));
        assert!(extract_first_image(empty).is_none());
    }

    #[test]
    fn non_image_inline_data_is_skipped() {
        let response = response_from(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "inlineData": { "mimeType": "application/pdf", "data": "AAAA" } }
                    ]
                }
            }]
        }));
        assert!(extract_first_image(response).is_none());
    }

    #[test]
    fn error_bodies_surface_the_service_message() {
        let (message, summary) =
            summarize_error_body(r#"{"error": {"message": "API key not valid"}}"#);
        assert_eq!(message.as_deref(), Some("API key not valid"));
        assert!(summary.contains("API key not valid"));

        let (message, summary) = summarize_error_body("");
        assert!(message.is_none());
        assert_eq!(summary, "empty response body");
    }
}
