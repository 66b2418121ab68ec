use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::errors::PlannerError;
use crate::state::Attachment;
use crate::wire::{self, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Persona sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "당신은 기독교대한성결교회의 목회자입니다. 당신은 부교역자로서 담임목사님의 목회를 돕는 사람입니다. 신학적으로 건전하고 성결교회의 신앙 전통(중생, 성결, 신유, 재림)을 존중하며, 사용자의 요청에 따라 체계적이고 은혜로운 설교 계획을 작성해주세요.";

/// Shown when the model answers with no text at all.
pub const EMPTY_RESPONSE_FALLBACK: &str = "응답을 생성하지 못했습니다.";
/// Shown when the remote failure carries no usable message.
pub const GENERIC_FAILURE: &str = "설교 계획 생성 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";

pub struct GeminiProvider {
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
    client: Client,
}

impl GeminiProvider {
    pub fn new(api_key: String, config: &Config) -> Result<Self, PlannerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PlannerError::Generation(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            api_key,
            model: config.model.clone(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            temperature: config.temperature,
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl super::Provider for GeminiProvider {
    fn build_request(&self, prompt: &str, attachment: Option<&Attachment>) -> GenerateContentRequest {
        wire::build_request(prompt, attachment, SYSTEM_INSTRUCTION, self.temperature)
    }

    async fn generate(
        &self,
        prompt: &str,
        attachment: Option<&Attachment>,
        debug: bool,
    ) -> Result<String, PlannerError> {
        let request = self.build_request(prompt, attachment);
        let url = self.endpoint();

        if debug {
            let body = serde_json::to_string_pretty(&request)
                .map_err(|e| PlannerError::Generation(e.to_string()))?;
            eprintln!("debug[gemini]: HTTP POST {url} body:\n{body}");
        }

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&request)
            .send()
            .await
            .map_err(|e| PlannerError::Generation(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PlannerError::Generation(e.to_string()))?;

        if debug {
            eprintln!("debug[gemini]: raw status: {status}");
            eprintln!("debug[gemini]: raw response:\n{text}");
        }

        if !status.is_success() {
            return Err(PlannerError::Generation(remote_message(status, &text)));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|_| PlannerError::Generation(GENERIC_FAILURE.to_string()))?;

        Ok(parsed
            .text()
            .unwrap_or_else(|| EMPTY_RESPONSE_FALLBACK.to_string()))
    }
}

/// Best-available message for a failed exchange: the remote error body's
/// `error.message` when parseable, else status plus body, else the fixed
/// fallback.
fn remote_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        format!("Gemini API error ({status}): {trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Provider;

    fn test_config(base_url: &str) -> Config {
        Config {
            api_base_url: base_url.to_string(),
            timeout_secs: 5,
            ..Config::default()
        }
    }

    fn test_attachment() -> Attachment {
        Attachment {
            encoded_data: "data:application/pdf;base64,QUJD".into(),
            file_name: "curriculum.pdf".into(),
        }
    }

    #[tokio::test]
    async fn generate_returns_candidate_text() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"1주차 설교 계획"}]}}]}"#)
            .create_async()
            .await;

        let provider = GeminiProvider::new("fake-key".into(), &test_config(&server.url())).unwrap();
        let result = provider.generate("프롬프트", None, false).await.unwrap();
        assert_eq!(result, "1주차 설교 계획");
    }

    #[tokio::test]
    async fn generate_sends_stripped_inline_data() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .match_header("x-goog-api-key", "fake-key")
            .match_body(mockito::Matcher::PartialJsonString(
                r#"{"contents":[{"parts":[{"text":"프롬프트"},{"inlineData":{"mimeType":"application/pdf","data":"QUJD"}}]}]}"#.to_string(),
            ))
            .with_status(200)
            .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#)
            .create_async()
            .await;

        let provider = GeminiProvider::new("fake-key".into(), &test_config(&server.url())).unwrap();
        let result = provider
            .generate("프롬프트", Some(&test_attachment()), false)
            .await
            .unwrap();
        assert_eq!(result, "ok");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn generate_falls_back_when_response_has_no_text() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .with_status(200)
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        let provider = GeminiProvider::new("fake-key".into(), &test_config(&server.url())).unwrap();
        let result = provider.generate("프롬프트", None, false).await.unwrap();
        assert_eq!(result, EMPTY_RESPONSE_FALLBACK);
    }

    #[tokio::test]
    async fn generate_surfaces_remote_error_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .with_status(429)
            .with_body(r#"{"error":{"message":"Resource has been exhausted"}}"#)
            .create_async()
            .await;

        let provider = GeminiProvider::new("fake-key".into(), &test_config(&server.url())).unwrap();
        let err = provider.generate("프롬프트", None, false).await.unwrap_err();
        assert_eq!(err.to_string(), "Resource has been exhausted");
    }

    #[tokio::test]
    async fn generate_reports_status_for_opaque_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .with_status(500)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let provider = GeminiProvider::new("fake-key".into(), &test_config(&server.url())).unwrap();
        let err = provider.generate("프롬프트", None, false).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("upstream exploded"));
    }

    #[tokio::test]
    async fn generate_uses_generic_fallback_for_empty_error_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .with_status(503)
            .with_body("")
            .create_async()
            .await;

        let provider = GeminiProvider::new("fake-key".into(), &test_config(&server.url())).unwrap();
        let err = provider.generate("프롬프트", None, false).await.unwrap_err();
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }
}
