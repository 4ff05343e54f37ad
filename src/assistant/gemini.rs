//! Google Gemini `generateContent` 기반 [`TextAssistant`] 구현.

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::{ServiceError, TextAssistant};
use crate::config::AssistantConfig;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Serialize)]
pub(crate) struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    system_instruction: GeminiContent<'a>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    #[serde(default)]
    code: Option<u16>,
    message: String,
}

/// Gemini 제공자. 키가 없으면 호출 없이 [`ServiceError::MissingCredential`]을 낸다.
pub struct GeminiAssistant {
    api_key: Option<String>,
    client: Client,
    model: String,
    temperature: f32,
    system_instruction: String,
}

impl Debug for GeminiAssistant {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiAssistant")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl GeminiAssistant {
    /// 설정에 지정된 환경 변수에서 키를 읽어 만든다.
    pub fn from_config(cfg: &AssistantConfig) -> Result<Self, ServiceError> {
        let api_key = env::var(&cfg.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self::with_key(api_key, cfg)
    }

    pub fn with_key(api_key: Option<String>, cfg: &AssistantConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;
        Ok(Self {
            api_key,
            client,
            model: cfg.model.clone(),
            temperature: cfg.temperature,
            system_instruction: cfg.system_instruction.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn build_url(&self) -> String {
        format!("{API_BASE_URL}/models/{}:generateContent", self.model)
    }

    pub(crate) fn build_request<'a>(&'a self, query: &'a str) -> GeminiRequest<'a> {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user"),
                parts: vec![TextPart { text: query }],
            }],
            system_instruction: GeminiContent {
                role: None,
                parts: vec![TextPart {
                    text: &self.system_instruction,
                }],
            },
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        }
    }

    /// 요청 본문을 JSON 값으로 만든다.
    pub fn request_body(&self, query: &str) -> Result<serde_json::Value, ServiceError> {
        Ok(serde_json::to_value(self.build_request(query))?)
    }
}

/// 응답 본문에서 첫 후보의 텍스트 조각을 이어 붙인다. 텍스트가 없으면 빈 문자열.
pub fn extract_text(body: &str) -> Result<String, ServiceError> {
    let response: GeminiResponse = serde_json::from_str(body)?;
    if let Some(err) = response.error {
        return Err(ServiceError::Provider {
            status: err.code.unwrap_or(0),
            message: err.message,
        });
    }
    let text = response
        .candidates
        .as_ref()
        .and_then(|c| c.first())
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect::<String>()
        })
        .unwrap_or_default();
    Ok(text)
}

#[async_trait]
impl TextAssistant for GeminiAssistant {
    #[instrument(skip(self, query), fields(model = %self.model))]
    async fn ask(&self, query: &str) -> Result<String, ServiceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ServiceError::MissingCredential)?;

        debug!("Sending request to Gemini API");
        let response = self
            .client
            .post(self.build_url())
            .header("x-goog-api-key", api_key)
            .json(&self.build_request(query))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(ServiceError::Provider {
                status: status.as_u16(),
                message: body,
            });
        }

        let text = extract_text(&body).inspect_err(|e| {
            error!(error = %e, "Failed to parse Gemini response");
        })?;
        if text.trim().is_empty() {
            return Err(ServiceError::EmptyResponse);
        }
        debug!("Successfully received Gemini response");
        Ok(text)
    }
}
