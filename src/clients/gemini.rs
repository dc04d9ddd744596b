//! Gemini `generateContent` REST client.
//!
//! Thin wrapper around the one outbound call the application ever makes.
//! Request and response JSON are modeled with serde; grounding metadata is
//! passed through untouched and normalized by the service layer. Errors
//! carry the API's own message text so the service can classify them.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: EmptyObject,
}

#[derive(Debug, Serialize)]
struct EmptyObject {}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// One raw citation chunk. The payload sits either at the top level (`web`)
/// or inside `retrievedContext` (`web`/`news`); both spellings occur.
/// Unrecognized chunk shapes deserialize to empty options and are dropped
/// during normalization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<WebChunk>,
    #[serde(default)]
    pub retrieved_context: Option<RetrievedContext>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RetrievedContext {
    #[serde(default)]
    pub web: Option<WebChunk>,
    #[serde(default)]
    pub news: Option<NewsChunk>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebChunk {
    pub uri: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsChunk {
    pub uri: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub snippet: Option<String>,
    pub publication_date: Option<ChunkDate>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ChunkDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            model_name: config.model_name.clone(),
        }
    }

    /// Issue exactly one generateContent call: no retry, no streaming,
    /// transport-default timeout.
    pub async fn generate_content(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
        use_web_search: bool,
    ) -> Result<GenerateContentResponse> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            system_instruction: system_instruction.map(|text| RequestContent {
                parts: vec![RequestPart { text }],
            }),
            tools: use_web_search.then(|| {
                vec![Tool {
                    google_search: EmptyObject {},
                }]
            }),
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        );
        debug!("calling generateContent, model: {}", self.model_name);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);
            return Err(anyhow!("generateContent failed ({status}): {message}"));
        }

        debug!("generateContent succeeded");
        Ok(response.json::<GenerateContentResponse>().await?)
    }
}
