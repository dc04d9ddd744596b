//! Remote Text Processor - capability layer.
//!
//! Owns "send text to the model and shape the answer": request assembly,
//! the single outbound call, citation normalization and failure
//! classification. Knows nothing about session state or operation chaining.

use tracing::{debug, warn};

use crate::clients::gemini::{GeminiClient, GroundingChunk};
use crate::config::Config;
use crate::error::{classify_api_error, ProcessError};
use crate::models::{OperationKind, ProcessOutput, Source, SourceDate};
use crate::prompts::{build_prompt, JSON_ONLY_SYSTEM_INSTRUCTION};

/// Outcome of one processing call.
pub type ProcessResult = Result<ProcessOutput, ProcessError>;

/// Anything that can run one text operation against a model.
///
/// The orchestrator is generic over this so tests can substitute a scripted
/// processor for the real service.
#[allow(async_fn_in_trait)]
pub trait TextProcessor {
    /// Run one operation. Every failure is a `ProcessError` carrying a
    /// user-facing Arabic message; nothing panics and nothing is retried.
    async fn process(&self, text: &str, op: OperationKind) -> ProcessResult;
}

/// The production processor, backed by the Gemini generateContent endpoint.
pub struct GeminiTextService {
    client: GeminiClient,
    api_key_configured: bool,
    verbose_logging: bool,
}

impl GeminiTextService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: GeminiClient::new(config),
            api_key_configured: config.has_api_key(),
            verbose_logging: config.verbose_logging,
        }
    }
}

impl TextProcessor for GeminiTextService {
    async fn process(&self, text: &str, op: OperationKind) -> ProcessResult {
        if !self.api_key_configured {
            return Err(ProcessError::MissingApiKey);
        }

        let prompt = build_prompt(op, text);
        let system_instruction = op.wants_json_only().then_some(JSON_ONLY_SYSTEM_INSTRUCTION);
        let use_web_search = op.uses_web_search();

        debug!("processing {:?}, input {} chars", op, text.chars().count());

        let response = match self
            .client
            .generate_content(&prompt, system_instruction, use_web_search)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("{:?} call failed: {e}", op);
                return Err(classify_api_error(&e.to_string(), op));
            }
        };

        let mut output = ProcessOutput::default();
        if let Some(candidate) = response.candidates.into_iter().next() {
            if let Some(content) = candidate.content {
                output.text = content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("");
            }
            if use_web_search {
                let chunks = candidate
                    .grounding_metadata
                    .map(|metadata| metadata.grounding_chunks)
                    .unwrap_or_default();
                debug!("{:?}: {} raw grounding chunks", op, chunks.len());
                if self.verbose_logging {
                    debug!("{:?} raw chunks: {:?}", op, chunks);
                }
                output.sources = normalize_sources(chunks);
                debug!("{:?}: {} sources kept after filtering", op, output.sources.len());
                if self.verbose_logging {
                    debug!("{:?} filtered sources: {:?}", op, output.sources);
                }
            }
        }

        Ok(output)
    }
}

/// Keep only well-formed web/news citations, preserving remote order.
/// Malformed or unrecognized chunks are dropped silently.
pub(crate) fn normalize_sources(chunks: Vec<GroundingChunk>) -> Vec<Source> {
    chunks.into_iter().filter_map(source_from_chunk).collect()
}

fn source_from_chunk(chunk: GroundingChunk) -> Option<Source> {
    let (web, news) = match chunk.retrieved_context {
        Some(ctx) => (ctx.web.or(chunk.web), ctx.news),
        None => (chunk.web, None),
    };

    if let Some(web) = web {
        if let Some(uri) = validated_uri(web.uri.as_deref()) {
            return Some(Source::Web {
                uri,
                title: web.title,
            });
        }
    }

    if let Some(news) = news {
        if let Some(uri) = validated_uri(news.uri.as_deref()) {
            let publication_date = news.publication_date.and_then(|date| {
                match (date.year, date.month, date.day) {
                    (Some(year), Some(month), Some(day)) => Some(SourceDate { year, month, day }),
                    _ => None,
                }
            });
            return Some(Source::News {
                uri,
                title: news.title,
                publisher: news.publisher,
                snippet: news.snippet,
                publication_date,
            });
        }
    }

    None
}

fn validated_uri(uri: Option<&str>) -> Option<String> {
    let uri = uri?.trim();
    if uri.starts_with("http://") || uri.starts_with("https://") {
        Some(uri.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::gemini::{ChunkDate, NewsChunk, RetrievedContext, WebChunk};

    fn web_chunk(uri: &str) -> GroundingChunk {
        GroundingChunk {
            web: Some(WebChunk {
                uri: Some(uri.to_string()),
                title: None,
            }),
            retrieved_context: None,
        }
    }

    #[test]
    fn normalization_drops_bad_uris_and_keeps_order() {
        let chunks = vec![
            web_chunk("https://a.example/one"),
            web_chunk("ftp://bad.example"),
            GroundingChunk {
                web: Some(WebChunk {
                    uri: None,
                    title: Some("بلا رابط".to_string()),
                }),
                retrieved_context: None,
            },
            web_chunk("  http://b.example/two  "),
            web_chunk(""),
        ];

        let sources = normalize_sources(chunks);
        assert_eq!(
            sources.iter().map(Source::uri).collect::<Vec<_>>(),
            vec!["https://a.example/one", "http://b.example/two"]
        );
    }

    #[test]
    fn retrieved_context_news_is_normalized() {
        let chunks = vec![GroundingChunk {
            web: None,
            retrieved_context: Some(RetrievedContext {
                web: None,
                news: Some(NewsChunk {
                    uri: Some("https://news.example/story".to_string()),
                    title: Some("خبر".to_string()),
                    publisher: Some("وكالة".to_string()),
                    snippet: None,
                    publication_date: Some(ChunkDate {
                        year: Some(2024),
                        month: Some(5),
                        day: None,
                    }),
                }),
            }),
        }];

        let sources = normalize_sources(chunks);
        match &sources[0] {
            Source::News {
                uri,
                publisher,
                publication_date,
                ..
            } => {
                assert_eq!(uri, "https://news.example/story");
                assert_eq!(publisher.as_deref(), Some("وكالة"));
                // Partial dates are dropped, not guessed at.
                assert!(publication_date.is_none());
            }
            other => panic!("expected a news source, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_chunks_vanish() {
        let sources = normalize_sources(vec![GroundingChunk::default()]);
        assert!(sources.is_empty());
    }

    #[test]
    fn missing_credential_short_circuits_before_any_network_call() {
        let service = GeminiTextService::new(&Config::default());
        let result = tokio_test::block_on(service.process("نص", OperationKind::Rephrase));
        assert_eq!(result, Err(ProcessError::MissingApiKey));
    }
}
