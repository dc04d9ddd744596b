//! Outbound API clients.

pub mod gemini;

pub use gemini::{GeminiClient, GenerateContentResponse, GroundingChunk};
