pub mod text_service;

pub use text_service::{GeminiTextService, ProcessResult, TextProcessor};
