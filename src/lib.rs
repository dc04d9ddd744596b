//! # Smart Desk
//!
//! An Arabic writing-assistance tool: text goes in, one of six operations
//! runs against a hosted Gemini model, and the shaped result (text,
//! fact-check assessments, citation sources) comes back for display.
//!
//! ## Layering
//!
//! - `clients` — the one outbound `generateContent` REST call
//! - `services` — the remote text processor: request assembly, citation
//!   normalization, failure classification
//! - `workflow` — session state plus the operation orchestrator; the
//!   comprehensive check runs the plagiarism workflow and the
//!   linguistic-then-phrasing enhancement chain with overlapping I/O
//! - `render` — highlight splitting, fact-check parsing, terminal output
//!
//! Layers only depend downward, and only `workflow` mutates session state.

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod prompts;
pub mod render;
pub mod services;
pub mod utils;
pub mod workflow;

pub use config::Config;
pub use error::ProcessError;
pub use models::{OperationKind, ProcessOutput, Source, SourceDate};
pub use services::{GeminiTextService, TextProcessor};
pub use workflow::{ReviewFlow, SessionState};
