//! Session state - what the rendering surface reads.

use crate::models::{OperationKind, ProcessOutput};

/// Transient, process-local state for one user session.
///
/// Owned by the caller and mutated only by the orchestrator; reset on every
/// new invocation or explicit clear. The two result shapes are mutually
/// exclusive: a single operation fills `single_result`, a comprehensive
/// check fills the plagiarism/enhancement pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub loading: bool,
    pub active_operation: Option<OperationKind>,
    /// Last user-visible error, possibly multi-line for a comprehensive check.
    pub error: Option<String>,
    /// Result of a single (non-comprehensive) operation.
    pub single_result: Option<ProcessOutput>,
    /// Plagiarism side of a comprehensive check.
    pub plagiarism_result: Option<ProcessOutput>,
    /// Enhancement-chain side of a comprehensive check (text only).
    pub enhancement_result: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every result slot. Error and active operation are untouched.
    pub fn clear_results(&mut self) {
        self.single_result = None;
        self.plagiarism_result = None;
        self.enhancement_result = None;
    }

    /// Full reset, the "clear and start over" action. Loading is owned by
    /// in-flight operations and is not touched here.
    pub fn clear(&mut self) {
        self.error = None;
        self.active_operation = None;
        self.clear_results();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_resets_everything_but_loading() {
        let mut session = SessionState {
            loading: true,
            active_operation: Some(OperationKind::Rephrase),
            error: Some("خطأ".to_string()),
            single_result: Some(ProcessOutput::text_only("نتيجة")),
            plagiarism_result: Some(ProcessOutput::text_only("نتيجة")),
            enhancement_result: Some("نتيجة".to_string()),
        };

        session.clear();

        assert!(session.loading);
        assert_eq!(session.active_operation, None);
        assert_eq!(session.error, None);
        assert_eq!(session.single_result, None);
        assert_eq!(session.plagiarism_result, None);
        assert_eq!(session.enhancement_result, None);
    }

    #[test]
    fn clear_results_keeps_error_and_operation() {
        let mut session = SessionState {
            active_operation: Some(OperationKind::FactCheck),
            error: Some("خطأ".to_string()),
            single_result: Some(ProcessOutput::text_only("نتيجة")),
            ..SessionState::new()
        };

        session.clear_results();

        assert_eq!(session.active_operation, Some(OperationKind::FactCheck));
        assert!(session.error.is_some());
        assert_eq!(session.single_result, None);
    }
}
