//! Operation orchestration - the composition root.
//!
//! Decides which remote calls an operation needs, runs them, and folds
//! their outcomes into the session state. The comprehensive check runs the
//! plagiarism workflow and the enhancement chain with overlapping I/O and
//! always lets both settle before finalizing; one side failing never
//! cancels the other.

use tracing::{info, warn};

use crate::error::ProcessError;
use crate::models::{OperationKind, ProcessOutput};
use crate::services::TextProcessor;
use crate::utils::logging::truncate_text;
use crate::workflow::session::SessionState;

/// Blocking session error for empty input.
pub const INPUT_REQUIRED_ERROR: &str = "الرجاء إدخال نص للمعالجة.";

/// A failure inside the enhancement chain, tagged with the stage it came
/// from so the aggregated message names the failing stage, not just the
/// chain.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StageError {
    stage: &'static str,
    error: ProcessError,
}

/// The sole externally invocable entry point of the processing core.
pub struct ReviewFlow<P: TextProcessor> {
    processor: P,
}

impl<P: TextProcessor> ReviewFlow<P> {
    pub fn new(processor: P) -> Self {
        Self { processor }
    }

    pub fn processor_ref(&self) -> &P {
        &self.processor
    }

    /// Run one operation and settle the session.
    ///
    /// Taking `&mut SessionState` means a second invocation cannot start
    /// while one is in flight, so a stale result can never overwrite a
    /// fresh one.
    pub async fn run(&self, session: &mut SessionState, text: &str, op: OperationKind) {
        if text.trim().is_empty() {
            session.error = Some(INPUT_REQUIRED_ERROR.to_string());
            session.clear_results();
            session.active_operation = None;
            return;
        }

        info!("running {:?} on: {}", op, truncate_text(text, 80));

        session.loading = true;
        session.error = None;
        session.active_operation = Some(op);
        session.clear_results();

        match op {
            OperationKind::ComprehensiveCheck => self.run_comprehensive(session, text).await,
            _ => self.run_single(session, text, op).await,
        }

        session.loading = false;
    }

    async fn run_single(&self, session: &mut SessionState, text: &str, op: OperationKind) {
        match self.processor.process(text, op).await {
            Ok(output) => {
                info!("{} settled, {} sources", op.label(), output.sources.len());
                session.single_result = Some(output);
            }
            Err(e) => {
                warn!("{} failed: {e}", op.label());
                session.error = Some(format!("{}: {}", op.label(), e));
            }
        }
    }

    async fn run_comprehensive(&self, session: &mut SessionState, text: &str) {
        let (plagiarism, enhancement) = futures::join!(
            self.processor.process(text, OperationKind::PlagiarismCheck),
            self.enhancement_chain(text),
        );

        let mut errors: Vec<String> = Vec::new();

        match plagiarism {
            Ok(output) => {
                info!("plagiarism workflow settled, {} sources", output.sources.len());
                session.plagiarism_result = Some(output);
            }
            Err(e) => {
                warn!("plagiarism workflow failed: {e}");
                errors.push(format!("{}: {}", OperationKind::PlagiarismCheck.label(), e));
            }
        }

        match enhancement {
            Ok(output) => {
                info!("enhancement chain settled");
                session.enhancement_result = Some(output.text);
            }
            Err(StageError { stage, error }) => {
                warn!("enhancement chain failed at {stage}: {error}");
                errors.push(format!("{stage}: {error}"));
            }
        }

        if !errors.is_empty() {
            session.error = Some(errors.join("\n").trim().to_string());
        }
    }

    /// Linguistic check first, then phrasing improvement fed with its
    /// output. Short-circuits on the first failing stage.
    async fn enhancement_chain(&self, text: &str) -> Result<ProcessOutput, StageError> {
        let linguistic = self
            .processor
            .process(text, OperationKind::LinguisticCheck)
            .await
            .map_err(|error| StageError {
                stage: OperationKind::LinguisticCheck.label(),
                error,
            })?;

        self.processor
            .process(&linguistic.text, OperationKind::ImprovePhrasing)
            .await
            .map_err(|error| StageError {
                stage: OperationKind::ImprovePhrasing.label(),
                error,
            })
    }
}
