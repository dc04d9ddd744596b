//! Terminal rendering of a settled session.
//!
//! Content rules only: what gets shown, in which order, and when the
//! "no sources" notice appears. Produces plain strings so the rules are
//! testable; `main` just prints the result.

use crate::models::{OperationKind, ProcessOutput, Source};
use crate::render::fact_check::parse_fact_check;
use crate::render::highlight::{highlight, Segment};
use crate::workflow::SessionState;

const ERROR_HEADER: &str = "حدث خطأ:";
const PLAGIARISM_TITLE: &str = "نتيجة فحص الانتحال وتحديد التشابه:";
const ENHANCEMENT_TITLE: &str = "نتيجة التدقيق اللغوي وتحسين الصياغة:";
const SOURCES_HEADER: &str = "المصادر المرجعية:";
pub const NO_SOURCES_NOTICE: &str = "لم يتم إرجاع مصادر مرجعية لهذه العملية من قبل النموذج.";
const PARSE_ERROR_HEADER: &str = "خطأ في عرض النتائج:";
const RAW_TEXT_HEADER: &str = "النص الخام المستلم:";

/// Render everything the session currently holds.
pub fn render_session(session: &SessionState) -> String {
    let mut out = String::new();

    if let Some(error) = &session.error {
        out.push_str(ERROR_HEADER);
        out.push('\n');
        out.push_str(error);
        out.push_str("\n\n");
    }

    match session.active_operation {
        Some(OperationKind::ComprehensiveCheck) => {
            if let Some(result) = &session.plagiarism_result {
                out.push_str(&render_result(
                    PLAGIARISM_TITLE,
                    result,
                    OperationKind::PlagiarismCheck,
                ));
            }
            if let Some(text) = &session.enhancement_result {
                out.push_str(ENHANCEMENT_TITLE);
                out.push('\n');
                out.push_str(&render_marked_text(text));
                out.push_str("\n\n");
            }
        }
        Some(op) => {
            if let Some(result) = &session.single_result {
                out.push_str(&render_result(&format!("نتيجة {}:", op.label()), result, op));
            }
        }
        None => {}
    }

    out
}

fn render_result(title: &str, output: &ProcessOutput, op: OperationKind) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    let mut has_content = false;
    if op == OperationKind::FactCheck {
        if !output.text.trim().is_empty() {
            out.push_str(&render_fact_check(&output.text));
            has_content = true;
        }
    } else if !output.text.is_empty() {
        out.push_str(&render_marked_text(&output.text));
        out.push('\n');
        has_content = true;
    }

    if !output.sources.is_empty() {
        out.push_str(&render_sources(&output.sources));
    } else if op.uses_web_search() && !has_content {
        out.push_str(NO_SOURCES_NOTICE);
        out.push('\n');
    }

    out.push('\n');
    out
}

/// Fact-check cards, or the parse-error block with the raw model text.
fn render_fact_check(text: &str) -> String {
    match parse_fact_check(text) {
        Ok(items) => {
            let mut out = String::new();
            for item in items {
                out.push_str(&format!(
                    "الادعاء الأصلي: {}\nالتقييم: {}\nالأساس المنطقي: {}\n---\n",
                    item.original_claim,
                    item.assessment_status.label(),
                    item.assessment_details,
                ));
            }
            out
        }
        Err(error) => format!(
            "{PARSE_ERROR_HEADER}\n{}\n{RAW_TEXT_HEADER}\n{}\n",
            error.message, error.raw,
        ),
    }
}

/// Highlighted spans are bracketed so they stand out in plain terminal text.
fn render_marked_text(text: &str) -> String {
    highlight(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(part) => part,
            Segment::Highlighted(part) => format!("⟦{part}⟧"),
        })
        .collect()
}

fn render_sources(sources: &[Source]) -> String {
    let mut out = String::new();
    out.push_str(SOURCES_HEADER);
    out.push('\n');
    for source in sources {
        match source {
            Source::Web { .. } => {
                out.push_str(&format!("- {} — {}\n", source.display_title(), source.uri()));
            }
            Source::News { publisher, .. } => {
                let publisher = publisher
                    .as_deref()
                    .map(|p| format!(" ({p})"))
                    .unwrap_or_default();
                out.push_str(&format!(
                    "- {}{} — {}\n",
                    source.display_title(),
                    publisher,
                    source.uri()
                ));
            }
        }
    }
    out
}
