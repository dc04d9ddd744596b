//! Fact-check payload parsing.
//!
//! The model is asked for a bare JSON array of claim assessments, possibly
//! wrapped in a fenced code block. Parsing is all-or-nothing: malformed
//! input yields a parse error with the raw text retained for display, never
//! a partial item list.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// The closed set of assessment labels the model must choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AssessmentStatus {
    #[serde(rename = "صحيح")]
    Correct,
    #[serde(rename = "خاطئ")]
    Incorrect,
    #[serde(rename = "يحتاج لتوضيح")]
    NeedsClarification,
    #[serde(rename = "غير دقيق")]
    Inaccurate,
    #[serde(rename = "تعذر التحقق")]
    Unverifiable,
}

impl AssessmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AssessmentStatus::Correct => "صحيح",
            AssessmentStatus::Incorrect => "خاطئ",
            AssessmentStatus::NeedsClarification => "يحتاج لتوضيح",
            AssessmentStatus::Inaccurate => "غير دقيق",
            AssessmentStatus::Unverifiable => "تعذر التحقق",
        }
    }
}

/// One structured claim assessment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FactCheckItem {
    pub original_claim: String,
    pub assessment_status: AssessmentStatus,
    pub assessment_details: String,
}

/// The call itself succeeded but its payload could not be parsed. Distinct
/// from an API failure; the raw text is kept for diagnostic display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FactCheckParseError {
    pub message: &'static str,
    pub raw: String,
}

pub const PARSE_FAILED_MESSAGE: &str =
    "فشل في تحليل بيانات التحقق من المعلومات المستلمة من النموذج. قد يكون النص الأصلي بتنسيق غير متوقع.";
pub const NOT_AN_ARRAY_MESSAGE: &str = "البيانات المستلمة ليست مصفوفة صالحة.";

// Optional surrounding fence: ```lang? ... ```
static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$").expect("fence regex is valid")
});

/// Parse a fact-check response into items.
pub fn parse_fact_check(text: &str) -> Result<Vec<FactCheckItem>, FactCheckParseError> {
    let trimmed = text.trim();
    let payload = match FENCE.captures(trimmed).and_then(|captures| captures.get(2)) {
        Some(inner) => inner.as_str().trim(),
        None => trimmed,
    };

    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(|_| FactCheckParseError {
            message: PARSE_FAILED_MESSAGE,
            raw: text.to_string(),
        })?;

    if !value.is_array() {
        return Err(FactCheckParseError {
            message: NOT_AN_ARRAY_MESSAGE,
            raw: text.to_string(),
        });
    }

    serde_json::from_value(value).map_err(|_| FactCheckParseError {
        message: PARSE_FAILED_MESSAGE,
        raw: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_fenced_json_array() {
        let text = "```json\n[{\"original_claim\":\"X\",\"assessment_status\":\"صحيح\",\"assessment_details\":\"Y\"}]\n```";
        let items = parse_fact_check(text).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].original_claim, "X");
        assert_eq!(items[0].assessment_status, AssessmentStatus::Correct);
        assert_eq!(items[0].assessment_details, "Y");
    }

    #[test]
    fn parses_without_a_fence_or_with_a_bare_fence() {
        let body = r#"[{"original_claim":"أ","assessment_status":"تعذر التحقق","assessment_details":"ب"}]"#;
        assert_eq!(parse_fact_check(body).unwrap().len(), 1);

        let fenced = format!("```\n{body}\n```");
        let items = parse_fact_check(&fenced).unwrap();
        assert_eq!(items[0].assessment_status, AssessmentStatus::Unverifiable);
    }

    #[test]
    fn non_json_input_keeps_the_raw_text() {
        let error = parse_fact_check("not json").unwrap_err();
        assert_eq!(error.message, PARSE_FAILED_MESSAGE);
        assert_eq!(error.raw, "not json");
    }

    #[test]
    fn a_json_object_is_rejected_as_not_an_array() {
        let error = parse_fact_check(r#"{"original_claim":"X"}"#).unwrap_err();
        assert_eq!(error.message, NOT_AN_ARRAY_MESSAGE);
    }

    #[test]
    fn unknown_status_labels_fail_the_whole_parse() {
        let text = r#"[
            {"original_claim":"أ","assessment_status":"صحيح","assessment_details":"ب"},
            {"original_claim":"ج","assessment_status":"ربما","assessment_details":"د"}
        ]"#;
        let error = parse_fact_check(text).unwrap_err();
        assert_eq!(error.message, PARSE_FAILED_MESSAGE);
    }

    #[test]
    fn empty_array_is_zero_items_not_an_error() {
        assert!(parse_fact_check("[]").unwrap().is_empty());
    }
}
