//! Typed failures for remote text processing.
//!
//! Callers branch on the variant; the `Display` text is the Arabic message
//! shown to the user. There is no in-band error prefix anywhere in the
//! system: a failed call is an `Err`, nothing else.

use thiserror::Error;

use crate::models::OperationKind;

/// Failure classes for a single remote processing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    /// No credential configured. No network call was attempted.
    #[error("خطأ: مفتاح API غير مهيأ. يرجى التأكد من تعيين متغير البيئة GEMINI_API_KEY.")]
    MissingApiKey,

    /// The API rejected the configured credential.
    #[error("خطأ في مفتاح API. يرجى التحقق من صحة المفتاح.")]
    InvalidApiKey,

    /// The API usage quota is exhausted.
    #[error("لقد تجاوزت حصتك المسموح بها من استخدام API. يرجى المحاولة لاحقًا أو التحقق من خطة اشتراكك.")]
    QuotaExceeded,

    /// A fact-check call could not produce valid JSON.
    #[error("خطأ: لم يتمكن النموذج من إرجاع رد بتنسيق JSON صالح. قد يكون بسبب طبيعة النص المدخل أو مشكلة مؤقتة.")]
    InvalidJsonResponse,

    /// The API refused the search tool together with a JSON response type.
    #[error("خطأ في إعدادات API: لا يمكن طلب JSON مع استخدام أدوات البحث.")]
    ToolJsonConflict,

    /// Anything the classifier does not recognize. The raw detail is kept
    /// for logging only and never reaches the user.
    #[error("حدث خطأ أثناء معالجة طلبك. يرجى المحاولة مرة أخرى.")]
    Api { detail: String },
}

/// Map a raw API error message onto a failure class by substring.
///
/// The JSON rule only applies to fact-check calls; any other operation with
/// "json" in its error message falls through to the generic class.
pub fn classify_api_error(message: &str, op: OperationKind) -> ProcessError {
    let lowercase = message.to_lowercase();

    if message.contains("API_KEY_INVALID") || message.contains("API key not valid") {
        ProcessError::InvalidApiKey
    } else if lowercase.contains("quota") || message.contains("RESOURCE_EXHAUSTED") {
        ProcessError::QuotaExceeded
    } else if op.wants_json_only()
        && (lowercase.contains("json") || lowercase.contains("unexpected token"))
    {
        ProcessError::InvalidJsonResponse
    } else if message.contains("Tool use with a response mime type") {
        ProcessError::ToolJsonConflict
    } else {
        ProcessError::Api {
            detail: message.to_string(),
        }
    }
}
