//! Prompt Catalog.
//!
//! Maps each operation to the exact instruction string sent to the model.
//! Pure and total: every template embeds the input text verbatim, with no
//! truncation and no side effects.

use crate::models::OperationKind;
use crate::render::highlight::{HIGHLIGHT_END, HIGHLIGHT_START};

/// System instruction attached to fact-check calls so the model answers
/// with nothing but JSON.
pub const JSON_ONLY_SYSTEM_INSTRUCTION: &str = "You are an API assistant that responds exclusively with valid JSON strings. Do not include any natural language explanations, introductions, or conclusions outside of the JSON structure itself. Your response must start directly with the JSON content.";

/// Build the instruction string for one operation.
pub fn build_prompt(op: OperationKind, text: &str) -> String {
    match op {
        OperationKind::LinguisticCheck => format!(
            "قم بتدقيق النص العربي التالي لغويًا ونحويًا وإملائيًا وصحح جميع الأخطاء مع الحفاظ على المعنى الأصلي. \
             ضع كل جزء قمت بتعديله بين العلامتين {HIGHLIGHT_START} و {HIGHLIGHT_END} كما هما حرفيًا. \
             أعد النص المصحح كاملًا فقط دون أي مقدمات أو شروح.\n\nالنص:\n{text}"
        ),
        OperationKind::ImprovePhrasing => format!(
            "حسّن صياغة النص العربي التالي ليصبح أكثر وضوحًا وسلاسة وفصاحة مع الحفاظ على المعنى الأصلي. \
             ضع كل عبارة قمت بتحسينها بين العلامتين {HIGHLIGHT_START} و {HIGHLIGHT_END} كما هما حرفيًا. \
             أعد النص المحسّن كاملًا فقط دون أي مقدمات أو شروح.\n\nالنص:\n{text}"
        ),
        OperationKind::FactCheck => format!(
            "تحقق من صحة المعلومات والادعاءات الواردة في النص التالي مستعينًا بنتائج البحث. \
             أعد النتيجة حصريًا على شكل مصفوفة JSON، كل عنصر فيها كائن يحمل الحقول التالية: \
             \"original_claim\" (نص الادعاء كما ورد)، \
             و\"assessment_status\" (قيمة واحدة فقط من: \"صحيح\"، \"خاطئ\"، \"يحتاج لتوضيح\"، \"غير دقيق\"، \"تعذر التحقق\")، \
             و\"assessment_details\" (شرح موجز لأساس التقييم). \
             لا تكتب أي نص خارج المصفوفة.\n\nالنص:\n{text}"
        ),
        OperationKind::PlagiarismCheck => format!(
            "ابحث في الويب عن محتوى مشابه للنص التالي وحدد ما إذا كان يبدو منقولًا أو مقتبسًا من مصادر منشورة. \
             لخص أوجه التشابه التي وجدتها واذكر المواضع المتطابقة أو شبه المتطابقة إن وجدت، \
             وإن لم تجد تشابهًا يذكر فاذكر ذلك صراحة.\n\nالنص:\n{text}"
        ),
        OperationKind::Rephrase => format!(
            "أعد صياغة النص العربي التالي بالكامل بأسلوب مختلف مع الحفاظ التام على المعنى. \
             أعد النص الجديد فقط دون أي مقدمات أو شروح.\n\nالنص:\n{text}"
        ),
        OperationKind::ComprehensiveCheck => format!(
            "قم بمراجعة شاملة للنص العربي التالي: دقّقه لغويًا ونحويًا وإملائيًا، وحسّن صياغته، \
             وقيّم أصالته. أعد النص المراجع مع ملاحظاتك.\n\nالنص:\n{text}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_prompt_embeds_the_input_verbatim() {
        let text = "هذا نصٌ تجريبي،\nبسطرين وعلامات ترقيم!";
        for op in OperationKind::ALL {
            let prompt = build_prompt(op, text);
            assert!(prompt.contains(text), "{op:?} prompt must embed the input unmodified");
        }
    }

    #[test]
    fn prompts_are_deterministic() {
        for op in OperationKind::ALL {
            assert_eq!(build_prompt(op, "نص"), build_prompt(op, "نص"));
        }
    }

    #[test]
    fn fact_check_prompt_demands_the_json_contract() {
        let prompt = build_prompt(OperationKind::FactCheck, "نص");
        assert!(prompt.contains("JSON"));
        for field in ["original_claim", "assessment_status", "assessment_details"] {
            assert!(prompt.contains(field));
        }
        for status in ["صحيح", "خاطئ", "يحتاج لتوضيح", "غير دقيق", "تعذر التحقق"] {
            assert!(prompt.contains(status));
        }
    }

    #[test]
    fn editing_prompts_name_the_highlight_markers() {
        for op in [OperationKind::LinguisticCheck, OperationKind::ImprovePhrasing] {
            let prompt = build_prompt(op, "نص");
            assert!(prompt.contains(HIGHLIGHT_START));
            assert!(prompt.contains(HIGHLIGHT_END));
        }
    }
}
