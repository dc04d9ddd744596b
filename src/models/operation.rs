//! The six supported text operations.

/// One of the text-processing actions the desk supports.
///
/// The kind decides three things, each behind an exhaustive match: which
/// prompt template is used, whether the remote call attaches the web-search
/// grounding tool, and whether a JSON-only response is demanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    LinguisticCheck,
    ImprovePhrasing,
    FactCheck,
    PlagiarismCheck,
    Rephrase,
    /// Combined operation: plagiarism check plus the linguistic-then-phrasing
    /// enhancement chain, run together.
    ComprehensiveCheck,
}

impl OperationKind {
    pub const ALL: [OperationKind; 6] = [
        OperationKind::LinguisticCheck,
        OperationKind::ImprovePhrasing,
        OperationKind::FactCheck,
        OperationKind::PlagiarismCheck,
        OperationKind::Rephrase,
        OperationKind::ComprehensiveCheck,
    ];

    /// Arabic label used in result titles and error prefixes.
    pub fn label(&self) -> &'static str {
        match self {
            OperationKind::LinguisticCheck => "التدقيق اللغوي",
            OperationKind::ImprovePhrasing => "تحسين الصياغة",
            OperationKind::FactCheck => "التحقق من المعلومات",
            OperationKind::PlagiarismCheck => "فحص الانتحال",
            OperationKind::Rephrase => "إعادة الصياغة",
            OperationKind::ComprehensiveCheck => "التدقيق الشامل",
        }
    }

    /// Whether the remote call should attach the web-search grounding tool.
    pub fn uses_web_search(&self) -> bool {
        matches!(
            self,
            OperationKind::PlagiarismCheck | OperationKind::FactCheck
        )
    }

    /// Whether the remote call demands a JSON-only response.
    pub fn wants_json_only(&self) -> bool {
        matches!(self, OperationKind::FactCheck)
    }

    /// Name accepted on the command line.
    pub fn cli_name(&self) -> &'static str {
        match self {
            OperationKind::LinguisticCheck => "linguistic",
            OperationKind::ImprovePhrasing => "phrasing",
            OperationKind::FactCheck => "factcheck",
            OperationKind::PlagiarismCheck => "plagiarism",
            OperationKind::Rephrase => "rephrase",
            OperationKind::ComprehensiveCheck => "comprehensive",
        }
    }

    pub fn from_cli_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|op| op.cli_name() == name)
    }

    /// All CLI names, for usage messages.
    pub fn cli_names() -> String {
        Self::ALL
            .iter()
            .map(|op| op.cli_name())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_search_only_for_grounded_operations() {
        assert!(OperationKind::PlagiarismCheck.uses_web_search());
        assert!(OperationKind::FactCheck.uses_web_search());
        assert!(!OperationKind::LinguisticCheck.uses_web_search());
        assert!(!OperationKind::ImprovePhrasing.uses_web_search());
        assert!(!OperationKind::Rephrase.uses_web_search());
        assert!(!OperationKind::ComprehensiveCheck.uses_web_search());
    }

    #[test]
    fn json_only_for_fact_check() {
        for op in OperationKind::ALL {
            assert_eq!(op.wants_json_only(), op == OperationKind::FactCheck);
        }
    }

    #[test]
    fn cli_names_round_trip() {
        for op in OperationKind::ALL {
            assert_eq!(OperationKind::from_cli_name(op.cli_name()), Some(op));
        }
        assert_eq!(OperationKind::from_cli_name("FACTCHECK"), Some(OperationKind::FactCheck));
        assert_eq!(OperationKind::from_cli_name("unknown"), None);
    }
}
