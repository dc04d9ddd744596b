//! Normalized results of a remote processing call.

/// Publication date attached to a news citation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// A citation returned by the model to support its answer.
///
/// Once normalized, `uri` is guaranteed non-empty and starts with
/// `http://` or `https://`; chunks failing that are dropped before a
/// `Source` is ever built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Web {
        uri: String,
        title: Option<String>,
    },
    News {
        uri: String,
        title: Option<String>,
        publisher: Option<String>,
        snippet: Option<String>,
        publication_date: Option<SourceDate>,
    },
}

impl Source {
    pub fn uri(&self) -> &str {
        match self {
            Source::Web { uri, .. } | Source::News { uri, .. } => uri,
        }
    }

    /// Title when the model supplied one, the URI otherwise.
    pub fn display_title(&self) -> &str {
        let title = match self {
            Source::Web { title, .. } | Source::News { title, .. } => title,
        };
        title.as_deref().unwrap_or_else(|| self.uri())
    }
}

/// The outcome of one successful remote call: the generated text plus any
/// citation sources (empty unless grounding was requested and returned
/// usable entries). Immutable once produced; held in the session state until
/// replaced or cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub text: String,
    pub sources: Vec<Source>,
}

impl ProcessOutput {
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sources: Vec::new(),
        }
    }
}
