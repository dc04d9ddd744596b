//! In-band highlight markers.

/// Literal sentinels the model embeds around emphasized spans. Not
/// configurable; the prompts spell them out verbatim.
pub const HIGHLIGHT_START: &str = "%%HIGHLIGHT_START%%";
pub const HIGHLIGHT_END: &str = "%%HIGHLIGHT_END%%";

/// One run of output text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Highlighted(String),
}

/// Split marked-up model output into plain and highlighted runs.
///
/// A lenient lexical scan, not a grammar: each marker toggles the highlight
/// state wherever it appears, an unmatched start marker highlights through
/// end-of-string, and empty runs are dropped. Malformed pairing is never an
/// error.
pub fn highlight(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut highlighted = false;
    let mut rest = text;

    loop {
        let next_start = rest.find(HIGHLIGHT_START);
        let next_end = rest.find(HIGHLIGHT_END);

        let (pos, marker_len, next_state) = match (next_start, next_end) {
            (Some(s), Some(e)) if s <= e => (s, HIGHLIGHT_START.len(), true),
            (Some(s), None) => (s, HIGHLIGHT_START.len(), true),
            (_, Some(e)) => (e, HIGHLIGHT_END.len(), false),
            (None, None) => break,
        };

        push_segment(&mut segments, &rest[..pos], highlighted);
        highlighted = next_state;
        rest = &rest[pos + marker_len..];
    }

    push_segment(&mut segments, rest, highlighted);
    segments
}

fn push_segment(segments: &mut Vec<Segment>, part: &str, highlighted: bool) {
    if part.is_empty() {
        return;
    }
    let part = part.to_string();
    segments.push(if highlighted {
        Segment::Highlighted(part)
    } else {
        Segment::Plain(part)
    });
}
