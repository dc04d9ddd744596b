//! Result formatting: highlight splitting, fact-check parsing, display.

pub mod display;
pub mod fact_check;
pub mod highlight;

pub use display::render_session;
pub use fact_check::{parse_fact_check, AssessmentStatus, FactCheckItem, FactCheckParseError};
pub use highlight::{highlight, Segment, HIGHLIGHT_END, HIGHLIGHT_START};
