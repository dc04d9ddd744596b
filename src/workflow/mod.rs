//! Session state and operation orchestration.

pub mod review_flow;
pub mod session;

pub use review_flow::{ReviewFlow, INPUT_REQUIRED_ERROR};
pub use session::SessionState;
