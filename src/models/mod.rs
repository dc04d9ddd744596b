pub mod operation;
pub mod result;

pub use operation::OperationKind;
pub use result::{ProcessOutput, Source, SourceDate};
