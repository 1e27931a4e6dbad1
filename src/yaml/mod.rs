//! Record file parsing support

pub mod diagnostics;

pub use diagnostics::RecordSyntaxError;
