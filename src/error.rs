//! Errors raised while writing a report.

use core::fmt;
use std::io;

use causeway_internals::IntrospectionError;

use crate::demangle::DemangleError;

/// Writing a report failed.
///
/// Report generation is a single pass with no retries: the first failure is
/// returned as-is and the partially written output should be discarded.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A stack frame name contained an escape sequence that could not be
    /// demangled.
    #[error(transparent)]
    UnrecognizedEscape(#[from] DemangleError),
    /// The properties of an error in the chain could not be enumerated.
    #[error(transparent)]
    Introspection(#[from] IntrospectionError),
    /// The sink refused the report text.
    #[error("failed to write report text")]
    Format(#[from] fmt::Error),
    /// The underlying writer of an [`IoSink`](crate::sink::IoSink) failed.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}
