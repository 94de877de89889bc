//! Expansion of raw stack entries into named, readable frames.
//!
//! A frame is *symbolic* when it was produced by a compiled Clojure function:
//! its file ends in `.clj` and it executes one of the generic entry points
//! (`invoke`, `doInvoke`). For those frames the class name encodes the
//! namespace and function, e.g. `my_app.core$handle_request$fn__1234`, and
//! is expanded into the parts `["my-app.core", "handle-request", "fn"]`.

use std::sync::OnceLock;

use causeway_internals::{Inspect, RawFrame};
use regex::Regex;

use crate::demangle::{DemangleError, demangle};

/// Files whose frames may be symbolic.
pub const SYMBOLIC_FILE_SUFFIX: &str = ".clj";

/// Methods through which compiled functions are entered.
pub const INVOCATION_METHODS: &[&str] = &["invoke", "doInvoke"];

/// Separates the namespace from the (possibly nested) function names.
pub const NAMESPACE_SEPARATOR: char = '$';

/// A stack frame ready to be printed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StackFrame {
    /// Source file name.
    pub file: String,
    /// Line number as text; empty when unknown.
    pub line: String,
    /// The raw low-level type name.
    pub class: String,
    /// The raw method name.
    pub method: String,
    /// The demangled parts joined by `/`; empty for non-symbolic frames.
    pub symbolic_name: String,
    /// The demangled namespace and function names; empty for non-symbolic
    /// frames.
    pub symbolic_parts: Vec<String>,
}

impl StackFrame {
    /// Returns `true` when the frame was expanded into symbolic parts.
    pub fn is_symbolic(&self) -> bool {
        !self.symbolic_parts.is_empty()
    }
}

fn unique_suffix() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?:__[0-9]+)+$")
            .expect("built-in regex pattern for unique name suffixes should be valid")
    })
}

/// Returns `true` when `frame` belongs to a compiled Clojure function.
pub fn is_symbolic(frame: &RawFrame) -> bool {
    frame.file.ends_with(SYMBOLIC_FILE_SUFFIX) && INVOCATION_METHODS.contains(&&*frame.method)
}

/// Splits and demangles the class name of a symbolic frame.
fn symbolic_parts(class: &str) -> Result<Vec<String>, DemangleError> {
    class
        .split(NAMESPACE_SEPARATOR)
        .map(|segment| demangle(&unique_suffix().replace(segment, "")))
        .collect()
}

/// Expands a single raw frame.
pub fn expand_frame(frame: &RawFrame) -> Result<StackFrame, DemangleError> {
    let symbolic_parts = if is_symbolic(frame) {
        symbolic_parts(&frame.class)?
    } else {
        Vec::new()
    };

    Ok(StackFrame {
        file: frame.file.to_string(),
        line: frame.line.map(|line| line.to_string()).unwrap_or_default(),
        class: frame.class.to_string(),
        method: frame.method.to_string(),
        symbolic_name: symbolic_parts.join("/"),
        symbolic_parts,
    })
}

/// Expands every frame of the stack captured by `error`.
///
/// An empty stack is not an error, but it usually means the stack was never
/// captured where the error was raised, so a warning is logged.
pub fn expand(error: &dyn Inspect) -> Result<Vec<StackFrame>, DemangleError> {
    let raw = error.stack_trace();
    if raw.is_empty() {
        tracing::warn!(
            error_type = error.type_name(),
            "stack trace is empty; it was probably not captured when the error was raised"
        );
    }
    raw.iter().map(expand_frame).collect()
}
