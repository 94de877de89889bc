//! Raw stack entries.

use std::{borrow::Cow, fmt};

/// A single entry of a captured call stack, exactly as it was recorded.
///
/// The `class` and `method` fields hold the low-level (possibly mangled) names.
/// Turning them into something readable is the job of the report writer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawFrame {
    /// The name of the source file, e.g. `core.clj` or `main.rs`.
    pub file: Cow<'static, str>,
    /// The line number within [`file`](Self::file), if known.
    pub line: Option<u32>,
    /// The low-level name of the type or module the frame executes in.
    pub class: Cow<'static, str>,
    /// The name of the method or function being executed.
    pub method: Cow<'static, str>,
}

impl RawFrame {
    /// Creates a new frame.
    ///
    /// # Examples
    ///
    /// ```
    /// use causeway_internals::RawFrame;
    ///
    /// let frame = RawFrame::new("core.clj", Some(12), "my_app.core$run", "invoke");
    /// assert_eq!(frame.line, Some(12));
    /// ```
    pub fn new(
        file: impl Into<Cow<'static, str>>,
        line: Option<u32>,
        class: impl Into<Cow<'static, str>>,
        method: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            class: class.into(),
            method: method.into(),
        }
    }
}

impl fmt::Display for RawFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} ({}", self.class, self.method, self.file)?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        f.write_str(")")
    }
}
