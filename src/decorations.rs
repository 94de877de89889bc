//! Decoration strings wrapped around the parts of a report.
//!
//! Decorations never change the layout of a report: they are written around
//! values without counting towards column widths. [`Decorations::PLAIN`]
//! produces the same text as [`Decorations::ANSI`] minus the escape codes.
//!
//! # Process-wide default
//!
//! [`write_report`](crate::write_report) uses [`default_decorations`], which
//! is whatever was last passed to [`register_default_decorations`], or else
//! the configuration read from the environment by [`Decorations::from_env`].
//! Use [`write_report_with`](crate::write_report_with) to choose decorations
//! for a single report instead.
//!
//! # Environment Variables
//!
//! - `NO_COLOR` - When set to a non-empty value, disables decoration
//! - `CAUSEWAY_DECORATIONS` - `ansi` or `plain` (alias `none`); takes
//!   precedence over `NO_COLOR`

use std::{borrow::Cow, sync::OnceLock};

/// The decoration applied to each kind of report text.
///
/// Each value is written verbatim before the associated text; `reset` is
/// written after it. An empty string means no decoration.
///
/// Values may be built at runtime:
///
/// ```
/// use causeway::Decorations;
///
/// let theme = Decorations {
///     exception: format!("\x1b[38;5;{}m", 196).into(),
///     ..Decorations::ANSI
/// };
/// assert_eq!(theme.exception, "\x1b[38;5;196m");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decorations {
    /// Written before the type name of each error.
    pub exception: Cow<'static, str>,
    /// Written after every decorated value.
    pub reset: Cow<'static, str>,
    /// Written before the message of each error.
    pub message: Cow<'static, str>,
    /// Written before property names.
    pub property: Cow<'static, str>,
    /// Written before the function name of stack frames.
    pub function_name: Cow<'static, str>,
}

impl Decorations {
    /// Bold red type names, italic messages, bold property names and bold
    /// yellow function names.
    pub const ANSI: Self = Self {
        exception: Cow::Borrowed("\x1b[1;31m"),
        reset: Cow::Borrowed("\x1b[0m"),
        message: Cow::Borrowed("\x1b[3m"),
        property: Cow::Borrowed("\x1b[1m"),
        function_name: Cow::Borrowed("\x1b[1;33m"),
    };
    /// The default decorations, an alias for [`ANSI`](Self::ANSI).
    pub const DEFAULT: Self = Self::ANSI;
    /// No decoration at all.
    pub const PLAIN: Self = Self {
        exception: Cow::Borrowed(""),
        reset: Cow::Borrowed(""),
        message: Cow::Borrowed(""),
        property: Cow::Borrowed(""),
        function_name: Cow::Borrowed(""),
    };

    /// Reads the decorations to use from the environment.
    ///
    /// The environment is only read the first time this is called.
    pub fn from_env() -> Self {
        static FROM_ENV: OnceLock<Decorations> = OnceLock::new();

        FROM_ENV
            .get_or_init(|| {
                let choice = std::env::var("CAUSEWAY_DECORATIONS").ok();
                let no_color = std::env::var_os("NO_COLOR").is_some_and(|var| !var.is_empty());
                Self::from_settings(choice.as_deref(), no_color)
            })
            .clone()
    }

    fn from_settings(choice: Option<&str>, no_color: bool) -> Self {
        match choice {
            Some(v) if v.eq_ignore_ascii_case("ansi") => Self::ANSI,
            Some(v) if v.eq_ignore_ascii_case("plain") || v.eq_ignore_ascii_case("none") => {
                Self::PLAIN
            }
            Some(other) => {
                tracing::warn!(
                    value = other,
                    "ignoring unrecognized CAUSEWAY_DECORATIONS setting"
                );
                if no_color { Self::PLAIN } else { Self::DEFAULT }
            }
            None if no_color => Self::PLAIN,
            None => Self::DEFAULT,
        }
    }
}

impl Default for Decorations {
    fn default() -> Self {
        Self::DEFAULT
    }
}

static REGISTERED: spin::RwLock<Option<Decorations>> = spin::RwLock::new(None);

/// Replaces the process-wide default decorations.
///
/// # Examples
///
/// ```
/// use causeway::decorations::{Decorations, default_decorations, register_default_decorations};
///
/// register_default_decorations(Decorations::PLAIN);
/// assert_eq!(default_decorations(), Decorations::PLAIN);
/// ```
pub fn register_default_decorations(decorations: Decorations) {
    *REGISTERED.write() = Some(decorations);
}

/// Returns the process-wide default decorations.
pub fn default_decorations() -> Decorations {
    let registered = REGISTERED.read().clone();
    registered.unwrap_or_else(Decorations::from_env)
}
