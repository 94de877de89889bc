//! Reports for standard library errors.
//!
//! [`from_error`] snapshots an error implementing [`core::error::Error`] and
//! its chain of [`source`](core::error::Error::source)s into [`Failure`]s
//! linked through their `cause` property, so that they can be rendered like
//! any other error graph.
//!
//! ```
//! use causeway::{Decorations, compat::from_error, format_report};
//!
//! let error = "x1".parse::<u32>().unwrap_err();
//! let report = format_report(&from_error(&error), &Decorations::PLAIN).unwrap();
//! assert!(report.starts_with("core::num::error::ParseIntError: invalid digit"));
//! ```

use core::error::Error;

use causeway_internals::ErrorRef;

use crate::failure::Failure;

/// Type name used for sources whose type cannot be recovered.
pub const UNKNOWN_SOURCE_TYPE: &str = "dyn core::error::Error";

/// Converts `error` and its sources into an error graph.
///
/// The outermost error is named after its Rust type. Sources are only
/// available as trait objects: common standard library errors are recognized
/// by downcasting, and other sources are named after the start of their
/// [`Debug`](core::fmt::Debug) output, which for derived struct
/// implementations is the type name. For enums this is the variant name
/// instead. Sources whose `Debug` output does not start with an identifier
/// are named [`UNKNOWN_SOURCE_TYPE`].
pub fn from_error<E: Error + 'static>(error: &E) -> ErrorRef {
    let sources = sources(error);
    let mut cause: Option<ErrorRef> = None;
    for source in sources.into_iter().rev() {
        cause = Some(snapshot(source_type_name(source), source, cause));
    }
    snapshot(core::any::type_name::<E>().to_owned(), error, cause)
}

fn snapshot(type_name: String, error: &dyn Error, cause: Option<ErrorRef>) -> ErrorRef {
    let failure = Failure::new(type_name).with_message(error.to_string());
    match cause {
        Some(cause) => failure.with_cause(cause),
        None => failure,
    }
    .into_ref()
}

/// The sources of `error`, outermost first. Stops early if a source repeats.
///
/// A wrapper and a source stored at its start share an address, so errors are
/// told apart by address and vtable together.
#[allow(ambiguous_wide_pointer_comparisons)]
fn sources<'a>(error: &'a (dyn Error + 'static)) -> Vec<&'a (dyn Error + 'static)> {
    let mut sources: Vec<&'a (dyn Error + 'static)> = Vec::new();
    let mut current = error.source();
    while let Some(source) = current {
        let repeated = core::iter::once(error)
            .chain(sources.iter().copied())
            .any(|seen| core::ptr::eq(seen, source));
        if repeated {
            break;
        }
        sources.push(source);
        current = source.source();
    }
    sources
}

macro_rules! known_type_name {
    ($error:expr, $($ty:ty),+ $(,)?) => {
        $(
            if $error.is::<$ty>() {
                return core::any::type_name::<$ty>().to_owned();
            }
        )+
    };
}

fn source_type_name(error: &(dyn Error + 'static)) -> String {
    known_type_name!(
        error,
        std::io::Error,
        core::fmt::Error,
        core::num::ParseIntError,
        core::num::ParseFloatError,
        core::num::TryFromIntError,
        core::str::Utf8Error,
        core::str::ParseBoolError,
        std::string::FromUtf8Error,
    );

    let debug = format!("{error:?}");
    leading_identifier(&debug).map_or_else(|| UNKNOWN_SOURCE_TYPE.to_owned(), str::to_owned)
}

fn leading_identifier(s: &str) -> Option<&str> {
    let first = s.chars().next()?;
    if !unicode_ident::is_xid_start(first) {
        return None;
    }
    let end = s
        .char_indices()
        .find(|&(_, c)| !unicode_ident::is_xid_continue(c))
        .map_or(s.len(), |(i, _)| i);
    Some(&s[..end])
}
