//! The introspection capability.
//!
//! A report is built by asking an error object four questions: what kind of
//! error it is, what its message is, where it was raised, and which named
//! properties it carries. Anything that can answer those questions implements
//! [`Inspect`] and can be rendered.

use std::{borrow::Cow, fmt};

use triomphe::Arc;
use unsize::CoerceUnsize;

use crate::{frame::RawFrame, property::Property};

/// A shared handle to an error object.
///
/// Error graphs are linked through [`PropertyValue::Error`] values holding
/// these handles. Two handles refer to the same error exactly when their
/// [`identity`] is equal.
///
/// [`PropertyValue::Error`]: crate::PropertyValue::Error
pub type ErrorRef = Arc<dyn Inspect>;

/// Queries the report writer needs to answer about an error object.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
///
/// use causeway_internals::{Inspect, IntrospectionError, Property, RawFrame};
///
/// struct Timeout {
///     millis: u64,
/// }
///
/// impl Inspect for Timeout {
///     fn type_name(&self) -> &str {
///         "net.Timeout"
///     }
///
///     fn message(&self) -> Option<Cow<'_, str>> {
///         Some(Cow::Owned(format!("timed out after {}ms", self.millis)))
///     }
///
///     fn stack_trace(&self) -> &[RawFrame] {
///         &[]
///     }
///
///     fn properties(&self) -> Result<Vec<Property>, IntrospectionError> {
///         Ok(vec![Property::text("millis", self.millis.to_string())])
///     }
/// }
/// ```
pub trait Inspect: 'static + Send + Sync {
    /// The low-level type name of the error, used as its display name.
    fn type_name(&self) -> &str;

    /// The error message, if the error has one.
    fn message(&self) -> Option<Cow<'_, str>>;

    /// The call stack captured when the error was raised, innermost first.
    fn stack_trace(&self) -> &[RawFrame];

    /// Every named property of the error, in a stable order.
    ///
    /// Properties holding nested errors are reported as
    /// [`PropertyValue::Error`](crate::PropertyValue::Error).
    fn properties(&self) -> Result<Vec<Property>, IntrospectionError>;
}

impl fmt::Debug for dyn Inspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspect")
            .field("type_name", &self.type_name())
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

/// Wraps a value into a shared [`ErrorRef`].
pub fn error_ref<T: Inspect>(value: T) -> ErrorRef {
    upcast(Arc::new(value))
}

/// Turns a typed shared error into an [`ErrorRef`] to the same error.
///
/// Keeping the typed handle around allows an error to be modified after it
/// has been linked into a graph, while the [`identity`] of both handles stays
/// the same.
pub fn upcast<T: Inspect>(value: Arc<T>) -> ErrorRef {
    value.unsize(unsize::Coercion!(to dyn Inspect))
}

/// Returns the address identifying the error behind `error`.
///
/// Errors are compared by identity rather than by value: two distinct errors
/// with equal contents are still two errors.
pub fn identity(error: &ErrorRef) -> usize {
    let ptr: *const dyn Inspect = &**error;
    ptr.cast::<()>() as usize
}

/// The properties of an error could not be enumerated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntrospectionError {
    /// Type name of the error that could not be inspected.
    pub type_name: String,
    /// Why introspection failed.
    pub reason: Cow<'static, str>,
}

impl IntrospectionError {
    /// Creates a new introspection error for the given type.
    pub fn new(type_name: impl Into<String>, reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for IntrospectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unable to enumerate properties of {}: {}",
            self.type_name, self.reason
        )
    }
}

impl core::error::Error for IntrospectionError {}
