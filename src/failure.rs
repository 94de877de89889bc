//! An in-memory error object that can be rendered as a report.
//!
//! [`Failure`] stores everything the report writer asks for: a type name, an
//! optional message, a captured stack and a set of named properties. It is the
//! usual way to describe errors coming from a foreign runtime, from a log, or
//! from tests.
//!
//! ```
//! use causeway::failure::Failure;
//!
//! let root = Failure::new("java.sql.SQLException")
//!     .with_message("Database failure")
//!     .with_property("sqlState", "ABC123")
//!     .into_ref();
//! let outer = Failure::new("clojure.lang.ExceptionInfo")
//!     .with_message("Failure updating row")
//!     .with_cause(root)
//!     .into_ref();
//! # let _ = outer;
//! ```

use std::borrow::Cow;

use causeway_internals::{
    Arc, ErrorRef, Inspect, IntrospectionError, Property, PropertyValue, RawFrame, error_ref,
    upcast,
};
use indexmap::IndexMap;

/// The property name [`Failure::with_cause`] stores the nested error under.
pub const CAUSE: &str = "cause";

type Properties = IndexMap<Cow<'static, str>, PropertyValue>;

/// A captured error: type name, message, stack and named properties.
///
/// Properties can still be changed through [`set_property`](Self::set_property)
/// after the failure has been shared with [`into_shared`](Self::into_shared),
/// which is what allows error graphs containing cycles to be built.
#[derive(Debug)]
pub struct Failure {
    type_name: Cow<'static, str>,
    message: Option<String>,
    stack: Vec<RawFrame>,
    properties: spin::RwLock<Properties>,
}

impl Failure {
    /// Creates a failure of the given type, without message, stack or
    /// properties.
    pub fn new(type_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            type_name: type_name.into(),
            message: None,
            stack: Vec::new(),
            properties: spin::RwLock::new(Properties::default()),
        }
    }

    /// Sets the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a property. An existing property with the same name keeps its
    /// position but takes the new value.
    #[must_use]
    pub fn with_property(
        self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.set_property(name, value);
        self
    }

    /// Adds the nested error that caused this one.
    #[must_use]
    pub fn with_cause(self, cause: ErrorRef) -> Self {
        self.with_property(CAUSE, cause)
    }

    /// Sets the captured stack, innermost frame first.
    #[must_use]
    pub fn with_stack(mut self, stack: impl IntoIterator<Item = RawFrame>) -> Self {
        self.stack = stack.into_iter().collect();
        self
    }

    /// Captures the current native call stack as the stack of this failure.
    #[cfg(feature = "backtrace")]
    #[must_use]
    pub fn with_captured_stack(self) -> Self {
        self.with_stack(crate::capture::capture_stack())
    }

    /// Adds or replaces a property of a failure that may already be shared.
    pub fn set_property(&self, name: impl Into<Cow<'static, str>>, value: impl Into<PropertyValue>) {
        self.properties.write().insert(name.into(), value.into());
    }

    /// Removes a property, returning its previous value.
    pub fn remove_property(&self, name: &str) -> Option<PropertyValue> {
        self.properties.write().shift_remove(name)
    }

    /// Shares this failure as an [`ErrorRef`].
    pub fn into_ref(self) -> ErrorRef {
        error_ref(self)
    }

    /// Shares this failure while keeping typed access to it, so that its
    /// properties can still be set once it is part of a graph.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// An [`ErrorRef`] to a failure shared with [`into_shared`](Self::into_shared).
    pub fn share(this: &Arc<Self>) -> ErrorRef {
        upcast(this.clone())
    }
}

impl Inspect for Failure {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn message(&self) -> Option<Cow<'_, str>> {
        self.message.as_deref().map(Cow::Borrowed)
    }

    fn stack_trace(&self) -> &[RawFrame] {
        &self.stack
    }

    fn properties(&self) -> Result<Vec<Property>, IntrospectionError> {
        Ok(self
            .properties
            .read()
            .iter()
            .map(|(name, value)| Property::new(name.clone(), value.clone()))
            .collect())
    }
}
