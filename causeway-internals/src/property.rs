//! Named properties exposed by an error object.

use std::{borrow::Cow, fmt};

use crate::inspect::ErrorRef;

/// A single named property of an error.
#[derive(Clone, Debug)]
pub struct Property {
    /// The property name.
    pub name: Cow<'static, str>,
    /// The property value.
    pub value: PropertyValue,
}

impl Property {
    /// Creates a property from a name and a value.
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<PropertyValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a property holding text.
    pub fn text(name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self::new(name, PropertyValue::Text(value.into()))
    }

    /// Creates a property holding a nested error.
    pub fn error(name: impl Into<Cow<'static, str>>, value: ErrorRef) -> Self {
        Self::new(name, PropertyValue::Error(value))
    }

    /// Creates a property without a value.
    pub fn null(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, PropertyValue::Null)
    }
}

/// The value of a [`Property`].
#[derive(Clone)]
pub enum PropertyValue {
    /// The property is absent or null.
    Null,
    /// Any plain value, already rendered to its display form.
    Text(String),
    /// A reference to another error object.
    Error(ErrorRef),
}

impl PropertyValue {
    /// Renders `value` with its [`Debug`](fmt::Debug) implementation.
    ///
    /// Useful for collections and other values without a [`Display`]
    /// implementation.
    ///
    /// [`Display`]: fmt::Display
    pub fn debug(value: &impl fmt::Debug) -> Self {
        Self::Text(format!("{value:?}"))
    }

    /// Returns `true` for [`PropertyValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the nested error, if this value is one.
    pub fn as_error(&self) -> Option<&ErrorRef> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Debug for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Error(error) => f.debug_tuple("Error").field(&error.type_name()).finish(),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("nil"),
            Self::Text(text) => f.write_str(text),
            Self::Error(error) => match error.message() {
                Some(message) => write!(f, "{}: {message}", error.type_name()),
                None => f.write_str(error.type_name()),
            },
        }
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<ErrorRef> for PropertyValue {
    fn from(value: ErrorRef) -> Self {
        Self::Error(value)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
