//! Integration tests for the introspection types of causeway-internals.

use std::borrow::Cow;

use causeway_internals::{
    Arc, ErrorRef, Inspect, IntrospectionError, Property, PropertyValue, RawFrame, error_ref, identity,
    upcast,
};

struct Leaf {
    name: &'static str,
}

impl Inspect for Leaf {
    fn type_name(&self) -> &str {
        self.name
    }

    fn message(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed("leaf failed"))
    }

    fn stack_trace(&self) -> &[RawFrame] {
        &[]
    }

    fn properties(&self) -> Result<Vec<Property>, IntrospectionError> {
        Ok(vec![Property::text("depth", "0")])
    }
}

struct Branch {
    cause: ErrorRef,
    stack: Vec<RawFrame>,
}

impl Inspect for Branch {
    fn type_name(&self) -> &str {
        "test.Branch"
    }

    fn message(&self) -> Option<Cow<'_, str>> {
        None
    }

    fn stack_trace(&self) -> &[RawFrame] {
        &self.stack
    }

    fn properties(&self) -> Result<Vec<Property>, IntrospectionError> {
        Ok(vec![
            Property::error("cause", self.cause.clone()),
            Property::null("unset"),
        ])
    }
}

static_assertions::assert_impl_all!(ErrorRef: Send, Sync, Clone);
static_assertions::assert_impl_all!(PropertyValue: Send, Sync, Clone);
static_assertions::assert_impl_all!(IntrospectionError: core::error::Error, Send, Sync);

#[test]
fn test_identity_distinguishes_equal_errors() {
    let first = error_ref(Leaf { name: "test.Leaf" });
    let second = error_ref(Leaf { name: "test.Leaf" });
    let first_again = first.clone();

    assert_eq!(identity(&first), identity(&first_again));
    assert_ne!(identity(&first), identity(&second));
}

#[test]
fn test_upcast_keeps_identity() {
    let typed = Arc::new(Leaf { name: "test.Leaf" });
    let first = upcast(typed.clone());
    let second = upcast(typed);

    assert_eq!(identity(&first), identity(&second));
    assert_eq!(first.type_name(), "test.Leaf");
}

#[test]
fn test_nested_error_properties() {
    let leaf = error_ref(Leaf { name: "test.Leaf" });
    let branch = error_ref(Branch {
        cause: leaf.clone(),
        stack: vec![RawFrame::new("branch.clj", Some(3), "test.branch$grow", "invoke")],
    });

    let properties = branch.properties().unwrap();
    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0].name, "cause");
    let nested = properties[0].value.as_error().unwrap();
    assert_eq!(identity(nested), identity(&leaf));
    assert!(properties[1].value.is_null());
    assert_eq!(branch.stack_trace().len(), 1);
    assert_eq!(branch.message(), None);
}

#[test]
fn test_property_value_display() {
    let leaf = error_ref(Leaf { name: "test.Leaf" });

    assert_eq!(PropertyValue::from("bar").to_string(), "bar");
    assert_eq!(PropertyValue::Null.to_string(), "nil");
    assert_eq!(PropertyValue::debug(&vec![1, 2]).to_string(), "[1, 2]");
    assert_eq!(
        PropertyValue::Error(leaf).to_string(),
        "test.Leaf: leaf failed"
    );
    assert!(PropertyValue::from(None::<String>).is_null());
    assert_eq!(
        format!("{:?}", PropertyValue::from(Some("x"))),
        r#"Text("x")"#
    );
}

#[test]
fn test_raw_frame_display() {
    let frame = RawFrame::new("core.clj", Some(42), "my_app.core$run", "invoke");
    assert_eq!(frame.to_string(), "my_app.core$run.invoke (core.clj:42)");

    let unknown_line = RawFrame::new("Native Method", None, "java.lang.Thread", "run");
    assert_eq!(unknown_line.to_string(), "java.lang.Thread.run (Native Method)");
}

#[test]
fn test_introspection_error_display() {
    let error = IntrospectionError::new("test.Opaque", "accessor panicked");
    assert_eq!(
        error.to_string(),
        "unable to enumerate properties of test.Opaque: accessor panicked"
    );
}
