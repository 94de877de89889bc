//! Walking an error graph into an ordered chain of causes.
//!
//! Starting from the outermost error, every error contributes one
//! [`CauseFrame`]. The next error in the chain is the first property holding a
//! nested error that has not already been visited, so the walk always ends,
//! even when errors refer to each other.

use std::borrow::Cow;

use causeway_internals::{ErrorRef, IntrospectionError, PropertyValue, identity};
use hashbrown::HashSet;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Property names whose content is already shown elsewhere in a report.
pub const IGNORED_PROPERTIES: &[&str] = &[
    "suppressed",
    "message",
    "localizedMessage",
    "class",
    "stackTrace",
];

/// One error of a cause chain.
#[derive(Clone, Debug)]
pub struct CauseFrame {
    /// The error this frame describes.
    pub error: ErrorRef,
    /// The properties worth showing: neither null, nor nested errors, nor
    /// listed in [`IGNORED_PROPERTIES`]. Kept in introspection order.
    pub properties: IndexMap<Cow<'static, str>, PropertyValue>,
    /// Whether this is the innermost error of the chain.
    pub is_root: bool,
}

/// Builds the cause chain of `error`, outermost error first.
///
/// The returned chain is never empty and its last frame, and only that one,
/// has [`is_root`](CauseFrame::is_root) set.
///
/// # Errors
///
/// Fails when the properties of any error in the chain cannot be enumerated.
pub fn analyze(error: &ErrorRef) -> Result<Vec<CauseFrame>, IntrospectionError> {
    let mut frames = Vec::new();
    let mut visited: HashSet<usize, FxBuildHasher> = HashSet::default();
    let mut current = error.clone();

    loop {
        visited.insert(identity(&current));

        let mut properties = IndexMap::new();
        let mut nested: Option<ErrorRef> = None;
        for property in current.properties()? {
            if IGNORED_PROPERTIES.contains(&&*property.name) {
                continue;
            }
            match property.value {
                PropertyValue::Null => {}
                PropertyValue::Error(candidate) => {
                    if nested.is_some() {
                        continue;
                    }
                    if visited.contains(&identity(&candidate)) {
                        tracing::debug!(
                            error_type = current.type_name(),
                            property = &*property.name,
                            "not following nested error that was already visited"
                        );
                        continue;
                    }
                    nested = Some(candidate);
                }
                value => {
                    properties.insert(property.name, value);
                }
            }
        }

        tracing::trace!(
            error_type = current.type_name(),
            properties = properties.len(),
            "analyzed error"
        );

        let is_root = nested.is_none();
        frames.push(CauseFrame {
            error: current,
            properties,
            is_root,
        });

        match nested {
            Some(next) => current = next,
            None => return Ok(frames),
        }
    }
}
