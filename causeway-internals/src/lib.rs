#![forbid(
    missing_docs,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
//! Internal implementation crate for [`causeway`].
//!
//! # Overview
//!
//! This crate defines the introspection seam that the [`causeway`] report
//! writer is built on: the small set of queries it needs to ask of an error
//! object in order to lay it out as a report.
//!
//! **This crate is an implementation detail.** No semantic versioning guarantees
//! are provided. Users should depend on the [`causeway`] crate, not this one.
//!
//! # Architecture
//!
//! - **[`inspect`]**: The [`Inspect`] trait and the shared [`ErrorRef`] handle
//!   through which error graphs are linked together.
//! - **[`property`]**: Named [`Property`] values exposed by an error, including
//!   references to nested errors.
//! - **[`frame`]**: The [`RawFrame`] stack entry as captured when the error was
//!   created, before any demangling.
//!
//! [`causeway`]: https://docs.rs/causeway/latest/causeway/

pub mod frame;
pub mod inspect;
pub mod property;

pub use triomphe::Arc;

pub use self::{
    frame::RawFrame,
    inspect::{ErrorRef, Inspect, IntrospectionError, error_ref, identity, upcast},
    property::{Property, PropertyValue},
};
