#![deny(
    missing_docs,
    clippy::as_ptr_cast_mut,
    clippy::ptr_as_ptr,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Readable, column-aligned reports for chains of errors from a JVM-style
//! runtime.
//!
//! ## Overview
//!
//! Errors raised inside compiled Clojure code carry low-level names: classes
//! like `my_app.core$handle_request$fn__1234` and long stacks full of runtime
//! plumbing. This crate turns such an error, together with everything nested
//! inside it, into a report that shows what went wrong at every level:
//!
//! ```text
//! clojure.lang.ExceptionInfo: Failure updating row
//!                               row-id: 42
//!      java.sql.SQLException: Database failure
//! my-app.db/update-row       db.clj: 23  my_app.db$update_row.invoke
//!                       Thread.java:745      java.lang.Thread.run
//! ```
//!
//! Every error in the chain gets a header line with its type name and
//! message, followed by its properties. Only the innermost error, the root
//! cause, gets a stack trace, and symbolic frames are shown with their
//! readable names.
//!
//! ## Quick Example
//!
//! ```
//! use causeway::{Decorations, RawFrame, failure::Failure, format_report};
//!
//! let root = Failure::new("java.lang.ArithmeticException")
//!     .with_message("Divide by zero")
//!     .with_stack([RawFrame::new("core.clj", Some(7), "user$divide", "invoke")])
//!     .into_ref();
//! let error = Failure::new("clojure.lang.ExceptionInfo")
//!     .with_message("Calculation failed")
//!     .with_cause(root)
//!     .into_ref();
//!
//! let report = format_report(&error, &Decorations::PLAIN)?;
//! assert!(report.contains("user/divide  core.clj:7  user$divide.invoke"));
//! # Ok::<(), causeway::ReportError>(())
//! ```
//!
//! ## Core Concepts
//!
//! Errors are seen through the [`Inspect`] trait, which exposes a type name,
//! an optional message, a captured stack and a list of named properties. A
//! property whose value is itself an error links to the next error of the
//! chain. [`Failure`](failure::Failure) is a ready-made implementation, and
//! [`compat::from_error`] converts any [`core::error::Error`].
//!
//! Writing a report goes through these stages:
//!
//! - [`analyze`](analyze::analyze) walks the error graph into a list of
//!   [`CauseFrame`](analyze::CauseFrame)s, outermost first. Each error is
//!   visited at most once, so cyclic graphs are fine.
//! - [`expand`](stack::expand) turns the stack of the root cause into
//!   [`StackFrame`](stack::StackFrame)s, demangling the class names of
//!   symbolic frames with [`demangle`](demangle::demangle).
//! - The [`report`] writer lays everything out in aligned columns using the
//!   helpers of [`columns`] and writes it to a [`ReportSink`].
//!
//! ## Decorations
//!
//! Type names, messages, property names and function names can be wrapped in
//! [`Decorations`], by default ANSI escape codes. They never change the
//! layout. The process-wide default honors `NO_COLOR` and
//! `CAUSEWAY_DECORATIONS`; see the [`decorations`] module.
//!
//! ## Logging
//!
//! Diagnostics are emitted through [`tracing`]. Most notably, a warning is
//! logged when the root cause has an empty stack trace, which usually means
//! the stack was not captured where the error was raised. No subscriber is
//! installed by this crate.
//!
//! ## Features
//!
//! - `backtrace` (default): enables [`capture`] and
//!   [`Failure::with_captured_stack`](failure::Failure::with_captured_stack),
//!   which record the native call stack.

pub mod analyze;
#[cfg(feature = "backtrace")]
#[cfg_attr(docsrs, doc(cfg(feature = "backtrace")))]
pub mod capture;
pub mod columns;
pub mod compat;
pub mod decorations;
pub mod demangle;
mod error;
pub mod failure;
pub mod prelude;
pub mod report;
pub mod sink;
pub mod stack;

pub use causeway_internals::{
    Arc, ErrorRef, Inspect, IntrospectionError, Property, PropertyValue, RawFrame, error_ref,
    identity, upcast,
};

pub use self::{
    decorations::Decorations,
    error::ReportError,
    report::{format_report, write_report, write_report_to, write_report_with},
    sink::{IoSink, ReportSink},
};
