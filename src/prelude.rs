//! Commonly used items for convenient importing.
//!
//! ```
//! use causeway::prelude::*;
//!
//! let error = Failure::new("java.lang.IllegalArgumentException")
//!     .with_message("bad input")
//!     .into_ref();
//! let report = format_report(&error, &Decorations::PLAIN)?;
//! assert_eq!(report.lines().next(), Some("java.lang.IllegalArgumentException: bad input"));
//! # Ok::<(), ReportError>(())
//! ```

pub use crate::{
    Decorations, ErrorRef, Inspect, PropertyValue, RawFrame, ReportError, ReportSink,
    failure::Failure, format_report, write_report, write_report_with,
};
