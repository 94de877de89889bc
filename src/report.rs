//! Writing a complete report for a chain of errors.
//!
//! A report starts with one header line per error in the chain, outermost
//! first. Type names are right-justified to a shared column so the messages
//! line up. The properties of an error follow its header, sorted by name, and
//! the innermost error is followed by its stack trace:
//!
//! ```text
//! clojure.lang.ExceptionInfo: Failure updating row
//!                               row-id: 42
//!      java.sql.SQLException: Database failure
//! my-app.db/update-row       db.clj: 23  my_app.db$update_row.invoke
//!                       Thread.java:745      java.lang.Thread.run
//! ```

use core::fmt;
use std::io;

use causeway_internals::{ErrorRef, Inspect, PropertyValue};

use crate::{
    analyze::{CauseFrame, analyze},
    columns::{display_len, max_width, pad, write_justified, write_justified_decorated},
    decorations::{Decorations, default_decorations},
    error::ReportError,
    sink::{IoSink, ReportSink},
    stack::expand,
};

/// The line terminator used by reports.
pub const LINE_TERMINATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Extra indentation of property names relative to the type name column.
const PROPERTY_INDENT: usize = 4;

/// Writes the report for `error` using the process-wide default decorations.
///
/// See [`default_decorations`] for how the default is chosen.
pub fn write_report<S: ReportSink + ?Sized>(
    sink: &mut S,
    error: &ErrorRef,
) -> Result<(), ReportError> {
    write_report_with(sink, error, &default_decorations())
}

/// Writes the report for `error` with the given decorations.
///
/// # Examples
///
/// ```
/// use causeway::{Decorations, failure::Failure, write_report_with};
///
/// let error = Failure::new("java.lang.IllegalStateException")
///     .with_message("not started")
///     .with_property("state", ":stopped")
///     .into_ref();
///
/// let mut out = String::new();
/// write_report_with(&mut out, &error, &Decorations::PLAIN).unwrap();
///
/// let lines: Vec<&str> = out.lines().collect();
/// assert_eq!(lines[0], "java.lang.IllegalStateException: not started");
/// assert_eq!(lines[1].trim_start(), "state: :stopped");
/// ```
pub fn write_report_with<S: ReportSink + ?Sized>(
    sink: &mut S,
    error: &ErrorRef,
    decorations: &Decorations,
) -> Result<(), ReportError> {
    let decorations = decorations.clone();
    let frames = analyze(error)?;
    let name_width = max_width(&frames, |frame| frame.error.type_name());

    for frame in &frames {
        write_header(sink, frame, name_width, &decorations)?;
        write_properties(sink, frame, name_width, &decorations)?;
        if frame.is_root {
            write_stack_trace(sink, &*frame.error, &decorations)?;
        }
    }

    sink.flush()?;
    Ok(())
}

/// Renders the report for `error` into a new string.
pub fn format_report(error: &ErrorRef, decorations: &Decorations) -> Result<String, ReportError> {
    let mut out = String::new();
    write_report_with(&mut out, error, decorations)?;
    Ok(out)
}

/// Writes the report for `error` to an [`io::Write`] destination.
///
/// I/O failures are reported as [`ReportError::Io`].
pub fn write_report_to<W: io::Write>(
    writer: W,
    error: &ErrorRef,
    decorations: &Decorations,
) -> Result<(), ReportError> {
    let mut sink = IoSink::new(writer);
    match write_report_with(&mut sink, error, decorations) {
        Err(ReportError::Format(format_error)) => Err(sink
            .take_error()
            .map_or(ReportError::Format(format_error), ReportError::Io)),
        result => result,
    }
}

fn write_header<S: ReportSink + ?Sized>(
    sink: &mut S,
    frame: &CauseFrame,
    name_width: usize,
    decorations: &Decorations,
) -> fmt::Result {
    let error = &*frame.error;
    write_justified_decorated(
        sink,
        name_width,
        &decorations.exception,
        error.type_name(),
        &decorations.reset,
    )?;
    sink.write_char(':')?;
    if let Some(message) = error.message() {
        sink.write_char(' ')?;
        sink.write_str(&decorations.message)?;
        write_with_line_terminators(sink, &message)?;
        sink.write_str(&decorations.reset)?;
    }
    sink.write_str(LINE_TERMINATOR)
}

/// Writes `text`, replacing its line breaks (`\n` or `\r\n`) with
/// [`LINE_TERMINATOR`].
fn write_with_line_terminators<S: ReportSink + ?Sized>(sink: &mut S, text: &str) -> fmt::Result {
    let mut lines = text.split('\n');
    let mut next = lines.next();
    while let Some(line) = next {
        next = lines.next();
        match next {
            Some(_) => {
                sink.write_str(line.strip_suffix('\r').unwrap_or(line))?;
                sink.write_str(LINE_TERMINATOR)?;
            }
            None => sink.write_str(line)?,
        }
    }
    Ok(())
}

fn write_properties<S: ReportSink + ?Sized>(
    sink: &mut S,
    frame: &CauseFrame,
    name_width: usize,
    decorations: &Decorations,
) -> fmt::Result {
    if frame.properties.is_empty() {
        return Ok(());
    }

    let mut properties: Vec<(&str, &PropertyValue)> = frame
        .properties
        .iter()
        .map(|(name, value)| (&**name, value))
        .collect();
    properties.sort_by(|(a, _), (b, _)| a.cmp(b));
    let width = name_width + PROPERTY_INDENT + max_width(&properties, |(name, _)| *name);

    for (name, value) in properties {
        write_justified_decorated(sink, width, &decorations.property, name, &decorations.reset)?;
        write!(sink, ": {value}{LINE_TERMINATOR}")?;
    }
    Ok(())
}

fn write_stack_trace<S: ReportSink + ?Sized>(
    sink: &mut S,
    error: &dyn Inspect,
    decorations: &Decorations,
) -> Result<(), ReportError> {
    let frames = expand(error)?;
    let file_width = max_width(&frames, |frame| frame.file.as_str());
    let line_width = max_width(&frames, |frame| frame.line.as_str());
    let name_width = max_width(&frames, |frame| frame.symbolic_name.as_str());
    let class_width = max_width(&frames, |frame| frame.class.as_str());

    for frame in &frames {
        pad(sink, name_width - display_len(&frame.symbolic_name))?;
        if let Some((function, namespace)) = frame.symbolic_parts.split_last() {
            for part in namespace {
                sink.write_str(part)?;
                sink.write_char('/')?;
            }
            write!(
                sink,
                "{}{function}{}",
                decorations.function_name, decorations.reset
            )?;
        }
        sink.write_str("  ")?;
        write_justified(sink, file_width, &frame.file)?;
        sink.write_char(':')?;
        write_justified(sink, line_width, &frame.line)?;
        sink.write_str("  ")?;
        write_justified(sink, class_width, &frame.class)?;
        write!(sink, ".{}{LINE_TERMINATOR}", frame.method)?;
    }
    Ok(())
}
