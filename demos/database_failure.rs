//! Reporting a failed database update.
//!
//! A request handler fails because a row could not be updated, which in turn
//! failed because the database rejected a query. The report shows all three
//! errors, the properties attached along the way, and the stack trace of the
//! database error with readable names for the Clojure frames.
//!
//! Run with `CAUSEWAY_DECORATIONS=plain` to disable the ANSI decorations.

use std::io;

use causeway::{RawFrame, ReportError, failure::Failure, write_report_to};
use tracing_subscriber::{Registry, layer::SubscriberExt};

fn database_error() -> Failure {
    Failure::new("java.sql.SQLException")
        .with_message("Database failure\nSELECT FOO, BAR, BAZ\nFROM GNIP\nfailed with ABC123")
        .with_property("SQLState", "ABC123")
        .with_property("errorCode", "500")
        .with_stack([
            RawFrame::new("db.clj", Some(23), "my_app.db$update_row", "invoke"),
            RawFrame::new(
                "db.clj",
                Some(17),
                "my_app.db$with_transaction$fn__1187",
                "doInvoke",
            ),
            RawFrame::new("RestFn.java", Some(408), "clojure.lang.RestFn", "invoke"),
            RawFrame::new(
                "handler.clj",
                Some(52),
                "my_app.handler$handle_request_BANG_",
                "invoke",
            ),
            RawFrame::new("AFn.java", Some(22), "clojure.lang.AFn", "run"),
            RawFrame::new("Thread.java", Some(745), "java.lang.Thread", "run"),
        ])
}

fn main() -> Result<(), ReportError> {
    let subscriber = Registry::default().with(tracing_subscriber::fmt::layer());
    // Only fails if another subscriber was already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);

    let update_failure = Failure::new("clojure.lang.ExceptionInfo")
        .with_message("Failure updating row")
        .with_property("row-id", "42")
        .with_property("table", ":gnip")
        .with_cause(database_error().into_ref());
    let error = Failure::new("clojure.lang.ExceptionInfo")
        .with_message("Request handling exception")
        .with_property("uri", "/api/rows/42")
        .with_property("request-method", ":put")
        .with_cause(update_failure.into_ref())
        .into_ref();

    write_report_to(
        io::stderr().lock(),
        &error,
        &causeway::decorations::default_decorations(),
    )
}
