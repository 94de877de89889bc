use std::io;

use causeway::{
    Decorations, ErrorRef, RawFrame, ReportError,
    decorations::{default_decorations, register_default_decorations},
    failure::Failure,
    format_report, write_report, write_report_to,
};

const DATABASE_MESSAGE: &str = "Database failure\nSELECT FOO, BAR, BAZ\nFROM GNIP\nfailed with ABC123";

fn request_failure() -> ErrorRef {
    let database = Failure::new("java.sql.SQLException")
        .with_message(DATABASE_MESSAGE)
        .with_stack([
            RawFrame::new("db.clj", Some(23), "my_app.db$update_row", "invoke"),
            RawFrame::new("AFn.java", Some(22), "clojure.lang.AFn", "run"),
            RawFrame::new("Thread.java", Some(745), "java.lang.Thread", "run"),
        ])
        .into_ref();
    let update = Failure::new("clojure.lang.ExceptionInfo")
        .with_message("Failure updating row")
        .with_property("row-id", "42")
        .with_cause(database)
        .into_ref();
    Failure::new("clojure.lang.ExceptionInfo")
        .with_message("Request handling exception")
        .with_cause(update)
        .into_ref()
}

#[test]
fn end_to_end_report() {
    let out = format_report(&request_failure(), &Decorations::PLAIN).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    let expected = [
        "clojure.lang.ExceptionInfo: Request handling exception".to_owned(),
        "clojure.lang.ExceptionInfo: Failure updating row".to_owned(),
        format!("{}row-id: 42", " ".repeat(30)),
        "     java.sql.SQLException: Database failure".to_owned(),
        "SELECT FOO, BAR, BAZ".to_owned(),
        "FROM GNIP".to_owned(),
        "failed with ABC123".to_owned(),
        "my-app.db/update-row       db.clj: 23  my_app.db$update_row.invoke".to_owned(),
        format!(
            "{}   AFn.java: 22      clojure.lang.AFn.run",
            " ".repeat(22)
        ),
        format!(
            "{}Thread.java:745      java.lang.Thread.run",
            " ".repeat(22)
        ),
    ];
    assert_eq!(lines, expected);
}

#[test]
fn type_name_column_matches_longest_name() {
    let out = format_report(&request_failure(), &Decorations::PLAIN).unwrap();
    let longest = "clojure.lang.ExceptionInfo".len();

    let headers: Vec<&str> = out
        .lines()
        .filter(|line| line.contains("Exception") && line.contains(": "))
        .collect();
    assert_eq!(headers.len(), 3);
    for header in headers {
        assert_eq!(header.find(':'), Some(longest), "{header:?}");
    }
}

#[test]
fn only_root_cause_has_stack() {
    let out = format_report(&request_failure(), &Decorations::PLAIN).unwrap();
    let first_frame = out
        .find("my-app.db/update-row")
        .expect("root stack is written");
    let root_header = out.find("java.sql.SQLException:").unwrap();

    assert!(first_frame > root_header);
    assert_eq!(out.matches(".run").count(), 2);
    assert_eq!(out.matches(".invoke").count(), 1);
}

#[test]
fn process_default_decorations() {
    register_default_decorations(Decorations::PLAIN);
    assert_eq!(default_decorations(), Decorations::PLAIN);

    let mut out = String::new();
    write_report(&mut out, &request_failure()).unwrap();
    assert_eq!(
        out,
        format_report(&request_failure(), &Decorations::PLAIN).unwrap()
    );
}

#[test]
fn io_failure_is_reported() {
    struct Closed;

    impl io::Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let result = write_report_to(Closed, &request_failure(), &Decorations::PLAIN);
    match result {
        Err(ReportError::Io(error)) => assert_eq!(error.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[test]
fn std_errors_are_reported() {
    let error = "not a number".parse::<i64>().unwrap_err();
    let out = format_report(&causeway::compat::from_error(&error), &Decorations::PLAIN).unwrap();
    assert_eq!(
        out.lines().collect::<Vec<_>>(),
        ["core::num::error::ParseIntError: invalid digit found in string"]
    );
}

#[cfg(feature = "backtrace")]
#[test]
fn captured_stack_is_written() {
    let error = Failure::new("rust.Panic")
        .with_message("captured")
        .with_captured_stack()
        .into_ref();
    let out = format_report(&error, &Decorations::PLAIN).unwrap();
    assert!(out.lines().count() > 1);
}
