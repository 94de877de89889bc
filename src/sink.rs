//! Destinations for report text.

use core::fmt;
use std::io;

/// A destination that report text is appended to.
///
/// Any [`fmt::Write`] implementation can receive text; [`flush`](Self::flush)
/// is called once after a complete report has been written and defaults to
/// doing nothing, which is right for in-memory buffers.
pub trait ReportSink: fmt::Write {
    /// Pushes buffered text to its final destination.
    fn flush(&mut self) -> fmt::Result {
        Ok(())
    }
}

impl ReportSink for String {}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn flush(&mut self) -> fmt::Result {
        (**self).flush()
    }
}

/// Adapts an [`io::Write`] destination, such as standard error or a file, into
/// a [`ReportSink`].
///
/// [`fmt::Error`] carries no details, so the underlying [`io::Error`] of the
/// first failed write is kept and can be retrieved with
/// [`take_error`](Self::take_error).
#[derive(Debug)]
pub struct IoSink<W: io::Write> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> IoSink<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    /// Returns the I/O error that caused the last write or flush to fail.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Unwraps the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn record(&mut self, result: io::Result<()>) -> fmt::Result {
        result.map_err(|error| {
            self.error.get_or_insert(error);
            fmt::Error
        })
    }
}

impl<W: io::Write> fmt::Write for IoSink<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let result = self.inner.write_all(s.as_bytes());
        self.record(result)
    }
}

impl<W: io::Write> ReportSink for IoSink<W> {
    fn flush(&mut self) -> fmt::Result {
        let result = self.inner.flush();
        self.record(result)
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use super::*;

    struct Broken;

    impl io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_io_sink_forwards_text() {
        let mut sink = IoSink::new(Vec::new());
        sink.write_str("abc").unwrap();
        ReportSink::flush(&mut sink).unwrap();
        assert_eq!(sink.into_inner(), b"abc");
    }

    #[test]
    fn test_io_sink_keeps_first_error() {
        let mut sink = IoSink::new(Broken);
        assert!(sink.write_str("abc").is_err());
        assert!(sink.write_str("def").is_err());
        let error = sink.take_error().unwrap();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
        assert!(sink.take_error().is_none());
    }
}
