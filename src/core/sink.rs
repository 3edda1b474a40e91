//! Output sink: a swappable indirection around a byte writer
//!
//! Every logger owns one `OutputSink`. The sink holds a shared handle to the
//! target writer, so loggers built by the same factory write to the same
//! target until one of them is pointed somewhere else with `set_output`.

use super::error::{report_write_error, LoggerError, Result};
use parking_lot::{Mutex, RwLock};
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Owned writer accepted by sinks and factories
pub type BoxedWriter = Box<dyn Write + Send>;

/// Writer shared between sinks
pub(crate) type SharedTarget = Arc<Mutex<BoxedWriter>>;

/// Wrap a writer for sharing, falling back to standard error.
pub(crate) fn shared_target(output: Option<BoxedWriter>) -> SharedTarget {
    let writer = output.unwrap_or_else(|| Box::new(io::stderr()));
    Arc::new(Mutex::new(writer))
}

pub struct OutputSink {
    target: RwLock<SharedTarget>,
    failed_writes: AtomicU64,
}

impl OutputSink {
    /// Create a sink writing to `output`, or standard error when `None`
    pub fn new(output: Option<BoxedWriter>) -> Self {
        Self::from_target(shared_target(output))
    }

    pub fn stderr() -> Self {
        Self::new(None)
    }

    pub(crate) fn from_target(target: SharedTarget) -> Self {
        Self {
            target: RwLock::new(target),
            failed_writes: AtomicU64::new(0),
        }
    }

    /// Replace the target; `None` resets to standard error
    pub fn set_output(&self, output: Option<BoxedWriter>) {
        *self.target.write() = shared_target(output);
    }

    /// Write one record to the current target.
    ///
    /// The record goes out in a single `write_all` while the target is locked,
    /// so records from concurrent callers never interleave.
    pub fn write(&self, record: &[u8]) -> Result<usize> {
        let target = Arc::clone(&self.target.read());
        let mut writer = target.lock();
        writer.write_all(record)?;
        writer.flush()?;
        Ok(record.len())
    }

    /// Best-effort write: failures go to standard error and are counted.
    pub fn write_record(&self, record: &[u8]) {
        if let Err(err) = self.write(record) {
            self.report_failure(&err);
        }
    }

    pub(crate) fn report_failure(&self, err: &LoggerError) {
        self.failed_writes.fetch_add(1, Ordering::Relaxed);
        report_write_error(err);
    }

    /// Number of records lost to writer or serialization failures
    #[inline]
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }
}

impl Default for OutputSink {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Cloneable in-memory writer.
///
/// Clones share one buffer, so a test can hand a clone to a logger and read
/// what was written through the original.
///
/// # Example
///
/// ```
/// use scoped_logger::{LeveledLogger, LogLevel, SharedBuffer, TextLogger};
///
/// let buffer = SharedBuffer::new();
/// let logger = TextLogger::new("api", LogLevel::Info, None);
/// logger.with_output(Box::new(buffer.clone())).info("ready");
///
/// assert_eq!(buffer.contents(), "ready\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_forwards_to_target() {
        let buffer = SharedBuffer::new();
        let sink = OutputSink::new(Some(Box::new(buffer.clone())));

        assert_eq!(sink.write(b"hello\n").unwrap(), 6);
        assert_eq!(buffer.contents(), "hello\n");
    }

    #[test]
    fn test_set_output_swaps_target() {
        let first = SharedBuffer::new();
        let second = SharedBuffer::new();
        let sink = OutputSink::new(Some(Box::new(first.clone())));

        sink.write_record(b"one\n");
        sink.set_output(Some(Box::new(second.clone())));
        sink.write_record(b"two\n");

        assert_eq!(first.contents(), "one\n");
        assert_eq!(second.contents(), "two\n");
    }

    #[test]
    fn test_shared_target_between_sinks() {
        let buffer = SharedBuffer::new();
        let target = shared_target(Some(Box::new(buffer.clone())));
        let a = OutputSink::from_target(Arc::clone(&target));
        let b = OutputSink::from_target(target);

        a.write_record(b"a\n");
        b.write_record(b"b\n");
        assert_eq!(buffer.contents(), "a\nb\n");

        // Re-pointing one sink leaves the other on the shared target
        a.set_output(Some(Box::new(SharedBuffer::new())));
        b.write_record(b"c\n");
        assert_eq!(buffer.contents(), "a\nb\nc\n");
    }

    #[test]
    fn test_write_error_is_returned_and_counted() {
        let sink = OutputSink::new(Some(Box::new(FailingWriter)));

        assert!(matches!(sink.write(b"x\n"), Err(LoggerError::Io(_))));
        assert_eq!(sink.failed_writes(), 0);

        sink.write_record(b"x\n");
        sink.write_record(b"y\n");
        assert_eq!(sink.failed_writes(), 2);
    }

    #[test]
    fn test_shared_buffer_clear() {
        let mut buffer = SharedBuffer::new();
        buffer.write_all(b"data").unwrap();
        assert_eq!(buffer.len(), 4);

        buffer.clear();
        assert!(buffer.is_empty());
    }
}
