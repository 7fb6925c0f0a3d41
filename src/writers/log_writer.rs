use crate::deferred_now::DeferredNow;
use crate::entry::Entry;
use std::io;

/// Writes to a single log output stream.
pub trait LogWriter: Sync + Send {
    /// Writes out a log entry as one line.
    fn write(&self, now: &mut DeferredNow, entry: &Entry) -> io::Result<()>;

    /// Flushes any buffered output.
    fn flush(&self) -> io::Result<()>;

    /// Takes a vec with three patterns per line that represent the log out,
    /// compares the written log with the expected lines,
    /// and asserts that both are in sync.
    ///
    /// This function is not meant for productive code, only for tests.
    #[doc(hidden)]
    fn validate_logs(&self, _expected: &[(&'static str, &'static str, &'static str)]) {
        unimplemented!("only useful for tests");
    }
}
