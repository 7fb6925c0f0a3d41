use crate::deferred_now::DeferredNow;
use crate::entry::Entry;
use crate::writers::{FileLogWriter, LogWriter, MultiWriter, StdWriter};

// Primary writer
//
// all output of a sink goes through one of these
pub(crate) enum PrimaryWriter {
    // Writes to stdout
    Std(StdWriter),
    // Writes to an append-mode file
    File(FileLogWriter),
    // Writes to stdout and to a file
    Multi(MultiWriter),
}

impl PrimaryWriter {
    // Write out a log line.
    pub(crate) fn write(&self, now: &mut DeferredNow, entry: &Entry) -> std::io::Result<()> {
        match *self {
            Self::Std(ref w) => w.write(now, entry),
            Self::File(ref w) => w.write(now, entry),
            Self::Multi(ref w) => w.write(now, entry),
        }
    }

    // Flush the underlying streams.
    pub(crate) fn flush(&self) -> std::io::Result<()> {
        match *self {
            Self::Std(ref w) => w.flush(),
            Self::File(ref w) => w.flush(),
            Self::Multi(ref w) => w.flush(),
        }
    }

    pub(crate) fn validate_logs(&self, expected: &[(&'static str, &'static str, &'static str)]) {
        match *self {
            Self::Std(ref w) => w.validate_logs(expected),
            Self::File(ref w) => w.validate_logs(expected),
            Self::Multi(ref w) => w.validate_logs(expected),
        }
    }
}
