use crate::deferred_now::DeferredNow;
use crate::entry::Entry;
use crate::formats::FormatFunction;
use crate::util::write_buffered;
use crate::writers::LogWriter;
use std::io::{Stdout, Write};

#[cfg(test)]
use std::{
    io::Cursor,
    sync::{Arc, Mutex},
};

// `StdWriter` writes logs to stdout.
//
// The stdout handle is locked for the duration of one line, so lines from
// concurrent loggers cannot interleave.
pub(crate) struct StdWriter {
    format: FormatFunction,
    stdout: Stdout,
    #[cfg(test)]
    validation_buffer: Arc<Mutex<Cursor<Vec<u8>>>>,
}

impl StdWriter {
    pub(crate) fn new(format: FormatFunction) -> Self {
        Self {
            format,
            stdout: std::io::stdout(),
            #[cfg(test)]
            validation_buffer: Arc::new(Mutex::new(Cursor::new(Vec::<u8>::new()))),
        }
    }
}

impl LogWriter for StdWriter {
    #[inline]
    fn write(&self, now: &mut DeferredNow, entry: &Entry) -> std::io::Result<()> {
        let mut w = self.stdout.lock();
        write_buffered(
            self.format,
            now,
            entry,
            &mut w,
            #[cfg(test)]
            Some(&self.validation_buffer),
        )
    }

    #[inline]
    fn flush(&self) -> std::io::Result<()> {
        let mut w = self.stdout.lock();
        w.flush()
    }

    #[cfg(not(test))]
    fn validate_logs(&self, _expected: &[(&'static str, &'static str, &'static str)]) {}
    #[cfg(test)]
    fn validate_logs(&self, expected: &[(&'static str, &'static str, &'static str)]) {
        use std::io::BufRead;
        let write_cursor = self.validation_buffer.lock().unwrap();
        let mut reader = std::io::BufReader::new(Cursor::new(write_cursor.get_ref()));
        let mut buf = String::new();
        for tuple in expected {
            buf.clear();
            reader.read_line(&mut buf).unwrap();
            assert!(buf.contains(tuple.0), "Did not find tuple.0 = {}", tuple.0);
            assert!(buf.contains(tuple.1), "Did not find tuple.1 = {}", tuple.1);
            assert!(buf.contains(tuple.2), "Did not find tuple.2 = {}", tuple.2);
        }
        buf.clear();
        reader.read_line(&mut buf).unwrap();
        assert!(buf.is_empty(), "Found more log lines than expected: {buf}");
    }
}
