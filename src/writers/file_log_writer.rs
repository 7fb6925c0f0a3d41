use crate::deferred_now::DeferredNow;
use crate::entry::Entry;
use crate::error::SvcLogError;
use crate::formats::FormatFunction;
use crate::util::{io_err, write_buffered};
use crate::writers::LogWriter;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// `FileLogWriter` appends formatted entries to a single log file.
//
// The file is opened once, with create+append, and never closed or rotated;
// a long-lived daemon keeps its handle for the process lifetime.
pub(crate) struct FileLogWriter {
    format: FormatFunction,
    path: PathBuf,
    m_file: Mutex<File>,
}

impl FileLogWriter {
    pub(crate) fn try_new(path: &Path, format: FormatFunction) -> Result<Self, SvcLogError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| SvcLogError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(Self {
            format,
            path: path.to_path_buf(),
            m_file: Mutex::new(file),
        })
    }
}

impl LogWriter for FileLogWriter {
    #[inline]
    fn write(&self, now: &mut DeferredNow, entry: &Entry) -> std::io::Result<()> {
        let mut file = self.m_file.lock().map_err(|_e| io_err("Poison"))?;
        write_buffered(
            self.format,
            now,
            entry,
            &mut *file,
            #[cfg(test)]
            None,
        )
    }

    #[inline]
    fn flush(&self) -> std::io::Result<()> {
        let mut file = self.m_file.lock().map_err(|_e| io_err("Poison"))?;
        file.flush()
    }

    fn validate_logs(&self, expected: &[(&'static str, &'static str, &'static str)]) {
        let content = std::fs::read_to_string(&self.path)
            .unwrap_or_else(|e| panic!("cannot read log file {}: {e}", self.path.display()));
        let mut lines = content.lines();
        for tuple in expected {
            let line = lines
                .next()
                .unwrap_or_else(|| panic!("not enough log lines, next expected: {}", tuple.0));
            assert!(line.contains(tuple.0), "Did not find tuple.0 = {} in {line}", tuple.0);
            assert!(line.contains(tuple.1), "Did not find tuple.1 = {} in {line}", tuple.1);
            assert!(line.contains(tuple.2), "Did not find tuple.2 = {} in {line}", tuple.2);
        }
        assert_eq!(lines.next(), None, "Found more log lines than expected");
    }
}
