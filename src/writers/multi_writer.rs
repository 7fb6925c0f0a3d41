use crate::deferred_now::DeferredNow;
use crate::entry::Entry;
use crate::writers::LogWriter;

// `MultiWriter` fans one entry out to every configured writer.
//
// All writers see the same `DeferredNow`, so the line carries the same
// timestamp everywhere. A write failure stops the fan-out for this entry;
// the first error wins.
pub(crate) struct MultiWriter {
    writers: Vec<Box<dyn LogWriter>>,
}

impl MultiWriter {
    pub(crate) fn new(writers: Vec<Box<dyn LogWriter>>) -> Self {
        Self { writers }
    }
}

impl LogWriter for MultiWriter {
    fn write(&self, now: &mut DeferredNow, entry: &Entry) -> std::io::Result<()> {
        for writer in &self.writers {
            writer.write(now, entry)?;
        }
        Ok(())
    }

    fn flush(&self) -> std::io::Result<()> {
        for writer in &self.writers {
            writer.flush()?;
        }
        Ok(())
    }

    fn validate_logs(&self, expected: &[(&'static str, &'static str, &'static str)]) {
        for writer in &self.writers {
            writer.validate_logs(expected);
        }
    }
}
