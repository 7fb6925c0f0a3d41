use crate::config::{Format, LogConfig, OutputTarget};
use crate::deferred_now::DeferredNow;
use crate::entry::Entry;
use crate::error::SvcLogError;
use crate::formats::{json_format, text_format, FormatFunction};
use crate::primary_writer::PrimaryWriter;
use crate::severity::Severity;
use crate::util::{write_err, ERR_FLUSHING, ERR_WRITING};
use crate::writers::{FileLogWriter, MultiWriter, StdWriter};
use std::path::Path;
use std::sync::{PoisonError, RwLock};

/// The constructed, ready-to-write combination of formatters, writer set,
/// and minimum-severity filter.
///
/// A sink is built once from a [`LogConfig`] and then shared, through
/// reference counting, by every [`Logger`](crate::Logger) derived from the
/// same root; it lives for the rest of the process and is never explicitly
/// closed. The severity filter is the one piece of shared mutable state:
/// [`set_min_severity`](Sink::set_min_severity) through any handle is
/// visible through all of them.
pub struct Sink {
    primary_writer: PrimaryWriter,
    min_severity: RwLock<Severity>,
}

impl Sink {
    /// Builds a sink from `config`: decides the writer set, opens the log
    /// file if one is needed, and takes over the configured minimum
    /// severity.
    ///
    /// The console writer always encodes as text; `config.format` selects
    /// the encoding of the file writer for the `file` and `both` targets.
    ///
    /// # Errors
    ///
    /// `SvcLogError::FilePathRequired` if a file-backed target is configured
    /// without a file path, and `SvcLogError::Io` if the log file cannot be
    /// opened. Configuration is validated before any file is touched; no
    /// partial sink is returned.
    pub fn build(config: &LogConfig) -> Result<Self, SvcLogError> {
        let primary_writer = match config.output {
            OutputTarget::Console => PrimaryWriter::Std(StdWriter::new(text_format)),
            OutputTarget::File => {
                let path = required_file_path(config)?;
                PrimaryWriter::File(FileLogWriter::try_new(path, file_format(config.format))?)
            }
            OutputTarget::Both => {
                let path = required_file_path(config)?;
                let file_writer = FileLogWriter::try_new(path, file_format(config.format))?;
                PrimaryWriter::Multi(MultiWriter::new(vec![
                    Box::new(StdWriter::new(text_format)),
                    Box::new(file_writer),
                ]))
            }
        };
        Ok(Self {
            primary_writer,
            min_severity: RwLock::new(config.level),
        })
    }

    /// Returns true if entries at `severity` pass the filter.
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.min_severity()
    }

    /// The current minimum severity.
    ///
    /// # Panics
    ///
    /// Never; a poisoned filter cell still holds a valid severity and is
    /// read through.
    #[must_use]
    pub fn min_severity(&self) -> Severity {
        *self
            .min_severity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the minimum severity.
    ///
    /// The filter is shared: the change is visible through every logger
    /// holding this sink. Concurrent calls race; the last write wins.
    pub fn set_min_severity(&self, severity: Severity) {
        *self
            .min_severity
            .write()
            .unwrap_or_else(PoisonError::into_inner) = severity;
    }

    // Formats and writes one entry. Logging has no error return; a write
    // failure is reported to stderr and swallowed.
    pub(crate) fn write(&self, entry: &Entry) {
        let mut now = DeferredNow::new();
        if let Err(e) = self.primary_writer.write(&mut now, entry) {
            write_err(ERR_WRITING, &e);
        }
    }

    pub(crate) fn flush(&self) {
        if let Err(e) = self.primary_writer.flush() {
            write_err(ERR_FLUSHING, &e);
        }
    }

    pub(crate) fn validate_logs(&self, expected: &[(&'static str, &'static str, &'static str)]) {
        self.primary_writer.validate_logs(expected);
    }
}

fn required_file_path(config: &LogConfig) -> Result<&Path, SvcLogError> {
    match config.file_path.as_deref() {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => Err(SvcLogError::FilePathRequired),
    }
}

fn file_format(format: Format) -> FormatFunction {
    match format {
        Format::Text => text_format,
        Format::Json => json_format,
    }
}

#[cfg(test)]
mod test {
    use super::Sink;
    use crate::{LogConfig, OutputTarget, Severity, SvcLogError};

    #[test]
    fn console_build_carries_level() {
        let sink = Sink::build(&LogConfig {
            level: Severity::Warn,
            ..LogConfig::default()
        })
        .unwrap();
        assert_eq!(sink.min_severity(), Severity::Warn);
        assert!(!sink.enabled(Severity::Info));
        assert!(sink.enabled(Severity::Warn));
        assert!(sink.enabled(Severity::Panic));
    }

    #[test]
    fn file_target_requires_path() {
        for output in [OutputTarget::File, OutputTarget::Both] {
            let result = Sink::build(&LogConfig {
                output,
                ..LogConfig::default()
            });
            assert!(
                matches!(result, Err(SvcLogError::FilePathRequired)),
                "missing path must fail for {output}"
            );
        }
    }

    #[test]
    fn empty_path_counts_as_missing() {
        let result = Sink::build(&LogConfig {
            output: OutputTarget::File,
            file_path: Some(std::path::PathBuf::new()),
            ..LogConfig::default()
        });
        assert!(matches!(result, Err(SvcLogError::FilePathRequired)));
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let result = Sink::build(&LogConfig {
            output: OutputTarget::File,
            file_path: Some("/nonexistent-dir/svc.log".into()),
            ..LogConfig::default()
        });
        assert!(matches!(result, Err(SvcLogError::Io { .. })));
    }
}
