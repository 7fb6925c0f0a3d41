use crate::error::SvcLogError;
use serde_derive::Deserialize;
use std::fmt;
use std::str::FromStr;

/// The ordered severity of a log entry, from `Trace` (lowest) to `Panic`
/// (highest).
///
/// A [`Sink`](crate::Sink) drops every entry below its minimum severity.
/// `Fatal` and `Panic` are regular severities as far as filtering and
/// formatting are concerned; the process-terminating side effects live in the
/// corresponding [`Logger`](crate::Logger) methods.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize,
)]
#[serde(try_from = "String")]
pub enum Severity {
    /// Very fine-grained tracing.
    Trace,
    /// Diagnostic information.
    Debug,
    /// Regular operational messages.
    #[default]
    Info,
    /// Something unexpected, the program continues.
    Warn,
    /// An operation failed.
    Error,
    /// An unrecoverable failure; logging at this severity terminates
    /// the process.
    Fatal,
    /// A programming error; logging at this severity panics.
    Panic,
}

impl Severity {
    /// The lowercase name, as used in the configuration and in output lines.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Panic => "panic",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = SvcLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            "panic" => Ok(Self::Panic),
            _ => Err(SvcLogError::UnknownSeverity(s.to_string())),
        }
    }
}

impl TryFrom<String> for Severity {
    type Error = SvcLogError;

    fn try_from(s: String) -> Result<Self, SvcLogError> {
        s.parse()
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Trace,
        }
    }
}
