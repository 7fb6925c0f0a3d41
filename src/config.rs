use crate::error::SvcLogError;
use crate::severity::Severity;
use serde_derive::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where log lines are written to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputTarget {
    /// Standard output only.
    #[default]
    Console,
    /// An append-mode file only; requires
    /// [`file_path`](LogConfig::file_path).
    File,
    /// Standard output and an append-mode file; requires
    /// [`file_path`](LogConfig::file_path).
    Both,
}

impl OutputTarget {
    /// The lowercase tag, as used in the configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::File => "file",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputTarget {
    type Err = SvcLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "console" => Ok(Self::Console),
            "file" => Ok(Self::File),
            "both" => Ok(Self::Both),
            _ => Err(SvcLogError::UnsupportedOutput(s.to_string())),
        }
    }
}

impl TryFrom<String> for OutputTarget {
    type Error = SvcLogError;

    fn try_from(s: String) -> Result<Self, SvcLogError> {
        s.parse()
    }
}

/// The line encoding of file writers.
///
/// The console writer always uses [`Format::Text`]; this option only selects
/// the encoding of the file writer for the `file` and `both` output targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Format {
    /// Human-readable `key=value` lines with a full timestamp.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl Format {
    /// The lowercase tag, as used in the configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = SvcLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(SvcLogError::UnknownFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for Format {
    type Error = SvcLogError;

    fn try_from(s: String) -> Result<Self, SvcLogError> {
        s.parse()
    }
}

/// Configuration for building a [`Sink`](crate::Sink).
///
/// The struct derives `Deserialize` so that it can be embedded in an
/// application's configuration file; decoding the file itself (YAML, TOML,
/// JSON, ...) is the caller's business. All fields have defaults, so e.g.
/// a YAML document as small as `level: debug` is a complete configuration.
///
/// ```yaml
/// level: info
/// output: both
/// file_path: /var/log/my-service.log
/// format: json
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum severity; entries below it are dropped. Default: `info`.
    pub level: Severity,
    /// Output target selection. Default: `console`.
    pub output: OutputTarget,
    /// Path of the log file; required for the `file` and `both` targets.
    pub file_path: Option<PathBuf>,
    /// Line encoding of the file writer. Default: `text`.
    pub format: Format,
}
