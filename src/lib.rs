#![deny(missing_docs)]
#![deny(clippy::all)]
//! Service-scoped structured logging for long-lived daemons.
//!
//! `svclog` is a small configuration layer in front of a simple logging
//! engine: a [`LogConfig`] decides where log lines go (stdout, an
//! append-mode file, or both) and how the file lines are encoded
//! (`key=value` text or JSON), and a cheap [`Logger`] handle stamps every
//! entry with a service label and the call site that produced it.
//!
//! ```rust
//! use svclog::{LogConfig, Logger};
//!
//! fn main() -> Result<(), svclog::SvcLogError> {
//!     let logger = Logger::new(&LogConfig::default())?;
//!     let logger = logger.with_service("billing");
//!
//!     logger.info("Service started");
//!     logger
//!         .with_field("invoice", 4711)
//!         .warn("retrying upstream call");
//!     Ok(())
//! }
//! ```
//!
//! See
//!
//! * [`LogConfig`] for the configuration shape (deserializable, so it can
//!   be embedded in an application's config file),
//! * [`Logger`] for the logging surface, deriving sub-loggers with
//!   [`Logger::with_service`] / [`Logger::with_group`], and the bridge to
//!   the `log` macro facade,
//! * [`Sink`] for how the writer set is assembled and for the shared
//!   severity filter,
//! * the module [`writers`] for the writer seam behind the sink.
//!
//! Logging calls never return errors and never fail because caller metadata
//! is unavailable; `fatal` and `panic` severities terminate the process
//! resp. panic after writing, which is documented API behavior.

mod callsite;
mod config;
mod deferred_now;
mod entry;
mod error;
mod facade;
mod formats;
mod logger;
mod primary_writer;
mod severity;
mod sink;
mod util;

pub mod writers;

pub use crate::config::{Format, LogConfig, OutputTarget};
pub use crate::deferred_now::DeferredNow;
pub use crate::entry::Entry;
pub use crate::error::SvcLogError;
pub use crate::formats::{json_format, text_format, FormatFunction};
pub use crate::logger::{EntryBuilder, Logger};
pub use crate::severity::Severity;
pub use crate::sink::Sink;
