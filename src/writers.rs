//! Contains the trait [`LogWriter`], behind which the output targets of a
//! [`Sink`](crate::Sink) are implemented, and the bundled implementations
//! for writing to stdout or to an append-mode file.
//!
//! Which writers a sink is assembled from is decided once, by
//! [`Sink::build`](crate::Sink::build), from the configured
//! [`OutputTarget`](crate::OutputTarget); there is no registry for
//! user-supplied writers.

mod file_log_writer;
mod log_writer;
mod multi_writer;
mod std_writer;

pub use self::log_writer::LogWriter;

pub(crate) use self::{
    file_log_writer::FileLogWriter, multi_writer::MultiWriter, std_writer::StdWriter,
};
