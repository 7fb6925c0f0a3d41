use crate::callsite::Callsite;
use crate::config::LogConfig;
use crate::entry::Entry;
use crate::error::SvcLogError;
use crate::severity::Severity;
use crate::sink::Sink;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::sync::Arc;

/// A cheap, cloneable logging handle bound to a service name.
///
/// All loggers derived from one root share a single [`Sink`]; deriving
/// ([`with_service`](Logger::with_service),
/// [`with_group`](Logger::with_group)) produces a new value and never
/// mutates the original. Every entry is stamped with the current service
/// name and, where available, the caller's source location (`file`) and
/// enclosing function (`func`).
///
/// ```rust
/// use svclog::{LogConfig, Logger};
///
/// let root = Logger::new(&LogConfig::default()).unwrap();
/// let billing = root.with_service("billing");
/// billing.info("Service started");
/// billing
///     .with_group("invoices")
///     .with_field("invoice", 4711)
///     .warn("retrying upstream call");
/// ```
///
/// The logging methods have no error return: a failed write is reported to
/// stderr and swallowed, matching the fire-and-forget nature of this layer.
/// For a formatted message, pass `format_args!`, or anything else that
/// implements `Display`:
///
/// ```rust
/// # use svclog::{LogConfig, Logger};
/// # let logger = Logger::new(&LogConfig::default()).unwrap();
/// let attempt = 3;
/// logger.info(format_args!("retry {attempt} of 5"));
/// ```
#[derive(Clone)]
pub struct Logger {
    sink: Arc<Sink>,
    service_name: String,
}

impl Logger {
    /// Builds a sink from `config` and returns the root logger, with an
    /// empty service name.
    ///
    /// # Errors
    ///
    /// Any [`SvcLogError`] from [`Sink::build`].
    pub fn new(config: &LogConfig) -> Result<Self, SvcLogError> {
        Ok(Self::with_sink(Sink::build(config)?))
    }

    /// Wraps an already-built sink, with an empty service name.
    #[must_use]
    pub fn with_sink(sink: Sink) -> Self {
        Self {
            sink: Arc::new(sink),
            service_name: String::new(),
        }
    }

    /// Returns a new logger bound to `service_name`, replacing any current
    /// service name and sharing this logger's sink.
    #[must_use]
    pub fn with_service(&self, service_name: &str) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
            service_name: service_name.to_string(),
        }
    }

    /// Returns a new logger for a sub-group: the service name becomes
    /// `"<current>.<group>"`, or just `group` if the current name is empty.
    #[must_use]
    pub fn with_group(&self, group: &str) -> Self {
        let service_name = if self.service_name.is_empty() {
            group.to_string()
        } else {
            format!("{}.{group}", self.service_name)
        };
        Self {
            sink: Arc::clone(&self.sink),
            service_name,
        }
    }

    /// The service name this logger stamps entries with; empty for a root
    /// logger.
    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Replaces the minimum severity of the shared sink.
    ///
    /// Since the sink is shared, this affects every logger derived from the
    /// same root, not just this handle.
    pub fn set_level(&self, severity: Severity) {
        self.sink.set_min_severity(severity);
    }

    /// The current minimum severity of the shared sink.
    #[must_use]
    pub fn level(&self) -> Severity {
        self.sink.min_severity()
    }

    /// Starts an entry with one extra field; the entry is written when a
    /// severity method is called on the returned builder.
    #[track_caller]
    pub fn with_field<K, V>(&self, key: K, value: V) -> EntryBuilder
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.entry_builder().with_field(key, value)
    }

    /// Starts an entry with several extra fields.
    #[track_caller]
    pub fn with_fields<I, K, V>(&self, fields: I) -> EntryBuilder
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.entry_builder().with_fields(fields)
    }

    /// Starts an entry with an `error` field holding the error's display
    /// text.
    #[track_caller]
    pub fn with_error(&self, err: &dyn std::error::Error) -> EntryBuilder {
        self.entry_builder().with_error(err)
    }

    /// Logs `msg` at the given severity.
    ///
    /// Note that this method has the termination side effects of
    /// [`fatal`](Logger::fatal) and [`panic`](Logger::panic) when called
    /// with those severities.
    #[track_caller]
    pub fn log(&self, severity: Severity, msg: impl Display) {
        self.emit(severity, &msg);
        match severity {
            Severity::Fatal => std::process::exit(1),
            Severity::Panic => panic!("{msg}"),
            _ => {}
        }
    }

    /// Logs `msg` at trace severity.
    #[track_caller]
    pub fn trace(&self, msg: impl Display) {
        self.emit(Severity::Trace, &msg);
    }

    /// Logs `msg` at debug severity.
    #[track_caller]
    pub fn debug(&self, msg: impl Display) {
        self.emit(Severity::Debug, &msg);
    }

    /// Logs `msg` at info severity.
    #[track_caller]
    pub fn info(&self, msg: impl Display) {
        self.emit(Severity::Info, &msg);
    }

    /// Logs `msg` at warn severity.
    #[track_caller]
    pub fn warn(&self, msg: impl Display) {
        self.emit(Severity::Warn, &msg);
    }

    /// Logs `msg` at error severity.
    #[track_caller]
    pub fn error(&self, msg: impl Display) {
        self.emit(Severity::Error, &msg);
    }

    /// Logs `msg` at fatal severity, then terminates the process with exit
    /// code 1.
    #[track_caller]
    pub fn fatal(&self, msg: impl Display) -> ! {
        self.emit(Severity::Fatal, &msg);
        std::process::exit(1);
    }

    /// Logs `msg` at panic severity, then panics with the message.
    ///
    /// # Panics
    ///
    /// Always, after the entry has been written.
    #[track_caller]
    pub fn panic(&self, msg: impl Display) -> ! {
        let msg = msg.to_string();
        self.emit(Severity::Panic, &msg);
        panic!("{msg}");
    }

    /// Installs this logger as the global backend for the `log` macro
    /// facade: records from `log::info!` and friends are routed through the
    /// shared sink, stamped with this logger's service name. `fatal` and
    /// `panic` severities are not reachable through the facade.
    ///
    /// # Errors
    ///
    /// `SvcLogError::Log` if a global logger is already installed.
    pub fn install(self) -> Result<(), SvcLogError> {
        crate::facade::install(self)
    }

    #[track_caller]
    fn entry_builder(&self) -> EntryBuilder {
        EntryBuilder {
            sink: Arc::clone(&self.sink),
            service_name: self.service_name.clone(),
            callsite: Callsite::capture(),
            fields: BTreeMap::new(),
        }
    }

    #[track_caller]
    fn emit(&self, severity: Severity, msg: &dyn Display) {
        if !self.sink.enabled(severity) {
            return;
        }
        let callsite = Callsite::capture();
        let mut entry = Entry::new(severity, msg.to_string());
        entry.insert_field(
            "service".to_string(),
            Value::String(self.service_name.clone()),
        );
        if let Some(file) = callsite.file {
            entry.insert_field("file".to_string(), Value::String(file));
        }
        if let Some(func) = callsite.func {
            entry.insert_field("func".to_string(), Value::String(func));
        }
        self.sink.write(&entry);
    }

    pub(crate) fn sink(&self) -> &Sink {
        &self.sink
    }

    // Allows checking the logs written so far to the writer
    #[doc(hidden)]
    pub fn validate_logs(&self, expected: &[(&'static str, &'static str, &'static str)]) {
        self.sink.validate_logs(expected);
    }
}

/// An entry under construction: the base fields plus everything supplied via
/// [`Logger::with_field`], [`Logger::with_fields`], or
/// [`Logger::with_error`].
///
/// Nothing is written until one of the severity methods is invoked; the
/// builder is consumed by them. The call site stamped on the entry is the
/// one where the builder was started.
pub struct EntryBuilder {
    sink: Arc<Sink>,
    service_name: String,
    callsite: Callsite,
    fields: BTreeMap<String, Value>,
}

impl EntryBuilder {
    /// Adds one field.
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Adds several fields.
    #[must_use]
    pub fn with_fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in fields {
            self.fields.insert(key.into(), value.into());
        }
        self
    }

    /// Adds an `error` field holding the error's display text.
    #[must_use]
    pub fn with_error(mut self, err: &dyn std::error::Error) -> Self {
        self.fields
            .insert("error".to_string(), Value::String(err.to_string()));
        self
    }

    /// Writes the entry at the given severity.
    ///
    /// Note that this method has the termination side effects of
    /// [`fatal`](EntryBuilder::fatal) and [`panic`](EntryBuilder::panic)
    /// when called with those severities.
    pub fn log(self, severity: Severity, msg: impl Display) {
        self.emit(severity, &msg);
        match severity {
            Severity::Fatal => std::process::exit(1),
            Severity::Panic => panic!("{msg}"),
            _ => {}
        }
    }

    /// Writes the entry at trace severity.
    pub fn trace(self, msg: impl Display) {
        self.emit(Severity::Trace, &msg);
    }

    /// Writes the entry at debug severity.
    pub fn debug(self, msg: impl Display) {
        self.emit(Severity::Debug, &msg);
    }

    /// Writes the entry at info severity.
    pub fn info(self, msg: impl Display) {
        self.emit(Severity::Info, &msg);
    }

    /// Writes the entry at warn severity.
    pub fn warn(self, msg: impl Display) {
        self.emit(Severity::Warn, &msg);
    }

    /// Writes the entry at error severity.
    pub fn error(self, msg: impl Display) {
        self.emit(Severity::Error, &msg);
    }

    /// Writes the entry at fatal severity, then terminates the process with
    /// exit code 1.
    pub fn fatal(self, msg: impl Display) -> ! {
        self.emit(Severity::Fatal, &msg);
        std::process::exit(1);
    }

    /// Writes the entry at panic severity, then panics with the message.
    ///
    /// # Panics
    ///
    /// Always, after the entry has been written.
    pub fn panic(self, msg: impl Display) -> ! {
        let msg = msg.to_string();
        self.emit(Severity::Panic, &msg);
        panic!("{msg}");
    }

    fn emit(self, severity: Severity, msg: &dyn Display) {
        let Self {
            sink,
            service_name,
            callsite,
            fields,
        } = self;
        if !sink.enabled(severity) {
            return;
        }
        let mut entry = Entry::new(severity, msg.to_string());
        entry.insert_field("service".to_string(), Value::String(service_name));
        if let Some(file) = callsite.file {
            entry.insert_field("file".to_string(), Value::String(file));
        }
        if let Some(func) = callsite.func {
            entry.insert_field("func".to_string(), Value::String(func));
        }
        for (key, value) in fields {
            entry.insert_field(key, value);
        }
        sink.write(&entry);
    }
}
