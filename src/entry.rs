use crate::severity::Severity;
use serde_json::Value;
use std::collections::BTreeMap;

// Keys that the formatters reserve for the line skeleton; a caller-supplied
// field with one of these names is stored under a `fields.` prefix instead
// of clobbering the skeleton.
const RESERVED_KEYS: [&str; 3] = ["time", "level", "msg"];

/// One structured log record: severity, message, and a field map.
///
/// Entries are ephemeral; one is built per logging call and dropped after it
/// has been written. The timestamp is not part of the entry, it is generated
/// during the write (see [`DeferredNow`](crate::DeferredNow)).
#[derive(Debug)]
pub struct Entry {
    severity: Severity,
    message: String,
    fields: BTreeMap<String, Value>,
}

impl Entry {
    pub(crate) fn new(severity: Severity, message: String) -> Self {
        Self {
            severity,
            message,
            fields: BTreeMap::new(),
        }
    }

    // Inserts a field, dodging the reserved line keys. Later inserts win.
    pub(crate) fn insert_field(&mut self, key: String, value: Value) {
        let key = if RESERVED_KEYS.contains(&key.as_str()) {
            format!("fields.{key}")
        } else {
            key
        };
        self.fields.insert(key, value);
    }

    /// The entry's severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// All fields, sorted by key.
    #[must_use]
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }
}
