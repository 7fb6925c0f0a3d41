use chrono::{DateTime, Local, SecondsFormat};

/// Deferred timestamp creation.
///
/// Is used to ensure that a log entry that is fanned out to multiple writers
/// (in maybe different formats) always carries the same timestamp.
#[derive(Debug)]
pub struct DeferredNow(Option<DateTime<Local>>);

impl Default for DeferredNow {
    fn default() -> Self {
        Self::new()
    }
}

impl DeferredNow {
    /// Constructs a new instance, but does not generate the timestamp.
    #[must_use]
    pub fn new() -> Self {
        Self(None)
    }

    /// Retrieve the timestamp.
    ///
    /// Requires mutability because the first caller will generate the
    /// timestamp.
    pub fn now(&mut self) -> &DateTime<Local> {
        self.0.get_or_insert_with(Local::now)
    }

    /// The timestamp as an RFC3339 string with the local offset,
    /// e.g. `2026-08-07T10:12:03+02:00`.
    pub fn format_rfc3339(&mut self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Secs, false)
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn test_deferred_now() {
        let mut deferred_now = super::DeferredNow::new();
        let now = deferred_now.now().to_string();
        std::thread::sleep(std::time::Duration::from_millis(300));
        let again = deferred_now.now().to_string();
        assert_eq!(now, again);
    }
}
