use crate::callsite;
use crate::entry::Entry;
use crate::error::SvcLogError;
use crate::logger::Logger;
use crate::severity::Severity;
use log::{LevelFilter, Metadata, Record};
use serde_json::Value;

// `LogFacade` routes records from the `log` macros through the shared sink,
// stamped with the service name of the logger it was installed from.
//
// The record's own file/line metadata is used for the `file` field; the
// `func` field is resolved like for direct calls.
struct LogFacade {
    logger: Logger,
}

impl log::Log for LogFacade {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.logger.sink().enabled(Severity::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        let severity = Severity::from(record.level());
        if !self.logger.sink().enabled(severity) {
            return;
        }
        let mut entry = Entry::new(severity, record.args().to_string());
        entry.insert_field(
            "service".to_string(),
            Value::String(self.logger.service_name().to_string()),
        );
        if let (Some(file), Some(line)) = (record.file(), record.line()) {
            entry.insert_field(
                "file".to_string(),
                Value::String(callsite::format_location(file, line)),
            );
        }
        if let Some(func) = callsite::caller_function() {
            entry.insert_field("func".to_string(), Value::String(func));
        }
        self.logger.sink().write(&entry);
    }

    fn flush(&self) {
        self.logger.sink().flush();
    }
}

pub(crate) fn install(logger: Logger) -> Result<(), SvcLogError> {
    log::set_boxed_logger(Box::new(LogFacade { logger }))?;
    // the severity filter lives in the sink and can change at runtime,
    // so the facade itself must see everything
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
