use crate::deferred_now::DeferredNow;
use crate::entry::Entry;
use serde_json::{Map, Value};
use std::io::Write;

/// Function type for formatting one entry into one output line,
/// without the trailing newline.
pub type FormatFunction =
    fn(&mut dyn Write, &mut DeferredNow, &Entry) -> Result<(), std::io::Error>;

/// A logline formatter that produces `key=value` lines like <br>
/// ```time="2026-08-07T10:12:03+02:00" level=info msg="Service started" file="main.rs:27" service=billing```
/// <br>
/// i.e. with a full timestamp, the severity, the message, and the entry's
/// fields sorted by key. Values are quoted only when they contain characters
/// outside the plain set or are empty.
pub fn text_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    entry: &Entry,
) -> Result<(), std::io::Error> {
    write!(w, "time=")?;
    write_text_value(w, &now.format_rfc3339())?;
    write!(w, " level={}", entry.severity())?;
    write!(w, " msg=")?;
    write_text_value(w, entry.message())?;
    for (key, value) in entry.fields() {
        write!(w, " {key}=")?;
        match value {
            Value::String(s) => write_text_value(w, s)?,
            other => write!(w, "{other}")?,
        }
    }
    Ok(())
}

/// A logline formatter that produces one JSON object per line, with the keys
/// `time`, `level`, `msg`, plus the entry's fields (`service`, and `file`,
/// `func`, and caller-supplied fields where present). Key order is not
/// guaranteed.
pub fn json_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    entry: &Entry,
) -> Result<(), std::io::Error> {
    let mut map = Map::new();
    map.insert("time".to_string(), Value::String(now.format_rfc3339()));
    map.insert(
        "level".to_string(),
        Value::String(entry.severity().as_str().to_string()),
    );
    map.insert("msg".to_string(), Value::String(entry.message().to_string()));
    for (key, value) in entry.fields() {
        map.insert(key.clone(), value.clone());
    }
    serde_json::to_writer(&mut *w, &Value::Object(map)).map_err(std::io::Error::from)
}

// A value can stay bare if it only consists of characters that cannot be
// mistaken for logfmt structure.
fn needs_quoting(s: &str) -> bool {
    s.is_empty()
        || !s.bytes().all(|b| {
            b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'/' | b'@' | b'^' | b'+')
        })
}

fn write_text_value(w: &mut dyn Write, s: &str) -> Result<(), std::io::Error> {
    if needs_quoting(s) {
        write!(w, "{s:?}")
    } else {
        w.write_all(s.as_bytes())
    }
}

#[cfg(test)]
mod test {
    use super::{json_format, text_format};
    use crate::entry::Entry;
    use crate::{DeferredNow, Severity};
    use serde_json::Value;

    fn sample_entry() -> Entry {
        let mut entry = Entry::new(Severity::Info, "Service started".to_string());
        entry.insert_field("service".to_string(), Value::from("billing"));
        entry.insert_field("file".to_string(), Value::from("main.rs:27"));
        entry.insert_field("attempt".to_string(), Value::from(3));
        entry
    }

    #[test]
    fn text_line_shape() {
        let mut buf = Vec::<u8>::new();
        text_format(&mut buf, &mut DeferredNow::new(), &sample_entry()).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert!(line.starts_with("time=\""), "line: {line}");
        assert!(line.contains(" level=info"), "line: {line}");
        assert!(line.contains(" msg=\"Service started\""), "line: {line}");
        assert!(line.contains(" service=billing"), "line: {line}");
        assert!(line.contains(" file=\"main.rs:27\""), "line: {line}");
        assert!(line.contains(" attempt=3"), "line: {line}");
        assert!(!line.ends_with('\n'), "formatters must not append newlines");
    }

    #[test]
    fn text_quotes_empty_and_spaced_values() {
        let mut entry = Entry::new(Severity::Warn, "x".to_string());
        entry.insert_field("service".to_string(), Value::from(""));
        entry.insert_field("note".to_string(), Value::from("two words"));
        let mut buf = Vec::<u8>::new();
        text_format(&mut buf, &mut DeferredNow::new(), &entry).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert!(line.contains(" service=\"\""), "line: {line}");
        assert!(line.contains(" note=\"two words\""), "line: {line}");
        assert!(line.contains(" msg=x"), "line: {line}");
    }

    #[test]
    fn json_line_shape() {
        let mut buf = Vec::<u8>::new();
        json_format(&mut buf, &mut DeferredNow::new(), &sample_entry()).unwrap();
        let object: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(object["level"], "info");
        assert_eq!(object["msg"], "Service started");
        assert_eq!(object["service"], "billing");
        assert_eq!(object["attempt"], 3);
        assert!(object["time"].as_str().is_some());
    }
}
