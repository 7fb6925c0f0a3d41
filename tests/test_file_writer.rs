use svclog::{Format, LogConfig, Logger, OutputTarget, Severity};

fn file_config(path: std::path::PathBuf, format: Format) -> LogConfig {
    LogConfig {
        level: Severity::Info,
        output: OutputTarget::File,
        file_path: Some(path),
        format,
    }
}

// The written file must contain the exact message text, one line per call,
// and nothing for suppressed severities.
#[test]
fn text_round_trip_and_filtering() {
    let dir = temp_dir::TempDir::new().unwrap();
    let path = dir.path().join("text.log");
    let logger = Logger::new(&file_config(path.clone(), Format::Text))
        .unwrap()
        .with_service("roundtrip");

    logger.info("Service started");
    logger.debug("below the minimum severity, must not appear");
    logger.warn(format_args!("attempt {} failed", 2));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Service started"), "content: {content}");
    assert!(!content.contains("must not appear"), "content: {content}");
    assert!(content.contains("attempt 2 failed"), "content: {content}");

    logger.validate_logs(&[
        ("level=info", "msg=\"Service started\"", "service=roundtrip"),
        ("level=warn", "attempt 2 failed", "service=roundtrip"),
    ]);
}

#[test]
fn json_lines_carry_the_base_fields() {
    let dir = temp_dir::TempDir::new().unwrap();
    let path = dir.path().join("json.log");
    let logger = Logger::new(&file_config(path.clone(), Format::Json))
        .unwrap()
        .with_service("encoder");

    logger.info("Service started");
    logger.with_field("attempt", 3).error("upstream failed");

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();

    let first: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
    assert_eq!(first["level"], "info");
    assert_eq!(first["msg"], "Service started");
    assert_eq!(first["service"], "encoder");
    assert!(first["time"].as_str().is_some());
    assert!(
        first["file"]
            .as_str()
            .is_some_and(|f| f.starts_with("test_file_writer.rs:")),
        "file field: {first}"
    );

    let second: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
    assert_eq!(second["level"], "error");
    assert_eq!(second["attempt"], 3);
    assert_eq!(lines.next(), None);
}

// An entry below the configured minimum produces no output at all, also for
// a freshly raised level through a derived handle.
#[test]
fn raising_the_level_suppresses_output() {
    let dir = temp_dir::TempDir::new().unwrap();
    let path = dir.path().join("raised.log");
    let logger = Logger::new(&file_config(path.clone(), Format::Text)).unwrap();
    let derived = logger.with_service("quiet");

    derived.set_level(Severity::Error);
    logger.info("suppressed through the shared sink");
    derived.warn("also suppressed");
    derived.error("kept");

    logger.validate_logs(&[("level=error", "msg=kept", "service=\"\"")]);
}
