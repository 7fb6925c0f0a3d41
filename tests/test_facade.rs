use log::{debug, info};
use svclog::{Format, LogConfig, Logger, OutputTarget, Severity};

// Installing a logger as the global `log` backend routes macro calls through
// the shared sink; the sink's filter still applies. Installing twice fails.
//
// Keep everything in one test function: the `log` facade is process-global.
#[test]
fn facade_routes_macro_calls() {
    let dir = temp_dir::TempDir::new().unwrap();
    let path = dir.path().join("facade.log");
    let config = LogConfig {
        level: Severity::Info,
        output: OutputTarget::File,
        file_path: Some(path),
        format: Format::Text,
    };
    let logger = Logger::new(&config).unwrap().with_service("facade");
    let handle = logger.clone();
    logger.install().unwrap();

    info!("via the log facade");
    debug!("below the minimum severity");

    handle.validate_logs(&[(
        "level=info",
        "msg=\"via the log facade\"",
        "file=\"test_facade.rs:",
    )]);

    // the severity cell is shared with the facade
    handle.set_level(Severity::Debug);
    debug!("now visible");
    handle.validate_logs(&[
        ("level=info", "via the log facade", "service=facade"),
        ("level=debug", "msg=\"now visible\"", "service=facade"),
    ]);

    let second = Logger::new(&LogConfig::default()).unwrap();
    assert!(second.install().is_err());
}
