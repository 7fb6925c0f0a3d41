use svclog::{Format, LogConfig, Logger, OutputTarget, Severity};

fn file_logger(dir: &temp_dir::TempDir, name: &str) -> Logger {
    Logger::new(&LogConfig {
        level: Severity::Debug,
        output: OutputTarget::File,
        file_path: Some(dir.path().join(name)),
        format: Format::Text,
    })
    .unwrap()
}

#[test]
fn service_and_group_derivation() {
    let dir = temp_dir::TempDir::new().unwrap();
    let root = file_logger(&dir, "derivation.log");

    assert_eq!(root.service_name(), "");
    assert_eq!(root.with_service("svc").service_name(), "svc");
    assert_eq!(
        root.with_service("svc").with_group("sub").service_name(),
        "svc.sub"
    );
    assert_eq!(root.with_group("sub").service_name(), "sub");
    assert_eq!(
        root.with_service("a").with_group("b").with_group("c").service_name(),
        "a.b.c"
    );

    root.with_service("svc").with_group("sub").info("hello");
    root.validate_logs(&[("level=info", "msg=hello", "service=svc.sub")]);
}

#[test]
fn level_changes_are_visible_through_every_handle() {
    let dir = temp_dir::TempDir::new().unwrap();
    let root = file_logger(&dir, "levels.log");
    let handle_a = root.with_service("a");
    let handle_b = root.with_service("b");

    handle_a.set_level(Severity::Warn);
    assert_eq!(root.level(), Severity::Warn);
    assert_eq!(handle_b.level(), Severity::Warn);

    handle_b.info("dropped by the shared filter");
    handle_b.warn("kept");
    root.validate_logs(&[("level=warn", "msg=kept", "service=b")]);
}

#[test]
fn field_builders_merge_into_the_entry() {
    let dir = temp_dir::TempDir::new().unwrap();
    let logger = file_logger(&dir, "fields.log").with_service("billing");

    logger.with_field("invoice", 4711).info("paid");
    logger
        .with_fields([("customer", "acme"), ("region", "eu-1")])
        .debug("lookup");

    let parse_failure = "not a number".parse::<u32>().unwrap_err();
    logger.with_error(&parse_failure).error("cannot parse quota");

    logger.validate_logs(&[
        ("level=info", "invoice=4711", "service=billing"),
        ("level=debug", "customer=acme", "region=eu-1"),
        ("level=error", "error=", "msg=\"cannot parse quota\""),
    ]);
}

// The call site stamped on an entry is the application call site, with the
// file path reduced to its basename.
#[test]
fn entries_carry_the_call_site() {
    let dir = temp_dir::TempDir::new().unwrap();
    let logger = file_logger(&dir, "callsite.log");

    logger.info("located");
    logger.with_field("k", "v").info("located via builder");

    logger.validate_logs(&[
        ("msg=located", "file=\"test_service_groups.rs:", ""),
        ("msg=\"located via builder\"", "file=\"test_service_groups.rs:", "k=v"),
    ]);
}
