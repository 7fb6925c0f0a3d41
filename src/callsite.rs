use std::panic::Location;
use std::path::Path;

// Caller metadata attached to every entry: the application call site as
// "<file basename>:<line>", and the enclosing function's qualified name.
// Both are best-effort; a missing value is omitted from the entry.
#[derive(Debug)]
pub(crate) struct Callsite {
    pub(crate) file: Option<String>,
    pub(crate) func: Option<String>,
}

impl Callsite {
    // Captures the call site of the nearest caller that is not itself
    // annotated with #[track_caller].
    #[track_caller]
    pub(crate) fn capture() -> Self {
        let location = Location::caller();
        Self {
            file: Some(format_location(location.file(), location.line())),
            func: caller_function(),
        }
    }
}

pub(crate) fn format_location(file: &str, line: u32) -> String {
    let base = Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file);
    format!("{base}:{line}")
}

// Walks the stack until the first frame that belongs to neither this crate
// nor the logging machinery, and returns its demangled symbol name.
// Needs debug symbols; returns None when resolution fails.
#[cfg(feature = "function_names")]
pub(crate) fn caller_function() -> Option<String> {
    let mut o_name: Option<String> = None;
    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if o_name.is_some() {
                return;
            }
            if let Some(name) = symbol.name() {
                let name = format!("{name:#}");
                if !is_machinery(&name) {
                    o_name = Some(name);
                }
            }
        });
        o_name.is_none()
    });
    o_name
}

#[cfg(not(feature = "function_names"))]
pub(crate) fn caller_function() -> Option<String> {
    None
}

#[cfg(feature = "function_names")]
fn is_machinery(name: &str) -> bool {
    name.contains("svclog::")
        || name.starts_with("backtrace::")
        || name.starts_with("log::")
        || name.starts_with("std::")
        || name.starts_with("core::")
}
