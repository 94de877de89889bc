//! Capturing the native call stack.
//!
//! Rust frames are never symbolic: they are listed with their module path as
//! the class and their function name as the method.

use std::path::Path;

use causeway_internals::RawFrame;

/// Frames of these functions are dropped from the top of a captured stack.
const CAPTURE_FUNCTIONS: &[&str] = &[
    "backtrace::",
    "causeway::capture::capture_stack",
    "causeway::failure::Failure::with_captured_stack",
];

/// Captures the current call stack, innermost frame first.
///
/// Frames without a symbol name or a file name are skipped, as are the frames
/// of the capturing machinery itself.
pub fn capture_stack() -> Vec<RawFrame> {
    let mut frames = Vec::new();
    let mut initial_filtering = true;

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            let (Some(name), Some(path)) = (symbol.name(), symbol.filename()) else {
                return;
            };
            let name = format!("{name:#}");

            if initial_filtering {
                if CAPTURE_FUNCTIONS.iter().any(|prefix| name.starts_with(prefix)) {
                    return;
                }
                initial_filtering = false;
            }

            let (module, function) = split_symbol(&name);
            frames.push(RawFrame::new(
                file_name(path),
                symbol.lineno(),
                module.to_owned(),
                function.to_owned(),
            ));
        });
        true
    });

    frames
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Splits a demangled symbol at its last `::` outside of generic arguments.
fn split_symbol(name: &str) -> (&str, &str) {
    let mut angle_nesting_level = 0u64;
    let mut potential_function_arrow = false;
    let mut split = None;

    for (i, c) in name.char_indices() {
        let was_potential_function_arrow = potential_function_arrow;
        potential_function_arrow = c == '-';

        if c == '<' {
            angle_nesting_level = angle_nesting_level.saturating_add(1);
        } else if c == '>' && !was_potential_function_arrow {
            angle_nesting_level = angle_nesting_level.saturating_sub(1);
        } else if c == ':' && angle_nesting_level == 0 && name[i..].starts_with("::") {
            split = Some(i);
        }
    }

    match split {
        Some(i) => (&name[..i], &name[i + 2..]),
        None => ("", name),
    }
}
