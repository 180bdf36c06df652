//! Colored message output.
//!
//! [`write_colored`] holds the rendering rules and targets any writer;
//! [`print_colored`] and [`print_colored_with_end`] point it at stdout.

use crate::color::{Color, ColorError, RESET};
use std::io::{self, Write};

/// Options for a colored write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Terminator written after the message (empty to suppress)
    pub line_end: String,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            line_end: "\n".to_string(),
        }
    }
}

impl PrintOptions {
    /// Options with a custom terminator.
    pub fn with_line_end(line_end: impl Into<String>) -> Self {
        Self {
            line_end: line_end.into(),
        }
    }
}

/// Wrap `message` in the color's escape code and the reset code.
///
/// The message is not inspected; embedded escape sequences pass through.
pub fn colorize(message: &str, color: Color) -> String {
    format!("{}{}{}", color.escape_code(), message, RESET)
}

/// Warning printed when `color` is not in the color table (no newline).
///
/// The name is echoed exactly as the caller gave it.
pub fn warning_line(color: &str) -> String {
    let err = ColorError::Unknown {
        name: color.to_string(),
    };
    format!("(Warning: {}. printing with default color.)", err)
}

/// Write `message` to `out` in the named color.
///
/// A known color produces a single write of
/// `<escape><message><reset><line_end>`. An unknown color produces two
/// writes: the [`warning_line`] plus a newline, then `<message><line_end>`
/// with no escape codes. Only I/O failures are returned as errors.
pub fn write_colored<W: Write>(
    out: &mut W,
    message: &str,
    color: &str,
    options: &PrintOptions,
) -> io::Result<()> {
    match Color::from_name(color) {
        Some(c) => {
            tracing::debug!(color = c.name(), "writing colored message");
            let mut line = colorize(message, c);
            line.push_str(&options.line_end);
            out.write_all(line.as_bytes())
        }
        None => {
            tracing::debug!(color, "unknown color, using default");
            let mut warning = warning_line(color);
            warning.push('\n');
            out.write_all(warning.as_bytes())?;

            let mut line = String::with_capacity(message.len() + options.line_end.len());
            line.push_str(message);
            line.push_str(&options.line_end);
            out.write_all(line.as_bytes())
        }
    }
}

/// Print `message` to stdout in the named color, followed by a newline.
///
/// Color names are matched case-insensitively against black, red, green,
/// yellow, blue, magenta, cyan and white. Any other name prints a warning
/// and then the plain message.
pub fn print_colored(message: &str, color: &str) -> io::Result<()> {
    print_to_stdout(message, color, &PrintOptions::default())
}

/// Print `message` to stdout in the named color, followed by `line_end`.
///
/// Stdout stays locked for the whole call, so the warning and the message
/// are never split by output from another thread.
pub fn print_colored_with_end(message: &str, color: &str, line_end: &str) -> io::Result<()> {
    print_to_stdout(message, color, &PrintOptions::with_line_end(line_end))
}

fn print_to_stdout(message: &str, color: &str, options: &PrintOptions) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_and_flush(&mut out, message, color, options)
}

/// Write then flush, so output without a trailing newline is not left in
/// a line buffer.
fn write_and_flush<W: Write>(
    out: &mut W,
    message: &str,
    color: &str,
    options: &PrintOptions,
) -> io::Result<()> {
    write_colored(out, message, color, options)?;
    out.flush()
}
