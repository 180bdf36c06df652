//! ansiprint - colored console output with ANSI escape codes
//!
//! Wraps a message in one of the eight standard foreground colors and
//! writes it to standard output. Unknown color names fall back to plain
//! output after printing a warning line.
//!
//! ```no_run
//! ansiprint::print_colored("build finished", "green")?;
//! ansiprint::print_colored_with_end("progress: ", "Yellow", "")?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod color;
pub mod printer;

pub use color::{Color, ColorError, RESET};
pub use printer::{
    colorize, print_colored, print_colored_with_end, warning_line, write_colored, PrintOptions,
};
