//! The fixed foreground color table.
//!
//! Eight named colors map to the ANSI SGR codes 30 through 37. The table is
//! static data, so lookups are safe from any thread.

mod error;
mod table;

pub use error::ColorError;
pub use table::{Color, RESET};
