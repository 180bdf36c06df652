//! Color lookup errors.

/// Errors that can occur when parsing a color name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("Color '{name}' not found")]
    Unknown { name: String },
}
