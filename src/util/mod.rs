//! Utility functions module
//!
//! Text helpers shared by the screens: size formatting, word wrapping,
//! and truncation measured in characters.

pub mod text;

// Re-export commonly used functions
pub use text::{format_bytes, truncate_chars, wrap};
