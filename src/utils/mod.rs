//! Shared helpers behind the extract pipeline:
//!
//! - [`reader`] - capture file reader with automatic decompression
//! - [`naming`] - output filename derivation and URL sanitization
//! - [`format`] - number formatting for progress messages
//! - [`time`] - capture timestamp parsing and display
//! - [`progress`] - progress bar for the entry-writing loop

pub mod format;
pub mod naming;
pub mod progress;
pub mod reader;
pub mod time;
