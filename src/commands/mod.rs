//! Command implementations.
//!
//! - [`extract`] - decompose a HAR capture into a summary index and
//!   per-entry artifact files

pub mod extract;
