//! HAR capture parsing and data structures.
//!
//! A HAR file is one JSON document: a `log` object holding capture metadata
//! and an ordered `entries` array of request/response exchanges. The splitter
//! only inspects a handful of fields per entry; everything else passes
//! through untouched as raw JSON.

pub mod types;
