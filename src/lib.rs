//! # HAR Splitter
//!
//! Command-line tool that decomposes an HTTP Archive (HAR) capture into a
//! summary index plus per-request artifact files, for developers inspecting
//! network traces recorded by a browser or proxy.
//!
//! ## Overview
//!
//! A HAR file is one large JSON document. Digging a single exchange out of
//! it by hand is miserable; `har-splitter` explodes the capture into small
//! files you can grep, diff, and open directly:
//!
//! ```bash
//! har-splitter session.har
//! ```
//!
//! writes into a sibling `session_extracted/` directory:
//!
//! - `00_summary.json` - the capture's metadata plus an index record
//!   (`index`, `url`, `method`, `status`, `startedDateTime`) per entry
//! - `NN_<METHOD>_<urltoken>.json` - each full entry, pretty-printed,
//!   byte-faithful to the capture
//! - `NN_request_body.txt` / `NN_response_body.txt` - raw bodies, written
//!   verbatim whenever the capture recorded them
//!
//! Gzip- and zstd-compressed captures (`session.har.gz`, `session.har.zst`)
//! are decompressed transparently. The run is strictly sequential and
//! all-or-nothing: the first failure aborts with a non-zero exit, leaving
//! whatever was already written in place.
//!
//! ## Architecture
//!
//! - [`har`] - HAR parsing and typed data structures
//! - [`commands`] - the extract pipeline
//! - [`utils`] - shared helpers (reader, naming, progress, timestamps)
//! - [`error`] - the error taxonomy, one variant per failure class
//!
//! ## Installation
//!
//! ```bash
//! cargo install har-splitter
//! ```

pub mod commands;
pub mod error;
pub mod har;
pub mod utils;
