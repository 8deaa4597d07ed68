//! HAR capture decomposition.
//!
//! Reads one capture, writes a summary index plus per-entry artifact files
//! into a sibling directory derived from the input name.
//!
//! # Usage
//!
//! ```bash
//! # Plain or compressed captures
//! har-splitter session.har
//! har-splitter session.har.gz
//!
//! # Also export the summary index as CSV
//! har-splitter session.har --export-csv index.csv
//! ```
//!
//! # Output
//!
//! Inside `<input-stem>_extracted/`, created next to the input and reused
//! (never cleared) if it already exists:
//!
//! - `00_summary.json` - capture metadata plus one index record per entry
//! - `NN_<METHOD>_<urltoken>.json` - the full original entry, pretty-printed
//! - `NN_request_body.txt` - raw request body, only when captured
//! - `NN_response_body.txt` - raw response body, only when captured
//!
//! Re-running on an unchanged capture overwrites the same files byte-for-byte.
//! Stale files from an earlier run with more entries are left in place.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::SplitError;
use crate::har::types::{HarDocument, HarEntry, HarSummary, SummaryLog, SummaryRecord};
use crate::utils::format::format_number;
use crate::utils::naming;
use crate::utils::progress::ProgressBar;
use crate::utils::reader::open_file;
use crate::utils::time::{format_timestamp, parse_timestamp, span_human};

/// Suffix appended to the input stem to form the output directory name.
const OUTPUT_DIR_SUFFIX: &str = "_extracted";
/// Name of the aggregate index file; the `00` prefix sorts it ahead of the
/// per-entry files.
const SUMMARY_FILE: &str = "00_summary.json";

/// Decompose `har_file` into its output directory.
///
/// The pipeline is strictly sequential: read, parse, create the output
/// directory, validate the shape, write the summary, then write the
/// per-entry files in capture order. The first failure aborts the run;
/// files already written stay on disk.
pub fn run(har_file: &str, export_csv: Option<&str>) -> Result<(), SplitError> {
    let har_path = Path::new(har_file);

    let text = read_capture(har_path)?;
    let document: serde_json::Value = serde_json::from_str(&text).map_err(|source| {
        SplitError::Parse {
            path: har_path.to_path_buf(),
            source,
        }
    })?;

    // Created before the shape check; an invalid-but-parseable capture
    // leaves an empty directory behind.
    let output_dir = derive_output_dir(har_path);
    if !output_dir.exists() {
        fs::create_dir(&output_dir).map_err(|source| SplitError::write(&output_dir, source))?;
    }

    let HarDocument {
        version,
        creator,
        pages,
        raw_entries,
    } = HarDocument::from_value(document)?;

    eprintln!(
        "Found {} entries in the HAR file.",
        format_number(raw_entries.len())
    );

    // Build every typed view up front: a malformed entry fails the run
    // before any output beyond the directory is written.
    let mut entries = Vec::with_capacity(raw_entries.len());
    for (index, raw) in raw_entries.iter().enumerate() {
        let entry = HarEntry::from_value(raw)
            .map_err(|err| SplitError::invalid_format(format!("entry {index}: {err}")))?;
        entries.push(entry);
    }

    let records: Vec<SummaryRecord> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| SummaryRecord {
            index,
            url: entry.request.url.clone(),
            method: entry.request.method.clone(),
            status: entry.response.status,
            started_date_time: entry.started_date_time.clone(),
        })
        .collect();

    let summary = HarSummary {
        log: SummaryLog {
            version,
            creator,
            pages,
            entries: records,
        },
    };
    write_pretty_json(&output_dir.join(SUMMARY_FILE), &summary)?;

    let progress = ProgressBar::new(entries.len(), "Extracting");
    for (index, (raw, entry)) in raw_entries.iter().zip(&entries).enumerate() {
        let meta_name = naming::entry_filename(index, &entry.request.method, &entry.request.url);
        write_pretty_json(&output_dir.join(meta_name), raw)?;

        if let Some(body) = entry.request_body() {
            write_text(&output_dir.join(naming::request_body_filename(index)), body)?;
        }
        if let Some(body) = entry.response_body() {
            write_text(&output_dir.join(naming::response_body_filename(index)), body)?;
        }

        progress.inc();
    }
    progress.finish();

    if let Some((first, last)) = capture_window(&entries) {
        eprintln!(
            "Capture window: {} -> {} ({})",
            format_timestamp(&first),
            format_timestamp(&last),
            span_human(&first, &last)
        );
    }

    if let Some(csv_path) = export_csv {
        export_summary_csv(Path::new(csv_path), &summary.log.entries)?;
        eprintln!("✓ Summary index exported to {csv_path}");
    }

    eprintln!(
        "Successfully extracted {} entries to {}",
        format_number(entries.len()),
        output_dir.display()
    );

    Ok(())
}

/// Read the capture's full contents as text, decompressing if needed.
fn read_capture(path: &Path) -> Result<String, SplitError> {
    let mut reader = open_file(path)?;
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| SplitError::read(path, source))?;
    Ok(text)
}

/// `capture.har` -> sibling `capture_extracted`; the last extension is
/// stripped, so `capture.har.gz` becomes `capture.har_extracted`.
fn derive_output_dir(har_path: &Path) -> PathBuf {
    let stem = har_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("har");
    har_path.with_file_name(format!("{stem}{OUTPUT_DIR_SUFFIX}"))
}

/// Write a value as pretty-printed JSON with 2-space indentation.
fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> Result<(), SplitError> {
    let json = serde_json::to_string_pretty(value).map_err(|source| {
        SplitError::write(path, io::Error::new(io::ErrorKind::InvalidData, source))
    })?;
    fs::write(path, json).map_err(|source| SplitError::write(path, source))
}

/// Write body text verbatim, no re-encoding.
fn write_text(path: &Path, text: &str) -> Result<(), SplitError> {
    fs::write(path, text).map_err(|source| SplitError::write(path, source))
}

/// Earliest and latest parseable `startedDateTime` across the capture.
fn capture_window(entries: &[HarEntry]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let mut window: Option<(DateTime<Utc>, DateTime<Utc>)> = None;
    for ts in entries.iter().filter_map(|e| e.started_date_time.as_deref()) {
        let Some(dt) = parse_timestamp(ts) else {
            continue;
        };
        window = Some(match window {
            Some((first, last)) => (first.min(dt), last.max(dt)),
            None => (dt, dt),
        });
    }
    window
}

/// One CSV row per summary record, with a header. An absent
/// `startedDateTime` becomes an empty field.
fn export_summary_csv(path: &Path, records: &[SummaryRecord]) -> Result<(), SplitError> {
    let to_write_err =
        |err: csv::Error| SplitError::write(path, io::Error::new(io::ErrorKind::Other, err));

    let mut writer = csv::Writer::from_path(path).map_err(to_write_err)?;
    writer
        .write_record(["index", "url", "method", "status", "startedDateTime"])
        .map_err(to_write_err)?;

    for record in records {
        writer
            .write_record([
                record.index.to_string(),
                record.url.clone(),
                record.method.clone(),
                record.status.to_string(),
                record.started_date_time.clone().unwrap_or_default(),
            ])
            .map_err(to_write_err)?;
    }

    writer
        .flush()
        .map_err(|source| SplitError::write(path, source))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_output_dir_strips_extension() {
        assert_eq!(
            derive_output_dir(Path::new("/tmp/session.har")),
            PathBuf::from("/tmp/session_extracted")
        );
    }

    #[test]
    fn test_derive_output_dir_compressed_capture() {
        assert_eq!(
            derive_output_dir(Path::new("/tmp/session.har.gz")),
            PathBuf::from("/tmp/session.har_extracted")
        );
    }

    #[test]
    fn test_derive_output_dir_without_extension() {
        assert_eq!(
            derive_output_dir(Path::new("capture")),
            PathBuf::from("capture_extracted")
        );
    }

    #[test]
    fn test_capture_window_skips_unparseable() {
        let entries: Vec<HarEntry> = [
            r#"{"startedDateTime":"2026-03-14T09:00:05Z","request":{"method":"GET","url":"u"},"response":{"status":200}}"#,
            r#"{"startedDateTime":"garbage","request":{"method":"GET","url":"u"},"response":{"status":200}}"#,
            r#"{"startedDateTime":"2026-03-14T09:00:01Z","request":{"method":"GET","url":"u"},"response":{"status":200}}"#,
        ]
        .iter()
        .map(|json| serde_json::from_str(json).unwrap())
        .collect();

        let (first, last) = capture_window(&entries).unwrap();
        assert_eq!(format_timestamp(&first), "2026-03-14 09:00:01 UTC");
        assert_eq!(format_timestamp(&last), "2026-03-14 09:00:05 UTC");
    }

    #[test]
    fn test_capture_window_empty() {
        assert!(capture_window(&[]).is_none());
    }
}
