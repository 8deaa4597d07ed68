//! Capture file reader with automatic decompression support.
//!
//! Browsers export plain `.har` files, but captures archived from proxies or
//! CI jobs often arrive gzip- or zstd-compressed. `open_file` detects the
//! compression by extension and hands back a plain `Read`, so the rest of
//! the pipeline never knows the difference.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::SplitError;

/// Opens a capture file, transparently decompressing `.gz` and `.zst`.
///
/// Any other extension (or none) is read as-is. Open failures and decoder
/// setup failures both surface as [`SplitError::Read`].
pub fn open_file(path: &Path) -> Result<Box<dyn Read>, SplitError> {
    let file = File::open(path).map_err(|source| SplitError::read(path, source))?;

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match extension {
        "gz" => Ok(Box::new(GzDecoder::new(file))),
        "zst" => {
            let decoder =
                zstd::Decoder::new(file).map_err(|source| SplitError::read(path, source))?;
            Ok(Box::new(decoder))
        }
        _ => Ok(Box::new(file)),
    }
}
