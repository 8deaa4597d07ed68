//! Output filename derivation.
//!
//! Filenames are a fixed external contract: downstream tooling globs the
//! output directory by these patterns, so the scheme must stay stable.
//!
//! - `00_summary.json` - aggregate index (sorts ahead of the entries)
//! - `NN_<METHOD>_<token>.json` - full entry metadata
//! - `NN_request_body.txt` / `NN_response_body.txt` - raw bodies
//!
//! `NN` is the entry's 0-based capture index, zero-padded to at least two
//! digits; indices past 99 simply widen.

/// Maximum length of the sanitized URL token, to keep filenames portable.
const MAX_TOKEN_LEN: usize = 50;

/// Derive a filesystem-safe token from a request URL.
///
/// One leading `http://` or `https://` is stripped, every character outside
/// `[A-Za-z0-9]` becomes `_`, and the result is truncated to 50 characters.
/// No collision handling: two URLs may sanitize identically, the entry index
/// in the filename is what keeps files distinct.
///
/// # Examples
///
/// ```
/// use har_splitter::utils::naming::url_token;
///
/// assert_eq!(url_token("https://example.com/api?x=1&y=2"), "example_com_api_x_1_y_2");
/// assert_eq!(url_token("http://localhost:8080/"), "localhost_8080_");
/// ```
pub fn url_token(url: &str) -> String {
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);

    let mut token: String = stripped
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    token.truncate(MAX_TOKEN_LEN);
    token
}

/// Filename of the full-entry metadata file.
pub fn entry_filename(index: usize, method: &str, url: &str) -> String {
    format!("{:02}_{}_{}.json", index, method, url_token(url))
}

/// Filename of the raw request body file.
pub fn request_body_filename(index: usize) -> String {
    format!("{index:02}_request_body.txt")
}

/// Filename of the raw response body file.
pub fn response_body_filename(index: usize) -> String {
    format!("{index:02}_response_body.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_token_strips_scheme() {
        assert_eq!(url_token("https://example.com/"), "example_com_");
        assert_eq!(url_token("http://example.com/"), "example_com_");
        // No scheme: sanitized as-is.
        assert_eq!(url_token("example.com/x"), "example_com_x");
    }

    #[test]
    fn test_url_token_replaces_non_alphanumerics() {
        assert_eq!(
            url_token("https://example.com/api?x=1&y=2"),
            "example_com_api_x_1_y_2"
        );
        assert_eq!(url_token("https://a.b/c%20d#frag"), "a_b_c_20d_frag");
    }

    #[test]
    fn test_url_token_truncates_to_fifty() {
        let url = format!("https://example.com/{}", "a".repeat(100));
        let token = url_token(&url);
        assert_eq!(token.len(), 50);
        assert!(token.starts_with("example_com_"));
    }

    #[test]
    fn test_url_token_non_ascii_becomes_underscore() {
        assert_eq!(url_token("https://bücher.de/ß"), "b_cher_de__");
    }

    #[test]
    fn test_entry_filename() {
        assert_eq!(
            entry_filename(3, "GET", "https://example.com/api?x=1&y=2"),
            "03_GET_example_com_api_x_1_y_2.json"
        );
    }

    #[test]
    fn test_index_padding_widens_past_two_digits() {
        assert_eq!(request_body_filename(7), "07_request_body.txt");
        assert_eq!(response_body_filename(42), "42_response_body.txt");
        assert_eq!(request_body_filename(123), "123_request_body.txt");
        assert_eq!(
            entry_filename(100, "GET", "https://example.com/"),
            "100_GET_example_com_.json"
        );
    }
}
