//! Magnet URI parsing
//!
//! Parses `magnet:?xt=urn:btih:<hash>&dn=<name>&tr=<tracker>` links
//! into a structured descriptor the ingestion pipeline can index.
//! Only the infohash is required; display name and tracker list are
//! optional extras. Unknown query parameters are ignored.

use tracing::debug;

use crate::error::{IndexError, Result};

use super::infohash;

/// A successfully parsed magnet link
///
/// `infohash` is always exactly 40 lowercase hex characters; when the
/// link carries no display name, `name` falls back to the infohash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMagnet {
    /// Canonical infohash (40 lowercase hex characters)
    pub infohash: String,
    /// Display name, or the infohash when the link has no `dn`
    pub name: String,
    /// Tracker URLs in link order, duplicates preserved
    pub trackers: Vec<String>,
    /// The original URI string, verbatim
    pub raw_uri: String,
}

impl ParsedMagnet {
    /// Parse a magnet URI string
    ///
    /// # Example
    /// ```
    /// use driftnet_index::torrent::ParsedMagnet;
    ///
    /// let uri = "magnet:?xt=urn:btih:aabbccddeeaabbccddeeaabbccddeeaabbccddee&dn=My+Show";
    /// let magnet = ParsedMagnet::parse(uri).unwrap();
    /// assert_eq!(magnet.name, "My Show");
    /// ```
    pub fn parse(uri: &str) -> Result<Self> {
        let query = uri
            .strip_prefix("magnet:?")
            .ok_or(IndexError::InvalidMagnetUri)?;

        let mut infohash: Option<String> = None;
        let mut display_name: Option<String> = None;
        let mut trackers = Vec::new();

        for param in query.split('&') {
            let (key, value) = match param.split_once('=') {
                Some(kv) => kv,
                None => continue,
            };

            match key {
                "xt" => {
                    if let Some(hash) = parse_btih(&percent_decode(value)) {
                        infohash = Some(hash);
                    }
                }
                "dn" => {
                    display_name = Some(percent_decode(value));
                }
                "tr" => {
                    let tracker = percent_decode(value);
                    if !tracker.is_empty() {
                        trackers.push(tracker);
                    }
                }
                _ => {}
            }
        }

        let infohash = infohash.ok_or(IndexError::MissingInfohash)?;
        debug!(infohash = %infohash, trackers = trackers.len(), "parsed magnet uri");

        let name = display_name.unwrap_or_else(|| infohash.clone());

        Ok(ParsedMagnet {
            infohash,
            name,
            trackers,
            raw_uri: uri.to_string(),
        })
    }
}

/// Check whether a string is a parseable magnet URI
///
/// Applies exactly the acceptance rules of [`ParsedMagnet::parse`]
/// without building the result, for cheap pre-checks on untrusted
/// input. The two must never disagree.
pub fn validate_magnet_uri(uri: &str) -> bool {
    let Some(query) = uri.strip_prefix("magnet:?") else {
        return false;
    };

    query
        .split('&')
        .filter_map(|param| param.split_once('='))
        .any(|(key, value)| key == "xt" && parse_btih(&percent_decode(value)).is_some())
}

/// Extract just the canonical infohash from a magnet URI
///
/// Collapses every failure into `None`; use where the caller has no
/// recovery path that cares why the link was bad.
pub fn extract_infohash(uri: &str) -> Option<String> {
    ParsedMagnet::parse(uri).ok().map(|magnet| magnet.infohash)
}

/// Parse an `xt` value of the form `urn:btih:<hash>`
fn parse_btih(xt: &str) -> Option<String> {
    let hash = xt.strip_prefix("urn:btih:")?;
    infohash::canonicalize(hash).ok()
}

/// Percent-decode a query parameter value, translating `+` to space
///
/// Magnet links inherit the `application/x-www-form-urlencoded`
/// convention for `dn`, so `+` means space. Invalid escapes are kept
/// verbatim; invalid UTF-8 decodes lossily.
fn percent_decode(value: &str) -> String {
    let raw = value.as_bytes();
    let mut bytes = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        match raw[i] {
            b'%' if i + 2 < raw.len() => {
                let hi = (raw[i + 1] as char).to_digit(16);
                let lo = (raw[i + 2] as char).to_digit(16);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        bytes.push(((hi as u8) << 4) | lo as u8);
                        i += 3;
                    }
                    _ => {
                        bytes.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                bytes.push(b' ');
                i += 1;
            }
            byte => {
                bytes.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
