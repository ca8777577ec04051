//! File classification by extension
//!
//! Centralizes the extension tables used to bucket torrent contents
//! into coarse media categories and pick a MIME type for streaming
//! responses. Matching is case-insensitive; anything unrecognized is
//! `Other` / `application/octet-stream`.

use serde::{Deserialize, Serialize};

/// Audio file extensions (lowercase, no dot)
pub const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "flac", "m4a", "m4b", "aac", "ogg", "opus", "wav", "wma", "aiff", "alac",
];

/// Video file extensions (lowercase, no dot)
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "mov", "wmv", "flv", "webm", "m4v", "ts", "m2ts", "mpg", "mpeg",
];

/// Ebook file extensions (lowercase, no dot)
pub const EBOOK_EXTENSIONS: &[&str] = &[
    "epub", "mobi", "azw", "azw3", "pdf", "cbz", "cbr", "djvu", "fb2",
];

/// Image file extensions (lowercase, no dot)
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "svg", "heic",
];

/// Archive file extensions (lowercase, no dot)
pub const ARCHIVE_EXTENSIONS: &[&str] = &["rar", "zip", "7z", "tar", "gz", "bz2"];

/// Coarse media category of a file within a torrent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Audio,
    Video,
    Ebook,
    Image,
    Archive,
    #[default]
    Other,
}

impl std::fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaCategory::Audio => write!(f, "audio"),
            MediaCategory::Video => write!(f, "video"),
            MediaCategory::Ebook => write!(f, "ebook"),
            MediaCategory::Image => write!(f, "image"),
            MediaCategory::Archive => write!(f, "archive"),
            MediaCategory::Other => write!(f, "other"),
        }
    }
}

/// Classify a file extension into a media category
///
/// # Example
/// ```
/// use driftnet_index::media::{classify, MediaCategory};
/// assert_eq!(classify("mkv"), MediaCategory::Video);
/// assert_eq!(classify("FLAC"), MediaCategory::Audio);
/// assert_eq!(classify("nfo"), MediaCategory::Other);
/// ```
pub fn classify(extension: &str) -> MediaCategory {
    let lower = extension.to_lowercase();
    let ext = lower.as_str();

    if AUDIO_EXTENSIONS.contains(&ext) {
        MediaCategory::Audio
    } else if VIDEO_EXTENSIONS.contains(&ext) {
        MediaCategory::Video
    } else if EBOOK_EXTENSIONS.contains(&ext) {
        MediaCategory::Ebook
    } else if IMAGE_EXTENSIONS.contains(&ext) {
        MediaCategory::Image
    } else if ARCHIVE_EXTENSIONS.contains(&ext) {
        MediaCategory::Archive
    } else {
        MediaCategory::Other
    }
}

/// MIME type for a file extension
///
/// Returns `application/octet-stream` for anything without an explicit
/// mapping.
pub fn mime_type(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        // Audio
        "mp3" => "audio/mpeg",
        "flac" => "audio/flac",
        "m4a" | "m4b" | "alac" => "audio/mp4",
        "aac" => "audio/aac",
        "ogg" => "audio/ogg",
        "opus" => "audio/opus",
        "wav" => "audio/wav",
        "wma" => "audio/x-ms-wma",
        "aiff" => "audio/aiff",
        // Video
        "mkv" => "video/x-matroska",
        "mp4" => "video/mp4",
        "avi" => "video/x-msvideo",
        "mov" => "video/quicktime",
        "wmv" => "video/x-ms-wmv",
        "flv" => "video/x-flv",
        "webm" => "video/webm",
        "m4v" => "video/x-m4v",
        "ts" | "m2ts" => "video/mp2t",
        "mpg" | "mpeg" => "video/mpeg",
        // Ebook
        "epub" => "application/epub+zip",
        "mobi" => "application/x-mobipocket-ebook",
        "azw" | "azw3" => "application/vnd.amazon.ebook",
        "pdf" => "application/pdf",
        "cbz" => "application/vnd.comicbook+zip",
        "cbr" => "application/vnd.comicbook-rar",
        "djvu" => "image/vnd.djvu",
        "fb2" => "application/x-fictionbook+xml",
        // Image
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tiff" => "image/tiff",
        "svg" => "image/svg+xml",
        "heic" => "image/heic",
        // Archive
        "rar" => "application/vnd.rar",
        "zip" => "application/zip",
        "7z" => "application/x-7z-compressed",
        "tar" => "application/x-tar",
        "gz" => "application/gzip",
        "bz2" => "application/x-bzip2",
        _ => "application/octet-stream",
    }
}

/// Extract the extension from a file path
///
/// Returns the substring after the last `.` in the path's final
/// segment, lowercased, or the empty string when there is no dot.
///
/// Quirk, preserved on purpose: a dotfile with no further dot (e.g.
/// `.gitignore`) yields the text after the leading dot, so its own
/// name is treated as its extension. Call sites relying on this exist;
/// do not change without auditing them.
///
/// # Example
/// ```
/// use driftnet_index::media::get_extension;
/// assert_eq!(get_extension("Season 1/Episode.01.mkv"), "mkv");
/// assert_eq!(get_extension("no_extension"), "");
/// ```
pub fn get_extension(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(idx) => name[idx + 1..].to_lowercase(),
        None => String::new(),
    }
}
