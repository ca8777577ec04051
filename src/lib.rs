//! Torrent indexing and search core for the Driftnet media streamer
//!
//! This crate is the pure heart of the ingestion and query paths:
//!
//! - **Ingestion**: [`torrent::ParsedMagnet::parse`] turns a magnet
//!   link into a structured descriptor; [`torrent::build_file_records`]
//!   walks the torrent's file list and emits per-file index records
//!   with piece-range math and media classification. The caller
//!   persists the resulting [`torrent::TorrentRecord`] and
//!   [`torrent::TorrentFileRecord`]s.
//! - **Query**: [`search::sanitize_search_input`] normalizes untrusted
//!   free text and [`search::build_search_query`] turns it into a
//!   prefix-matching boolean expression for the full-text backend.
//!
//! Everything here is synchronous, deterministic and free of shared
//! state; concurrent callers need no coordination. Storage, HTTP and
//! the download engine live in the embedding application.

pub mod error;
pub mod media;
pub mod search;
pub mod torrent;

pub use error::{IndexError, Result};
pub use media::{classify, get_extension, mime_type, MediaCategory};
pub use search::{build_search_query, sanitize_search_input};
pub use torrent::{
    build_file_records, extract_infohash, map_piece, validate_magnet_uri, FileEntry, ParsedMagnet,
    PieceMapping, TorrentFileRecord, TorrentRecord, TorrentStatus,
};
