//! Torrent indexing: magnet parsing, piece math and record building

pub mod files;
pub mod infohash;
pub mod magnet;
pub mod pieces;
pub mod records;

pub use files::{build_file_records, media_summary, total_size, FileEntry};
pub use magnet::{extract_infohash, validate_magnet_uri, ParsedMagnet};
pub use pieces::{map_piece, PieceMapping};
pub use records::{TorrentFileRecord, TorrentRecord, TorrentStatus};
