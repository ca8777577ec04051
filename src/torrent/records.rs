//! Index-ready torrent records
//!
//! Pre-persistence shapes produced by the ingestion path. The caller
//! owns storage: these types carry no pool handles, no timestamps and
//! no row identity beyond the foreign keys the caller supplies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::media::MediaCategory;

use super::magnet::ParsedMagnet;

/// Lifecycle status of a torrent in the index
///
/// A record is created `Pending` right after a successful magnet
/// parse; the external ingestion pipeline drives every later
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TorrentStatus {
    #[default]
    Pending,
    Indexing,
    Ready,
    Error,
}

impl std::fmt::Display for TorrentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TorrentStatus::Pending => write!(f, "pending"),
            TorrentStatus::Indexing => write!(f, "indexing"),
            TorrentStatus::Ready => write!(f, "ready"),
            TorrentStatus::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for TorrentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TorrentStatus::Pending),
            "indexing" => Ok(TorrentStatus::Indexing),
            "ready" => Ok(TorrentStatus::Ready),
            "error" => Ok(TorrentStatus::Error),
            other => Err(format!("unknown torrent status: {other}")),
        }
    }
}

/// An index-ready torrent record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentRecord {
    /// Canonical infohash (40 lowercase hex characters)
    pub infohash: String,
    pub name: String,
    pub magnet_uri: String,
    /// Total content size in bytes; zero until indexing fills it in
    pub total_size: u64,
    pub file_count: u32,
    pub piece_length: Option<u32>,
    /// User who added the torrent, when known
    pub created_by: Option<Uuid>,
    pub status: TorrentStatus,
    pub error_message: Option<String>,
}

impl TorrentRecord {
    /// Create a `Pending` record from a parsed magnet link
    pub fn from_magnet(magnet: &ParsedMagnet) -> Self {
        Self {
            infohash: magnet.infohash.clone(),
            name: magnet.name.clone(),
            magnet_uri: magnet.raw_uri.clone(),
            total_size: 0,
            file_count: 0,
            piece_length: None,
            created_by: None,
            status: TorrentStatus::Pending,
            error_message: None,
        }
    }

    /// Attach the user who added the torrent
    pub fn with_created_by(mut self, user_id: Uuid) -> Self {
        self.created_by = Some(user_id);
        self
    }

    /// Transition to `Indexing` once metadata retrieval starts
    pub fn mark_indexing(&mut self) {
        self.status = TorrentStatus::Indexing;
    }

    /// Transition to `Ready` with the sizes learned during indexing
    pub fn mark_ready(&mut self, total_size: u64, file_count: u32, piece_length: u32) {
        self.total_size = total_size;
        self.file_count = file_count;
        self.piece_length = Some(piece_length);
        self.status = TorrentStatus::Ready;
        self.error_message = None;
    }

    /// Transition to `Error` with a message for the caller to surface
    pub fn mark_error(&mut self, message: impl Into<String>) {
        self.status = TorrentStatus::Error;
        self.error_message = Some(message.into());
    }
}

/// One file within an indexed torrent
///
/// Byte ranges of consecutive records (in `file_index` order) are
/// contiguous: each file starts where the previous one ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorrentFileRecord {
    /// Owning torrent, a foreign key supplied by the caller
    pub torrent_id: Uuid,
    /// Path within the torrent, as listed in its metadata
    pub path: String,
    /// Basename of `path`
    pub name: String,
    /// File size in bytes
    pub size: u64,
    /// 0-based position in the torrent's file list
    pub file_index: u32,
    pub piece_start: u32,
    pub piece_end: u32,
    pub offset_in_first_piece: u32,
    /// Lowercase extension, no dot; empty when the path has none
    pub extension: String,
    pub mime_type: String,
    pub media_category: MediaCategory,
    /// Opaque extras, populated by external enrichment, never here
    pub metadata: Option<serde_json::Value>,
}
