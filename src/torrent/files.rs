//! Per-file index record construction
//!
//! Walks a torrent's ordered file list and produces one
//! [`TorrentFileRecord`] per file, with running byte offsets mapped
//! onto piece indices. The input order is the only source of truth for
//! file ordering; nothing here sorts.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::media::{classify, get_extension, mime_type};

use super::pieces::map_piece;
use super::records::TorrentFileRecord;

/// One entry of a torrent's file list, as supplied by the caller
///
/// Strongly typed boundary for what is usually a loose JSON payload
/// from the torrent engine; deserialize into this before building
/// records so malformed entries are rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path within the torrent
    pub path: String,
    /// File size in bytes
    pub length: u64,
}

/// Build index records for every file in a torrent
///
/// Maintains a running offset from zero, advanced by each file's
/// length after its piece mapping is computed, so consecutive records'
/// byte ranges are contiguous. `file_index` is the 0-based input
/// position, preserved verbatim.
///
/// An empty file list yields an empty vec. The only error is a zero
/// `piece_length`, propagated from the piece mapper.
pub fn build_file_records(
    torrent_id: Uuid,
    files: &[FileEntry],
    piece_length: u32,
) -> Result<Vec<TorrentFileRecord>> {
    let mut records = Vec::with_capacity(files.len());
    let mut current_offset: u64 = 0;

    for (index, file) in files.iter().enumerate() {
        let mapping = map_piece(current_offset, file.length, piece_length)?;
        let extension = get_extension(&file.path);

        records.push(TorrentFileRecord {
            torrent_id,
            path: file.path.clone(),
            name: basename(&file.path).to_string(),
            size: file.length,
            file_index: index as u32,
            piece_start: mapping.piece_start,
            piece_end: mapping.piece_end,
            offset_in_first_piece: mapping.offset_in_first_piece,
            mime_type: mime_type(&extension).to_string(),
            media_category: classify(&extension),
            extension,
            metadata: None,
        });

        current_offset += file.length;
    }

    debug!(
        torrent_id = %torrent_id,
        files = records.len(),
        total_bytes = current_offset,
        "built torrent file records"
    );

    Ok(records)
}

/// Total byte size of a file list
pub fn total_size(files: &[FileEntry]) -> u64 {
    files.iter().map(|file| file.length).sum()
}

/// Summarize a torrent's media content
///
/// Returns `(media_file_count, total_file_count, media_size_bytes)`
/// where "media" means any category other than `Other` — useful for
/// deciding whether a torrent is worth surfacing in the library.
pub fn media_summary(records: &[TorrentFileRecord]) -> (usize, usize, u64) {
    use crate::media::MediaCategory;

    let media_count = records
        .iter()
        .filter(|r| r.media_category != MediaCategory::Other)
        .count();
    let media_size = records
        .iter()
        .filter(|r| r.media_category != MediaCategory::Other)
        .map(|r| r.size)
        .sum();

    (media_count, records.len(), media_size)
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexError;
    use crate::media::MediaCategory;

    const PIECE: u32 = 1_048_576;

    fn entry(path: &str, length: u64) -> FileEntry {
        FileEntry {
            path: path.to_string(),
            length,
        }
    }

    #[test]
    fn test_empty_list() {
        let records = build_file_records(Uuid::new_v4(), &[], PIECE).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_running_offsets_are_contiguous() {
        let files = vec![
            entry("Show/Episode.01.mkv", 3_000_000),
            entry("Show/Episode.02.mkv", 2_500_000),
            entry("Show/cover.jpg", 40_000),
            entry("Show/notes.nfo", 1_200),
        ];
        let records = build_file_records(Uuid::new_v4(), &files, PIECE).unwrap();

        let mut offset = 0u64;
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.file_index, i as u32);
            assert_eq!(record.size, files[i].length);

            // Piece bounds bracket the running byte range
            assert_eq!(record.piece_start, (offset / u64::from(PIECE)) as u32);
            assert_eq!(
                record.offset_in_first_piece,
                (offset % u64::from(PIECE)) as u32
            );
            let end = (offset + record.size)
                .div_ceil(u64::from(PIECE))
                .saturating_sub(1)
                .max(u64::from(record.piece_start));
            assert_eq!(u64::from(record.piece_end), end);
            assert!(record.piece_end >= record.piece_start);

            offset += record.size;
        }
    }

    #[test]
    fn test_classification_and_names() {
        let files = vec![
            entry("Season 1/Episode.01.mkv", 3_000_000),
            entry("Season 1/cover.jpg", 40_000),
            entry("readme", 100),
        ];
        let records = build_file_records(Uuid::new_v4(), &files, PIECE).unwrap();

        assert_eq!(records[0].name, "Episode.01.mkv");
        assert_eq!(records[0].extension, "mkv");
        assert_eq!(records[0].media_category, MediaCategory::Video);
        assert_eq!(records[0].mime_type, "video/x-matroska");

        assert_eq!(records[1].media_category, MediaCategory::Image);
        assert_eq!(records[1].mime_type, "image/jpeg");

        assert_eq!(records[2].extension, "");
        assert_eq!(records[2].media_category, MediaCategory::Other);
        assert_eq!(records[2].mime_type, "application/octet-stream");

        for record in &records {
            assert!(record.metadata.is_none());
        }
    }

    #[test]
    fn test_order_preserved_verbatim() {
        // Deliberately unsorted input; output must match it exactly
        let files = vec![
            entry("z.mkv", 10),
            entry("a.mkv", 20),
            entry("m.mkv", 30),
        ];
        let records = build_file_records(Uuid::new_v4(), &files, PIECE).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["z.mkv", "a.mkv", "m.mkv"]);
    }

    #[test]
    fn test_zero_piece_length_propagates() {
        let files = vec![entry("a.mkv", 10)];
        assert_eq!(
            build_file_records(Uuid::new_v4(), &files, 0),
            Err(IndexError::InvalidPieceLength)
        );
    }

    #[test]
    fn test_total_size_and_media_summary() {
        let files = vec![
            entry("a.mkv", 3_000_000),
            entry("b.flac", 2_000_000),
            entry("c.nfo", 1_000),
        ];
        assert_eq!(total_size(&files), 5_001_000);

        let records = build_file_records(Uuid::new_v4(), &files, PIECE).unwrap();
        let (media_count, total_count, media_size) = media_summary(&records);
        assert_eq!(media_count, 2);
        assert_eq!(total_count, 3);
        assert_eq!(media_size, 5_000_000);
    }
}
