//! Byte-range to piece-index mapping
//!
//! Torrent content is divided into fixed-size pieces. Given a file's
//! byte offset within the torrent and its size, this module computes
//! which pieces hold the file so range requests can be answered later
//! without re-deriving the math.

use serde::{Deserialize, Serialize};

use crate::error::{IndexError, Result};

/// The inclusive piece-index span covering one file's byte range
///
/// Derived, stateless value: always recomputed from
/// `(file_offset, file_size, piece_length)`, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceMapping {
    /// First piece containing any byte of the file
    pub piece_start: u32,
    /// Last piece containing any byte of the file (inclusive)
    pub piece_end: u32,
    /// Byte offset of the file's first byte within `piece_start`
    pub offset_in_first_piece: u32,
}

/// Map a file's byte range onto piece indices
///
/// All intermediate arithmetic is u64 so multi-terabyte aggregates
/// cannot overflow; piece indices fit comfortably in u32.
///
/// A zero-length file maps to a single piece, its own start piece.
///
/// # Example
/// ```
/// use driftnet_index::torrent::map_piece;
///
/// let mapping = map_piece(5_000_000, 2_000_000, 1_048_576).unwrap();
/// assert_eq!(mapping.piece_start, 4);
/// assert_eq!(mapping.piece_end, 6);
/// ```
pub fn map_piece(file_offset: u64, file_size: u64, piece_length: u32) -> Result<PieceMapping> {
    if piece_length == 0 {
        return Err(IndexError::InvalidPieceLength);
    }
    let piece_length = u64::from(piece_length);

    let piece_start = file_offset / piece_length;
    let piece_end = (file_offset + file_size)
        .div_ceil(piece_length)
        .saturating_sub(1)
        .max(piece_start);
    let offset_in_first_piece = file_offset % piece_length;

    Ok(PieceMapping {
        piece_start: piece_start as u32,
        piece_end: piece_end as u32,
        offset_in_first_piece: offset_in_first_piece as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_example() {
        let mapping = map_piece(5_000_000, 2_000_000, 1_048_576).unwrap();
        assert_eq!(mapping.piece_start, 4);
        assert_eq!(mapping.piece_end, 6);
        assert_eq!(mapping.offset_in_first_piece, 5_000_000 % 1_048_576);
    }

    #[test]
    fn test_file_at_origin() {
        let mapping = map_piece(0, 1_048_576, 1_048_576).unwrap();
        assert_eq!(mapping.piece_start, 0);
        assert_eq!(mapping.piece_end, 0);
        assert_eq!(mapping.offset_in_first_piece, 0);
    }

    #[test]
    fn test_piece_aligned_boundary() {
        // File ends exactly on a piece boundary: no spill into the next piece
        let mapping = map_piece(1_048_576, 1_048_576, 1_048_576).unwrap();
        assert_eq!(mapping.piece_start, 1);
        assert_eq!(mapping.piece_end, 1);

        // One extra byte spills over
        let mapping = map_piece(1_048_576, 1_048_577, 1_048_576).unwrap();
        assert_eq!(mapping.piece_end, 2);
    }

    #[test]
    fn test_zero_length_file() {
        // Maps to a single piece, its own start piece
        let mapping = map_piece(3_000_000, 0, 1_048_576).unwrap();
        assert_eq!(mapping.piece_start, 2);
        assert_eq!(mapping.piece_end, 2);

        let mapping = map_piece(0, 0, 1_048_576).unwrap();
        assert_eq!(mapping.piece_start, 0);
        assert_eq!(mapping.piece_end, 0);
    }

    #[test]
    fn test_zero_piece_length_rejected() {
        assert_eq!(map_piece(0, 100, 0), Err(IndexError::InvalidPieceLength));
    }

    #[test]
    fn test_large_offsets_no_overflow() {
        // 8 TiB offset with 16 MiB pieces
        let offset = 8 * 1024 * 1024 * 1024 * 1024u64;
        let mapping = map_piece(offset, 1, 16 * 1024 * 1024).unwrap();
        assert_eq!(mapping.piece_start, 524_288);
        assert_eq!(mapping.piece_end, 524_288);
        assert_eq!(mapping.offset_in_first_piece, 0);
    }
}
