//! Media type classification

pub mod classify;

pub use classify::{
    classify, get_extension, mime_type, MediaCategory, ARCHIVE_EXTENSIONS, AUDIO_EXTENSIONS,
    EBOOK_EXTENSIONS, IMAGE_EXTENSIONS, VIDEO_EXTENSIONS,
};
