//! Type definitions shared by the library and its front ends.

use crate::compression::CompressionType;
use crate::file_type::FileType;
use crate::format::ArchiveFormat;
use crate::io_utils::DEFAULT_BUFFER_SIZE;
use serde::{Deserialize, Serialize};

/// Options for copy operations.
#[derive(Debug, Clone)]
pub struct CopyOptions {
    /// Size of the transfer buffer in bytes (default: 8024)
    pub buffer_size: usize,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

/// Result of identifying a single file by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTypeReport {
    /// The path that was inspected
    pub path: String,

    /// Matched suffix (empty when unknown)
    pub suffix: String,

    /// Archive format, if the name denotes an archive
    pub archive_format: Option<ArchiveFormat>,

    /// Compression type, if the name denotes a compressed file
    pub compression: Option<CompressionType>,

    /// Whether the name denotes an archive
    pub is_archive: bool,

    /// Whether the name denotes a compressed file
    pub is_compressed: bool,
}

impl FileTypeReport {
    /// Builds a report for `path` from an already resolved file type.
    pub fn new(path: impl Into<String>, file_type: FileType) -> Self {
        Self {
            path: path.into(),
            suffix: file_type.suffix().to_string(),
            archive_format: file_type.archive_format(),
            compression: file_type.compression_type(),
            is_archive: file_type.is_archive(),
            is_compressed: file_type.is_compressed(),
        }
    }
}
