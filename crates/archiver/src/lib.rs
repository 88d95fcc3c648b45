//! # Archiver
//!
//! Identification of archive container formats and compression algorithms
//! from file names, plus the stream copy and directory helpers used when
//! reading or writing archives.
//!
//! Detection is purely name based: nothing is read from the file. The
//! resolved [`ArchiveFormat`] and [`CompressionType`] are keys the caller
//! uses to pick a concrete codec.
//!
//! ## Recognized Suffixes
//!
//! - Compressed archives: `.tar.gz`, `.tgz`, `.tar.bz2`, `.tbz2`, `.tar.xz`, `.txz`
//! - Archives: `.7z`, `.a`, `.ar`, `.deb`, `.rpm`, `.cpio`, `.dump`, `.jar`, `.tar`,
//!   `.zip`, `.zipx`
//! - Compressed files: `.bz2`, `.xz`, `.gzip`, `.gz`, `.pack`
//!
//! ## Example
//!
//! ```rust,no_run
//! use archiver::{identify, io_utils, ArchiveFormat, CompressionType};
//! use std::fs::File;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = identify(Path::new("backup.tar.gz"));
//! assert_eq!(report.archive_format, Some(ArchiveFormat::Tar));
//! assert_eq!(report.compression, Some(CompressionType::Gzip));
//!
//! // Prepare the target and move the bytes
//! io_utils::require_directory(Path::new("output"))?;
//! let mut source = File::open("backup.tar.gz")?;
//! let bytes = io_utils::copy_to_file(&mut source, Path::new("output/backup.tar.gz"))?;
//! println!("Copied {} bytes", bytes);
//! # Ok(())
//! # }
//! ```

pub mod compression;
pub mod error;
pub mod file_type;
pub mod format;
pub mod io_utils;
pub mod types;

// Re-export main types
pub use compression::CompressionType;
pub use error::{ArchiveError, Result};
pub use file_type::FileType;
pub use format::ArchiveFormat;
pub use io_utils::DEFAULT_BUFFER_SIZE;
pub use types::{CopyOptions, FileTypeReport};

use std::path::Path;

/// Identify the archive format and compression type of a file by its name.
///
/// Only the final path component is inspected; the file does not need to exist.
pub fn identify(path: &Path) -> FileTypeReport {
    FileTypeReport::new(path.display().to_string(), FileType::for_path(path))
}
