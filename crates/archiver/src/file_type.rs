//! File name based detection of archive and compression formats.
//!
//! Detection never reads file content. A name is lowercased and checked
//! against a fixed, ordered table of suffixes; the first suffix that
//! matches wins. Combined suffixes such as `.tar.gz` are listed before
//! the plain archive suffixes, which in turn come before the plain
//! compression suffixes, so `backup.tar.gz` is reported as a gzipped tar
//! rather than as a bare gzip stream.

use crate::compression::CompressionType;
use crate::format::ArchiveFormat;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// A file suffix together with the archive format and/or compression type it denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileType {
    suffix: &'static str,
    archive_format: Option<ArchiveFormat>,
    compression: Option<CompressionType>,
}

const fn both(
    suffix: &'static str,
    format: ArchiveFormat,
    compression: CompressionType,
) -> FileType {
    FileType {
        suffix,
        archive_format: Some(format),
        compression: Some(compression),
    }
}

const fn archive(suffix: &'static str, format: ArchiveFormat) -> FileType {
    FileType {
        suffix,
        archive_format: Some(format),
        compression: None,
    }
}

const fn compressed(suffix: &'static str, compression: CompressionType) -> FileType {
    FileType {
        suffix,
        archive_format: None,
        compression: Some(compression),
    }
}

// Order matters: longer combined suffixes must precede their components.
static FILE_TYPES: [FileType; 22] = [
    // compressed archives
    both(".tar.gz", ArchiveFormat::Tar, CompressionType::Gzip),
    both(".tgz", ArchiveFormat::Tar, CompressionType::Gzip),
    both(".tar.bz2", ArchiveFormat::Tar, CompressionType::Bzip2),
    both(".tbz2", ArchiveFormat::Tar, CompressionType::Bzip2),
    both(".tar.xz", ArchiveFormat::Tar, CompressionType::Xz),
    both(".txz", ArchiveFormat::Tar, CompressionType::Xz),
    // archive formats
    archive(".7z", ArchiveFormat::SevenZ),
    archive(".a", ArchiveFormat::Ar),
    archive(".ar", ArchiveFormat::Ar),
    archive(".deb", ArchiveFormat::Ar),
    archive(".rpm", ArchiveFormat::Cpio),
    archive(".cpio", ArchiveFormat::Cpio),
    archive(".dump", ArchiveFormat::Dump),
    archive(".jar", ArchiveFormat::Jar),
    archive(".tar", ArchiveFormat::Tar),
    archive(".zip", ArchiveFormat::Zip),
    archive(".zipx", ArchiveFormat::Zip),
    // compression formats
    compressed(".bz2", CompressionType::Bzip2),
    compressed(".xz", CompressionType::Xz),
    compressed(".gzip", CompressionType::Gzip),
    compressed(".gz", CompressionType::Gzip),
    compressed(".pack", CompressionType::Pack200),
];

impl FileType {
    /// Special case for names that denote neither an archive nor a compressed file.
    pub const UNKNOWN: FileType = FileType {
        suffix: "",
        archive_format: None,
        compression: None,
    };

    /// Returns the registered file types in matching order.
    pub fn entries() -> &'static [FileType] {
        &FILE_TYPES
    }

    /// Looks up the file type of a file name by its suffix.
    ///
    /// The name is lowercased before matching. Returns [`FileType::UNKNOWN`]
    /// when no registered suffix matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use archiver::{ArchiveFormat, CompressionType, FileType};
    ///
    /// let ty = FileType::get("backup.TAR.GZ");
    /// assert_eq!(ty.archive_format(), Some(ArchiveFormat::Tar));
    /// assert_eq!(ty.compression_type(), Some(CompressionType::Gzip));
    ///
    /// assert_eq!(FileType::get("notes.txt"), FileType::UNKNOWN);
    /// ```
    pub fn get(filename: &str) -> FileType {
        let filename = filename.to_lowercase();

        match FILE_TYPES.iter().find(|t| filename.ends_with(t.suffix)) {
            Some(file_type) => {
                debug!(filename = %filename, suffix = file_type.suffix, "matched file type");
                *file_type
            }
            None => FileType::UNKNOWN,
        }
    }

    /// Looks up the file type of a path by its final component.
    ///
    /// Only the name is inspected; the file is never opened.
    pub fn for_path(path: &Path) -> FileType {
        match path.file_name() {
            Some(name) => FileType::get(&name.to_string_lossy()),
            None => FileType::UNKNOWN,
        }
    }

    /// Returns true if this file type denotes an archive.
    pub const fn is_archive(&self) -> bool {
        self.archive_format.is_some()
    }

    /// Returns true if this file type denotes a compressed file.
    pub const fn is_compressed(&self) -> bool {
        self.compression.is_some()
    }

    /// Returns the file suffix, e.g. ".zip" or ".tar.gz". Empty for [`FileType::UNKNOWN`].
    pub const fn suffix(&self) -> &'static str {
        self.suffix
    }

    /// Returns the archive format if this file type denotes an archive.
    pub const fn archive_format(&self) -> Option<ArchiveFormat> {
        self.archive_format
    }

    /// Returns the compression type if this file type denotes a compressed file.
    pub const fn compression_type(&self) -> Option<CompressionType> {
        self.compression
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix)
    }
}
