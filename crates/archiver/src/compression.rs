//! Compression algorithms known to the library.
//!
//! A [`CompressionType`] is only an identifier. Actual compressor and
//! decompressor streams live elsewhere and are selected by the caller
//! based on the value returned from here.

use crate::error::ArchiveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Denotes a compression algorithm such as gzip or bzip2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionType {
    /// The BZIP2 compression algorithm.
    #[serde(alias = "bz2")]
    Bzip2,
    /// The GZIP compression algorithm.
    #[serde(rename = "gz", alias = "gzip")]
    Gzip,
    /// The XZ compression algorithm.
    Xz,
    /// The PACK200 compression algorithm.
    #[serde(alias = "pack")]
    Pack200,
}

impl CompressionType {
    const ALL: [CompressionType; 4] = [
        CompressionType::Bzip2,
        CompressionType::Gzip,
        CompressionType::Xz,
        CompressionType::Pack200,
    ];

    /// Returns every supported compression type.
    pub const fn all() -> &'static [CompressionType] {
        &Self::ALL
    }

    /// Returns the name by which the compression algorithm is identified.
    pub const fn name(self) -> &'static str {
        match self {
            CompressionType::Bzip2 => "bzip2",
            CompressionType::Gzip => "gz",
            CompressionType::Xz => "xz",
            CompressionType::Pack200 => "pack200",
        }
    }

    /// Alternate spelling accepted by [`CompressionType::from_name`].
    const fn alias(self) -> Option<&'static str> {
        match self {
            CompressionType::Bzip2 => Some("bz2"),
            CompressionType::Gzip => Some("gzip"),
            CompressionType::Xz => None,
            CompressionType::Pack200 => Some("pack"),
        }
    }

    /// Returns the default file extension, preceded by a dot. E.g. ".gz" for gzip.
    pub const fn default_file_extension(self) -> &'static str {
        match self {
            CompressionType::Bzip2 => ".bz2",
            CompressionType::Gzip => ".gz",
            CompressionType::Xz => ".xz",
            CompressionType::Pack200 => ".pack",
        }
    }

    fn matches(self, name: &str) -> bool {
        name.eq_ignore_ascii_case(self.name())
            || self.alias().is_some_and(|alias| name.eq_ignore_ascii_case(alias))
    }

    /// Checks whether the given name denotes a known compression type. Ignores case.
    ///
    /// # Examples
    ///
    /// ```
    /// use archiver::CompressionType;
    ///
    /// assert!(CompressionType::is_valid_name("GZ"));
    /// assert!(!CompressionType::is_valid_name("zstd"));
    /// ```
    pub fn is_valid_name(name: &str) -> bool {
        Self::ALL.iter().any(|t| t.matches(name))
    }

    /// Resolves a compression type from its name. Ignores case.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::UnknownFormat`] if no compression type carries that name.
    pub fn from_name(name: &str) -> Result<Self, ArchiveError> {
        Self::ALL
            .into_iter()
            .find(|t| t.matches(name))
            .ok_or_else(|| ArchiveError::UnknownFormat(format!("compression type {}", name)))
    }
}

impl FromStr for CompressionType {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for CompressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
