//! Archive container formats known to the library.

use crate::error::ArchiveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Denotes an archive format such as zip or tar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveFormat {
    /// Unix `ar` archives, also the container of `.deb` packages.
    Ar,
    /// CPIO archives, also the payload of `.rpm` packages.
    Cpio,
    /// Unix dump archives.
    Dump,
    /// Java archives.
    Jar,
    /// 7-Zip archives.
    #[serde(rename = "7z")]
    SevenZ,
    /// Tape archives.
    Tar,
    /// ZIP archives.
    Zip,
}

impl ArchiveFormat {
    const ALL: [ArchiveFormat; 7] = [
        ArchiveFormat::Ar,
        ArchiveFormat::Cpio,
        ArchiveFormat::Dump,
        ArchiveFormat::Jar,
        ArchiveFormat::SevenZ,
        ArchiveFormat::Tar,
        ArchiveFormat::Zip,
    ];

    /// Returns every supported archive format.
    pub const fn all() -> &'static [ArchiveFormat] {
        &Self::ALL
    }

    /// Returns the name by which the archive format is identified.
    pub const fn name(self) -> &'static str {
        match self {
            ArchiveFormat::Ar => "ar",
            ArchiveFormat::Cpio => "cpio",
            ArchiveFormat::Dump => "dump",
            ArchiveFormat::Jar => "jar",
            ArchiveFormat::SevenZ => "7z",
            ArchiveFormat::Tar => "tar",
            ArchiveFormat::Zip => "zip",
        }
    }

    /// Returns the default file extension, preceded by a dot.
    pub const fn default_file_extension(self) -> &'static str {
        match self {
            ArchiveFormat::Ar => ".a",
            ArchiveFormat::Cpio => ".cpio",
            ArchiveFormat::Dump => ".dump",
            ArchiveFormat::Jar => ".jar",
            ArchiveFormat::SevenZ => ".7z",
            ArchiveFormat::Tar => ".tar",
            ArchiveFormat::Zip => ".zip",
        }
    }

    /// Checks whether the given name denotes a known archive format. Ignores case.
    pub fn is_valid_name(name: &str) -> bool {
        Self::ALL.iter().any(|f| name.eq_ignore_ascii_case(f.name()))
    }

    /// Resolves an archive format from its name. Ignores case.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::UnknownFormat`] if no archive format carries that name.
    pub fn from_name(name: &str) -> Result<Self, ArchiveError> {
        Self::ALL
            .into_iter()
            .find(|f| name.eq_ignore_ascii_case(f.name()))
            .ok_or_else(|| ArchiveError::UnknownFormat(format!("archive format {}", name)))
    }
}

impl FromStr for ArchiveFormat {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(ArchiveFormat::from_name("ZIP").unwrap(), ArchiveFormat::Zip);
        assert_eq!(ArchiveFormat::from_name("7z").unwrap(), ArchiveFormat::SevenZ);
        assert_eq!(ArchiveFormat::from_name("Tar").unwrap(), ArchiveFormat::Tar);
        assert!(matches!(
            ArchiveFormat::from_name("rar"),
            Err(ArchiveError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_every_name_round_trips() {
        for format in ArchiveFormat::all() {
            assert!(ArchiveFormat::is_valid_name(format.name()));
            assert_eq!(format.name().parse::<ArchiveFormat>().unwrap(), *format);
            assert!(format.default_file_extension().starts_with('.'));
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ArchiveFormat::SevenZ).unwrap();
        assert_eq!(json, "\"7z\"");
        let format: ArchiveFormat = serde_json::from_str("\"cpio\"").unwrap();
        assert_eq!(format, ArchiveFormat::Cpio);
    }
}
