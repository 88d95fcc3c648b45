//! Integration tests for identifying files and handing them to a codec.

use archiver::io_utils::{copy, copy_to_file, files_contained_in, relative_path, require_directory};
use archiver::{identify, ArchiveError, ArchiveFormat, CompressionType, FileType};
use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a test directory
fn setup_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Helper function to create a TAR.GZ archive
fn create_tar_gz_archive(archive_path: &Path, files: &[(&str, &[u8])]) -> std::io::Result<()> {
    let file = File::create(archive_path)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut tar = tar::Builder::new(encoder);

    for (name, content) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        tar.append_data(&mut header, name, *content)?;
    }

    tar.into_inner()?.finish()?;
    Ok(())
}

/// Helper function to create a plain gzip file
fn create_gz_file(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(content)?;
    encoder.finish()?;
    Ok(())
}

/// Helper function to create a plain bzip2 file
fn create_bz2_file(path: &Path, content: &[u8]) -> std::io::Result<()> {
    use bzip2::write::BzEncoder;

    let file = File::create(path)?;
    let mut encoder = BzEncoder::new(file, bzip2::Compression::default());
    encoder.write_all(content)?;
    encoder.finish()?;
    Ok(())
}

/// Pick a decompressor for the given compression type, as a caller would.
fn decompressor(compression: CompressionType, file: File) -> Box<dyn Read> {
    match compression {
        CompressionType::Gzip => Box::new(GzDecoder::new(file)),
        CompressionType::Bzip2 => Box::new(BzDecoder::new(file)),
        other => panic!("no decoder wired up for {}", other),
    }
}

/// Strip a matched suffix once, ignoring ASCII case.
fn strip_suffix_ignore_case<'a>(name: &'a str, suffix: &str) -> &'a str {
    let split = name.len().saturating_sub(suffix.len());
    match (name.get(..split), name.get(split..)) {
        (Some(stem), Some(tail)) if tail.eq_ignore_ascii_case(suffix) => stem,
        _ => name,
    }
}

/// Extract an archive identified by name into `output`, returning the written files.
fn extract_by_name(archive_path: &Path, output: &Path) -> Result<Vec<PathBuf>, ArchiveError> {
    let file_type = FileType::for_path(archive_path);
    require_directory(output)?;

    let file = File::open(archive_path)?;
    let reader: Box<dyn Read> = match file_type.compression_type() {
        Some(compression) => decompressor(compression, file),
        None => Box::new(file),
    };

    let mut written = Vec::new();
    match file_type.archive_format() {
        Some(ArchiveFormat::Tar) => {
            let mut archive = tar::Archive::new(reader);
            for entry in archive.entries()? {
                let mut entry = entry?;
                let target = output.join(entry.path()?);
                if let Some(parent) = target.parent() {
                    require_directory(parent)?;
                }
                copy_to_file(&mut entry, &target)?;
                written.push(target);
            }
        }
        Some(other) => {
            return Err(ArchiveError::UnknownFormat(format!("no reader for {}", other)));
        }
        None => {
            let file_name = archive_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let target = output.join(strip_suffix_ignore_case(&file_name, file_type.suffix()));
            let mut reader = reader;
            copy_to_file(&mut reader, &target)?;
            written.push(target);
        }
    }

    Ok(written)
}

#[test]
fn test_extract_tar_gz_by_name() {
    let temp_dir = setup_test_dir();
    let archive_path = temp_dir.path().join("bundle.TAR.GZ");
    let output = temp_dir.path().join("out").join("nested");

    create_tar_gz_archive(
        &archive_path,
        &[("a.txt", b"alpha"), ("dir/b.txt", b"bravo")],
    )
    .expect("Failed to create TAR.GZ");

    let written = extract_by_name(&archive_path, &output).expect("Failed to extract");

    assert_eq!(written.len(), 2);
    assert_eq!(fs::read(output.join("a.txt")).unwrap(), b"alpha");
    assert_eq!(fs::read(output.join("dir/b.txt")).unwrap(), b"bravo");

    let relative: Vec<PathBuf> = written
        .iter()
        .map(|p| relative_path(&output, p).unwrap())
        .collect();
    assert_eq!(relative[0], Path::new("a.txt"));
    assert_eq!(relative[1], Path::new("dir").join("b.txt"));
}

#[test]
fn test_decompress_plain_gz() {
    let temp_dir = setup_test_dir();
    let source = temp_dir.path().join("notes.txt.gz");
    let output = temp_dir.path().join("out");
    create_gz_file(&source, b"plain gzip payload").expect("Failed to create gz");

    let report = identify(&source);
    assert!(!report.is_archive);
    assert_eq!(report.compression, Some(CompressionType::Gzip));

    let written = extract_by_name(&source, &output).expect("Failed to decompress");

    assert_eq!(written, vec![output.join("notes.txt")]);
    assert_eq!(fs::read(&written[0]).unwrap(), b"plain gzip payload");
}

#[test]
fn test_decompress_strips_suffix_once_ignoring_case() {
    let temp_dir = setup_test_dir();
    let output = temp_dir.path().join("out");

    let upper = temp_dir.path().join("REPORT.GZ");
    create_gz_file(&upper, b"upper").expect("Failed to create gz");
    let written = extract_by_name(&upper, &output).expect("Failed to decompress");
    assert_eq!(written, vec![output.join("REPORT")]);

    let doubled = temp_dir.path().join("layers.gz.gz");
    create_gz_file(&doubled, b"outer").expect("Failed to create gz");
    let written = extract_by_name(&doubled, &output).expect("Failed to decompress");
    assert_eq!(written, vec![output.join("layers.gz")]);
    assert_eq!(fs::read(&written[0]).unwrap(), b"outer");
}

#[test]
fn test_decompress_plain_bz2() {
    let temp_dir = setup_test_dir();
    let source = temp_dir.path().join("data.csv.bz2");
    let output = temp_dir.path().join("out");
    let payload = vec![b'z'; 20_000];
    create_bz2_file(&source, &payload).expect("Failed to create bz2");

    let written = extract_by_name(&source, &output).expect("Failed to decompress");

    assert_eq!(written, vec![output.join("data.csv")]);
    assert_eq!(fs::read(&written[0]).unwrap(), payload);
}

#[test]
fn test_extract_into_existing_file_fails() {
    let temp_dir = setup_test_dir();
    let archive_path = temp_dir.path().join("bundle.tgz");
    let blocker = temp_dir.path().join("blocker");
    create_tar_gz_archive(&archive_path, &[("a.txt", b"alpha")]).expect("Failed to create TGZ");
    fs::write(&blocker, "in the way").unwrap();

    let result = extract_by_name(&archive_path, &blocker);

    assert!(matches!(result, Err(ArchiveError::InvalidDestination(_))));
}

#[test]
fn test_unsupported_archive_reader() {
    let temp_dir = setup_test_dir();
    let archive_path = temp_dir.path().join("thing.7z");
    fs::write(&archive_path, "not really 7z").unwrap();

    let result = extract_by_name(&archive_path, &temp_dir.path().join("out"));

    assert!(matches!(result, Err(ArchiveError::UnknownFormat(_))));
}

#[test]
fn test_identify_every_entry_in_directory() {
    let temp_dir = setup_test_dir();
    for name in ["a.zip", "b.tar.xz", "c.gz", "d.txt"] {
        fs::write(temp_dir.path().join(name), "").unwrap();
    }

    let mut reports: Vec<_> = files_contained_in(temp_dir.path())
        .unwrap()
        .iter()
        .map(|p| FileType::for_path(p))
        .map(|t| (t.suffix(), t.is_archive(), t.is_compressed()))
        .collect();
    reports.sort();

    assert_eq!(
        reports,
        vec![
            ("", false, false),
            (".gz", false, true),
            (".tar.xz", true, true),
            (".zip", true, false),
        ]
    );
}

#[test]
fn test_copy_between_streams_reports_count() {
    let temp_dir = setup_test_dir();
    let path = temp_dir.path().join("stream.gz");
    let payload: Vec<u8> = (0..50_000u32).map(|i| (i % 7) as u8).collect();
    create_gz_file(&path, &payload).expect("Failed to create gz");

    let mut decoder = GzDecoder::new(File::open(&path).unwrap());
    let mut output: Vec<u8> = Vec::new();
    let count = copy(&mut decoder, &mut output).unwrap();

    assert_eq!(count, payload.len() as u64);
    assert_eq!(output, payload);
}
