//! Stream copy and filesystem helpers shared by archive readers and writers.

use crate::error::{ArchiveError, Result};
use crate::types::CopyOptions;
use std::fs::{self, File};
use std::io::{self, BufWriter, IntoInnerError, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Default buffer size used for copy operations.
pub const DEFAULT_BUFFER_SIZE: usize = 8024;

/// A resource whose release can fail.
///
/// Dropping a handle releases it as well, but swallows whatever error the
/// release produced. `close` surfaces that error instead.
pub trait Closeable {
    /// Flushes pending data and releases the resource.
    fn close(self) -> io::Result<()>;
}

impl Closeable for File {
    fn close(self) -> io::Result<()> {
        self.sync_all()
    }
}

impl<W: Write> Closeable for BufWriter<W> {
    fn close(self) -> io::Result<()> {
        let mut inner = self.into_inner().map_err(IntoInnerError::into_error)?;
        inner.flush()
    }
}

/// Closes the resource if present, ignoring any error raised while doing so.
///
/// Meant for cleanup on failure paths only. Use [`Closeable::close`] when
/// the outcome of the close matters.
pub fn close_quietly<C: Closeable>(closeable: Option<C>) {
    if let Some(closeable) = closeable {
        if let Err(e) = closeable.close() {
            debug!(error = %e, "ignoring error while closing resource");
        }
    }
}

/// Copies the content of a reader into a destination file.
///
/// The file is created or truncated. The handle is released before this
/// function returns, on success as well as on error. After a failed copy the
/// destination may hold a partial write.
///
/// # Returns
///
/// The number of bytes written.
///
/// # Errors
///
/// Returns [`ArchiveError::Io`] if the file cannot be created or if reading
/// or writing fails.
pub fn copy_to_file<R: Read + ?Sized>(source: &mut R, destination: &Path) -> Result<u64> {
    copy_to_file_with(source, destination, &CopyOptions::default())
}

/// Same as [`copy_to_file`], using the buffer size from `options`.
pub fn copy_to_file_with<R: Read + ?Sized>(
    source: &mut R,
    destination: &Path,
    options: &CopyOptions,
) -> Result<u64> {
    let mut output = File::create(destination)?;

    match copy_with_buffer(source, &mut output, options.buffer_size) {
        Ok(count) => {
            output.close()?;
            debug!(destination = %destination.display(), bytes = count, "copied stream to file");
            Ok(count)
        }
        Err(e) => {
            close_quietly(Some(output));
            Err(e)
        }
    }
}

/// Copies the entire content of a reader into a writer using [`DEFAULT_BUFFER_SIZE`].
///
/// # Returns
///
/// The number of bytes written.
pub fn copy<R, W>(input: &mut R, output: &mut W) -> Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    copy_with_buffer(input, output, DEFAULT_BUFFER_SIZE)
}

/// Copies the entire content of a reader into a writer.
///
/// Reads up to `buffer_size` bytes at a time into a single reused buffer and
/// writes exactly what was read, until the reader reports end of stream.
/// Interrupted reads are retried. The writer is not flushed.
///
/// # Errors
///
/// Returns [`ArchiveError::Io`] if `buffer_size` is zero or if reading or
/// writing fails. Some prefix of the input may already have been written.
///
/// # Examples
///
/// ```
/// use archiver::io_utils::copy_with_buffer;
///
/// let mut input: &[u8] = b"hello world";
/// let mut output: Vec<u8> = Vec::new();
/// let count = copy_with_buffer(&mut input, &mut output, 4).unwrap();
/// assert_eq!(count, 11);
/// assert_eq!(output, b"hello world");
/// ```
pub fn copy_with_buffer<R, W>(input: &mut R, output: &mut W, buffer_size: usize) -> Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    if buffer_size == 0 {
        return Err(ArchiveError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "buffer size must be greater than zero",
        )));
    }

    let mut buffer = vec![0u8; buffer_size];
    let mut count: u64 = 0;

    loop {
        let n = match input.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        output.write_all(&buffer[..n])?;
        count += n as u64;
    }

    Ok(count)
}

/// Computes the path of `node` relative to `root`.
///
/// Both paths are canonicalized first. If the root is `/home/me/project`
/// and the node is `/home/me/project/assembly/pom.xml`, the result is
/// `assembly/pom.xml`.
///
/// # Errors
///
/// - [`ArchiveError::Io`] if either path cannot be canonicalized
/// - [`ArchiveError::NotUnderRoot`] if `node` is not strictly below `root`
pub fn relative_path(root: &Path, node: &Path) -> Result<PathBuf> {
    let root = root.canonicalize()?;
    let node = node.canonicalize()?;

    match node.strip_prefix(&root) {
        Ok(relative) if !relative.as_os_str().is_empty() => Ok(relative.to_path_buf()),
        _ => Err(ArchiveError::NotUnderRoot { root, node }),
    }
}

/// Makes sure that `destination` is a writable directory, creating it and
/// any missing parents if it does not exist yet.
///
/// Writability is checked by creating (and immediately dropping) an
/// anonymous temporary file inside the directory, so read-only mounts and
/// directories owned by someone else are rejected too.
///
/// # Errors
///
/// Returns [`ArchiveError::InvalidDestination`] if the destination is an
/// existing file, could not be created, or is not writable.
pub fn require_directory(destination: &Path) -> Result<()> {
    if destination.is_file() {
        return Err(ArchiveError::InvalidDestination(format!(
            "{} exists and is a file, directory or path expected",
            destination.display()
        )));
    }

    if !destination.exists() {
        if let Err(e) = fs::create_dir_all(destination) {
            warn!(
                path = %destination.display(),
                error = %e,
                "failed to create destination directory"
            );
        }
    }

    let metadata = fs::metadata(destination).map_err(|e| {
        ArchiveError::InvalidDestination(format!(
            "{} is not accessible: {}",
            destination.display(),
            e
        ))
    })?;

    if !metadata.is_dir() {
        return Err(ArchiveError::InvalidDestination(format!(
            "{} is not a directory",
            destination.display()
        )));
    }

    if let Err(e) = tempfile::tempfile_in(destination) {
        return Err(ArchiveError::InvalidDestination(format!(
            "Can not write to destination {}: {}",
            destination.display(),
            e
        )));
    }

    Ok(())
}

/// Returns the direct children of `source` if it is a directory, or `source`
/// itself otherwise.
///
/// The listing is taken once, in whatever order the filesystem reports it.
///
/// # Errors
///
/// Returns [`ArchiveError::Io`] if the directory cannot be read.
pub fn files_contained_in(source: &Path) -> Result<Vec<PathBuf>> {
    if !source.is_dir() {
        return Ok(vec![source.to_path_buf()]);
    }

    WalkDir::new(source)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .map(|entry| {
            entry
                .map(walkdir::DirEntry::into_path)
                .map_err(|e| ArchiveError::Io(io::Error::from(e)))
        })
        .collect()
}
