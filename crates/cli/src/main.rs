//! Command-line interface for archive format identification.
//!
//! This CLI tool reports which archive format and compression type a file
//! name denotes, and exposes the copy and directory helpers of the library.

use archiver::io_utils::{copy_to_file_with, files_contained_in, relative_path, require_directory};
use archiver::{identify, CopyOptions, DEFAULT_BUFFER_SIZE};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use std::process;
use tracing::info;

#[derive(Parser)]
#[command(name = "archiver")]
#[command(version, about = "Identify archives and compressed files by name", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Identify the archive format and compression of one or more files
    Identify {
        /// Files to identify (they do not need to exist)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Copy a file to a destination, creating the destination directory
    Copy {
        /// File to copy
        source: PathBuf,

        /// Destination file
        destination: PathBuf,

        /// Transfer buffer size in bytes
        #[arg(long, default_value_t = DEFAULT_BUFFER_SIZE)]
        buffer_size: usize,
    },

    /// List the files contained in a directory
    List {
        /// Directory or file to list
        path: PathBuf,

        /// Print paths relative to this directory
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Ensure a directory exists and is writable
    Prepare {
        /// Directory to prepare
        dir: PathBuf,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Identify { files, json } => handle_identify(files, json),
        Commands::Copy {
            source,
            destination,
            buffer_size,
        } => handle_copy(source, destination, buffer_size),
        Commands::List { path, root } => handle_list(path, root),
        Commands::Prepare { dir } => handle_prepare(dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn handle_identify(files: Vec<PathBuf>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let reports: Vec<_> = files.iter().map(|f| identify(f)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in reports {
        let archive = report
            .archive_format
            .map(|f| f.to_string())
            .unwrap_or_else(|| "-".to_string());
        let compression = report
            .compression
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());

        if report.is_archive || report.is_compressed {
            println!(
                "{}: suffix {} archive {} compression {}",
                report.path, report.suffix, archive, compression
            );
        } else {
            println!("{}: unknown", report.path);
        }
    }

    Ok(())
}

fn handle_copy(
    source: PathBuf,
    destination: PathBuf,
    buffer_size: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        require_directory(parent)?;
    }

    let options = CopyOptions { buffer_size };
    let mut input = File::open(&source)?;
    let bytes = copy_to_file_with(&mut input, &destination, &options)?;

    info!(
        source = %source.display(),
        destination = %destination.display(),
        bytes,
        "copy complete"
    );
    Ok(())
}

fn handle_list(path: PathBuf, root: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    for file in files_contained_in(&path)? {
        match &root {
            Some(root) => println!("{}", relative_path(root, &file)?.display()),
            None => println!("{}", file.display()),
        }
    }
    Ok(())
}

fn handle_prepare(dir: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    require_directory(&dir)?;
    info!(dir = %dir.display(), "destination ready");
    Ok(())
}
