//! `packaging`
//!
//! Assembles the Chrome extension's shippable files plus two generated
//! documents into a staging directory, then compresses the staging tree
//! into a timestamped zip archive for distribution.

mod archive;
mod documents;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};

/// Directory inside the staging root that receives the extension files.
pub const EXTENSION_PACKAGE_DIRECTORY: &str = "chrome-pdf-extension";

/// Package version embedded in the archive name and generated documents.
pub const PACKAGE_VERSION: &str = "1.0.0";

/// Stem of the produced archive's file name.
const ARCHIVE_STEM: &str = "pdf-generator-pro";

/// Where the extension sources live and where the package is assembled.
pub struct PackageConfig {
    /// The extension project directory to package.
    pub project_directory: PathBuf,
    /// Staging directory, destroyed and recreated on every run. The archive
    /// is written next to it.
    pub staging_directory: PathBuf,
    /// Standalone test page copied into the staging root when it exists.
    pub test_page: PathBuf,
    /// Ordered top-level files and directories to copy from the project.
    pub includes: Vec<String>,
    /// Substring patterns; file and directory names containing any of them
    /// are skipped (directories without being traversed).
    pub excludes: Vec<String>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        PackageConfig {
            project_directory: PathBuf::from(EXTENSION_PACKAGE_DIRECTORY),
            staging_directory: PathBuf::from("pdf-generator-pro-package"),
            test_page: PathBuf::from("test-page.html"),
            includes: [
                "manifest.json",
                "README.md",
                "src",
                "assets",
                "styles",
                "scripts",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            excludes: [
                ".git",
                ".gitignore",
                "__pycache__",
                ".pyc",
                ".DS_Store",
                "Thumbs.db",
                ".tmp",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Errors that abort a packaging run. Nothing is recovered; the staging
/// directory is left as-is for the next run's reset to clean up.
#[derive(Debug)]
pub enum PackageError {
    /// Failed to delete or recreate the staging directory.
    ResetStaging(io::Error),
    /// Failed while copying project files into the staging tree.
    CopyFiles(io::Error),
    /// Failed to write one of the generated documents.
    WriteDocument(io::Error),
    /// Failed to create the zip archive.
    CreateArchive(zip::result::ZipError),
    /// Failed while listing the staging tree.
    ListStaging(io::Error),
}

/// The artefacts of a successful packaging run.
#[derive(Debug)]
pub struct BuiltPackage {
    /// The compressed archive, ready for distribution.
    pub archive_path: PathBuf,
    /// The staging tree the archive was built from.
    pub staging_directory: PathBuf,
}

/// Builds the distribution package: resets the staging directory, copies
/// the curated file set, writes the generated documents, compresses the
/// staging tree and prints a listing of it.
///
/// # Arguments
/// * `config`: Source and staging locations plus the include/exclude lists.
/// * `built_at`: The build timestamp embedded in the version document and
///   the archive file name.
///
/// # Returns
/// The archive path and staging directory of the built package.
///
/// # Errors
/// [`PackageError`] for any filesystem or compression failure; partial
/// staging state is left on disk.
pub fn build_package(
    config: &PackageConfig,
    built_at: DateTime<Local>,
) -> Result<BuiltPackage, PackageError> {
    reset_staging(&config.staging_directory).map_err(PackageError::ResetStaging)?;
    copy_project_files(config).map_err(PackageError::CopyFiles)?;
    copy_test_page(config).map_err(PackageError::CopyFiles)?;

    documents::write_installation_guide(&config.staging_directory)
        .map_err(PackageError::WriteDocument)?;
    documents::write_version_info(&config.staging_directory, built_at)
        .map_err(PackageError::WriteDocument)?;

    let archive_path = archive_output_path(config, built_at);
    archive::compress_directory(&config.staging_directory, &archive_path)
        .map_err(PackageError::CreateArchive)?;

    println!("\nPackage created successfully!");
    println!("ZIP file: {}", archive_path.display());
    println!("Package directory: {}", config.staging_directory.display());

    println!("\nPackage contents:");
    archive::print_tree(&config.staging_directory).map_err(PackageError::ListStaging)?;

    Ok(BuiltPackage {
        archive_path,
        staging_directory: config.staging_directory.clone(),
    })
}

/// Deletes any staging directory left by a previous run and creates a
/// fresh, empty one.
fn reset_staging(directory: &Path) -> io::Result<()> {
    if directory.exists() {
        fs::remove_dir_all(directory)?;
    }
    fs::create_dir_all(directory)
}

/// Copies every include entry into the staging tree, under the
/// [`EXTENSION_PACKAGE_DIRECTORY`] subdirectory. Entries absent from the
/// project are skipped with a warning.
fn copy_project_files(config: &PackageConfig) -> io::Result<()> {
    let destination_root = config.staging_directory.join(EXTENSION_PACKAGE_DIRECTORY);
    fs::create_dir_all(&destination_root)?;

    for entry in &config.includes {
        let source = config.project_directory.join(entry);
        let destination = destination_root.join(entry);

        if source.is_file() {
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(&source, &destination)?;
            println!("Copied file: {entry}");
        } else if source.is_dir() {
            copy_directory_filtered(&source, &destination, &config.excludes)?;
            println!("Copied directory: {entry}");
        } else {
            log::warn!("Include entry not found, skipping: {entry}");
        }
    }

    Ok(())
}

/// Recursively copies a directory. Subdirectories whose names match an
/// exclude pattern are pruned before descending; matching files are
/// skipped. Relative paths are preserved under `destination`.
fn copy_directory_filtered(
    source: &Path,
    destination: &Path,
    excludes: &[String],
) -> io::Result<()> {
    fs::create_dir_all(destination)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let name = entry.file_name();
        if is_excluded(&name.to_string_lossy(), excludes) {
            continue;
        }

        if entry.file_type()?.is_dir() {
            copy_directory_filtered(&entry.path(), &destination.join(&name), excludes)?;
        } else {
            fs::copy(entry.path(), destination.join(&name))?;
        }
    }
    Ok(())
}

/// Substring containment against the entry name, kept for compatibility
/// with the historical behavior. Note this is deliberately not a glob:
/// a pattern of "git" would also match a file named "digital.png".
fn is_excluded(name: &str, excludes: &[String]) -> bool {
    excludes.iter().any(|pattern| name.contains(pattern.as_str()))
}

/// Copies the standalone test page into the staging root when it exists;
/// its absence is tolerated silently.
fn copy_test_page(config: &PackageConfig) -> io::Result<()> {
    if !config.test_page.is_file() {
        return Ok(());
    }
    if let Some(file_name) = config.test_page.file_name() {
        fs::copy(&config.test_page, config.staging_directory.join(file_name))?;
        println!("Copied test page");
    }
    Ok(())
}

/// The archive is written to the staging directory's parent, named with
/// the build timestamp to the second so successive runs never collide.
fn archive_output_path(config: &PackageConfig, built_at: DateTime<Local>) -> PathBuf {
    let timestamp = built_at.format("%Y%m%d_%H%M%S");
    let file_name = format!("{ARCHIVE_STEM}-v{PACKAGE_VERSION}_{timestamp}.zip");
    match config.staging_directory.parent() {
        Some(parent) if parent != Path::new("") => parent.join(file_name),
        _ => PathBuf::from(file_name),
    }
}
