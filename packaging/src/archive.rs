//! `archive`
//!
//! Zip creation over the staging tree, plus the operator-facing indented
//! listing printed after a build.

use std::{fs, io, path::Path};

use zip::{result::ZipResult, write::SimpleFileOptions, CompressionMethod, ZipWriter};

/// Walks `staging` recursively and writes every contained file into a
/// deflate-compressed zip at `archive_path`. Entry names are the files'
/// paths relative to the staging root, with forward-slash separators.
pub(crate) fn compress_directory(staging: &Path, archive_path: &Path) -> ZipResult<()> {
    let file = fs::File::create(archive_path)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    add_directory(&mut writer, staging, staging, &options)?;
    writer.finish()?;
    Ok(())
}

/// Adds one directory level to the archive, recursing into subdirectories.
fn add_directory(
    writer: &mut ZipWriter<fs::File>,
    root: &Path,
    directory: &Path,
    options: &SimpleFileOptions,
) -> ZipResult<()> {
    for entry in sorted_entries(directory)? {
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            add_directory(writer, root, &path, options)?;
        } else {
            let name = path
                .strip_prefix(root)
                .expect("walked entries live under the staging root");
            writer.start_file(name.to_string_lossy().replace('\\', "/"), options.clone())?;
            let mut source = fs::File::open(&path)?;
            io::copy(&mut source, writer)?;
        }
    }
    Ok(())
}

/// Prints the staging tree indented by depth, purely for operator
/// confirmation.
pub(crate) fn print_tree(staging: &Path) -> io::Result<()> {
    print_tree_level(staging, 0)
}

fn print_tree_level(directory: &Path, depth: usize) -> io::Result<()> {
    let indent = "  ".repeat(depth);
    let name = directory
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!("{indent}{name}/");

    for entry in sorted_entries(directory)? {
        if entry.file_type()?.is_dir() {
            print_tree_level(&entry.path(), depth + 1)?;
        } else {
            println!("{indent}  {}", entry.file_name().to_string_lossy());
        }
    }
    Ok(())
}

/// Directory entries sorted by name, so archive layout and listings are
/// stable across runs.
fn sorted_entries(directory: &Path) -> io::Result<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(directory)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(fs::DirEntry::file_name);
    Ok(entries)
}
