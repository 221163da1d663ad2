//! Filesystem helpers for catalog, preference and state files.
//!
//! Paths are UTF-8 (`camino`) and every operation goes through `cap-std`
//! directory handles opened with ambient authority, so callers never touch
//! `std::fs` directly.
#![forbid(unsafe_code)]

use std::io::{self, Read};
use std::path::Component;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open a file for reading.
///
/// # Errors
/// Propagates the I/O error, including `NotFound` for missing files.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read a whole file into a `String`.
///
/// # Errors
/// Propagates open and read failures, and rejects non-UTF-8 content.
pub fn read_utf8_to_string(path: &Utf8Path) -> io::Result<String> {
    let mut file = open_utf8_file(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Open the directory containing `path` and return it with the file name.
///
/// # Errors
/// Fails when `path` has no file name or the parent cannot be opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    let parent = if parent.as_str().is_empty() {
        Utf8Path::new(".")
    } else {
        parent
    };
    let Some(file_name) = path.file_name() else {
        return Err(io::Error::other(format!("{path} has no file name")));
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name.to_owned()))
}

/// Create `path`'s parent directory and any missing ancestors.
///
/// # Errors
/// Propagates failures opening the base directory or creating children.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }
    let (base, relative) = split_base(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(&relative)
}

/// Replace the contents of the file at `path`, creating parents as needed.
///
/// # Errors
/// Propagates directory creation and write failures.
pub fn write_utf8(path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, file_name) = open_dir_and_file(path)?;
    dir.write(file_name.as_str(), contents)
}

/// Report whether `path` names a regular file.
///
/// # Errors
/// Returns `NotFound` when the path or its parent is missing, and other
/// errors when metadata cannot be read.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, file_name) = open_dir_and_file(path)?;
    dir.metadata(file_name.as_str()).map(|meta| meta.is_file())
}

/// Split a directory path into an ambient base handle and the relative rest.
///
/// Absolute paths resolve from the root (or the drive prefix on Windows);
/// relative paths resolve from the working directory.
fn split_base(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_dir = dir.as_std_path();
    let base = match std_dir.components().next() {
        Some(Component::Prefix(prefix)) => {
            let Some(prefix) = prefix.as_os_str().to_str() else {
                return Err(io::Error::other("non-UTF-8 path prefix"));
            };
            Utf8PathBuf::from(prefix).join(std::path::MAIN_SEPARATOR.to_string())
        }
        Some(Component::RootDir) => Utf8PathBuf::from(std::path::MAIN_SEPARATOR.to_string()),
        _ => Utf8PathBuf::from("."),
    };
    let relative = if base.as_str() == "." {
        dir.to_path_buf()
    } else {
        dir.strip_prefix(&base)
            .map_err(|_| io::Error::other(format!("failed to strip {base} from {dir}")))?
            .to_path_buf()
    };
    let handle = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((handle, relative))
}
