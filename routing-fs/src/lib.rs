//! Capability-based file access for the routing command-line tools.
//!
//! Paths arrive as UTF-8 [`Utf8Path`]s from the command line and are opened
//! through `cap-std` directories, so every read and write is scoped to the
//! directory that contains the target.
#![forbid(unsafe_code)]

use std::io::{self, Read, Write};
use std::path::Component;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path using ambient authority.
///
/// # Errors
///
/// Returns the underlying IO error if the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read the whole of `path` into memory.
///
/// # Errors
///
/// Returns the underlying IO error if the file cannot be opened or read.
pub fn read_file(path: &Utf8Path) -> io::Result<Vec<u8>> {
    let mut file = open_utf8_file(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Create or truncate `path` and write `contents` to it, creating missing
/// parent directories first.
///
/// # Errors
///
/// Returns the underlying IO error if a directory cannot be created or the
/// file cannot be written.
pub fn write_file(path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_dir_and_file(path)?;
    let mut file = dir.create(name.as_str())?;
    file.write_all(contents)?;
    file.flush()
}

/// Open the directory containing `path` and return it with the file name.
///
/// # Errors
///
/// Fails if `path` has no file name or its parent cannot be opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Ensure the parent directory for `path` exists.
///
/// # Errors
///
/// Returns the underlying IO error if a directory cannot be created.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }

    let (base_dir, relative) = base_dir_and_relative(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base_dir.create_dir_all(&relative)
}

/// Return whether `path` exists and is a regular file.
///
/// # Errors
///
/// Returns the underlying IO error, including [`io::ErrorKind::NotFound`]
/// when nothing exists at `path`.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Split a parent path into an ambient base directory and a relative suffix.
fn base_dir_and_relative(parent: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_parent = parent.as_std_path();

    let (base, relative) = match std_parent.components().next() {
        // Windows absolute path with a drive or UNC prefix.
        Some(Component::Prefix(prefix)) => {
            let prefix_str = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            let base = Utf8PathBuf::from(prefix_str).join(std::path::MAIN_SEPARATOR_STR);
            let relative = std_parent
                .strip_prefix(base.as_std_path())
                .or_else(|_| std_parent.strip_prefix(prefix.as_os_str()))
                .map_err(|_| io::Error::other("failed to strip prefix from parent path"))?
                .to_path_buf();
            (base, relative)
        }
        Some(Component::RootDir) => {
            let base = Utf8PathBuf::from(std::path::MAIN_SEPARATOR_STR);
            let relative = std_parent
                .strip_prefix(base.as_std_path())
                .map_err(|_| io::Error::other("failed to strip root from absolute path"))?
                .to_path_buf();
            (base, relative)
        }
        _ => (Utf8PathBuf::from("."), std_parent.to_path_buf()),
    };

    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    let relative = Utf8PathBuf::from_path_buf(relative)
        .map_err(|_| io::Error::other("non-UTF-8 parent path"))?;
    Ok((dir, relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    struct Workspace {
        _dir: TempDir,
        root: Utf8PathBuf,
    }

    #[fixture]
    fn workspace() -> Workspace {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        Workspace { _dir: dir, root }
    }

    #[rstest]
    fn write_then_read_creates_parents(workspace: Workspace) {
        let target = workspace.root.join("nested/deeper/route.json");
        write_file(&target, b"{\"paths\":[]}").expect("write should succeed");
        assert_eq!(read_file(&target).expect("read should succeed"), b"{\"paths\":[]}");
    }

    #[rstest]
    fn write_truncates_existing_contents(workspace: Workspace) {
        let target = workspace.root.join("route.json");
        write_file(&target, b"a much longer first payload").expect("first write");
        write_file(&target, b"short").expect("second write");
        assert_eq!(read_file(&target).expect("read should succeed"), b"short");
    }

    #[rstest]
    fn file_is_file_distinguishes_directories(workspace: Workspace) {
        let file = workspace.root.join("body.json");
        write_file(&file, b"{}").expect("write should succeed");
        assert!(file_is_file(&file).expect("metadata for file"));
        assert!(!file_is_file(&workspace.root).expect("metadata for directory"));
    }

    #[rstest]
    fn file_is_file_reports_missing_paths(workspace: Workspace) {
        let err = file_is_file(&workspace.root.join("absent.json")).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn open_dir_and_file_requires_a_name() {
        let err = open_dir_and_file(Utf8Path::new("/")).expect_err("root has no file name");
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
