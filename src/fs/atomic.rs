//! Atomic file writes.
//!
//! Documents are written to `.{filename}.tmp` next to the target, synced,
//! and renamed over the target. A crash mid-write leaves either the old
//! `.env` or the new one, never a truncated file. The temp file and the
//! target must be on the same filesystem for the rename to be atomic.

use crate::error::{EnvError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to `path`, creating parent directories.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| EnvError::io("create directory", parent, e))?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)
}

/// Atomically write a string to `path`.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// `.{filename}.tmp` in the target's directory.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| EnvError::UserError(format!("invalid file path '{}'", target.display())))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| EnvError::io("create", path, e))?;

    let written = file.write_all(content).and_then(|_| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(EnvError::io("write", path, e));
    }

    Ok(())
}

fn replace(source: &Path, target: &Path) -> Result<()> {
    if let Err(e) = fs::rename(source, target) {
        let _ = fs::remove_file(source);
        return Err(EnvError::io("replace", target, e));
    }

    // Persist the directory entry as well.
    #[cfg(unix)]
    {
        if let Some(parent) = target.parent()
            && let Ok(dir) = File::open(parent)
        {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join(".env");

        atomic_write_file(&file_path, "HOST_PORT=8080\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "HOST_PORT=8080\n");
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join(".env");
        fs::write(&file_path, "HOST_PORT=80\n").unwrap();

        atomic_write_file(&file_path, "HOST_PORT=8080\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "HOST_PORT=8080\n");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("deploy").join("prod").join(".env");

        atomic_write(&file_path, b"A=1\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "A=1\n");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join(".env");

        atomic_write(&file_path, b"content").unwrap();

        assert!(!temp_dir.path().join("..env.tmp").exists());
    }

    #[test]
    fn test_atomic_write_empty_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.env");

        atomic_write(&file_path, b"").unwrap();

        assert!(fs::read(&file_path).unwrap().is_empty());
    }

    #[test]
    fn test_atomic_write_into_file_parent_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = atomic_write(blocker.join(".env"), b"A=1").unwrap_err();

        assert!(matches!(err, EnvError::Io { .. }));
    }

    #[test]
    fn test_temp_path_for() {
        let temp = temp_path_for(Path::new("/srv/stack/.env")).unwrap();

        assert_eq!(temp, Path::new("/srv/stack/..env.tmp"));
    }
}
