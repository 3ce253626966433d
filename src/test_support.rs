use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

use crate::catalog;
use crate::codec;
use crate::document::ConfigDocument;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Empty project directory.
pub(crate) fn create_test_project() -> TempDir {
    TempDir::new().unwrap()
}

/// Project directory with a `.env` holding the built-in defaults.
pub(crate) fn create_project_with_defaults() -> TempDir {
    let temp_dir = create_test_project();
    let defaults = catalog::builtin().unwrap().defaults();
    write_env(temp_dir.path(), &defaults);
    temp_dir
}

pub(crate) fn write_env(dir: &Path, document: &ConfigDocument) {
    codec::write_document(&dir.join(".env"), document, None).unwrap();
}

pub(crate) fn read_env(dir: &Path) -> ConfigDocument {
    codec::read_document(&dir.join(".env")).unwrap()
}
