//! Storage backends for persisted shortcut state.
//!
//! Responsibilities:
//! - Define the `BindingStorage` trait: raw bytes for the binding list plus a boolean flag.
//! - Provide `FileStorage` (two files, atomic writes, corrupt-file quarantine).
//! - Provide `MemoryStorage` for tests and `--fresh` runs.
//!
//! Does NOT handle:
//! - Decoding or reconciling the binding list (see `state`).
//! - Ordering of writes (see `store`).
//!
//! Invariants:
//! - A missing file reads as `None`, never as an error.
//! - `FileStorage` never leaves a partially written file at the target path.

use std::io;
use std::path::{Path, PathBuf};

use super::create_corrupt_backup;
use crate::constants::{SHORTCUTS_FILE, SHORTCUTS_FLAG_FILE};

/// Backend holding the persisted binding list and the "customized" flag.
pub trait BindingStorage {
    /// Raw serialized binding list, if any was written.
    fn read_bindings(&self) -> io::Result<Option<Vec<u8>>>;

    /// The customized flag, if any was written.
    fn read_customized(&self) -> io::Result<Option<bool>>;

    fn write_bindings(&mut self, data: &[u8]) -> io::Result<()>;

    fn write_customized(&mut self, customized: bool) -> io::Result<()>;

    /// Move an undecodable binding list out of the way.
    fn quarantine_bindings(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// File-backed storage under a configuration directory.
///
/// Layout:
/// - `shortcuts.json`: pretty JSON list of `{ "action", "keys" }`
/// - `shortcuts.customized`: `true` or `false`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn bindings_path(&self) -> PathBuf {
        self.dir.join(SHORTCUTS_FILE)
    }

    pub fn flag_path(&self) -> PathBuf {
        self.dir.join(SHORTCUTS_FLAG_FILE)
    }

    /// Writes to a temporary file first, then renames it to the target path.
    fn atomic_write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        let temp_path = temp_path_for(path);
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, path)?;

        tracing::debug!(path = %path.display(), "Shortcut state saved atomically");
        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    PathBuf::from(temp)
}

fn read_optional(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

impl BindingStorage for FileStorage {
    fn read_bindings(&self) -> io::Result<Option<Vec<u8>>> {
        read_optional(&self.bindings_path())
    }

    fn read_customized(&self) -> io::Result<Option<bool>> {
        // Anything other than "true" counts as not customized
        Ok(read_optional(&self.flag_path())?
            .map(|bytes| String::from_utf8_lossy(&bytes).trim() == "true"))
    }

    fn write_bindings(&mut self, data: &[u8]) -> io::Result<()> {
        self.atomic_write(&self.bindings_path(), data)
    }

    fn write_customized(&mut self, customized: bool) -> io::Result<()> {
        let value = if customized { "true" } else { "false" };
        self.atomic_write(&self.flag_path(), value.as_bytes())
    }

    fn quarantine_bindings(&mut self) -> io::Result<()> {
        let path = self.bindings_path();
        if !path.exists() {
            return Ok(());
        }
        let backup = create_corrupt_backup(&path)?;
        tracing::warn!(
            path = %path.display(),
            backup_path = %backup.display(),
            "Shortcut file is corrupt, backed up and using defaults"
        );
        Ok(())
    }
}

/// In-memory storage.
///
/// Writes can be made to fail to exercise error paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    bindings: Option<Vec<u8>>,
    customized: Option<bool>,
    fail_writes: bool,
    fail_flag_writes: bool,
    quarantined: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with raw values.
    pub fn with_state(bindings: Option<Vec<u8>>, customized: Option<bool>) -> Self {
        Self {
            bindings,
            customized,
            ..Default::default()
        }
    }

    /// Make every subsequent write fail.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Make only flag writes fail (binding writes still succeed).
    pub fn set_fail_flag_writes(&mut self, fail: bool) {
        self.fail_flag_writes = fail;
    }

    pub fn bindings(&self) -> Option<&[u8]> {
        self.bindings.as_deref()
    }

    pub fn customized(&self) -> Option<bool> {
        self.customized
    }

    /// Number of times a corrupt binding list was quarantined.
    pub fn quarantined(&self) -> usize {
        self.quarantined
    }

    fn write_error() -> io::Error {
        io::Error::other("storage write disabled")
    }
}

impl BindingStorage for MemoryStorage {
    fn read_bindings(&self) -> io::Result<Option<Vec<u8>>> {
        Ok(self.bindings.clone())
    }

    fn read_customized(&self) -> io::Result<Option<bool>> {
        Ok(self.customized)
    }

    fn write_bindings(&mut self, data: &[u8]) -> io::Result<()> {
        if self.fail_writes {
            return Err(Self::write_error());
        }
        self.bindings = Some(data.to_vec());
        Ok(())
    }

    fn write_customized(&mut self, customized: bool) -> io::Result<()> {
        if self.fail_writes || self.fail_flag_writes {
            return Err(Self::write_error());
        }
        self.customized = Some(customized);
        Ok(())
    }

    fn quarantine_bindings(&mut self) -> io::Result<()> {
        if self.bindings.take().is_some() {
            self.quarantined += 1;
        }
        Ok(())
    }
}

impl<S: BindingStorage + ?Sized> BindingStorage for Box<S> {
    fn read_bindings(&self) -> io::Result<Option<Vec<u8>>> {
        (**self).read_bindings()
    }

    fn read_customized(&self) -> io::Result<Option<bool>> {
        (**self).read_customized()
    }

    fn write_bindings(&mut self, data: &[u8]) -> io::Result<()> {
        (**self).write_bindings(data)
    }

    fn write_customized(&mut self, customized: bool) -> io::Result<()> {
        (**self).write_customized(customized)
    }

    fn quarantine_bindings(&mut self) -> io::Result<()> {
        (**self).quarantine_bindings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_files_read_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("nested"));

        assert_eq!(storage.read_bindings().unwrap(), None);
        assert_eq!(storage.read_customized().unwrap(), None);
    }

    #[test]
    fn test_write_creates_directory_and_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path().join("nested"));

        storage.write_bindings(b"[]").unwrap();
        storage.write_customized(true).unwrap();

        assert_eq!(storage.read_bindings().unwrap().as_deref(), Some(&b"[]"[..]));
        assert_eq!(storage.read_customized().unwrap(), Some(true));
        assert!(!temp_path_for(&storage.bindings_path()).exists());
        assert!(!temp_path_for(&storage.flag_path()).exists());
    }

    #[test]
    fn test_unexpected_flag_content_reads_as_false() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        std::fs::write(storage.flag_path(), "yes please").unwrap();

        assert_eq!(storage.read_customized().unwrap(), Some(false));
    }

    #[test]
    fn test_quarantine_renames_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path());
        std::fs::write(storage.bindings_path(), "{ not json").unwrap();

        storage.quarantine_bindings().unwrap();

        assert!(!storage.bindings_path().exists());
        let backups: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_string_lossy()
                    .starts_with("shortcuts.corrupt.")
            })
            .collect();
        assert_eq!(backups.len(), 1);
        assert_eq!(
            std::fs::read_to_string(backups[0].path()).unwrap(),
            "{ not json"
        );
    }

    #[test]
    fn test_memory_storage_failing_writes() {
        let mut storage = MemoryStorage::new();
        storage.set_fail_writes(true);

        assert!(storage.write_bindings(b"[]").is_err());
        assert!(storage.write_customized(true).is_err());
        assert_eq!(storage.bindings(), None);
        assert_eq!(storage.customized(), None);
    }
}
