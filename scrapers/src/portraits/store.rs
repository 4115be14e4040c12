//! Output directory for downloaded portraits and the metadata sidecar.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use tempfile::Builder;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create output directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize metadata: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File name a portrait is stored under.
#[must_use]
pub fn image_file_name(bioguide_id: &str) -> String {
    format!("{bioguide_id}.jpg")
}

/// A directory of `<bioguide id>.jpg` files.
///
/// All writes go to a hidden temp file in the same directory and are renamed
/// into place, so an interrupted download never leaves a truncated image.
#[derive(Debug, Clone)]
pub struct PortraitStore {
    dir: PathBuf,
}

impl PortraitStore {
    /// Open the store, creating the directory if needed.
    ///
    /// # Errors
    /// Returns `StoreError::CreateDir` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn image_path(&self, bioguide_id: &str) -> PathBuf {
        self.dir.join(image_file_name(bioguide_id))
    }

    /// Write a portrait, replacing any previous copy.
    ///
    /// # Errors
    /// Returns `StoreError::Write` if the file cannot be written.
    pub fn write_image(&self, bioguide_id: &str, bytes: &[u8]) -> Result<PathBuf, StoreError> {
        let path = self.image_path(bioguide_id);
        self.write_atomic(&path, bytes)?;
        Ok(path)
    }

    /// Serialize `records` as a two-space indented JSON array to `file_name`.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn write_metadata<T: Serialize>(
        &self,
        file_name: &str,
        records: &[T],
    ) -> Result<PathBuf, StoreError> {
        let json = serde_json::to_vec_pretty(records)?;
        let path = self.dir.join(file_name);
        self.write_atomic(&path, &json)?;
        Ok(path)
    }

    fn write_atomic(&self, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
        let write_err = |source: io::Error| StoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut tmp = Builder::new()
            .prefix(".")
            .suffix(".part")
            .tempfile_in(&self.dir)
            .map_err(write_err)?;
        tmp.write_all(bytes).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_nested_directory() {
        let root = tempfile::tempdir().expect("tempdir");
        let dir = root.path().join("a").join("representative_portraits");
        let store = PortraitStore::open(&dir).expect("should open");
        assert!(dir.is_dir());
        assert_eq!(store.dir(), dir.as_path());
    }

    #[test]
    fn test_write_image_overwrites_and_leaves_no_temp_files() {
        let root = tempfile::tempdir().expect("tempdir");
        let store = PortraitStore::open(root.path()).expect("should open");

        store.write_image("P000197", b"first").expect("write 1");
        let path = store.write_image("P000197", b"second").expect("write 2");

        assert_eq!(path, root.path().join("P000197.jpg"));
        assert_eq!(fs::read(&path).expect("read"), b"second");

        let entries: Vec<_> = fs::read_dir(root.path())
            .expect("read_dir")
            .map(|e| e.expect("entry").file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("P000197.jpg")]);
    }

    #[test]
    fn test_write_metadata_uses_two_space_indent() {
        let root = tempfile::tempdir().expect("tempdir");
        let store = PortraitStore::open(root.path()).expect("should open");

        let path = store
            .write_metadata("meta.json", &[serde_json::json!({"a": 1})])
            .expect("write");

        let text = fs::read_to_string(path).expect("read");
        assert_eq!(text, "[\n  {\n    \"a\": 1\n  }\n]");
    }

    #[test]
    fn test_write_metadata_empty_list() {
        let root = tempfile::tempdir().expect("tempdir");
        let store = PortraitStore::open(root.path()).expect("should open");
        let records: Vec<serde_json::Value> = Vec::new();
        let path = store.write_metadata("meta.json", &records).expect("write");
        assert_eq!(fs::read_to_string(path).expect("read"), "[]");
    }

    #[test]
    fn test_open_fails_when_path_is_a_file() {
        let root = tempfile::tempdir().expect("tempdir");
        let file = root.path().join("not-a-dir");
        fs::write(&file, b"x").expect("write");
        let result = PortraitStore::open(&file);
        assert!(matches!(result, Err(StoreError::CreateDir { .. })));
    }
}
