//! The JSON file holding every diary entry.
//!
//! The file is always read and written whole: `load` decodes the complete
//! array, `save` replaces the complete file.
use crate::entry::Entry;
use crate::error::{DiaryError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    /// Write to a sibling temp file and rename it over `path`, instead of
    /// truncating `path` in place.
    atomic_writes: bool,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>, atomic_writes: bool) -> Self {
        Self {
            path: path.into(),
            atomic_writes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the parent directory and an empty `[]` store if the file is missing.
    ///
    /// Returns `true` when a new file was written.
    pub fn ensure_exists(&self) -> Result<bool> {
        fs::create_dir_all(self.dir()).map_err(|e| DiaryError::io(self.dir(), e))?;
        if self.path.exists() {
            return Ok(false);
        }
        self.save(&[])?;
        Ok(true)
    }

    /// Reads and decodes the whole file.
    ///
    /// A missing file is an [`DiaryError::Io`], not an empty diary. A literal
    /// `null` decodes to no entries.
    pub fn load(&self) -> Result<Vec<Entry>> {
        let file = File::open(&self.path).map_err(|e| DiaryError::io(&self.path, e))?;
        let entries: Option<Vec<Entry>> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| DiaryError::Decode {
                path: self.path.clone(),
                source,
            })?;
        Ok(entries.unwrap_or_default())
    }

    /// Replaces the file with `entries`, pretty printed with two-space indent.
    pub fn save(&self, entries: &[Entry]) -> Result<()> {
        let mut bytes = serde_json::to_vec_pretty(entries).map_err(DiaryError::Encode)?;
        bytes.push(b'\n');

        if self.atomic_writes {
            self.save_atomic(&bytes)
        } else {
            self.save_in_place(&bytes)
        }
    }

    fn save_atomic(&self, bytes: &[u8]) -> Result<()> {
        let dir = self.dir();
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| DiaryError::io(dir, e))?;
        tmp.write_all(bytes)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| DiaryError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| DiaryError::io(&self.path, e.error))?;
        Ok(())
    }

    fn save_in_place(&self, bytes: &[u8]) -> Result<()> {
        let file = File::create(&self.path).map_err(|e| DiaryError::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(bytes)
            .and_then(|_| writer.flush())
            .map_err(|e| DiaryError::io(&self.path, e))
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn mk_store(atomic_writes: bool) -> (Store, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let store = Store::new(tmp.path().join("data").join("diary.json"), atomic_writes);
        (store, tmp)
    }

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new("2024-01-02", "second day"),
            Entry::new("2024-01-01", "line one\nline \"two\""),
            Entry::new("2024-01-01", "line one\nline \"two\""),
        ]
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let (store, _tmp) = mk_store(true);
        let err = store.load().unwrap_err();
        assert!(matches!(err, DiaryError::Io { .. }));
    }

    #[test]
    fn ensure_exists_writes_empty_array_once() {
        let (store, _tmp) = mk_store(true);
        assert!(store.ensure_exists().unwrap());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]\n");
        assert!(store.load().unwrap().is_empty());

        store.save(&sample()).unwrap();
        assert!(!store.ensure_exists().unwrap());
        assert_eq!(store.load().unwrap().len(), 3);
    }

    #[test]
    fn save_then_load_keeps_order_and_duplicates() {
        for atomic in [true, false] {
            let (store, _tmp) = mk_store(atomic);
            store.ensure_exists().unwrap();
            store.save(&sample()).unwrap();
            assert_eq!(store.load().unwrap(), sample());
        }
    }

    #[test]
    fn save_writes_two_space_indented_json() {
        let (store, _tmp) = mk_store(true);
        store.ensure_exists().unwrap();
        store.save(&[Entry::new("2024-01-01", "hello")]).unwrap();
        let s = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            s,
            "[\n  {\n    \"date\": \"2024-01-01\",\n    \"content\": \"hello\"\n  }\n]\n"
        );
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let (store, _tmp) = mk_store(false);
        store.ensure_exists().unwrap();
        store.save(&sample()).unwrap();
        store.save(&[Entry::new("a", "b")]).unwrap();
        assert_eq!(store.load().unwrap(), vec![Entry::new("a", "b")]);
    }

    #[test]
    fn atomic_save_leaves_no_temp_files() {
        let (store, _tmp) = mk_store(true);
        store.ensure_exists().unwrap();
        store.save(&sample()).unwrap();
        let names: Vec<_> = fs::read_dir(store.path().parent().unwrap())
            .unwrap()
            .map(|d| d.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("diary.json")]);
    }

    #[test]
    fn load_malformed_file_is_decode_error() {
        let (store, _tmp) = mk_store(true);
        store.ensure_exists().unwrap();
        fs::write(store.path(), "this file is not valid").unwrap();
        assert!(matches!(store.load().unwrap_err(), DiaryError::Decode { .. }));

        fs::write(store.path(), r#"[{"date": 1, "content": "x"}]"#).unwrap();
        assert!(matches!(store.load().unwrap_err(), DiaryError::Decode { .. }));

        fs::write(store.path(), "").unwrap();
        assert!(matches!(store.load().unwrap_err(), DiaryError::Decode { .. }));
    }

    #[test]
    fn load_null_is_empty() {
        let (store, _tmp) = mk_store(true);
        store.ensure_exists().unwrap();
        fs::write(store.path(), "null\n").unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
