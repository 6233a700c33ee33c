use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::{
    errors::{LedgerError, Result},
    utils::persistence,
};

use super::KeyValueStore;

type Document = BTreeMap<String, String>;

/// File-backed key-value store holding every key in one JSON object.
///
/// A missing file reads as an empty store. Each write rewrites the whole
/// object through a temporary file that is then renamed over the original.
/// Reads of a corrupt file fail with [`LedgerError::Storage`]; the first
/// write after that moves the file to `<name>.corrupt` and starts a new
/// document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents, or `None` when the file is missing or blank.
    fn read_raw(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        Ok((!data.trim().is_empty()).then_some(data))
    }

    fn read_all(&self) -> Result<Document> {
        let Some(data) = self.read_raw()? else {
            return Ok(Document::new());
        };
        serde_json::from_str(&data).map_err(|err| {
            LedgerError::Storage(format!(
                "store file `{}` is not a valid key-value document: {err}",
                self.path.display()
            ))
        })
    }

    /// Document to modify on write. A corrupt file is set aside instead of blocking writes.
    fn read_for_update(&self) -> Result<Document> {
        let Some(data) = self.read_raw()? else {
            return Ok(Document::new());
        };
        match serde_json::from_str(&data) {
            Ok(values) => Ok(values),
            Err(err) => {
                let aside = persistence::corrupt_path(&self.path);
                warn!(
                    error = %err,
                    path = %self.path.display(),
                    moved_to = %aside.display(),
                    "store file is corrupt; moving it aside and starting a new document"
                );
                fs::rename(&self.path, &aside)?;
                Ok(Document::new())
            }
        }
    }

    fn write_all(&self, values: &Document) -> Result<()> {
        let json = serde_json::to_string_pretty(values)?;
        persistence::write_atomic(&self.path, &json)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_for_update()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.read_for_update()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}
