use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use nodegraphdesk_proto::Configuration;
use serde::Serialize;

use crate::error::StoreError;

/// Persistence port for the configuration document.
/// Saves replace the whole document; there is no merge.
pub trait MappingStore {
    fn load(&self) -> Result<Configuration, StoreError>;
    fn save(&self, config: &Configuration) -> Result<(), StoreError>;
}

/// JSON document on disk.
///
/// A missing file loads as the empty configuration. Saves go through a
/// sibling temporary file and a rename, so readers never see half a document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the default document unless one already exists.
    /// Returns true when a new document was created.
    pub fn ensure_exists(&self) -> Result<bool, StoreError> {
        if self.path.exists() {
            return Ok(false);
        }
        self.save(&Configuration::default())?;
        Ok(true)
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl MappingStore for JsonFileStore {
    fn load(&self) -> Result<Configuration, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(
                    "No configuration at {}, starting empty",
                    self.path.display()
                );
                return Ok(Configuration::default());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&text).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, config: &Configuration) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        config.serialize(&mut ser).map_err(StoreError::Encode)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, &buf).map_err(|e| self.write_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            self.write_error(e)
        })?;

        tracing::debug!("Saved configuration to {}", self.path.display());
        Ok(())
    }
}
