use std::fs;
use std::path::{Path, PathBuf};

use super::domain::LayeringTemplate;

/// Storage abstraction so the service module can be exercised in isolation.
pub trait TemplateStore: Send + Sync {
    fn load(&self) -> Result<Vec<LayeringTemplate>, TemplateStoreError>;
    fn save(&self, templates: &[LayeringTemplate]) -> Result<(), TemplateStoreError>;
}

/// Error enumeration for template storage failures.
#[derive(Debug, thiserror::Error)]
pub enum TemplateStoreError {
    #[error("failed to read template collection at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write template collection at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("template collection at {path} is not a valid template array: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("template collection could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

/// File-backed store holding the collection as a pretty-printed JSON array,
/// the format the templates are maintained in upstream.
pub struct JsonTemplateStore {
    path: PathBuf,
}

impl JsonTemplateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TemplateStore for JsonTemplateStore {
    fn load(&self) -> Result<Vec<LayeringTemplate>, TemplateStoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| TemplateStoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| TemplateStoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, templates: &[LayeringTemplate]) -> Result<(), TemplateStoreError> {
        let body = serde_json::to_string_pretty(templates).map_err(TemplateStoreError::Encode)?;
        fs::write(&self.path, body).map_err(|source| TemplateStoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
