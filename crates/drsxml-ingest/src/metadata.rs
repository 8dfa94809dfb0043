//! JSON collection metadata and depositor configuration files.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use drsxml_model::{CollectionMetadata, DepositorConfig};

use crate::error::{IngestError, Result};

/// Load proceedings collection metadata from a JSON file.
pub fn load_collection_metadata(path: &Path) -> Result<CollectionMetadata> {
    read_json(path)
}

/// Load depositor configuration; fields left out keep their defaults.
pub fn load_depositor_config(path: &Path) -> Result<DepositorConfig> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    serde_json::from_str(&contents).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })
}
