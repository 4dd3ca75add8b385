//! Document store configuration.

use serde::{Deserialize, Serialize};

/// Persistent document store configuration.
///
/// The store holds whole-document JSON blobs keyed by name; the backend
/// selects where those documents live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend: `"file"` (one file per document) or `"memory"` (volatile,
    /// for tests and local experiments).
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Directory holding document files when the file backend is active.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_backend() -> String {
    "file".to_string()
}

fn default_data_dir() -> String {
    "data/store".to_string()
}
