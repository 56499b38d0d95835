//! Upload storage configuration.

use serde::{Deserialize, Serialize};

/// Local upload storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory that receives uploaded files.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Largest accepted upload in bytes.
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// URL prefix under which uploads are served.
    #[serde(default = "default_public_path")]
    pub public_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            max_upload_size_bytes: default_max_upload(),
            public_path: default_public_path(),
        }
    }
}

fn default_upload_dir() -> String {
    "./uploads".to_string()
}

fn default_max_upload() -> u64 {
    10 * 1024 * 1024
}

fn default_public_path() -> String {
    "/uploads".to_string()
}
