//! Evidence upload configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_dir() -> String {
    String::from("uploads")
}

/// 5 MiB.
const fn default_max_bytes() -> u64 {
    5 * 1024 * 1024
}

fn default_allowed_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "pdf", "txt", "docx"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    /// Directory evidence files are copied into.
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Largest accepted file, in bytes.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,

    /// Lowercase file extensions accepted as evidence.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            max_bytes: default_max_bytes(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

impl UploadConfig {
    /// Whether `file_name` carries an allowed extension (case-insensitive).
    #[must_use]
    pub fn is_allowed(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.allowed_extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }
}
