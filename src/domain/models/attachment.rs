use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::DomainError;

/// Metadata for a file queued to go out with the next message.
///
/// Only the metadata travels; file contents are never read or uploaded.
/// Incoming metadata is read leniently since the backend only logs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAttachment {
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    mime_type: String,
    #[serde(default, deserialize_with = "lenient_size")]
    size: u64,
}

/// Whole bytes from any JSON number; anything else reads as 0.
fn lenient_size<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .or_else(|| value.as_f64().filter(|n| *n >= 0.0).map(|n| n as u64))
        .unwrap_or(0))
}

impl PendingAttachment {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    /// Builds attachment metadata from a file on disk. The MIME type is guessed
    /// from the extension and defaults to `application/octet-stream`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(DomainError::invalid_input(format!(
                "Not a regular file: {}",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| {
                DomainError::invalid_input(format!("Path has no file name: {}", path.display()))
            })?;

        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();

        Ok(Self::new(name, mime_type, metadata.len()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    pub fn summary(&self) -> String {
        format!("{} ({}, {} bytes)", self.name, self.mime_type, self.size)
    }
}
