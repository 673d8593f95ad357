//! Figma REST API client.
//!
//! The retrieval collaborator for the generator pipeline: downloads a file's
//! raw JSON over the Figma HTTP API. The access token is an explicit
//! constructor argument — nothing in this crate reads ambient configuration,
//! and the document is handed to the normalizer untouched.

use serde::Deserialize;
use serde_json::Value;

const FIGMA_API_BASE: &str = "https://api.figma.com/v1";

/// Retrieval error.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Figma API returned {status} for file {file_key}")]
    Status {
        status: reqwest::StatusCode,
        file_key: String,
    },
}

/// Blocking client for the Figma `files` endpoint.
pub struct FigmaClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl FigmaClient {
    /// Create a client against the public Figma API.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, FIGMA_API_BASE)
    }

    /// Create a client against a different endpoint. Test hook.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Download the complete file JSON for `file_key`.
    pub fn fetch_file(&self, file_key: &str) -> Result<Value, ClientError> {
        let url = format!("{}/files/{file_key}", self.base_url);
        log::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .header("X-Figma-Token", &self.token)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                file_key: file_key.to_string(),
            });
        }

        Ok(response.json()?)
    }
}

/// File-level metadata, for progress reporting. Every field is defaulted so
/// a sparse response still logs cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_modified: String,
    #[serde(default)]
    pub version: String,
}

impl FileMeta {
    /// Extract metadata from a fetched file JSON.
    pub fn from_file(file: &Value) -> Self {
        serde_json::from_value(file.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_file_meta_from_full_response() {
        let file = json!({
            "name": "Mobile App",
            "lastModified": "2024-05-01T12:00:00Z",
            "version": "42",
            "document": { "children": [] },
        });
        let meta = FileMeta::from_file(&file);
        assert_eq!(meta.name, "Mobile App");
        assert_eq!(meta.last_modified, "2024-05-01T12:00:00Z");
        assert_eq!(meta.version, "42");
    }

    #[test]
    fn test_file_meta_defaults_absent_fields() {
        let meta = FileMeta::from_file(&json!({ "name": "Sparse" }));
        assert_eq!(meta.name, "Sparse");
        assert_eq!(meta.last_modified, "");
        assert_eq!(meta.version, "");
    }

    #[test]
    fn test_file_meta_tolerates_non_object() {
        assert_eq!(FileMeta::from_file(&json!(null)), FileMeta::default());
    }
}
