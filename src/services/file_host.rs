// src/services/file_host.rs
//! Client for the external file host where resume files live
//!
//! Resume uploads happen on the frontend; the backend only stores the
//! resulting URL and deletes the hosted file when a resume record goes.
//! FILE_HOST_BASE_URL and FILE_HOST_API_KEY configure the client; with
//! either missing, remote deletion is skipped.

use regex::Regex;
use reqwest::Client;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::info;

/// First path segment made purely of hex digits and dashes, i.e. the
/// hosted-file UUID inside a stored resume URL
static FILE_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/([0-9a-f-]+)/").unwrap());

#[derive(Debug, Error)]
pub enum FileHostError {
    #[error("File host request failed: {0}")]
    RequestFailed(String),

    #[error("File host answered status {0}")]
    BadStatus(u16),
}

#[derive(Clone)]
pub struct FileHostClient {
    http: Client,
    base_url: Option<String>,
    api_key: Option<String>,
}

impl FileHostClient {
    pub fn new(http: Client, base_url: Option<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    pub fn from_env(http: Client) -> Self {
        Self::new(
            http,
            std::env::var("FILE_HOST_BASE_URL").ok(),
            std::env::var("FILE_HOST_API_KEY").ok(),
        )
    }

    /// Extract the hosted-file id out of a stored resume URL
    pub fn extract_file_id(path: &str) -> Option<String> {
        FILE_ID_RE
            .captures(path)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Delete a hosted file
    ///
    /// A missing configuration is a successful no-op; HTTP failures are
    /// returned for the caller to decide on.
    pub async fn delete_file(&self, file_id: &str) -> Result<(), FileHostError> {
        let (base_url, api_key) = match (&self.base_url, &self.api_key) {
            (Some(base_url), Some(api_key)) => (base_url, api_key),
            _ => {
                info!(file_id = %file_id, "File host not configured, skipping remote delete");
                return Ok(());
            }
        };

        let url = format!("{}/files/{}/", base_url.trim_end_matches('/'), file_id);
        let response = self
            .http
            .delete(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .send()
            .await
            .map_err(|e| FileHostError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FileHostError::BadStatus(response.status().as_u16()));
        }

        info!(file_id = %file_id, "Deleted hosted resume file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_file_id_from_hosted_url() {
        let path =
            "https://files.example.com/0b5cf01c-9e31-4f52-8e6b-1bd32a7c55aa/my_resume.pdf";
        assert_eq!(
            FileHostClient::extract_file_id(path),
            Some("0b5cf01c-9e31-4f52-8e6b-1bd32a7c55aa".to_string())
        );
    }

    #[test]
    fn test_extract_file_id_missing() {
        assert_eq!(FileHostClient::extract_file_id("plain_resume.pdf"), None);
        assert_eq!(
            FileHostClient::extract_file_id("https://files.example.com/Resume.PDF"),
            None
        );
    }

    #[tokio::test]
    async fn test_unconfigured_delete_is_noop() {
        let client = FileHostClient::new(Client::new(), None, None);
        assert!(client.delete_file("0b5cf01c").await.is_ok());
    }
}
