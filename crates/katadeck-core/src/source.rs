//! Content sources: where the manifest and challenge files come from.
//!
//! A source is either a local content directory or an HTTP base URL. Both
//! expose the same relative layout: `challenges.json` at the root and
//! markdown files at the manifest-given paths.

use std::path::PathBuf;

use crate::error::{DeckError, DeckResult};

/// A root from which deck resources are fetched as text
#[derive(Debug, Clone)]
pub enum ContentSource {
    /// Local directory, read with tokio::fs
    Dir(PathBuf),
    /// Remote HTTP root
    Http {
        client: reqwest::Client,
        base: String,
    },
}

impl ContentSource {
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        ContentSource::Dir(path.into())
    }

    pub fn http(base: impl Into<String>) -> Self {
        ContentSource::Http {
            client: reqwest::Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch a resource as text, addressed relative to the source root.
    ///
    /// A non-success HTTP status is an error; no size or content-type
    /// validation is performed on the body.
    pub async fn fetch_text(&self, path: &str) -> DeckResult<String> {
        match self {
            ContentSource::Dir(root) => {
                let full = root.join(path.trim_start_matches('/'));
                tracing::debug!(path = %full.display(), "reading content file");
                Ok(tokio::fs::read_to_string(full).await?)
            }
            ContentSource::Http { client, base } => {
                let url = format!("{}/{}", base, path.trim_start_matches('/'));
                tracing::debug!(%url, "fetching content");
                let response = client.get(&url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(DeckError::Status {
                        path: path.to_string(),
                        status: status.as_u16(),
                    });
                }
                Ok(response.text().await?)
            }
        }
    }
}
