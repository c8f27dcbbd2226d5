//! GitHub contents API client
//!
//! Create-or-update flow: look up the existing file's blob SHA on the
//! target branch, then PUT the new content with the SHA attached when the
//! file already exists.

use crate::error::{GitError, GitResult};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;
use serde_json::json;
use sf_core::config::GitConfig;

/// What the publish did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    Created,
    Updated,
}

/// GitHub publisher bound to one repository and branch
pub struct GitHubPublisher {
    client: reqwest::Client,
    api_base: String,
    repo: String,
    branch: String,
    token: String,
}

impl GitHubPublisher {
    /// Build a publisher from git settings.
    ///
    /// The token is read from the environment variable named by
    /// `token_env`.
    pub fn from_config(config: &GitConfig) -> GitResult<Self> {
        let token = std::env::var(&config.token_env).map_err(|_| GitError::MissingToken {
            env: config.token_env.clone(),
        })?;
        Ok(Self {
            client: reqwest::Client::new(),
            api_base: "https://api.github.com".to_string(),
            repo: config.repo.clone(),
            branch: config.branch.clone(),
            token,
        })
    }

    /// Create or update `path` on the configured branch
    pub async fn publish(
        &self,
        path: &str,
        content: &str,
        message: &str,
    ) -> GitResult<PublishOutcome> {
        let existing_sha = self.fetch_sha(path).await?;
        let outcome = if existing_sha.is_some() {
            PublishOutcome::Updated
        } else {
            PublishOutcome::Created
        };

        let mut payload = json!({
            "message": message,
            "content": BASE64.encode(content),
            "branch": self.branch,
        });
        if let Some(sha) = existing_sha {
            payload["sha"] = json!(sha);
        }

        let response = self
            .client
            .put(self.contents_url(path))
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "snowforge")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            let message = serde_json::from_str::<ApiMessage>(&body)
                .map(|m| m.message)
                .unwrap_or(body);
            return Err(GitError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        log::debug!("Published {} ({:?})", path, outcome);
        Ok(outcome)
    }

    /// Blob SHA of the file on the branch, or None when it doesn't exist
    async fn fetch_sha(&self, path: &str) -> GitResult<Option<String>> {
        let response = self
            .client
            .get(format!("{}?ref={}", self.contents_url(path), self.branch))
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "snowforge")
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(GitError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }
        let existing: ExistingFile = response
            .json()
            .await
            .map_err(|e| GitError::ResponseFormat(e.to_string()))?;
        Ok(Some(existing.sha))
    }

    fn contents_url(&self, path: &str) -> String {
        format!("{}/repos/{}/contents/{}", self.api_base, self.repo, path)
    }
}

#[derive(Debug, Deserialize)]
struct ExistingFile {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}
