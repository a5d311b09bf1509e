//! HTTP client for the two intake endpoints.
//!
//! Provides a minimal reqwest client with the static `token` header auth the
//! endpoints require: multipart POST for per-file uploads and JSON PUT for
//! the final record creation. Any non-2xx status is a failure, reported with
//! the status and the response body text. The [`IntakeBackend`] trait is the
//! seam the orchestrator is generic over, so submission sequencing can be
//! tested against an in-memory mock.

pub mod orchestrator;

pub use orchestrator::{SubmissionOutcome, UploadOrchestrator};

use anyhow::Context;
use async_trait::async_trait;
use intake_core::models::{CandidateFile, FileUploadResponse, SubmissionRequest};
use intake_core::{Config, IntakeError};
use reqwest::Client;
use std::time::Duration;

/// The two remote operations the submission pipeline depends on.
#[async_trait]
pub trait IntakeBackend: Send + Sync {
    /// Push one file to the file-storage endpoint.
    async fn upload_file(&self, file: &CandidateFile) -> Result<FileUploadResponse, IntakeError>;

    /// Create the combined record from field values and file identifiers.
    async fn create_record(
        &self,
        request: &SubmissionRequest,
    ) -> Result<serde_json::Value, IntakeError>;
}

/// HTTP client for the intake endpoints.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    upload_url: String,
    submission_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let token = config
            .token
            .clone()
            .context("Missing intake token. Set INTAKE_TOKEN")?;

        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            upload_url: config.upload_url.clone(),
            submission_url: config.submission_url.clone(),
            token,
        })
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("Accept", "application/json")
            .header("token", self.token.as_str())
    }
}

#[async_trait]
impl IntakeBackend for ApiClient {
    async fn upload_file(&self, file: &CandidateFile) -> Result<FileUploadResponse, IntakeError> {
        let part = reqwest::multipart::Part::bytes(file.data.clone())
            .file_name(file.filename.clone());
        let form = reqwest::multipart::Form::new().part("file", part);

        let request = self.apply_auth(self.client.post(&self.upload_url).multipart(form));
        let response = request.send().await.map_err(|e| {
            IntakeError::Transport(format!("upload request for '{}': {}", file.filename, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(IntakeError::Upload {
                filename: file.filename.clone(),
                message: format!("status {}: {}", status, error_text),
            });
        }

        response.json().await.map_err(|e| IntakeError::Upload {
            filename: file.filename.clone(),
            message: format!("invalid JSON response: {}", e),
        })
    }

    async fn create_record(
        &self,
        request: &SubmissionRequest,
    ) -> Result<serde_json::Value, IntakeError> {
        let req = self.apply_auth(self.client.put(&self.submission_url).json(request));
        let response = req
            .send()
            .await
            .map_err(|e| IntakeError::Transport(format!("submission request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(IntakeError::Submission(format!(
                "status {}: {}",
                status, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| IntakeError::Submission(format!("invalid JSON response: {}", e)))
    }
}
