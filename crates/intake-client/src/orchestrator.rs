//! Upload and submission orchestration
//!
//! Uploads are strictly sequential: each file upload is awaited before the
//! next starts, so the remote file identifiers come back in staging order
//! and a mid-batch failure cleanly splits into "everything before this file
//! succeeded, this one and later did not". The first failure aborts the
//! whole attempt; already-uploaded files are not rolled back server-side
//! and no final submission call is made. No retries anywhere in this path.

use intake_core::models::{CandidateFile, FormFields, SubmissionRequest};
use intake_core::IntakeError;

use crate::IntakeBackend;

/// Result of a successful submission: the record-creation response body and
/// the destination the caller should navigate to.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub body: serde_json::Value,
    pub redirect_url: String,
}

/// Sequences per-file uploads and the final combined submission call.
pub struct UploadOrchestrator<B: IntakeBackend> {
    backend: B,
    redirect_url: String,
}

impl<B: IntakeBackend> UploadOrchestrator<B> {
    pub fn new(backend: B, redirect_url: impl Into<String>) -> Self {
        Self {
            backend,
            redirect_url: redirect_url.into(),
        }
    }

    /// Upload every staged file in order, then create the combined record.
    ///
    /// The staged set itself is untouched by this call (the controller hands
    /// in a snapshot), so the user can retry the whole submit after failure
    /// without re-attaching files.
    pub async fn submit(
        &self,
        fields: &FormFields,
        files: &[CandidateFile],
    ) -> Result<SubmissionOutcome, IntakeError> {
        tracing::info!(count = files.len(), "starting file uploads");

        let mut file_ids = Vec::with_capacity(files.len());
        for file in files {
            tracing::info!(filename = %file.filename, size = file.byte_size(), "uploading file");
            let response = self.backend.upload_file(file).await?;
            tracing::debug!(filename = %file.filename, file_id = %response.file_id, "file uploaded");
            file_ids.push(response.file_id);
        }

        tracing::info!(count = file_ids.len(), "all files uploaded, submitting record");
        let request = SubmissionRequest::new(fields, file_ids);
        let body = self.backend.create_record(&request).await?;

        tracing::info!("submission complete");
        Ok(SubmissionOutcome {
            body,
            redirect_url: self.redirect_url.clone(),
        })
    }
}
