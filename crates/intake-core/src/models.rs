//! Data models for the intake form
//!
//! Candidate files and their validation outcomes, the text field set, and
//! the wire types exchanged with the two remote endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a selected file.
///
/// Assigned at selection time, so two files with identical names remain
/// distinct entities; removal and the idempotent staging guard work on the
/// ticket, never on the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileTicket(Uuid);

impl FileTicket {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FileTicket {
    fn default() -> Self {
        Self::new()
    }
}

/// A file selected by the user, before or after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFile {
    ticket: FileTicket,
    pub filename: String,
    pub data: Vec<u8>,
}

impl CandidateFile {
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            ticket: FileTicket::new(),
            filename: filename.into(),
            data,
        }
    }

    pub fn ticket(&self) -> FileTicket {
        self.ticket
    }

    pub fn byte_size(&self) -> usize {
        self.data.len()
    }

    /// Lowercased last dot-segment of the filename. A name with no dot
    /// yields the whole name, which the allow-list then rejects.
    pub fn extension(&self) -> String {
        self.filename
            .rsplit('.')
            .next()
            .unwrap_or(&self.filename)
            .to_lowercase()
    }
}

/// Why a candidate file (or a whole batch) was turned away.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("Invalid file type: {extension} (allowed: {allowed:?})")]
    BadExtension {
        extension: String,
        allowed: Vec<String>,
    },

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    TooLarge { size: usize, max: usize },

    #[error(
        "Too many files: {current} already attached, {incoming} incoming (max: {max} in total)"
    )]
    BatchTooLarge {
        current: usize,
        incoming: usize,
        max: usize,
    },
}

/// Per-candidate validation state. Drives presentation only; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// Passed validation, waiting out the acceptance delay.
    Pending,
    Accepted,
    Rejected(RejectReason),
}

/// The five text fields of the form. Lives only for the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Names one of the five text fields, for field-change events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Password,
    PasswordConfirmation,
}

impl FormFields {
    pub fn set(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::FirstName => self.first_name = value,
            FieldId::LastName => self.last_name = value,
            FieldId::Email => self.email = value,
            FieldId::Password => self.password = value,
            FieldId::PasswordConfirmation => self.password_confirmation = value,
        }
    }

    /// Field values in declaration order, used by the all-filled check.
    pub fn values(&self) -> [&str; 5] {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.password,
            &self.password_confirmation,
        ]
    }
}

/// Upload endpoint response. The endpoint may return more fields; only the
/// file identifier is consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileUploadResponse {
    #[serde(rename = "fileId")]
    pub file_id: String,
}

/// Combined payload for the record-creation endpoint: the text fields plus
/// the ordered remote file identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub files: Vec<String>,
}

impl SubmissionRequest {
    pub fn new(fields: &FormFields, files: Vec<String>) -> Self {
        Self {
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            email: fields.email.clone(),
            password: fields.password.clone(),
            password_confirmation: fields.password_confirmation.clone(),
            files,
        }
    }
}
