//! Intake Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! validation shared across all intake components, plus the form state
//! machine that drives staging and submission. It performs no I/O: timers
//! and network calls are represented as commands for the caller to execute.

pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod models;
pub mod staging;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use controller::{Command, FormController, FormEvent, PendingFile, StageToken};
pub use error::{IntakeError, LogLevel};
pub use models::{
    CandidateFile, FieldId, FileTicket, FileUploadResponse, FormFields, RejectReason,
    SubmissionRequest, ValidationOutcome,
};
pub use staging::FileStagingStore;
pub use validation::fields::{report, submit_ready, FieldReport};
pub use validation::file::{check_batch, FileChecker};
