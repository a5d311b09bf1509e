//! Form controller state machine
//!
//! Owns the whole form state (fields, staged files, pending files, busy
//! flag) and maps interaction events to state transitions plus commands for
//! the caller to execute. Timers and network calls never happen here: a
//! file that passes validation becomes *pending* and the caller receives a
//! `ScheduleStageTimer` command; when the timer fires it feeds back a
//! `StageDelayElapsed` event that commits the file into the staging store.
//!
//! The batch ceiling counts staged plus pending files, so selections made
//! while earlier files are still inside their acceptance delay cannot
//! overshoot the total ceiling.

use std::time::Duration;

use uuid::Uuid;

use crate::config::Config;
use crate::models::{CandidateFile, FieldId, FileTicket, FormFields, RejectReason};
use crate::staging::FileStagingStore;
use crate::validation::fields::{self, FieldReport};
use crate::validation::file::{check_batch, FileChecker};

/// Token for one pending file's acceptance delay. A stale token (pending
/// entry already consumed) makes the elapsed event a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StageToken(Uuid);

impl StageToken {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StageToken {
    fn default() -> Self {
        Self::new()
    }
}

/// A file that passed validation and is waiting out its acceptance delay.
/// Counts toward the batch ceiling but not toward submit-eligibility.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFile {
    pub file: CandidateFile,
    pub token: StageToken,
}

/// Interaction events fed into the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    FieldChanged { field: FieldId, value: String },
    /// One selection or drop action; validated against the ceiling together.
    FilesSelected { batch: Vec<CandidateFile> },
    StageDelayElapsed { token: StageToken },
    FileRemoved { ticket: FileTicket },
    SubmitRequested,
    SubmissionFinished { ok: bool },
}

/// Effects the caller must execute after applying an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Sleep `delay`, then feed back `StageDelayElapsed { token }`.
    ScheduleStageTimer { token: StageToken, delay: Duration },
    /// Surface a per-file rejection marker.
    NotifyRejected {
        filename: String,
        reason: RejectReason,
    },
    /// Surface a whole-batch rejection (blocking alert).
    NotifyBatchRejected { reason: RejectReason },
    /// Run the upload/submission pipeline with this snapshot, then feed back
    /// `SubmissionFinished`.
    BeginSubmission {
        fields: FormFields,
        files: Vec<CandidateFile>,
    },
    SetFieldsEnabled(bool),
    ShowFileList(bool),
}

/// Single owned instance wiring validators, staging store, and submission
/// gating together. No ambient globals.
pub struct FormController {
    checker: FileChecker,
    max_files: usize,
    stage_delay: Duration,
    fields: FormFields,
    staged: FileStagingStore,
    pending: Vec<PendingFile>,
    busy: bool,
}

impl FormController {
    pub fn new(config: &Config) -> Self {
        Self {
            checker: FileChecker::from_config(config),
            max_files: config.max_files,
            stage_delay: Duration::from_millis(config.stage_delay_ms),
            fields: FormFields::default(),
            staged: FileStagingStore::new(),
            pending: Vec::new(),
            busy: false,
        }
    }

    /// Apply one event, mutating state and returning the commands to run.
    pub fn apply(&mut self, event: FormEvent) -> Vec<Command> {
        match event {
            FormEvent::FieldChanged { field, value } => {
                self.fields.set(field, value);
                Vec::new()
            }
            FormEvent::FilesSelected { batch } => self.on_files_selected(batch),
            FormEvent::StageDelayElapsed { token } => self.on_stage_elapsed(token),
            FormEvent::FileRemoved { ticket } => self.on_file_removed(ticket),
            FormEvent::SubmitRequested => self.on_submit_requested(),
            FormEvent::SubmissionFinished { ok } => {
                if !ok {
                    tracing::warn!("submission attempt failed, form remains usable");
                }
                self.busy = false;
                Vec::new()
            }
        }
    }

    fn on_files_selected(&mut self, batch: Vec<CandidateFile>) -> Vec<Command> {
        if batch.is_empty() {
            return Vec::new();
        }

        // Ceiling check first, against staged plus pending, rejecting the
        // batch wholesale before any per-file validation runs.
        let current = self.staged.len() + self.pending.len();
        if let Err(reason) = check_batch(current, batch.len(), self.max_files) {
            tracing::debug!(current, incoming = batch.len(), "batch rejected");
            return vec![Command::NotifyBatchRejected { reason }];
        }

        let mut commands = vec![Command::ShowFileList(true)];
        for file in batch {
            match self.checker.check(&file) {
                Ok(()) => {
                    let token = StageToken::new();
                    tracing::debug!(filename = %file.filename, "file pending acceptance");
                    self.pending.push(PendingFile { file, token });
                    commands.push(Command::ScheduleStageTimer {
                        token,
                        delay: self.stage_delay,
                    });
                }
                Err(reason) => {
                    tracing::debug!(filename = %file.filename, %reason, "file rejected");
                    commands.push(Command::NotifyRejected {
                        filename: file.filename,
                        reason,
                    });
                }
            }
        }
        commands
    }

    fn on_stage_elapsed(&mut self, token: StageToken) -> Vec<Command> {
        let Some(pos) = self.pending.iter().position(|p| p.token == token) else {
            // Stale or unknown timer token.
            return Vec::new();
        };
        let entry = self.pending.remove(pos);
        let first_file = self.staged.is_empty();
        if self.staged.add(entry.file) && first_file {
            return vec![Command::SetFieldsEnabled(true)];
        }
        Vec::new()
    }

    fn on_file_removed(&mut self, ticket: FileTicket) -> Vec<Command> {
        if self.staged.remove(ticket).is_some() && self.staged.is_empty() {
            // Mirror the pre-first-file state: fields disabled, list hidden.
            return vec![Command::SetFieldsEnabled(false), Command::ShowFileList(false)];
        }
        Vec::new()
    }

    fn on_submit_requested(&mut self) -> Vec<Command> {
        if !self.is_submit_enabled() {
            return Vec::new();
        }
        self.busy = true;
        vec![Command::BeginSubmission {
            fields: self.fields.clone(),
            files: self.staged.drain(),
        }]
    }

    /// Derived submit-eligibility, recomputed on every call - never cached.
    pub fn is_eligible(&self) -> bool {
        fields::submit_ready(&self.fields) && !self.staged.is_empty()
    }

    /// Eligibility gated by the submission-in-progress flag.
    pub fn is_submit_enabled(&self) -> bool {
        self.is_eligible() && !self.busy
    }

    /// Inline display state for the text fields.
    pub fn field_report(&self) -> FieldReport {
        fields::report(&self.fields)
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn staged(&self) -> &FileStagingStore {
        &self.staged
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
