//! intake - command-line client for the staged-upload intake form.
//!
//! `intake submit` validates the fields and attachments, stages each file
//! through its acceptance delay, uploads them one by one, and creates the
//! combined record. `intake check` runs validation only, with no network.
//!
//! Set INTAKE_TOKEN (and optionally INTAKE_UPLOAD_URL / INTAKE_SUBMISSION_URL
//! / INTAKE_REDIRECT_URL) in the environment or a `.env` file.

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use intake_cli::{init_tracing, read_candidate};
use intake_client::{ApiClient, UploadOrchestrator};
use intake_core::controller::Command as FormCommand;
use intake_core::models::FieldId;
use intake_core::validation::{check_batch, fields as field_rules, file::FileChecker};
use intake_core::{Config, FormController, FormEvent, ValidationOutcome};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "intake", about = "Staged-upload intake form client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FormArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    password_confirmation: String,
    /// Attachment file path (repeatable)
    #[arg(long = "file", value_name = "PATH")]
    files: Vec<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate, stage, upload, and submit the form
    Submit {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Run validation only and print a JSON report (no network calls)
    Check {
        #[command(flatten)]
        form: FormArgs,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize output")?;
    println!("{}", out);
    Ok(())
}

fn enter_fields(controller: &mut FormController, form: &FormArgs) {
    for (field, value) in [
        (FieldId::FirstName, form.first_name.clone()),
        (FieldId::LastName, form.last_name.clone()),
        (FieldId::Email, form.email.clone()),
        (FieldId::Password, form.password.clone()),
        (FieldId::PasswordConfirmation, form.password_confirmation.clone()),
    ] {
        controller.apply(FormEvent::FieldChanged { field, value });
    }
}

async fn run_submit(form: FormArgs) -> anyhow::Result<()> {
    let config = Config::from_env();
    let mut controller = FormController::new(&config);

    enter_fields(&mut controller, &form);

    let batch = form
        .files
        .iter()
        .map(|p| read_candidate(p))
        .collect::<anyhow::Result<Vec<_>>>()?;

    // One selection action: the whole argument list is a single batch.
    let commands = controller.apply(FormEvent::FilesSelected { batch });
    let mut timers = Vec::new();
    for command in commands {
        match command {
            FormCommand::ScheduleStageTimer { token, delay } => timers.push((token, delay)),
            FormCommand::NotifyRejected { filename, reason } => {
                bail!("{}: {}", filename, reason)
            }
            FormCommand::NotifyBatchRejected { reason } => bail!("{}", reason),
            _ => {}
        }
    }
    for (token, delay) in timers {
        tokio::time::sleep(delay).await;
        controller.apply(FormEvent::StageDelayElapsed { token });
    }

    if let Some(message) = controller.field_report().error_message() {
        bail!("{}", message);
    }
    if !controller.is_submit_enabled() {
        bail!("Form is not ready to submit: fill every field and attach at least one file");
    }

    let commands = controller.apply(FormEvent::SubmitRequested);
    let Some(FormCommand::BeginSubmission { fields, files }) = commands
        .into_iter()
        .find(|c| matches!(c, FormCommand::BeginSubmission { .. }))
    else {
        bail!("Form is not ready to submit");
    };

    let client = ApiClient::new(&config)?;
    let orchestrator = UploadOrchestrator::new(client, config.redirect_url.clone());
    let result = orchestrator.submit(&fields, &files).await;
    controller.apply(FormEvent::SubmissionFinished {
        ok: result.is_ok(),
    });

    match result {
        Ok(outcome) => {
            print_json(&outcome.body)?;
            println!("Continue at: {}", outcome.redirect_url);
            Ok(())
        }
        Err(err) => {
            tracing::error!(code = err.error_code(), "submission failed");
            bail!("{}", err.user_message())
        }
    }
}

#[derive(Serialize)]
struct FieldSummary {
    length_ok: bool,
    match_ok: bool,
    all_filled_ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct FileSummary {
    filename: String,
    accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

#[derive(Serialize)]
struct CheckReport {
    fields: FieldSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    batch_error: Option<String>,
    files: Vec<FileSummary>,
    submit_ready: bool,
}

fn run_check(form: FormArgs) -> anyhow::Result<()> {
    let config = Config::from_env();
    let checker = FileChecker::from_config(&config);

    let mut controller = FormController::new(&config);
    enter_fields(&mut controller, &form);
    let report = controller.field_report();

    let batch = form
        .files
        .iter()
        .map(|p| read_candidate(p))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let batch_error = check_batch(0, batch.len(), config.max_files)
        .err()
        .map(|reason| reason.to_string());

    let files: Vec<FileSummary> = batch
        .iter()
        .map(|file| match checker.outcome(file) {
            ValidationOutcome::Rejected(reason) => FileSummary {
                filename: file.filename.clone(),
                accepted: false,
                reason: Some(reason.to_string()),
            },
            _ => FileSummary {
                filename: file.filename.clone(),
                accepted: true,
                reason: None,
            },
        })
        .collect();

    let all_files_ok =
        batch_error.is_none() && !files.is_empty() && files.iter().all(|f| f.accepted);
    let submit_ready = field_rules::submit_ready(controller.fields()) && all_files_ok;

    print_json(&CheckReport {
        fields: FieldSummary {
            length_ok: report.length_ok,
            match_ok: report.match_ok,
            all_filled_ok: report.all_filled_ok,
            error: report.error_message().map(|m| m.to_string()),
        },
        batch_error,
        files,
        submit_ready,
    })?;

    if !submit_ready {
        std::process::exit(1);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Submit { form } => run_submit(form).await,
        Commands::Check { form } => run_check(form),
    }
}
