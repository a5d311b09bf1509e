//! Shared constants for the intake form.

/// Maximum number of files that may be attached in total (staged + pending).
pub const MAX_FILES: usize = 5;

/// Maximum size of a single attachment, in megabytes.
pub const MAX_FILE_SIZE_MB: usize = 5;

/// Allowed attachment extensions (lowercase, without leading dot).
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["csv", "pdf", "png", "jpg", "jpeg"];

/// Minimum password length for submission.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Delay between a file passing validation and becoming staged, in milliseconds.
pub const STAGE_DELAY_MS: u64 = 500;

/// Default file-storage upload endpoint.
pub const DEFAULT_UPLOAD_URL: &str = "https://aiagents.slingrs.io/dev/runtime/api/files";

/// Default record-creation endpoint.
pub const DEFAULT_SUBMISSION_URL: &str =
    "https://aiagents.slingrs.io/dev/runtime/api/data/dummyEntity/createPublicData/";

/// Destination shown to the user after a successful submission.
pub const DEFAULT_REDIRECT_URL: &str = "https://aiagents.slingrs.io/dev/runtime";
