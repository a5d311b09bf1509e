//! Configuration module
//!
//! Environment-driven configuration for the intake client: endpoint URLs,
//! the static API token, and the file-acceptance limits. Every value has a
//! built-in default so `check`-style runs work without any environment.

use std::env;
use std::str::FromStr;

use crate::constants;

/// Runtime configuration for the intake client.
#[derive(Clone, Debug)]
pub struct Config {
    /// File-storage upload endpoint (one multipart POST per file).
    pub upload_url: String,
    /// Record-creation endpoint (one JSON PUT per submission).
    pub submission_url: String,
    /// Destination URL surfaced to the user after a successful submission.
    pub redirect_url: String,
    /// Static `token` header value. Required for network operations only.
    pub token: Option<String>,
    /// Maximum number of attachments (staged + pending).
    pub max_files: usize,
    /// Maximum size of a single attachment, in bytes.
    pub max_file_size_bytes: usize,
    /// Allowed attachment extensions, lowercase, without leading dot.
    pub allowed_extensions: Vec<String>,
    /// Delay between passing validation and becoming staged, in milliseconds.
    pub stage_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload_url: constants::DEFAULT_UPLOAD_URL.to_string(),
            submission_url: constants::DEFAULT_SUBMISSION_URL.to_string(),
            redirect_url: constants::DEFAULT_REDIRECT_URL.to_string(),
            token: None,
            max_files: constants::MAX_FILES,
            max_file_size_bytes: constants::MAX_FILE_SIZE_MB * 1024 * 1024,
            allowed_extensions: constants::ALLOWED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            stage_delay_ms: constants::STAGE_DELAY_MS,
        }
    }
}

impl Config {
    /// Build configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: INTAKE_UPLOAD_URL, INTAKE_SUBMISSION_URL,
    /// INTAKE_REDIRECT_URL, INTAKE_TOKEN, INTAKE_MAX_FILES,
    /// INTAKE_MAX_FILE_SIZE_MB, INTAKE_ALLOWED_EXTENSIONS (comma-separated),
    /// INTAKE_STAGE_DELAY_MS.
    pub fn from_env() -> Self {
        let defaults = Config::default();

        Self {
            upload_url: env::var("INTAKE_UPLOAD_URL").unwrap_or(defaults.upload_url),
            submission_url: env::var("INTAKE_SUBMISSION_URL").unwrap_or(defaults.submission_url),
            redirect_url: env::var("INTAKE_REDIRECT_URL").unwrap_or(defaults.redirect_url),
            token: env::var("INTAKE_TOKEN").ok(),
            max_files: parse_env("INTAKE_MAX_FILES", defaults.max_files),
            max_file_size_bytes: parse_env("INTAKE_MAX_FILE_SIZE_MB", constants::MAX_FILE_SIZE_MB)
                * 1024
                * 1024,
            allowed_extensions: parse_env_list("INTAKE_ALLOWED_EXTENSIONS")
                .unwrap_or(defaults.allowed_extensions),
            stage_delay_ms: parse_env("INTAKE_STAGE_DELAY_MS", defaults.stage_delay_ms),
        }
    }
}

/// Parse a numeric environment variable, falling back to a default when the
/// variable is unset or unparsable.
fn parse_env<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parse a comma-separated environment variable into a lowercase list.
fn parse_env_list(key: &str) -> Option<Vec<String>> {
    let raw = env::var(key).ok()?;
    let values: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.max_files, 5);
        assert_eq!(config.max_file_size_bytes, 5 * 1024 * 1024);
        assert_eq!(config.stage_delay_ms, 500);
        assert_eq!(
            config.allowed_extensions,
            vec!["csv", "pdf", "png", "jpg", "jpeg"]
        );
        assert!(config.token.is_none());
    }

    #[test]
    fn parse_env_falls_back_on_garbage() {
        env::set_var("INTAKE_TEST_PARSE_ENV", "not-a-number");
        assert_eq!(parse_env("INTAKE_TEST_PARSE_ENV", 7usize), 7);
        env::remove_var("INTAKE_TEST_PARSE_ENV");
    }

    #[test]
    fn parse_env_list_splits_and_lowercases() {
        env::set_var("INTAKE_TEST_PARSE_LIST", "CSV, pdf ,Png");
        assert_eq!(
            parse_env_list("INTAKE_TEST_PARSE_LIST"),
            Some(vec!["csv".to_string(), "pdf".to_string(), "png".to_string()])
        );
        env::remove_var("INTAKE_TEST_PARSE_LIST");
    }
}
