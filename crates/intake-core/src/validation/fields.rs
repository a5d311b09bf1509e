//! Text field validation
//!
//! Pure predicates over the five text fields, recomputed on every field
//! event. The display rules are forgiving while the user is still typing:
//! an empty password shows no length error, an empty confirmation shows no
//! mismatch error. Submission uses the strict rule ([`submit_ready`]).

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::models::FormFields;

/// Result of validating the text fields for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldReport {
    /// Password empty or at least the minimum length.
    pub length_ok: bool,
    /// Confirmation empty or equal to the password.
    pub match_ok: bool,
    /// All five fields non-empty after trimming.
    pub all_filled_ok: bool,
}

impl FieldReport {
    /// The single displayed message. Only one message slot exists; a length
    /// violation takes precedence over a mismatch.
    pub fn error_message(&self) -> Option<&'static str> {
        if !self.length_ok {
            Some("Password must be at least 6 characters.")
        } else if !self.match_ok {
            Some("Passwords do not match.")
        } else {
            None
        }
    }
}

/// Validate the text fields for inline display.
pub fn report(fields: &FormFields) -> FieldReport {
    FieldReport {
        length_ok: fields.password.is_empty()
            || fields.password.chars().count() >= MIN_PASSWORD_LENGTH,
        match_ok: fields.password_confirmation.is_empty()
            || fields.password == fields.password_confirmation,
        all_filled_ok: fields.values().iter().all(|v| !v.trim().is_empty()),
    }
}

/// Strict field gate for submit-eligibility: all fields filled, password at
/// least the minimum length, and both passwords equal. Unlike the display
/// report, an empty password fails here.
pub fn submit_ready(fields: &FormFields) -> bool {
    fields.values().iter().all(|v| !v.trim().is_empty())
        && fields.password.chars().count() >= MIN_PASSWORD_LENGTH
        && fields.password == fields.password_confirmation
}
