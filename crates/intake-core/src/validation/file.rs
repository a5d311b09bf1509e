//! Attachment validation
//!
//! The batch ceiling is checked once per selection, before any per-file
//! check, and rejects the whole batch with no partial acceptance. Per-file
//! checks then run in order: extension allow-list, then size ceiling.

use crate::config::Config;
use crate::models::{CandidateFile, RejectReason, ValidationOutcome};

/// Check an incoming batch against the total attachment ceiling.
///
/// `current` must count staged files plus files still inside their
/// acceptance delay, so rapid consecutive selections cannot overshoot the
/// ceiling while earlier files are pending.
pub fn check_batch(current: usize, incoming: usize, max: usize) -> Result<(), RejectReason> {
    if current + incoming > max {
        return Err(RejectReason::BatchTooLarge {
            current,
            incoming,
            max,
        });
    }
    Ok(())
}

/// Per-file validator: extension allow-list and size ceiling.
pub struct FileChecker {
    max_file_size: usize,
    allowed_extensions: Vec<String>,
}

impl FileChecker {
    pub fn new(max_file_size: usize, allowed_extensions: Vec<String>) -> Self {
        Self {
            max_file_size,
            allowed_extensions,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.max_file_size_bytes,
            config.allowed_extensions.clone(),
        )
    }

    /// Validate one candidate file. Extension first, then size, matching
    /// the order in which the markers are shown.
    pub fn check(&self, file: &CandidateFile) -> Result<(), RejectReason> {
        let extension = file.extension();
        if !self.allowed_extensions.contains(&extension) {
            return Err(RejectReason::BadExtension {
                extension,
                allowed: self.allowed_extensions.clone(),
            });
        }

        let size = file.byte_size();
        if size > self.max_file_size {
            return Err(RejectReason::TooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }

    /// Validation outcome for presentation.
    pub fn outcome(&self, file: &CandidateFile) -> ValidationOutcome {
        match self.check(file) {
            Ok(()) => ValidationOutcome::Accepted,
            Err(reason) => ValidationOutcome::Rejected(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_checker() -> FileChecker {
        FileChecker::from_config(&Config::default())
    }

    fn file_of(name: &str, size: usize) -> CandidateFile {
        CandidateFile::new(name, vec![0u8; size])
    }

    #[test]
    fn accepts_allowed_extensions_case_insensitive() {
        let checker = test_checker();
        assert!(checker.check(&file_of("data.csv", 10)).is_ok());
        assert!(checker.check(&file_of("photo.JPEG", 10)).is_ok());
        assert!(checker.check(&file_of("scan.Pdf", 10)).is_ok());
    }

    #[test]
    fn rejects_exe_immediately() {
        let checker = test_checker();
        assert!(matches!(
            checker.check(&file_of("tool.exe", 10)),
            Err(RejectReason::BadExtension { ref extension, .. }) if extension == "exe"
        ));
    }

    #[test]
    fn rejects_name_without_extension() {
        let checker = test_checker();
        assert!(matches!(
            checker.check(&file_of("README", 10)),
            Err(RejectReason::BadExtension { .. })
        ));
    }

    #[test]
    fn rejects_file_over_size_ceiling() {
        let checker = test_checker();
        let too_big = 5 * 1024 * 1024 + 1;
        assert!(matches!(
            checker.check(&file_of("big.png", too_big)),
            Err(RejectReason::TooLarge { size, .. }) if size == too_big
        ));
    }

    #[test]
    fn accepts_file_at_exact_size_ceiling() {
        let checker = test_checker();
        assert!(checker.check(&file_of("edge.png", 5 * 1024 * 1024)).is_ok());
    }

    #[test]
    fn extension_checked_before_size() {
        let checker = test_checker();
        // Oversized and mis-typed: the extension rejection wins.
        assert!(matches!(
            checker.check(&file_of("huge.exe", 10 * 1024 * 1024)),
            Err(RejectReason::BadExtension { .. })
        ));
    }

    #[test]
    fn batch_within_ceiling_passes() {
        assert!(check_batch(0, 5, 5).is_ok());
        assert!(check_batch(2, 3, 5).is_ok());
    }

    #[test]
    fn oversized_batch_rejected_wholesale() {
        assert!(matches!(
            check_batch(0, 6, 5),
            Err(RejectReason::BatchTooLarge {
                current: 0,
                incoming: 6,
                max: 5
            })
        ));
        assert!(check_batch(3, 3, 5).is_err());
    }

    #[test]
    fn outcome_maps_check_result() {
        let checker = test_checker();
        assert_eq!(
            checker.outcome(&file_of("a.csv", 1)),
            ValidationOutcome::Accepted
        );
        assert!(matches!(
            checker.outcome(&file_of("a.exe", 1)),
            ValidationOutcome::Rejected(_)
        ));
    }
}
