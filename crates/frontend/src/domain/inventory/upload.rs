//! Upload session state machine for the bulk inventory upload.
//!
//! `idle -> uploading -> {success, failed}`; a new file selection or an
//! explicit reset returns a terminal session to `idle`. There is no cancel:
//! once uploading, the only exits are completion and failure.
//!
//! Progress while uploading is a cosmetic simulation: a fixed-interval tick
//! adds [`PROGRESS_STEP`] up to [`PROGRESS_CEILING`], so the bar can never
//! visually reach 100% before the network call resolves. The real resolution
//! sets 100 (success) or 0 (failure).

/// Interval of the cosmetic progress ticker, in milliseconds.
pub const PROGRESS_TICK_MS: u32 = 300;
pub const PROGRESS_STEP: u8 = 10;
pub const PROGRESS_CEILING: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Success,
    Failed,
}

/// Transient per-file-selection upload state. Owned by the upload widget,
/// never persisted; rebuilt from scratch on every page load.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadSession {
    pub status: UploadStatus,
    /// Percentage 0-100, meaningful only while `Uploading`.
    pub progress: u8,
    pub error: Option<String>,
    pub row_count: Option<usize>,
}

impl UploadSession {
    /// Double-submission guard: a new upload may start from any status
    /// except `Uploading`.
    pub fn can_begin(&self) -> bool {
        self.status != UploadStatus::Uploading
    }

    /// `idle -> uploading`; clears the previous attempt's outcome.
    pub fn begin(&mut self) {
        self.status = UploadStatus::Uploading;
        self.progress = 0;
        self.error = None;
        self.row_count = None;
    }

    pub fn rows_validated(&mut self, count: usize) {
        self.row_count = Some(count);
    }

    /// One cosmetic tick. No-op outside `Uploading`.
    pub fn tick_progress(&mut self) {
        if self.status == UploadStatus::Uploading && self.progress < PROGRESS_CEILING {
            self.progress = (self.progress + PROGRESS_STEP).min(PROGRESS_CEILING);
        }
    }

    pub fn complete(&mut self) {
        self.progress = 100;
        self.status = UploadStatus::Success;
    }

    pub fn fail(&mut self, message: String) {
        self.status = UploadStatus::Failed;
        self.progress = 0;
        self.error = Some(message);
    }

    /// A newly accepted file clears the previous outcome but does not start
    /// an upload.
    pub fn file_selected(&mut self) {
        self.status = UploadStatus::Idle;
        self.progress = 0;
        self.error = None;
        self.row_count = None;
    }

    /// Full reset; has no network effect on an in-flight request.
    pub fn reset(&mut self) {
        *self = UploadSession::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_ticks_by_ten_and_caps_at_ninety() {
        let mut session = UploadSession::default();
        session.begin();
        for _ in 0..20 {
            session.tick_progress();
            assert!(session.progress <= PROGRESS_CEILING);
        }
        assert_eq!(session.progress, PROGRESS_CEILING);
    }

    #[test]
    fn completion_sets_progress_to_exactly_one_hundred() {
        let mut session = UploadSession::default();
        session.begin();
        session.rows_validated(3);
        session.tick_progress();
        session.complete();
        assert_eq!(session.status, UploadStatus::Success);
        assert_eq!(session.progress, 100);
        assert_eq!(session.row_count, Some(3));
    }

    #[test]
    fn failure_resets_progress_and_records_the_message() {
        let mut session = UploadSession::default();
        session.begin();
        session.tick_progress();
        session.fail("Row 2: price must be a non-negative number".to_string());
        assert_eq!(session.status, UploadStatus::Failed);
        assert_eq!(session.progress, 0);
        assert_eq!(
            session.error.as_deref(),
            Some("Row 2: price must be a non-negative number")
        );
    }

    #[test]
    fn ticks_are_ignored_outside_uploading() {
        let mut session = UploadSession::default();
        session.tick_progress();
        assert_eq!(session.progress, 0);

        session.begin();
        session.complete();
        session.tick_progress();
        assert_eq!(session.progress, 100);
    }

    #[test]
    fn begin_is_guarded_against_double_submission() {
        let mut session = UploadSession::default();
        assert!(session.can_begin());
        session.begin();
        assert!(!session.can_begin());
        session.fail("Upload failed.".to_string());
        assert!(session.can_begin());
        session.begin();
        session.complete();
        assert!(session.can_begin());
    }

    #[test]
    fn new_file_selection_clears_outcome_but_stays_idle() {
        let mut session = UploadSession::default();
        session.begin();
        session.rows_validated(5);
        session.fail("Upload failed.".to_string());

        session.file_selected();
        assert_eq!(session.status, UploadStatus::Idle);
        assert_eq!(session.progress, 0);
        assert!(session.error.is_none());
        assert!(session.row_count.is_none());
    }

    #[test]
    fn reset_returns_to_the_default_session() {
        let mut session = UploadSession::default();
        session.begin();
        session.rows_validated(2);
        session.complete();
        session.reset();
        assert_eq!(session, UploadSession::default());
    }
}
