use crate::config::ClientConfig;
use crate::detection::{CountMismatch, DetectionReport, DetectionResponse};
use crate::error::SubmitError;
use crate::upload::{validate_upload, UploadCandidate};

pub type RequestId = u64;

/// Submission gate. The loading indicator is visible exactly while
/// the gate is `Submitting`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting(RequestId),
}

/// How a finished request affected the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Rendered { mismatch: Option<CountMismatch> },
    Failed(SubmitError),
    /// The request was cancelled or superseded; nothing changed.
    Stale,
}

#[derive(Debug, Default)]
pub struct UploadSession {
    state: SubmissionState,
    last_request: RequestId,
    results_visible: bool,
    report: Option<DetectionReport>,
    scroll_pending: bool,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting(_))
    }

    pub fn loading_visible(&self) -> bool {
        self.is_submitting()
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// The report to render, only while the results section is shown.
    pub fn visible_report(&self) -> Option<&DetectionReport> {
        self.report.as_ref().filter(|_| self.results_visible)
    }

    /// Opens the gate for one request. On error the session is untouched
    /// and no request may be sent.
    pub fn begin(
        &mut self,
        candidate: Option<&UploadCandidate>,
        config: &ClientConfig,
    ) -> Result<RequestId, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::AlreadySubmitting);
        }
        let candidate = candidate.ok_or(SubmitError::NoFileSelected)?;
        validate_upload(candidate, config)?;

        self.last_request += 1;
        let id = self.last_request;
        self.state = SubmissionState::Submitting(id);
        self.results_visible = false;
        self.scroll_pending = false;
        Ok(id)
    }

    /// Closes the gate for `id` whatever the outcome.
    pub fn complete(
        &mut self,
        id: RequestId,
        outcome: Result<DetectionResponse, SubmitError>,
    ) -> Completion {
        if self.state != SubmissionState::Submitting(id) {
            return Completion::Stale;
        }
        self.state = SubmissionState::Idle;

        match outcome.and_then(DetectionResponse::into_report) {
            Ok(report) => {
                let mismatch = report.count_mismatch();
                self.report = Some(report);
                self.results_visible = true;
                self.scroll_pending = true;
                Completion::Rendered { mismatch }
            }
            Err(e) => Completion::Failed(e),
        }
    }

    /// Returns the id of the request that was in flight, if any.
    pub fn cancel(&mut self) -> Option<RequestId> {
        match self.state {
            SubmissionState::Submitting(id) => {
                self.state = SubmissionState::Idle;
                Some(id)
            }
            SubmissionState::Idle => None,
        }
    }

    /// True once after each rendered result.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::TargetRecord;

    fn candidate() -> UploadCandidate {
        UploadCandidate::new("plot.jpg", 4096, "image/jpeg")
    }

    fn target(id: u64, confidence: f64) -> TargetRecord {
        TargetRecord {
            target_id: id.into(),
            x: id as f64 * 10.0,
            y: 5.0,
            class_name: "weed".into(),
            confidence,
        }
    }

    fn success(targets: Vec<TargetRecord>) -> DetectionResponse {
        DetectionResponse {
            success: true,
            error: None,
            weed_count: targets.len() as u32,
            result_image: "/static/results/annotated_plot.jpg".into(),
            laser_coordinates: targets,
        }
    }

    #[test]
    fn test_no_file_sends_nothing() {
        let mut session = UploadSession::new();

        let result = session.begin(None, &ClientConfig::default());

        assert_eq!(result, Err(SubmitError::NoFileSelected));
        assert_eq!(session.state(), SubmissionState::Idle);
        assert!(!session.loading_visible());
    }

    #[test]
    fn test_begin_shows_loading_and_hides_results() {
        let mut session = UploadSession::new();
        let config = ClientConfig::default();
        let first = session.begin(Some(&candidate()), &config).unwrap();
        session.complete(first, Ok(success(vec![target(1, 0.9)])));
        assert!(session.results_visible());

        let second = session.begin(Some(&candidate()), &config).unwrap();

        assert_ne!(first, second);
        assert!(session.loading_visible());
        assert!(!session.results_visible());
        assert!(session.visible_report().is_none());
    }

    #[test]
    fn test_second_submit_is_refused() {
        let mut session = UploadSession::new();
        let config = ClientConfig::default();
        let id = session.begin(Some(&candidate()), &config).unwrap();

        assert_eq!(
            session.begin(Some(&candidate()), &config),
            Err(SubmitError::AlreadySubmitting)
        );
        assert_eq!(session.state(), SubmissionState::Submitting(id));
    }

    #[test]
    fn test_success_renders_targets_in_order() {
        let mut session = UploadSession::new();
        let id = session.begin(Some(&candidate()), &ClientConfig::default()).unwrap();

        let completion = session.complete(id, Ok(success(vec![target(3, 0.873), target(1, 0.4), target(2, 0.66)])));

        assert_eq!(completion, Completion::Rendered { mismatch: None });
        assert!(!session.loading_visible());
        let report = session.visible_report().unwrap();
        let ids: Vec<String> = report.targets.iter().map(|t| t.target_id.to_string()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert_eq!(report.targets[0].confidence_percent(), "87.3%");
        assert!(session.take_scroll_request());
        assert!(!session.take_scroll_request());
    }

    #[test]
    fn test_logical_failure_leaves_results_hidden() {
        let mut session = UploadSession::new();
        let id = session.begin(Some(&candidate()), &ClientConfig::default()).unwrap();
        let body = DetectionResponse {
            error: Some("Detection failed: bad image".into()),
            ..Default::default()
        };

        let completion = session.complete(id, Ok(body));

        assert_eq!(
            completion,
            Completion::Failed(SubmitError::Rejected("Detection failed: bad image".into()))
        );
        assert!(!session.loading_visible());
        assert!(!session.results_visible());
        assert!(!session.take_scroll_request());
    }

    #[test]
    fn test_loading_hidden_after_every_outcome() {
        let outcomes = vec![
            Ok(success(vec![])),
            Ok(DetectionResponse::default()),
            Err(SubmitError::Transport("Failed to fetch".into())),
            Err(SubmitError::Parse("expected value at line 1 column 1".into())),
            Err(SubmitError::TimedOut { secs: 30 }),
        ];

        for outcome in outcomes {
            let mut session = UploadSession::new();
            let id = session.begin(Some(&candidate()), &ClientConfig::default()).unwrap();
            session.complete(id, outcome);
            assert!(!session.loading_visible());
        }
    }

    #[test]
    fn test_count_mismatch_still_renders() {
        let mut session = UploadSession::new();
        let id = session.begin(Some(&candidate()), &ClientConfig::default()).unwrap();
        let mut body = success(vec![target(1, 0.9)]);
        body.weed_count = 4;

        let completion = session.complete(id, Ok(body));

        assert_eq!(
            completion,
            Completion::Rendered {
                mismatch: Some(CountMismatch { reported: 4, listed: 1 })
            }
        );
        assert_eq!(session.visible_report().unwrap().targets.len(), 1);
    }

    #[test]
    fn test_cancel_makes_late_completion_stale() {
        let mut session = UploadSession::new();
        let config = ClientConfig::default();
        let id = session.begin(Some(&candidate()), &config).unwrap();

        assert_eq!(session.cancel(), Some(id));
        assert!(!session.loading_visible());
        assert_eq!(session.complete(id, Ok(success(vec![target(1, 0.9)]))), Completion::Stale);
        assert!(!session.results_visible());
        assert_eq!(session.cancel(), None);

        let next = session.begin(Some(&candidate()), &config).unwrap();
        assert_eq!(session.complete(id, Err(SubmitError::Cancelled)), Completion::Stale);
        assert_eq!(session.state(), SubmissionState::Submitting(next));
    }

    #[test]
    fn test_invalid_file_keeps_gate_closed() {
        let mut session = UploadSession::new();
        let huge = UploadCandidate::new("field.png", 17 * 1024 * 1024, "image/png");

        let result = session.begin(Some(&huge), &ClientConfig::default());

        assert!(matches!(result, Err(SubmitError::FileTooLarge { .. })));
        assert_eq!(session.state(), SubmissionState::Idle);
    }
}
