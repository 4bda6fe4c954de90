/// The detector workspace
///
/// Composition root for the three controllers: the selection manager, the
/// analysis request machine, and the active section. Cross-component
/// effects only flow through the explicit calls here; the view reads the
/// accessors and the update loop drives the event methods.

use crate::api::{ApiError, Prediction};
use crate::state::analysis::{Analysis, AnalysisError, RequestPhase, SubmitDecision};
use crate::state::section::Section;
use crate::state::selection::{PreviewHandle, SelectedImage, Selection};

/// A submission the update loop must dispatch: one request, one token.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub token: u64,
    pub image: SelectedImage,
}

#[derive(Debug, Default)]
pub struct Detector {
    section: Section,
    selection: Selection,
    analysis: Analysis,
}

impl Detector {
    pub fn new() -> Self {
        Detector {
            section: Section::default(),
            selection: Selection::new(),
            analysis: Analysis::new(),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        self.selection.image()
    }

    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.selection.preview()
    }

    pub fn phase(&self) -> RequestPhase {
        self.analysis.phase()
    }

    pub fn result(&self) -> Option<&Prediction> {
        self.analysis.result()
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        self.analysis.error()
    }

    /// A picked image arrived. Replaces the selection (releasing the old
    /// preview) and arms the analysis machine, clearing any stale verdict
    /// or error. Picks that land outside the Home section or while a
    /// request is in flight are stale and ignored.
    pub fn pick(&mut self, image: SelectedImage) {
        if self.section != Section::Home || self.analysis.is_submitting() {
            return;
        }
        self.selection.select(image);
        self.analysis.image_selected();
    }

    /// A picked file could not be loaded as an image. The previous
    /// selection, if any, stays in place.
    pub fn pick_failed(&mut self, reason: String) {
        if self.section != Section::Home || self.analysis.is_submitting() {
            return;
        }
        self.analysis.fail(AnalysisError::UnreadableImage(reason));
    }

    /// The user asked for an analysis. Returns the request to dispatch,
    /// or None when nothing must leave the client (no image selected, or
    /// a request is already in flight).
    pub fn submit(&mut self) -> Option<PendingRequest> {
        let image = self.selection.image().cloned();
        match self.analysis.begin_submit(image.is_some()) {
            SubmitDecision::Start { token } => image.map(|image| PendingRequest { token, image }),
            SubmitDecision::InFlight | SubmitDecision::Rejected | SubmitDecision::Settled => None,
        }
    }

    /// A request completed. Returns false when the completion was stale
    /// and discarded.
    pub fn finish_analysis(&mut self, token: u64, outcome: Result<Prediction, ApiError>) -> bool {
        self.analysis.finish(token, outcome)
    }

    /// Back to the empty workspace: Idle phase, no selection, no preview.
    pub fn reset(&mut self) {
        self.analysis.reset();
        self.selection.clear();
    }

    /// Switch section. Always resets the workspace, even when the target
    /// is the section already active.
    pub fn navigate(&mut self, section: Section) {
        self.section = section;
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Weak};

    fn sample(name: &str) -> SelectedImage {
        SelectedImage::new(name.to_string(), "image/jpeg".to_string(), vec![0xFF; 32], 8, 8)
    }

    fn buffer_probe(image: &SelectedImage) -> Weak<Vec<u8>> {
        Arc::downgrade(image.bytes())
    }

    fn assert_baseline(detector: &Detector) {
        assert_eq!(detector.phase(), RequestPhase::Idle);
        assert!(detector.image().is_none());
        assert!(detector.preview().is_none());
        assert!(detector.result().is_none());
        assert!(detector.error().is_none());
    }

    #[test]
    fn test_starts_at_home_with_empty_workspace() {
        let detector = Detector::new();
        assert_eq!(detector.section(), Section::Home);
        assert_baseline(&detector);
    }

    #[test]
    fn test_pick_then_repick_keeps_one_preview() {
        let mut detector = Detector::new();

        let a = sample("a.jpg");
        let a_probe = buffer_probe(&a);
        detector.pick(a);
        detector.pick(sample("b.jpg"));

        // Exactly one live preview, for b; a's buffer is released; no
        // verdict or error appeared out of nowhere.
        assert!(a_probe.upgrade().is_none());
        let image = detector.image().expect("b selected");
        assert_eq!(image.name(), "b.jpg");
        assert!(detector.preview().expect("one preview").is_for(image));
        assert_eq!(detector.phase(), RequestPhase::Ready);
        assert!(detector.result().is_none());
        assert!(detector.error().is_none());
    }

    #[test]
    fn test_submit_without_image_issues_no_request() {
        let mut detector = Detector::new();
        assert!(detector.submit().is_none());
        assert_eq!(detector.phase(), RequestPhase::Failed);
        assert_eq!(detector.error(), Some(&AnalysisError::NoImageSelected));
    }

    #[test]
    fn test_second_submit_while_in_flight_is_a_no_op() {
        let mut detector = Detector::new();
        detector.pick(sample("a.jpg"));

        let first = detector.submit().expect("first submission starts");
        assert!(detector.submit().is_none());
        assert_eq!(detector.phase(), RequestPhase::Submitting);

        let ok = Prediction { is_fake: false, confidence: 0.2 };
        assert!(detector.finish_analysis(first.token, Ok(ok)));
        assert_eq!(detector.phase(), RequestPhase::Succeeded);
    }

    #[test]
    fn test_successful_analysis_scenario() {
        let mut detector = Detector::new();
        detector.pick(sample("a.jpg"));
        let request = detector.submit().expect("submission starts");
        assert_eq!(request.image.name(), "a.jpg");

        let verdict = Prediction { is_fake: true, confidence: 0.873 };
        assert!(detector.finish_analysis(request.token, Ok(verdict)));

        assert_eq!(detector.phase(), RequestPhase::Succeeded);
        let result = detector.result().expect("verdict present");
        assert!(result.is_fake);
        assert_eq!(result.confidence_percent(), 87);
        assert_eq!(result.verdict(), "Deepfake Detected");
    }

    #[test]
    fn test_server_error_scenario() {
        let mut detector = Detector::new();
        detector.pick(sample("a.jpg"));
        let request = detector.submit().expect("submission starts");

        assert!(detector.finish_analysis(request.token, Err(ApiError::Server(500))));
        assert_eq!(detector.phase(), RequestPhase::Failed);
        assert!(detector.result().is_none());
        assert_eq!(
            detector.error(),
            Some(&AnalysisError::Api(ApiError::Server(500)))
        );
    }

    #[test]
    fn test_new_pick_clears_previous_verdict() {
        let mut detector = Detector::new();
        detector.pick(sample("a.jpg"));
        let request = detector.submit().expect("submission starts");
        detector.finish_analysis(
            request.token,
            Ok(Prediction { is_fake: true, confidence: 0.9 }),
        );
        assert_eq!(detector.phase(), RequestPhase::Succeeded);

        // Picking a fresh image discards the verdict along with the old
        // selection.
        detector.pick(sample("b.jpg"));
        assert_eq!(detector.phase(), RequestPhase::Ready);
        assert!(detector.result().is_none());
        assert!(detector.error().is_none());
        assert_eq!(detector.image().expect("b selected").name(), "b.jpg");
    }

    #[test]
    fn test_new_pick_clears_previous_error() {
        let mut detector = Detector::new();
        detector.pick(sample("a.jpg"));
        let request = detector.submit().expect("submission starts");
        detector.finish_analysis(request.token, Err(ApiError::Server(500)));
        assert_eq!(detector.phase(), RequestPhase::Failed);

        detector.pick(sample("b.jpg"));
        assert_eq!(detector.phase(), RequestPhase::Ready);
        assert!(detector.error().is_none());
        assert!(detector.result().is_none());
    }

    #[test]
    fn test_navigation_discards_late_response() {
        let mut detector = Detector::new();
        detector.pick(sample("a.jpg"));
        let request = detector.submit().expect("submission starts");

        detector.navigate(Section::About);
        assert_eq!(detector.section(), Section::About);
        assert_baseline(&detector);

        // The response arrives after the user already left.
        let late = Prediction { is_fake: true, confidence: 0.9 };
        assert!(!detector.finish_analysis(request.token, Ok(late)));
        assert_eq!(detector.section(), Section::About);
        assert_baseline(&detector);
    }

    #[test]
    fn test_navigating_to_the_active_section_still_resets() {
        let mut detector = Detector::new();
        detector.pick(sample("a.jpg"));

        detector.navigate(Section::Home);
        assert_eq!(detector.section(), Section::Home);
        assert_baseline(&detector);
    }

    #[test]
    fn test_navigation_releases_the_preview_buffer() {
        let mut detector = Detector::new();
        let image = sample("a.jpg");
        let probe = buffer_probe(&image);
        detector.pick(image);
        assert!(probe.upgrade().is_some());

        detector.navigate(Section::Technology);
        assert!(probe.upgrade().is_none());
    }

    #[test]
    fn test_reset_returns_to_baseline_from_success_and_failure() {
        let mut detector = Detector::new();

        detector.pick(sample("a.jpg"));
        let request = detector.submit().expect("submission starts");
        detector.finish_analysis(
            request.token,
            Ok(Prediction { is_fake: false, confidence: 0.1 }),
        );
        detector.reset();
        assert_baseline(&detector);

        detector.pick(sample("b.jpg"));
        let request = detector.submit().expect("submission starts");
        detector.finish_analysis(request.token, Err(ApiError::Network("refused".into())));
        detector.reset();
        assert_baseline(&detector);
    }

    #[test]
    fn test_pick_is_ignored_while_submitting() {
        let mut detector = Detector::new();
        detector.pick(sample("a.jpg"));
        let request = detector.submit().expect("submission starts");

        detector.pick(sample("b.jpg"));
        assert_eq!(detector.image().expect("a still selected").name(), "a.jpg");
        assert_eq!(detector.phase(), RequestPhase::Submitting);

        assert!(detector.finish_analysis(
            request.token,
            Ok(Prediction { is_fake: false, confidence: 0.3 })
        ));
    }

    #[test]
    fn test_pick_is_ignored_outside_home() {
        let mut detector = Detector::new();
        detector.navigate(Section::About);

        // A read that resolved after the user navigated away.
        detector.pick(sample("late.jpg"));
        assert!(detector.image().is_none());
        assert_eq!(detector.phase(), RequestPhase::Idle);
    }

    #[test]
    fn test_unreadable_pick_reports_an_error_and_keeps_selection() {
        let mut detector = Detector::new();
        detector.pick(sample("a.jpg"));

        detector.pick_failed("not an image".to_string());
        assert_eq!(detector.phase(), RequestPhase::Failed);
        assert!(matches!(
            detector.error(),
            Some(AnalysisError::UnreadableImage(_))
        ));
        assert_eq!(detector.image().expect("a still selected").name(), "a.jpg");
    }
}
