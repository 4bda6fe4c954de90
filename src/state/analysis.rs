/// Analysis request state machine
///
/// Tracks where the current analysis attempt stands, from Idle through
/// Submitting to a verdict or a failure. At most one request is ever in
/// flight, and a completion only lands if it still belongs to the current
/// request (stale responses are discarded, not cancelled).

use thiserror::Error;

use crate::api::{ApiError, Prediction};

/// The externally visible request phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    /// Nothing selected, nothing requested
    Idle,
    /// An image is selected and can be submitted
    Ready,
    /// One request is in flight
    Submitting,
    /// The service returned a verdict
    Succeeded,
    /// Validation or the request itself failed
    Failed,
}

/// Everything that can go wrong with an analysis attempt, with a
/// user-facing message per cause.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Submission attempted with nothing selected; purely local
    #[error("Please select an image first.")]
    NoImageSelected,

    /// The picked file could not be decoded as an image; purely local
    #[error("Could not read that file as an image: {0}")]
    UnreadableImage(String),

    /// The request failed after leaving the client
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Internal phase. Carrying the verdict and the error inside the variants
/// keeps "Succeeded iff a result exists" and "Failed iff an error exists"
/// true by construction.
#[derive(Debug, Clone, PartialEq, Default)]
enum Phase {
    #[default]
    Idle,
    Ready,
    Submitting {
        token: u64,
    },
    Succeeded(Prediction),
    Failed(AnalysisError),
}

/// What a submission attempt decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Dispatch exactly one request carrying this token
    Start { token: u64 },
    /// A request is already in flight; nothing to do
    InFlight,
    /// Local validation failed; no request leaves the client
    Rejected,
    /// A verdict is already on screen; reset first
    Settled,
}

/// The analysis request controller.
#[derive(Debug, Default)]
pub struct Analysis {
    phase: Phase,
    /// Monotone across resets so a response from before a reset can never
    /// match a request issued after it
    last_token: u64,
}

impl Analysis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RequestPhase {
        match self.phase {
            Phase::Idle => RequestPhase::Idle,
            Phase::Ready => RequestPhase::Ready,
            Phase::Submitting { .. } => RequestPhase::Submitting,
            Phase::Succeeded(_) => RequestPhase::Succeeded,
            Phase::Failed(_) => RequestPhase::Failed,
        }
    }

    pub fn result(&self) -> Option<&Prediction> {
        match &self.phase {
            Phase::Succeeded(prediction) => Some(prediction),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        match &self.phase {
            Phase::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    /// An image was (re)selected. Clears any previous verdict or error and
    /// arms the machine for submission. Ignored while a request is in
    /// flight; the selection layer does not offer picking then.
    pub fn image_selected(&mut self) {
        if !self.is_submitting() {
            self.phase = Phase::Ready;
        }
    }

    /// Decide whether a submission may start.
    ///
    /// No image is a local validation failure that never touches the
    /// network; an in-flight request makes this a no-op, as does a verdict
    /// that is still on screen (only reset leaves Succeeded).
    pub fn begin_submit(&mut self, has_image: bool) -> SubmitDecision {
        if self.is_submitting() {
            return SubmitDecision::InFlight;
        }
        if matches!(self.phase, Phase::Succeeded(_)) {
            return SubmitDecision::Settled;
        }
        if !has_image {
            self.phase = Phase::Failed(AnalysisError::NoImageSelected);
            return SubmitDecision::Rejected;
        }
        self.last_token += 1;
        let token = self.last_token;
        self.phase = Phase::Submitting { token };
        SubmitDecision::Start { token }
    }

    /// Apply a completed request, unless it is stale.
    ///
    /// A completion only lands while the machine is still Submitting the
    /// request it belongs to. Returns false when it was discarded.
    pub fn finish(&mut self, token: u64, outcome: Result<Prediction, ApiError>) -> bool {
        match self.phase {
            Phase::Submitting { token: current } if current == token => {
                self.phase = match outcome {
                    Ok(prediction) => Phase::Succeeded(prediction),
                    Err(error) => Phase::Failed(AnalysisError::Api(error)),
                };
                true
            }
            _ => false,
        }
    }

    /// Record a failure that never involved a request (e.g. an unreadable
    /// pick). Ignored while a request is in flight.
    pub fn fail(&mut self, error: AnalysisError) {
        if !self.is_submitting() {
            self.phase = Phase::Failed(error);
        }
    }

    /// Back to Idle. The request token is deliberately not reset.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }
}
