use crate::domain::model::{FormPayload, SubmissionStatus};
use crate::domain::ports::FormRelay;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::validate_url;
use std::sync::{Arc, Mutex};
use url::Url;

#[derive(Debug)]
struct StatusState {
    status: SubmissionStatus,
    attached: bool,
}

/// Status value owned by one form. Writes after [`StatusCell::detach`] are
/// dropped, since the view that would show them is gone.
#[derive(Debug, Clone)]
pub struct StatusCell {
    inner: Arc<Mutex<StatusState>>,
}

impl StatusCell {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StatusState {
                status: SubmissionStatus::Idle,
                attached: true,
            })),
        }
    }

    pub fn get(&self) -> SubmissionStatus {
        self.lock().status
    }

    pub fn is_attached(&self) -> bool {
        self.lock().attached
    }

    pub fn detach(&self) {
        self.lock().attached = false;
    }

    fn set(&self, next: SubmissionStatus) -> bool {
        let mut state = self.lock();
        if !state.attached {
            tracing::debug!("Dropping status {} for a detached form", next);
            return false;
        }
        if !state.status.can_transition_to(next) {
            // A concurrent submission moved the status on first; the later
            // completion still wins.
            tracing::debug!("Status {} overwritten by {}", state.status, next);
        }
        state.status = next;
        true
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StatusState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for StatusCell {
    fn default() -> Self {
        Self::new()
    }
}

/// One POST per submission to a fixed relay endpoint.
///
/// Every failure, whether a non-2xx status or a transport error, collapses
/// to [`SubmissionStatus::Error`]. Overlapping submissions are allowed and
/// the last one to complete decides the visible status.
pub struct SubmissionGateway<R: FormRelay> {
    endpoint: Url,
    relay: Arc<R>,
    status: StatusCell,
}

impl<R: FormRelay> SubmissionGateway<R> {
    pub fn new(endpoint: &str, relay: Arc<R>) -> Result<Self> {
        validate_url("endpoint", endpoint)?;
        let endpoint = Url::parse(endpoint).map_err(|e| SiteError::InvalidConfigValueError {
            field: "endpoint".to_string(),
            value: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_url(endpoint, relay))
    }

    pub fn from_url(endpoint: Url, relay: Arc<R>) -> Self {
        Self {
            endpoint,
            relay,
            status: StatusCell::new(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status.get()
    }

    pub fn status_cell(&self) -> &StatusCell {
        &self.status
    }

    /// Stops further status updates, e.g. when the page hosting the form is
    /// navigated away from. In-flight requests still complete.
    pub fn detach(&self) {
        self.status.detach();
    }

    /// Sends the payload and returns the outcome of this request.
    pub async fn submit(&self, payload: FormPayload) -> SubmissionStatus {
        self.status.set(SubmissionStatus::Sending);

        let outcome = match self.relay.post_form(&self.endpoint, &payload).await {
            Ok(()) => {
                tracing::info!("Form submitted to {}", self.endpoint);
                SubmissionStatus::Success
            }
            Err(e) => {
                tracing::warn!("Form submission to {} failed: {}", self.endpoint, e);
                SubmissionStatus::Error
            }
        };

        self.status.set(outcome);
        outcome
    }
}

impl<R: FormRelay> Clone for SubmissionGateway<R> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            relay: self.relay.clone(),
            status: self.status.clone(),
        }
    }
}
