//! The async front of the pipeline.
//!
//! A [`ReportGenerationController`] owns one report session's
//! [`GenerationState`]. Each accepted request gets a ticket; only the result
//! carrying the newest ticket may move the state out of `Loading`, so an
//! older request that finishes late is discarded instead of racing the
//! newer one.

use super::artifact::ReportArtifact;
use super::generator::{GenerationRequest, ReportBackend, ReportGenerator};
use crate::config::GeneratorConfig;
use log::{debug, info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tokio::task;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationState {
    #[default]
    Idle,
    Loading,
    Ready(ReportArtifact),
    Failed {
        reason: String,
    },
}

impl GenerationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, GenerationState::Loading)
    }

    pub fn artifact(&self) -> Option<&ReportArtifact> {
        match self {
            GenerationState::Ready(artifact) => Some(artifact),
            _ => None,
        }
    }

    pub fn error_reason(&self) -> Option<&str> {
        match self {
            GenerationState::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}

/// What a presentation layer observes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerSnapshot {
    pub state: GenerationState,
    /// The most recent successful artifact. Survives later failures and resets.
    pub last_artifact: Option<ReportArtifact>,
}

impl ControllerSnapshot {
    /// The artifact available for download: the current one when ready,
    /// otherwise the last successful one.
    pub fn artifact(&self) -> Option<&ReportArtifact> {
        self.state.artifact().or(self.last_artifact.as_ref())
    }

    pub fn file_name(&self) -> Option<&str> {
        self.artifact().map(|artifact| artifact.file_name.as_str())
    }

    pub fn error_reason(&self) -> Option<&str> {
        self.state.error_reason()
    }
}

/// How one call to [`request_generation`](ReportGenerationController::request_generation) ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The text was blank; the state was left untouched.
    Skipped,
    Ready(ReportArtifact),
    Failed(String),
    /// A newer request was issued before this one finished; its result was
    /// dropped.
    Superseded,
}

pub struct ReportGenerationController<B: ReportBackend = ReportGenerator> {
    backend: Arc<B>,
    /// Ticket of the newest accepted request. Only read or bumped while the
    /// watch channel's write lock is held.
    latest: AtomicU64,
    state: watch::Sender<ControllerSnapshot>,
}

impl ReportGenerationController<ReportGenerator> {
    pub fn from_config(config: GeneratorConfig) -> Self {
        Self::new(ReportGenerator::new(config))
    }
}

impl Default for ReportGenerationController<ReportGenerator> {
    fn default() -> Self {
        Self::new(ReportGenerator::default())
    }
}

impl<B: ReportBackend> ReportGenerationController<B> {
    pub fn new(backend: B) -> Self {
        let (state, _) = watch::channel(ControllerSnapshot::default());
        Self {
            backend: Arc::new(backend),
            latest: AtomicU64::new(0),
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ControllerSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        self.state.borrow().clone()
    }

    /// Returns to `Idle`, keeping the last artifact. Results of requests
    /// still in flight are discarded.
    pub fn reset(&self) {
        self.state.send_modify(|snapshot| {
            self.latest.fetch_add(1, Ordering::SeqCst);
            snapshot.state = GenerationState::Idle;
        });
    }

    /// Runs the pipeline for `request` and settles the state.
    ///
    /// Blank text is skipped without touching the state. Otherwise the state
    /// moves to `Loading` before the first suspension point and to `Ready` or
    /// `Failed` once the pipeline returns, unless a newer request (or a
    /// [`reset`](Self::reset)) happened in between. Dropping the returned
    /// future while its request is still the newest moves the state back to
    /// `Idle`; the pipeline run itself completes on the blocking pool and its
    /// result is discarded.
    pub async fn request_generation(&self, request: GenerationRequest) -> RequestOutcome {
        if request.is_blank() {
            debug!(
                "Skipping generation for case '{}': analysis text is blank",
                request.metadata.case_id
            );
            return RequestOutcome::Skipped;
        }

        let mut ticket = 0;
        self.state.send_modify(|snapshot| {
            ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            snapshot.state = GenerationState::Loading;
        });
        info!(
            "Request #{} started for case '{}'",
            ticket, request.metadata.case_id
        );
        let _abandon = AbandonGuard {
            state: &self.state,
            latest: &self.latest,
            ticket,
        };

        let backend = Arc::clone(&self.backend);
        let outcome = match task::spawn_blocking(move || backend.generate(&request)).await {
            Ok(Ok(artifact)) => RequestOutcome::Ready(artifact),
            Ok(Err(e)) => RequestOutcome::Failed(e.to_string()),
            Err(e) => RequestOutcome::Failed(format!("Report generation task failed: {}", e)),
        };

        let applied = self.state.send_if_modified(|snapshot| {
            if self.latest.load(Ordering::SeqCst) != ticket {
                return false;
            }
            match &outcome {
                RequestOutcome::Ready(artifact) => {
                    snapshot.state = GenerationState::Ready(artifact.clone());
                    snapshot.last_artifact = Some(artifact.clone());
                }
                RequestOutcome::Failed(reason) => {
                    snapshot.state = GenerationState::Failed {
                        reason: reason.clone(),
                    };
                }
                RequestOutcome::Skipped | RequestOutcome::Superseded => return false,
            }
            true
        });

        if !applied {
            warn!("Discarding stale result of request #{}", ticket);
            return RequestOutcome::Superseded;
        }
        match &outcome {
            RequestOutcome::Failed(reason) => warn!("Request #{} failed: {}", ticket, reason),
            _ => info!("Request #{} is ready", ticket),
        }
        outcome
    }
}

/// Clears a `Loading` state left behind by a request whose future was
/// dropped before it settled.
struct AbandonGuard<'a> {
    state: &'a watch::Sender<ControllerSnapshot>,
    latest: &'a AtomicU64,
    ticket: u64,
}

impl Drop for AbandonGuard<'_> {
    fn drop(&mut self) {
        let cleared = self.state.send_if_modified(|snapshot| {
            if self.latest.load(Ordering::SeqCst) != self.ticket || !snapshot.state.is_loading() {
                return false;
            }
            snapshot.state = GenerationState::Idle;
            true
        });
        if cleared {
            debug!("Request #{} was abandoned while loading", self.ticket);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use chrono::{NaiveDate, NaiveTime};
    use dossier_types::CaseMetadata;
    use std::sync::Mutex;
    use std::sync::mpsc::{self, Receiver};

    fn request(text: &str, case_id: &str) -> GenerationRequest {
        let metadata = CaseMetadata::new(
            case_id,
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        );
        GenerationRequest::new(text, metadata)
    }

    /// Answers instantly. Text starting with `slow` first waits for the gate
    /// to open; text mentioning `fail` returns an error, `panic` panics.
    struct ScriptedBackend {
        gate: Mutex<Receiver<()>>,
    }

    impl ScriptedBackend {
        fn new() -> (Self, mpsc::Sender<()>) {
            let (open, gate) = mpsc::channel();
            (
                Self {
                    gate: Mutex::new(gate),
                },
                open,
            )
        }
    }

    impl ReportBackend for ScriptedBackend {
        fn generate(&self, request: &GenerationRequest) -> Result<ReportArtifact, PipelineError> {
            if request.text.starts_with("slow") {
                self.gate
                    .lock()
                    .map_err(|_| PipelineError::Other("gate poisoned".into()))?
                    .recv()
                    .map_err(|_| PipelineError::Other("gate closed".into()))?;
            }
            if request.text.contains("fail") {
                return Err(PipelineError::Other("font 'Papyrus' is not registered".into()));
            }
            if request.text.contains("panic") {
                panic!("renderer exploded");
            }
            Ok(ReportArtifact {
                file_name: format!("{}.pdf", request.metadata.case_id),
                bytes: request.text.as_bytes().to_vec(),
                page_count: 1,
            })
        }
    }

    fn controller() -> ReportGenerationController<ScriptedBackend> {
        ReportGenerationController::new(ScriptedBackend::new().0)
    }

    #[tokio::test]
    async fn starts_idle() {
        assert_eq!(controller().snapshot(), ControllerSnapshot::default());
    }

    #[tokio::test]
    async fn blank_text_is_skipped() {
        let controller = controller();
        let outcome = controller.request_generation(request("   \n ", "C-1")).await;
        assert_eq!(outcome, RequestOutcome::Skipped);
        assert_eq!(controller.snapshot().state, GenerationState::Idle);
        assert!(controller.snapshot().artifact().is_none());
    }

    #[tokio::test]
    async fn successful_request_becomes_ready() {
        let controller = controller();
        let outcome = controller.request_generation(request("findings", "C-1")).await;
        let snapshot = controller.snapshot();

        assert!(matches!(outcome, RequestOutcome::Ready(_)));
        assert_eq!(snapshot.file_name(), Some("C-1.pdf"));
        assert_eq!(snapshot.state.artifact(), snapshot.last_artifact.as_ref());
    }

    #[tokio::test]
    async fn failure_keeps_previous_artifact() {
        let controller = controller();
        controller.request_generation(request("findings", "C-1")).await;
        let outcome = controller.request_generation(request("fail", "C-2")).await;
        let snapshot = controller.snapshot();

        assert!(matches!(outcome, RequestOutcome::Failed(ref reason) if reason.contains("Papyrus")));
        assert!(snapshot.error_reason().is_some_and(|r| r.contains("Papyrus")));
        assert_eq!(snapshot.file_name(), Some("C-1.pdf"));
    }

    #[tokio::test]
    async fn panicking_backend_fails_the_request() {
        let controller = controller();
        let outcome = controller.request_generation(request("panic", "C-1")).await;
        assert!(matches!(outcome, RequestOutcome::Failed(ref reason) if reason.starts_with("Report generation task failed")));
        assert!(controller.snapshot().error_reason().is_some());
    }

    #[tokio::test]
    async fn state_is_loading_while_in_flight() {
        let (backend, open) = ScriptedBackend::new();
        let controller = ReportGenerationController::new(backend);
        let mut updates = controller.subscribe();

        let (outcome, ()) = tokio::join!(controller.request_generation(request("slow", "C-1")), async {
            updates.changed().await.unwrap();
            assert!(updates.borrow_and_update().state.is_loading());
            open.send(()).unwrap();
        });

        assert!(matches!(outcome, RequestOutcome::Ready(_)));
        assert!(!controller.snapshot().state.is_loading());
    }

    #[tokio::test]
    async fn last_request_wins() {
        let (backend, open) = ScriptedBackend::new();
        let controller = ReportGenerationController::new(backend);

        let (first, second) = tokio::join!(controller.request_generation(request("slow", "C-A")), async {
            let outcome = controller.request_generation(request("quick", "C-B")).await;
            open.send(()).unwrap();
            outcome
        });

        assert_eq!(first, RequestOutcome::Superseded);
        assert!(matches!(second, RequestOutcome::Ready(ref artifact) if artifact.file_name == "C-B.pdf"));
        assert_eq!(controller.snapshot().file_name(), Some("C-B.pdf"));
    }

    #[tokio::test]
    async fn stale_failure_does_not_override_newer_success() {
        let (backend, open) = ScriptedBackend::new();
        let controller = ReportGenerationController::new(backend);

        let (first, _) = tokio::join!(controller.request_generation(request("slow fail", "C-A")), async {
            let outcome = controller.request_generation(request("quick", "C-B")).await;
            open.send(()).unwrap();
            outcome
        });

        assert_eq!(first, RequestOutcome::Superseded);
        assert!(controller.snapshot().error_reason().is_none());
    }

    #[tokio::test]
    async fn dropping_an_in_flight_request_returns_to_idle() {
        let (backend, open) = ScriptedBackend::new();
        let controller = ReportGenerationController::new(backend);
        controller.request_generation(request("findings", "C-1")).await;

        {
            let pending = controller.request_generation(request("slow", "C-2"));
            tokio::pin!(pending);
            tokio::select! {
                biased;
                _ = &mut pending => panic!("slow request settled before the gate opened"),
                _ = std::future::ready(()) => {}
            }
            assert!(controller.snapshot().state.is_loading());
        }

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, GenerationState::Idle);
        assert_eq!(snapshot.file_name(), Some("C-1.pdf"));
        open.send(()).unwrap();
    }

    #[tokio::test]
    async fn dropping_a_superseded_request_keeps_the_newer_state() {
        let (backend, open) = ScriptedBackend::new();
        let controller = ReportGenerationController::new(backend);

        {
            let stale = controller.request_generation(request("slow", "C-A"));
            tokio::pin!(stale);
            tokio::select! {
                biased;
                _ = &mut stale => panic!("slow request settled before the gate opened"),
                _ = std::future::ready(()) => {}
            }
            let outcome = controller.request_generation(request("quick", "C-B")).await;
            assert!(matches!(outcome, RequestOutcome::Ready(_)));
        }

        assert_eq!(controller.snapshot().file_name(), Some("C-B.pdf"));
        assert!(controller.snapshot().state.artifact().is_some());
        open.send(()).unwrap();
    }

    #[tokio::test]
    async fn reset_returns_to_idle_and_keeps_artifact() {
        let controller = controller();
        controller.request_generation(request("findings", "C-1")).await;
        controller.reset();

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, GenerationState::Idle);
        assert_eq!(snapshot.file_name(), Some("C-1.pdf"));
    }
}
