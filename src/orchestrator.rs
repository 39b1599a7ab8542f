use crate::error::ErrorKind;
use crate::models::{DownloadTarget, GenerationRequest, OrchestrationEvent};
use crate::openai::OpenAiClient;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio_stream::wrappers::UnboundedReceiverStream;
use uuid::Uuid;

/// Pull side of one run's event channel. Events arrive in submission order;
/// the stream ends after the terminal event's sender is dropped.
pub type EventStream = UnboundedReceiverStream<OrchestrationEvent>;

/// Lifecycle of a single orchestration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Submitting,
    Downloading,
    Completed,
    Failed,
}

impl RunState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RunState::Submitting | RunState::Downloading)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Completed | RunState::Failed)
    }
}

/// Sequences submit-then-download and emits the event stream.
///
/// One orchestration at a time: the state mutex is the single-flight lock,
/// taken exactly once per `run` call to test and transition. The whole
/// pipeline runs on a spawned task, so the calling context is never
/// blocked; ordering is guaranteed by funneling every event through the
/// run's single channel from that one task.
pub struct Orchestrator {
    client: OpenAiClient,
    state: Arc<Mutex<RunState>>,
}

impl Orchestrator {
    pub fn new(client: OpenAiClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(RunState::Idle)),
        }
    }

    /// Current lifecycle state of the most recent run.
    pub fn state(&self) -> RunState {
        *self.state.lock().unwrap()
    }

    /// Starts one orchestration and returns its event stream.
    ///
    /// Rejections happen before any work: a run started while another is in
    /// flight yields only `Failed(AlreadyInFlight)`, an invalid request
    /// yields only `Failed(InvalidInput)` with no network activity. Either
    /// way no `Started` is emitted.
    pub fn run(&self, request: GenerationRequest, target: DownloadTarget) -> EventStream {
        let (tx, rx) = mpsc::unbounded_channel();
        let events = UnboundedReceiverStream::new(rx);

        {
            let mut state = self.state.lock().unwrap();
            if state.is_in_flight() {
                log::warn!("generation rejected: another run is in flight");
                let _ = tx.send(OrchestrationEvent::Failed {
                    kind: ErrorKind::AlreadyInFlight,
                    message: "a previous generation has not reached a terminal state".into(),
                });
                return events;
            }
            if let Err(e) = request.validate() {
                *state = RunState::Failed;
                log::warn!("generation rejected: {}", e);
                let _ = tx.send(OrchestrationEvent::Failed {
                    kind: ErrorKind::InvalidInput,
                    message: e.to_string(),
                });
                return events;
            }
            *state = RunState::Submitting;
        }

        let client = self.client.clone();
        let state = Arc::clone(&self.state);
        let run_id = Uuid::new_v4();

        tokio::spawn(async move {
            Self::drive(run_id, client, state, request, target, tx).await;
        });

        events
    }

    async fn drive(
        run_id: Uuid,
        client: OpenAiClient,
        state: Arc<Mutex<RunState>>,
        request: GenerationRequest,
        target: DownloadTarget,
        tx: UnboundedSender<OrchestrationEvent>,
    ) {
        let _ = tx.send(OrchestrationEvent::Started);
        let _ = tx.send(OrchestrationEvent::Submitting);
        log::info!("[{}] run started", run_id);

        let result = match client.generation().submit(&request).await {
            Ok(result) => result,
            Err(e) => {
                Self::fail(run_id, &state, &tx, ErrorKind::from(&e), e.to_string());
                return;
            }
        };

        *state.lock().unwrap() = RunState::Downloading;
        let path = target.file_path(result.created_at);
        log::info!("[{}] downloading asset to {}", run_id, path.display());

        let progress_tx = tx.clone();
        let outcome = client
            .asset()
            .download(
                &result.asset_reference,
                &path,
                target.expected_size,
                move |progress| {
                    let _ = progress_tx.send(OrchestrationEvent::Downloading(progress));
                },
            )
            .await;

        match outcome {
            Ok(path) => {
                // Terminal state is stored before the event goes out, so a
                // consumer reacting to it may immediately start the next run.
                *state.lock().unwrap() = RunState::Completed;
                log::info!("[{}] run completed: {}", run_id, path.display());
                let _ = tx.send(OrchestrationEvent::Completed(path));
            }
            Err(e) => {
                Self::fail(run_id, &state, &tx, ErrorKind::from(&e), e.to_string());
            }
        }
    }

    fn fail(
        run_id: Uuid,
        state: &Arc<Mutex<RunState>>,
        tx: &UnboundedSender<OrchestrationEvent>,
        kind: ErrorKind,
        message: String,
    ) {
        *state.lock().unwrap() = RunState::Failed;
        log::error!("[{}] run failed ({}): {}", run_id, kind, message);
        let _ = tx.send(OrchestrationEvent::Failed { kind, message });
    }
}
