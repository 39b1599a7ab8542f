use crate::error::ErrorKind;
use std::path::PathBuf;

/// One progress sample during an asset download. Percent is clamped to
/// 0..=100 and never decreases within a single download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    pub percent: u8,
    pub bytes_written: u64,
}

/// The discrete event stream one orchestration run produces.
///
/// Delivery order is always `Started, Submitting, Downloading(..)*,` then
/// exactly one terminal event; nothing follows a terminal event. Runs
/// rejected before any work starts (bad input, single-flight violation)
/// yield only the terminal `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum OrchestrationEvent {
    Started,
    Submitting,
    Downloading(ProgressEvent),
    Completed(PathBuf),
    Failed { kind: ErrorKind, message: String },
}

impl OrchestrationEvent {
    /// Terminal events end the stream for a run.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrchestrationEvent::Completed(_) | OrchestrationEvent::Failed { .. }
        )
    }
}
