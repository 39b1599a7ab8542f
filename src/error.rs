use std::fmt;

/// Structural problems with a [`GenerationRequest`](crate::GenerationRequest),
/// caught before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("prompt must not be empty")]
    EmptyPrompt,
    #[error("credential must not be empty")]
    EmptyCredential,
    #[error("count must be at least 1")]
    ZeroCount,
}

/// Failures of the creation request.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Connection-level failure: refused, timed out, DNS.
    #[error("transport error: {0}")]
    Transport(String),
    /// The endpoint answered with a non-success status. The body is kept
    /// verbatim for diagnostics and is not parsed further.
    #[error("creation endpoint rejected the request: status {status} - {body}")]
    RemoteRejected { status: u16, body: String },
    /// The response did not match the expected shape.
    #[error("malformed creation response: {0}")]
    MalformedResponse(String),
}

/// Failures of the asset transfer.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("filesystem error: {0}")]
    Filesystem(String),
}

/// Flat failure taxonomy carried by the terminal
/// [`Failed`](crate::OrchestrationEvent::Failed) event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing prompt or credential, rejected before any network call.
    InvalidInput,
    /// Connection-level failure at either step.
    Network,
    /// Non-success status from the creation endpoint.
    Remote,
    /// Response shape violated the expected contract.
    Protocol,
    /// Directory or file creation, or a write, failed.
    Filesystem,
    /// A run was started while another had not reached a terminal state.
    AlreadyInFlight,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::Network => "network",
            ErrorKind::Remote => "remote",
            ErrorKind::Protocol => "protocol",
            ErrorKind::Filesystem => "filesystem",
            ErrorKind::AlreadyInFlight => "already_in_flight",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&SubmitError> for ErrorKind {
    fn from(err: &SubmitError) -> Self {
        match err {
            SubmitError::Transport(_) => ErrorKind::Network,
            SubmitError::RemoteRejected { .. } => ErrorKind::Remote,
            SubmitError::MalformedResponse(_) => ErrorKind::Protocol,
        }
    }
}

impl From<&DownloadError> for ErrorKind {
    fn from(err: &DownloadError) -> Self {
        match err {
            DownloadError::Transport(_) => ErrorKind::Network,
            DownloadError::Filesystem(_) => ErrorKind::Filesystem,
        }
    }
}
