use tokio::sync::oneshot;

use crate::models::IncomingMessage;
use crate::session::UserSession;

/// Defines errors that can occur within the actor system.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ActorError {
    /// The supervisor mailbox or reply channel is gone.
    #[error("Channel closed: {0}")]
    ChannelClosed(String),
}

/// Failure reported by a [`Transport`](crate::actors::traits::Transport) when sending a reply.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The messaging network refused the message.
    #[error("Reply rejected for {user_id}: {reason}")]
    Rejected { user_id: String, reason: String },
    /// The transport is not connected.
    #[error("Transport disconnected")]
    Disconnected,
    /// Local I/O failure while writing the reply.
    #[error("Transport I/O failure: {0}")]
    Io(String),
}

impl From<std::io::Error> for DeliveryError {
    fn from(err: std::io::Error) -> Self {
        DeliveryError::Io(err.to_string())
    }
}

// Re-export AppError for convenience
pub use crate::error::AppError;

/// Messages that can be sent to the `SupervisorActor`.
#[derive(Debug)]
pub enum SupervisorMessage {
    /// An inbound chat message to classify, answer and deliver.
    ProcessIncoming {
        message: IncomingMessage,
        /// Receives the delivered reply text, `None` for ignored messages.
        responder: oneshot::Sender<Result<Option<String>, AppError>>,
    },
    /// The transport reported a disconnect.
    Disconnected {
        /// Receives the number of sessions dropped.
        responder: oneshot::Sender<usize>,
    },
    /// Periodic bulk session sweep.
    ClearSessions {
        responder: oneshot::Sender<usize>,
    },
    /// Diagnostics: copy of every live session.
    Snapshot {
        responder: oneshot::Sender<Vec<UserSession>>,
    },
    /// A command to stop the supervisor loop.
    Shutdown,
}
