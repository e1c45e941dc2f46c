use crate::actors::messages::{ActorError, AppError, SupervisorMessage};
use crate::actors::traits::Transport;
use crate::bot::MediBot;
use crate::config::BotConfig;
use crate::models::IncomingMessage;
use crate::session::UserSession;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{timeout, Duration};
use tracing::{error, info, instrument, warn};

/// A handle to the `SupervisorActor`.
///
/// This is the entry point the transport talks to. The actor owns the bot
/// and its session store, so every message is handled one at a time and no
/// session is ever touched from two places.
#[derive(Clone)]
pub struct SupervisorHandle {
    sender: mpsc::Sender<SupervisorMessage>,
    reply_timeout: Duration,
}

impl SupervisorHandle {
    /// Spawns the supervisor with settings taken from `config`.
    pub fn new<T: Transport>(bot: MediBot, transport: Arc<T>, config: &BotConfig) -> Self {
        Self::spawn(bot, transport, config.channel_capacity, config.reply_timeout())
    }

    /// Spawns the supervisor on the current tokio runtime and returns a handle.
    ///
    /// # Arguments
    ///
    /// * `bot` - The bot core the actor will own.
    /// * `transport` - Where replies are delivered.
    /// * `capacity` - Mailbox size.
    /// * `reply_timeout` - How long callers wait for an answer.
    pub fn spawn<T: Transport>(
        bot: MediBot,
        transport: Arc<T>,
        capacity: usize,
        reply_timeout: Duration,
    ) -> Self {
        let (sender, receiver) = mpsc::channel(capacity);
        let actor = SupervisorRunner::new(receiver, bot, transport);
        tokio::spawn(async move { actor.run().await });
        Self {
            sender,
            reply_timeout,
        }
    }

    /// Processes an inbound message and delivers the reply.
    ///
    /// # Returns
    ///
    /// The reply text that was delivered, `None` if the message was ignored,
    /// or `AppError::Delivery` if the transport failed. Delivery is never retried.
    #[instrument(skip(self, message), fields(user_id = %message.user_id))]
    pub async fn process_message(
        &self,
        message: IncomingMessage,
    ) -> Result<Option<String>, AppError> {
        let (send, recv) = oneshot::channel();
        self.send(SupervisorMessage::ProcessIncoming {
            message,
            responder: send,
        })
        .await?;
        timeout(self.reply_timeout, recv)
            .await?
            .map_err(|e| ActorError::ChannelClosed(e.to_string()))?
    }

    /// Lifecycle hook: the transport disconnected. Returns the number of sessions dropped.
    pub async fn disconnected(&self) -> Result<usize, AppError> {
        let (send, recv) = oneshot::channel();
        self.send(SupervisorMessage::Disconnected { responder: send })
            .await?;
        self.wait(recv).await
    }

    /// Bulk session sweep. Returns the number of sessions dropped.
    pub async fn clear_sessions(&self) -> Result<usize, AppError> {
        let (send, recv) = oneshot::channel();
        self.send(SupervisorMessage::ClearSessions { responder: send })
            .await?;
        self.wait(recv).await
    }

    /// Copies every live session, sorted by user id.
    pub async fn snapshot(&self) -> Result<Vec<UserSession>, AppError> {
        let (send, recv) = oneshot::channel();
        self.send(SupervisorMessage::Snapshot { responder: send })
            .await?;
        self.wait(recv).await
    }

    /// Stops the actor loop. Messages queued before this one are still handled.
    pub async fn shutdown(&self) -> Result<(), AppError> {
        self.send(SupervisorMessage::Shutdown).await
    }

    async fn send(&self, msg: SupervisorMessage) -> Result<(), AppError> {
        self.sender
            .send(msg)
            .await
            .map_err(|e| AppError::Actor(ActorError::ChannelClosed(e.to_string())))
    }

    async fn wait<R>(&self, recv: oneshot::Receiver<R>) -> Result<R, AppError> {
        let value = timeout(self.reply_timeout, recv)
            .await?
            .map_err(|e| ActorError::ChannelClosed(e.to_string()))?;
        Ok(value)
    }
}

// --- Actor Runner ---
struct SupervisorRunner<T>
where
    T: Transport,
{
    receiver: mpsc::Receiver<SupervisorMessage>,
    bot: MediBot,
    transport: Arc<T>,
}

impl<T> SupervisorRunner<T>
where
    T: Transport,
{
    fn new(receiver: mpsc::Receiver<SupervisorMessage>, bot: MediBot, transport: Arc<T>) -> Self {
        Self {
            receiver,
            bot,
            transport,
        }
    }

    async fn run(mut self) {
        info!("Supervisor started");
        while let Some(msg) = self.receiver.recv().await {
            if let SupervisorMessage::Shutdown = msg {
                info!("Supervisor shutting down...");
                break;
            }
            self.handle_message(msg).await;
        }
        info!("Supervisor stopped");
    }

    async fn handle_message(&mut self, msg: SupervisorMessage) {
        match msg {
            SupervisorMessage::ProcessIncoming { message, responder } => {
                let result = self.handle_incoming(message).await;
                if let Err(e) = &result {
                    error!("Error processing incoming message: {}", e);
                }
                let _ = responder.send(result);
            }
            SupervisorMessage::Disconnected { responder } => {
                let _ = responder.send(self.bot.on_disconnected());
            }
            SupervisorMessage::ClearSessions { responder } => {
                let _ = responder.send(self.bot.clear_sessions());
            }
            SupervisorMessage::Snapshot { responder } => {
                let _ = responder.send(self.bot.sessions_snapshot());
            }
            SupervisorMessage::Shutdown => {}
        }
    }

    #[instrument(skip(self, message), fields(user_id = %message.user_id, group = message.is_group_chat))]
    async fn handle_incoming(&mut self, message: IncomingMessage) -> Result<Option<String>, AppError> {
        let Some(reply) = self.bot.on_message(&message) else {
            return Ok(None);
        };

        if let Err(e) = self.transport.send_reply(&message.user_id, &reply).await {
            warn!("Reply delivery failed: {}", e);
            return Err(AppError::Delivery(e));
        }

        Ok(Some(reply))
    }
}
