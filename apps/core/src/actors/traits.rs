use crate::actors::messages::DeliveryError;
use async_trait::async_trait;

/// Defines the outbound side of the messaging network.
///
/// This trait abstracts the concrete transport (chat network client, console,
/// test double) so the supervisor can deliver replies without knowing which
/// one is plugged in.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Sends `text` to `user_id`. Failures are reported, never retried.
    async fn send_reply(&self, user_id: &str, text: &str) -> Result<(), DeliveryError>;
}
