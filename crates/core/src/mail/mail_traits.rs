use crate::errors::Result;
use crate::mail::EmailMessage;
use async_trait::async_trait;

/// Trait for email delivery.
///
/// Implementations own their credentials and connection handling, including
/// timeouts. A returned `Ok(())` means the relay accepted the message.
#[async_trait]
pub trait MailTransportTrait: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<()>;
}
