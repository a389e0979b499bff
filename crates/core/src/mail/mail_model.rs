//! Outbound email model.

use serde::{Deserialize, Serialize};

/// A plain-text message addressed to a single recipient.
///
/// The sender identity belongs to the transport, not to the message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
    /// Address the operator's reply should go to, usually the submitter.
    pub reply_to: Option<String>,
}
