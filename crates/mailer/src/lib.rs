//! Email delivery for ROI reports through an HTTPS mail relay.
//!
//! The relay speaks the MailChannels transactional JSON format. Any relay that
//! accepts the same payload (or a proxy in front of an SMTP server) can be
//! configured through [`MailRelayConfig`].

mod client;

pub use client::{
    MailRelayClient, MailRelayConfig, DEFAULT_RELAY_URL, DEFAULT_SENDER_EMAIL,
    DEFAULT_SENDER_NAME,
};
