//! Mail module - outbound message model and the transport seam.

mod mail_model;
mod mail_traits;

pub use mail_model::EmailMessage;
pub use mail_traits::MailTransportTrait;
