//! Outbound-mail composition and handoff seam.
//!
//! # Responsibility
//! - Format notes into plain-text mail bodies.
//! - Define the transport seam to the platform's send capability.
//!
//! # Invariants
//! - Composition is pure: no I/O, no preference reads.
//! - Delivery (and delivery failure) belongs entirely to the transport.

pub mod composer;

use self::composer::MailMessage;

/// Seam to the platform's generic outbound-mail capability.
///
/// Implementations hand the message off; they do not manage delivery.
pub trait MailTransport {
    type Error;

    fn send(&mut self, message: &MailMessage) -> Result<(), Self::Error>;
}
