//! Command bus for sending composed messages to the server
//!
//! Fire-and-forget: `send` queues the composer and returns; responses, if
//! any, arrive later as independent protocol events. The transport owns the
//! receiving end and performs the actual framing.

use anyhow::Result;
use futures_channel::mpsc;

use parlor_domain::DomainError;
use parlor_shared::Composer;

/// Receiving end handed to the transport adapter.
pub type CommandReceiver = mpsc::UnboundedReceiver<Composer>;

/// Sending half of the outbound sink.
///
/// Concrete struct (not a trait) that can be cloned and shared; handlers
/// and the widget bridge depend on it directly.
#[derive(Clone)]
pub struct CommandBus {
    tx: mpsc::UnboundedSender<Composer>,
}

impl CommandBus {
    /// Create a bus plus the receiver the transport drains.
    pub fn channel() -> (Self, CommandReceiver) {
        let (tx, rx) = mpsc::unbounded();
        (Self { tx }, rx)
    }

    /// Queue a composer for transmission.
    ///
    /// Fails only when the transport has shut down; callers log and carry
    /// on, the core never treats this as fatal.
    pub fn send(&self, composer: Composer) -> Result<()> {
        tracing::debug!(composer = composer.name(), "sending composer");

        self.tx
            .unbounded_send(composer)
            .map_err(|_| anyhow::Error::new(DomainError::SinkClosed))
    }
}
