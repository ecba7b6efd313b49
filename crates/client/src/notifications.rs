//! User-visible notification collaborator
//!
//! Domain rejections (a failed issue pick, a failed moderation action) are
//! surfaced to the user and otherwise leave state untouched. Sounds cover
//! the one moderation side effect: a genuinely new ticket arriving.

/// Severity/flavor of a simple alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Default,
    Moderation,
}

/// Named sound effects the core can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundName {
    ModToolsNewTicket,
}

#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn simple_alert(&self, message: &str, kind: AlertKind, title: &str);

    fn play_sound(&self, sound: SoundName);
}

/// Notifier that only logs; useful for embedders without a chrome layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

impl Notifier for LoggingNotifier {
    fn simple_alert(&self, message: &str, kind: AlertKind, title: &str) {
        tracing::info!(?kind, title, message, "alert");
    }

    fn play_sound(&self, sound: SoundName) {
        tracing::debug!(?sound, "sound requested");
    }
}
