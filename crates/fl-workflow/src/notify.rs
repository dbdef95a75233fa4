//! User-visible notifications raised by the dispatcher.

use std::fmt;

/// Outcome message for the person who triggered an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Failure(String),
}

impl Notification {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Failure(message) => message,
        }
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Sink for notifications. The CLI prints them; tests record them.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_is_flagged() {
        let n = Notification::Failure("Failed to close ticket".into());
        assert!(n.is_failure());
        assert_eq!(n.to_string(), "Failed to close ticket");
        assert!(!Notification::Success("ok".into()).is_failure());
    }
}
