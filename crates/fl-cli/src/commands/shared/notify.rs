use fl_workflow::{DispatchError, Notification, Notifier};

/// A failure the user has already seen as a notification. `main` exits
/// non-zero without printing it again.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct AlreadyReported(String);

/// Fold a dispatch error into `anyhow`, marking notified failures as
/// [`AlreadyReported`].
pub fn into_cli_error(error: DispatchError) -> anyhow::Error {
    if error.was_notified() {
        AlreadyReported(error.to_string()).into()
    } else {
        error.into()
    }
}

/// Prints dispatcher notifications to stderr, keeping stdout for results.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification {
            Notification::Failure(message) => eprintln!("✗ {message}"),
            Notification::Success(message) if !self.quiet => eprintln!("✓ {message}"),
            Notification::Success(_) => {}
        }
    }
}
