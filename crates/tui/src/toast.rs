use std::sync::Mutex;

use sayt_client::FailureReporter;

/// Most recent failure surfaced to the user, rendered as a status line.
///
/// The controller reports from the UI thread but the reporter trait is
/// shared, so the slot sits behind a mutex. Only the latest message is kept;
/// a new failure replaces the previous one.
#[derive(Debug, Default)]
pub struct StatusToast {
    current: Mutex<Option<ToastMessage>>,
}

#[derive(Debug, Clone)]
pub struct ToastMessage {
    pub title: String,
    pub message: String,
}

impl StatusToast {
    pub fn current(&self) -> Option<ToastMessage> {
        self.current.lock().ok().and_then(|slot| slot.clone())
    }

    /// Dismiss the visible message, typically on the next keystroke.
    pub fn clear(&self) {
        if let Ok(mut slot) = self.current.lock() {
            *slot = None;
        }
    }
}

impl FailureReporter for StatusToast {
    fn report(&self, title: &str, message: &str) {
        if let Ok(mut slot) = self.current.lock() {
            *slot = Some(ToastMessage {
                title: title.to_string(),
                message: message.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_report_wins_and_clear_dismisses() {
        let toast = StatusToast::default();
        toast.report("Could not perform search", "first");
        toast.report("Could not perform search", "second");

        let visible = toast.current().unwrap();
        assert_eq!(visible.message, "second");

        toast.clear();
        assert!(toast.current().is_none());
    }
}
