//! Toast Notifications
//!
//! Success and error message signals with timed auto-clear.

use leptos::*;

/// Notification state provided to all components.
#[derive(Clone, Copy)]
pub struct Notifications {
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            success: create_rw_signal(None),
            error: create_rw_signal(None),
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            let _ = success_signal.try_set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            let _ = error_signal.try_set(None);
        })
        .forget();
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide notification state to the component tree.
pub fn provide_notifications() {
    provide_context(Notifications::new());
}

/// Fetch notification state from context.
pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications not found")
}
