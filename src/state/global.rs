//! Global Application State
//!
//! Reactive state management using Leptos signals. There is exactly one
//! writer of the event list (the poll-completion handler); every view model
//! is derived from it on render.

use leptos::*;

use crate::model::SaleEvent;

/// Global dashboard state provided to all components
#[derive(Clone)]
pub struct DashboardState {
    /// Most recently fetched event batch
    pub events: RwSignal<Vec<SaleEvent>>,
    /// True only until the first fetch settles, success or failure
    pub loading: RwSignal<bool>,
    /// Timestamp (epoch millis) of the last applied batch
    pub last_refresh: RwSignal<Option<i64>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            events: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            last_refresh: create_rw_signal(None),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    /// Replace the held event batch with a freshly fetched one.
    pub fn apply_batch(&self, events: Vec<SaleEvent>) {
        self.events.set(events);
        self.last_refresh
            .set(Some(chrono::Utc::now().timestamp_millis()));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide global state to the component tree
pub fn provide_dashboard_state() {
    provide_context(DashboardState::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(id: &str) -> SaleEvent {
        SaleEvent {
            id: id.to_string(),
            product: "Laptop".to_string(),
            region: "North".to_string(),
            amount: 1.0,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_apply_batch_replaces_events() {
        let runtime = create_runtime();

        let state = DashboardState::new();
        state.apply_batch(vec![event("a"), event("b")]);
        state.apply_batch(vec![event("c")]);

        let held = state.events.get_untracked();
        assert_eq!(held.len(), 1);
        assert_eq!(held[0].id, "c");
        assert!(state.last_refresh.get_untracked().is_some());

        runtime.dispose();
    }

    #[test]
    fn test_loading_starts_true() {
        let runtime = create_runtime();

        let state = DashboardState::new();
        assert!(state.loading.get_untracked());

        runtime.dispose();
    }
}
