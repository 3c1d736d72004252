//! Event Poller
//!
//! The recurring refresh loop over the events feed. Each tick issues one
//! fetch; a successful response wholly replaces the held batch, a failed one
//! is logged and swallowed so the dashboard goes stale rather than crashing.
//!
//! Two ordering rules apply:
//!
//! - The timer is owned by the [`PollHandle`] returned at start-up and is
//!   cancelled exactly once when the dashboard view is torn down.
//! - Every request carries a monotonic sequence number; a response that is
//!   not newer than the last applied one is discarded, so a slow early
//!   response can never clobber a fresher batch.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::logging::{error, warn};
use leptos::spawn_local;
use leptos::SignalSet;

use crate::api;
use crate::model::SaleEvent;
use crate::state::global::DashboardState;

/// Poll cadence of the events feed
pub const POLL_INTERVAL_MS: u32 = 3_000;

/// Owned handle to the recurring poll timer.
///
/// Dropping the handle stops the timer. In-flight requests are not cancelled;
/// any late completion still settles through the sequence guard.
pub struct PollHandle {
    interval: Interval,
}

impl PollHandle {
    /// Stop the recurring timer.
    pub fn cancel(self) {
        self.interval.cancel();
    }
}

/// Start polling the events feed into `state`.
///
/// Fires one fetch immediately, then one per [`POLL_INTERVAL_MS`] until the
/// returned handle is cancelled.
pub fn start_polling(state: DashboardState) -> PollHandle {
    let next_seq = Rc::new(Cell::new(0u64));
    let last_applied = Rc::new(Cell::new(0u64));

    issue_poll(state.clone(), &next_seq, &last_applied);

    let interval = Interval::new(POLL_INTERVAL_MS, {
        let next_seq = Rc::clone(&next_seq);
        let last_applied = Rc::clone(&last_applied);
        move || issue_poll(state.clone(), &next_seq, &last_applied)
    });

    PollHandle { interval }
}

/// Issue one fetch tagged with the next sequence number.
fn issue_poll(state: DashboardState, next_seq: &Rc<Cell<u64>>, last_applied: &Rc<Cell<u64>>) {
    let seq = next_seq.get() + 1;
    next_seq.set(seq);

    let last_applied = Rc::clone(last_applied);
    spawn_local(async move {
        let result = api::fetch_events().await;
        complete_poll(&state, seq, &last_applied, result);
    });
}

/// Apply one settled fetch to the dashboard state.
///
/// Successful responses replace the batch only if their sequence number is
/// newer than the last applied one. Failures leave the held batch untouched.
/// The loading flag clears on the first settled fetch either way.
fn complete_poll(
    state: &DashboardState,
    seq: u64,
    last_applied: &Cell<u64>,
    result: Result<Vec<SaleEvent>, String>,
) {
    match result {
        Ok(events) if seq > last_applied.get() => {
            last_applied.set(seq);
            state.apply_batch(events);
        }
        Ok(_) => {
            warn!("Discarding stale events response (poll #{})", seq);
        }
        Err(err) => {
            error!("Error fetching sales events: {}", err);
        }
    }
    state.loading.set(false);
}
