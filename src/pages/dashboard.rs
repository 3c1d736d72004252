//! Dashboard Page
//!
//! The single dashboard view: summary cards, both charts, and the event log,
//! all derived from the currently held batch on every render.

use leptos::*;

use crate::components::{EventsTable, LineChart, Loading, PieChart, SummaryCard};
use crate::model;
use crate::state::global::DashboardState;
use crate::state::poller::{self, POLL_INTERVAL_MS};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    // Poll the feed while this view is active; the handle owns the timer and
    // is cancelled exactly once on teardown.
    let poll = poller::start_polling(state.clone());
    on_cleanup(move || poll.cancel());

    // Chart view models, recomputed when a new batch lands
    let state_for_line = state.clone();
    let line_series = create_memo(move |_| {
        model::to_line_series(&state_for_line.events.get())
    });
    let state_for_pie = state.clone();
    let distribution = create_memo(move |_| {
        model::to_product_distribution(&state_for_pie.events.get())
    });

    // Summary scalars
    let state_for_total = state.clone();
    let total_sales = Signal::derive(move || {
        format!("${}", model::total_sales(&state_for_total.events.get()))
    });
    let state_for_count = state.clone();
    let event_count = Signal::derive(move || {
        state_for_count.events.get().len().to_string()
    });
    let state_for_top = state.clone();
    let top_product = Signal::derive(move || {
        model::top_product(&state_for_top.events.get())
            .map(|slice| slice.name)
            .unwrap_or_else(|| "—".to_string())
    });
    let state_for_regions = state.clone();
    let regions = Signal::derive(move || {
        model::region_count(&state_for_regions.events.get()).to_string()
    });

    let state_for_line_gate = state.clone();
    let state_for_pie_gate = state.clone();
    let state_for_table_gate = state.clone();

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Sales Analytics"</h1>
                    <p class="text-gray-400 mt-1">"Live view of the incoming sales-event feed"</p>
                </div>

                <div class="text-sm text-gray-400">
                    {format!("Refreshes every {}s", POLL_INTERVAL_MS / 1000)}
                </div>
            </div>

            // Summary row
            <section>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <SummaryCard title="Total Sales" value=total_sales />
                    <SummaryCard title="Events" value=event_count />
                    <SummaryCard title="Top Product" value=top_product caption="by summed amount".to_string() />
                    <SummaryCard title="Regions" value=regions />
                </div>
            </section>

            // Charts
            <div class="grid md:grid-cols-3 gap-8">
                <section class="md:col-span-2 bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Sales Over Time"</h2>
                    {move || {
                        if state_for_line_gate.loading.get() {
                            view! { <Loading /> }.into_view()
                        } else {
                            view! { <LineChart points=line_series /> }.into_view()
                        }
                    }}
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Sales by Product"</h2>
                    {move || {
                        if state_for_pie_gate.loading.get() {
                            view! { <Loading /> }.into_view()
                        } else {
                            view! { <PieChart slices=distribution /> }.into_view()
                        }
                    }}
                </section>
            </div>

            // Event log
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Recent Sales Events"</h2>
                {move || {
                    if state_for_table_gate.loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! { <EventsTable events=state_for_table_gate.events /> }.into_view()
                    }
                }}
            </section>
        </div>
    }
}
