//! Settings Page
//!
//! Feed endpoint configuration, persisted in browser local storage.

use leptos::*;

use crate::api;
use crate::state::global::DashboardState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure your Salesboard dashboard"</p>
            </div>

            // Feed connection
            <FeedSettings />

            // About
            <AboutSection />
        </div>
    }
}

/// Events feed connection settings
#[component]
fn FeedSettings() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let (events_url, set_url) = create_signal(api::get_events_url());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);

    let state_for_test = state.clone();
    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        let url = events_url.get();
        api::set_events_url(&url);

        let state_clone = state_for_test.clone();
        spawn_local(async move {
            match api::fetch_events().await {
                Ok(events) => {
                    set_test_result.set(Some(true));
                    state_clone.show_success(&format!("Feed reachable ({} events)", events.len()));
                }
                Err(e) => {
                    set_test_result.set(Some(false));
                    state_clone.show_error(&format!("Connection failed: {}", e));
                }
            }
            set_testing.set(false);
        });
    };

    let state_for_save = state.clone();
    let save_url = move |_| {
        let url = events_url.get();
        api::set_events_url(&url);
        state_for_save.show_success("Events URL saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Events Feed"</h2>

            <div class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-1">"Endpoint URL"</label>
                    <input
                        type="text"
                        prop:value=events_url
                        on:input=move |ev| set_url.set(event_target_value(&ev))
                        placeholder=api::DEFAULT_EVENTS_URL
                        class="w-full bg-gray-700 border border-gray-600 rounded-lg px-3 py-2 \
                               focus:outline-none focus:border-primary-500"
                    />
                </div>

                <div class="flex items-center space-x-3">
                    <button
                        on:click=save_url
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        "Save"
                    </button>
                    <button
                        on:click=test_connection
                        disabled=testing
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                    >
                        {move || if testing.get() { "Testing..." } else { "Test Connection" }}
                    </button>

                    {move || {
                        test_result.get().map(|ok| {
                            if ok {
                                view! { <span class="text-green-400 text-sm">"✓ Reachable"</span> }
                                    .into_view()
                            } else {
                                view! { <span class="text-red-400 text-sm">"✕ Unreachable"</span> }
                                    .into_view()
                            }
                        })
                    }}
                </div>
            </div>
        </section>
    }
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"About"</h2>
            <div class="space-y-2 text-sm text-gray-400">
                <p>{format!("Salesboard v{}", env!("CARGO_PKG_VERSION"))}</p>
                <p>"A client-side dashboard over a live sales-event feed. The feed is "
                   "polled every few seconds and the view is rebuilt from each batch; "
                   "nothing is stored across a reload except the endpoint URL above."</p>
            </div>
        </section>
    }
}
