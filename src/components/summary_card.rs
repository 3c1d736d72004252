//! Summary Card Component
//!
//! Displays a single derived scalar from the current event batch.

use leptos::*;

/// Summary card component
#[component]
pub fn SummaryCard(
    /// Card title
    #[prop(into)]
    title: String,
    /// Reactive display value
    #[prop(into)]
    value: Signal<String>,
    /// Optional caption shown under the value
    #[prop(optional)]
    caption: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            // Header with card title
            <span class="text-gray-400 text-sm">{title}</span>

            // Current value
            <div class="text-3xl font-bold mt-2">
                {move || value.get()}
            </div>

            {caption.map(|c| view! {
                <div class="text-gray-500 text-xs mt-2">{c}</div>
            })}
        </div>
    }
}
