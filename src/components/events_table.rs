//! Events Table Component
//!
//! Tabular log of the raw event batch, one row per event in feed order.

use chrono::Local;
use leptos::*;

use crate::model::SaleEvent;

/// Sales events table
#[component]
pub fn EventsTable(
    #[prop(into)]
    events: Signal<Vec<SaleEvent>>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="w-full text-left text-sm">
                <thead>
                    <tr class="text-gray-400 border-b border-gray-700">
                        <th class="py-2 pr-4 font-medium">"Event ID"</th>
                        <th class="py-2 pr-4 font-medium">"Product"</th>
                        <th class="py-2 pr-4 font-medium">"Region"</th>
                        <th class="py-2 pr-4 font-medium">"Amount"</th>
                        <th class="py-2 font-medium">"Timestamp"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let events = events.get();
                        if events.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="5" class="py-8 text-center text-gray-400">
                                        "No sales events yet"
                                    </td>
                                </tr>
                            }.into_view()
                        } else {
                            events.into_iter().map(|event| {
                                view! { <EventRow event=event /> }
                            }).collect_view()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Single event row
#[component]
fn EventRow(event: SaleEvent) -> impl IntoView {
    let time = event
        .timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();

    view! {
        <tr class="border-b border-gray-700 last:border-0 hover:bg-gray-750">
            <td class="py-2 pr-4 font-mono text-xs text-gray-400">{event.id}</td>
            <td class="py-2 pr-4">{event.product}</td>
            <td class="py-2 pr-4">{event.region}</td>
            <td class="py-2 pr-4 font-semibold">{format!("${:.2}", event.amount)}</td>
            <td class="py-2 text-gray-400">{time}</td>
        </tr>
    }
}
