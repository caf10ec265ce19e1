//! History Page
//!
//! Past predictions: summary cards plus the full records table.

use leptos::*;

use crate::api;
use crate::api::HistoryRecord;
use crate::state::use_notifications;

/// History page component
#[component]
pub fn History() -> impl IntoView {
    let notify = use_notifications();

    let (records, set_records) = create_signal(Vec::<HistoryRecord>::new());

    // Fetch records on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_history().await {
                Ok(fetched) => set_records.set(fetched),
                Err(e) => notify.show_error(&e.to_string()),
            }
        });
    });

    let stats = create_memo(move |_| records.with(|r| api::compute_stats(r)));

    view! {
        <div class="max-w-6xl mx-auto">
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-800 mb-2">"Prediction History"</h1>
                <p class="text-gray-600">"View all your past disease predictions and analysis"</p>
            </div>

            // Summary cards
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                <SummaryCard
                    icon="📈"
                    label="Total Predictions"
                    value=Signal::derive(move || stats.get().total_scans.to_string())
                />
                <SummaryCard
                    icon="🗓️"
                    label="This Month"
                    value=Signal::derive(move || stats.get().this_month.to_string())
                />
                <SummaryCard
                    icon="🎯"
                    label="Avg Confidence"
                    value=Signal::derive(move || format!("{}%", stats.get().average_confidence))
                />
            </div>

            // Records table
            <div class="bg-white rounded-xl shadow-lg overflow-hidden border border-gray-200">
                <div class="overflow-x-auto">
                    <table class="w-full">
                        <thead class="bg-gray-50 border-b border-gray-200">
                            <tr>
                                <HeaderCell label="ID" />
                                <HeaderCell label="Date" />
                                <HeaderCell label="Disease" />
                                <HeaderCell label="Confidence" />
                                <HeaderCell label="Status" />
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200">
                            {move || {
                                records
                                    .get()
                                    .into_iter()
                                    .map(|record| view! { <HistoryRow record=record /> })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SummaryCard(
    icon: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-md p-6 border border-gray-200">
            <div class="flex items-center gap-4">
                <div class="bg-green-100 p-3 rounded-lg text-xl">{icon}</div>
                <div>
                    <p class="text-gray-600 text-sm">{label}</p>
                    <p class="text-2xl font-bold text-gray-800">{move || value.get()}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn HeaderCell(label: &'static str) -> impl IntoView {
    view! {
        <th class="px-6 py-4 text-left text-sm font-semibold text-gray-700">{label}</th>
    }
}

/// One table row with the confidence bar and status badge
#[component]
fn HistoryRow(record: HistoryRecord) -> impl IntoView {
    let date = record.date.format("%Y-%m-%d").to_string();
    let badge_class = if record.healthy {
        "bg-green-100 text-green-700"
    } else {
        "bg-red-100 text-red-700"
    };

    view! {
        <tr class="hover:bg-gray-50 transition-colors">
            <td class="px-6 py-4 text-sm text-gray-600">{format!("#{}", record.id)}</td>
            <td class="px-6 py-4 text-sm text-gray-600">{date}</td>
            <td class="px-6 py-4 text-sm font-medium text-gray-800">{record.disease.clone()}</td>
            <td class="px-6 py-4 text-sm">
                <div class="flex items-center gap-2">
                    <div class="w-full bg-gray-200 rounded-full h-2 max-w-[100px]">
                        <div
                            class="bg-green-600 h-2 rounded-full"
                            style=format!("width: {}%", record.confidence)
                        />
                    </div>
                    <span class="text-gray-600">{format!("{}%", record.confidence)}</span>
                </div>
            </td>
            <td class="px-6 py-4 text-sm">
                <span class=format!("px-3 py-1 rounded-full text-xs font-medium {}", badge_class)>
                    {record.status_label()}
                </span>
            </td>
        </tr>
    }
}
