//! Dashboard Page
//!
//! Landing view after login: scan stats, quick actions, recent predictions.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::{DashboardStats, HistoryRecord};
use crate::state::use_session;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_session();

    let (stats, set_stats) = create_signal(None::<DashboardStats>);
    let (recent, set_recent) = create_signal(Vec::<HistoryRecord>::new());

    // Fetch stats and recent records on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_dashboard_stats().await {
                Ok(fetched) => set_stats.set(Some(fetched)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch stats: {}", e).into());
                }
            }

            match api::fetch_history().await {
                Ok(records) => set_recent.set(records.into_iter().take(3).collect()),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch history: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="max-w-7xl mx-auto">
            // Header
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-800 mb-2">
                    {move || {
                        let name = session
                            .current_user()
                            .map(|u| u.name)
                            .unwrap_or_else(|| "there".to_string());
                        format!("Welcome back, {}! 👋", name)
                    }}
                </h1>
                <p class="text-gray-600">"Here's an overview of your disease detection activity"</p>
            </div>

            // Stats grid
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                <StatCard
                    label="Total Scans"
                    icon="📈"
                    value=Signal::derive(move || stats.get().map(|s| s.total_scans))
                />
                <StatCard
                    label="Diseases Detected"
                    icon="🦠"
                    value=Signal::derive(move || stats.get().map(|s| s.diseases_detected))
                />
                <StatCard
                    label="Healthy Scans"
                    icon="✅"
                    value=Signal::derive(move || stats.get().map(|s| s.healthy_scans))
                />
                <StatCard
                    label="This Month"
                    icon="🗓️"
                    value=Signal::derive(move || stats.get().map(|s| s.this_month))
                />
            </div>

            // Quick actions
            <div class="mb-8">
                <h2 class="text-xl font-bold text-gray-800 mb-4">"Quick Actions"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <QuickAction
                        path="/predict"
                        icon="🔍"
                        title="Predict Disease"
                        description="Upload an image to detect diseases"
                    />
                    <QuickAction
                        path="/disease-info"
                        icon="📖"
                        title="Disease Info"
                        description="Learn about common chili diseases"
                    />
                    <QuickAction
                        path="/history"
                        icon="🕘"
                        title="View History"
                        description="Check your past predictions"
                    />
                </div>
            </div>

            // Recent predictions
            <div class="bg-white rounded-xl shadow-md p-6 border border-gray-200">
                <h2 class="text-xl font-bold text-gray-800 mb-4">"Recent Predictions"</h2>
                <div class="space-y-1">
                    {move || {
                        let records = recent.get();
                        if records.is_empty() {
                            view! {
                                <p class="text-gray-500 text-sm">"No predictions yet"</p>
                            }
                            .into_view()
                        } else {
                            records
                                .into_iter()
                                .map(|record| view! { <RecentRow record=record /> })
                                .collect_view()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

/// Single stat card; shows a dash until the fetch resolves.
#[component]
fn StatCard(
    label: &'static str,
    icon: &'static str,
    #[prop(into)] value: Signal<Option<u32>>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-md p-6 border border-gray-200">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-gray-600 text-sm mb-1">{label}</p>
                    <p class="text-3xl font-bold text-gray-800">
                        {move || {
                            value
                                .get()
                                .map(|v| v.to_string())
                                .unwrap_or_else(|| "—".to_string())
                        }}
                    </p>
                </div>
                <div class="bg-green-500 p-3 rounded-lg text-white text-xl">{icon}</div>
            </div>
        </div>
    }
}

/// Navigation card linking to one of the main workflows
#[component]
fn QuickAction(
    path: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <A href=path>
            <div class="bg-gradient-to-br from-green-500 to-green-700 rounded-xl p-6 text-white
                        shadow-lg cursor-pointer hover:shadow-xl transition-all">
                <div class="text-4xl mb-4 opacity-90">{icon}</div>
                <h3 class="text-xl font-bold mb-2">{title}</h3>
                <p class="text-sm opacity-90">{description}</p>
            </div>
        </A>
    }
}

/// One row of the recent predictions list
#[component]
fn RecentRow(record: HistoryRecord) -> impl IntoView {
    let date = record.date.format("%b %d, %Y").to_string();
    let dot_class = if record.healthy { "bg-green-500" } else { "bg-red-500" };
    let badge_class = if record.healthy {
        "bg-green-100 text-green-700"
    } else {
        "bg-red-100 text-red-700"
    };

    view! {
        <div class="flex items-center justify-between py-3 border-b border-gray-100 last:border-b-0">
            <div class="flex items-center gap-4">
                <div class=format!("w-2 h-2 rounded-full {}", dot_class) />
                <div>
                    <p class="font-medium text-gray-800">{record.disease.clone()}</p>
                    <p class="text-sm text-gray-500">{date}</p>
                </div>
            </div>
            <span class=format!("px-3 py-1 text-xs font-medium rounded-full {}", badge_class)>
                {record.status_label()}
            </span>
        </div>
    }
}
