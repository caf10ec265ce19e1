//! Disease Card Component
//!
//! Catalog card showing a disease, its symptoms, and a severity badge.

use leptos::*;

use crate::api::Severity;

/// Disease catalog card
#[component]
pub fn DiseaseCard(
    name: &'static str,
    symptoms: &'static str,
    severity: Severity,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg overflow-hidden border border-gray-200">
            <div class="h-40 bg-gradient-to-br from-green-100 to-green-200 flex items-center justify-center">
                <span class="text-6xl opacity-60">"🍃"</span>
            </div>
            <div class="p-5">
                <div class="flex items-start justify-between mb-3">
                    <h3 class="text-lg font-bold text-gray-800">{name}</h3>
                    <span class=format!(
                        "px-3 py-1 text-xs font-medium rounded-full border {}",
                        severity.badge_class()
                    )>
                        {severity.to_string()}
                    </span>
                </div>
                <p class="text-gray-600 text-sm leading-relaxed">{symptoms}</p>
            </div>
        </div>
    }
}
