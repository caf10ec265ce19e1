//! Sidebar Component
//!
//! Navigation rail for the protected shell: brand block, page links, the
//! signed-in user, and logout.

use leptos::*;
use leptos_router::*;

use crate::state::use_session;

const NAV_ITEMS: [(&str, &str, &str); 6] = [
    ("/dashboard", "📊", "Dashboard"),
    ("/predict", "🔍", "Predict Disease"),
    ("/disease-info", "📖", "Disease Info"),
    ("/history", "🕘", "History"),
    ("/profile", "👤", "Profile"),
    ("/about", "ℹ️", "About"),
];

/// Sidebar navigation component
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();

    // Clearing the session is enough: the route guard sees the change and
    // redirects to the entry screen.
    let on_logout = move |_| session.logout();

    view! {
        <aside class="w-64 bg-green-700 text-white flex flex-col">
            // Brand
            <div class="p-6 border-b border-green-600">
                <div class="flex items-center gap-3">
                    <span class="text-3xl">"🌶️"</span>
                    <div>
                        <h1 class="text-xl font-bold">"Chili Disease"</h1>
                        <p class="text-xs text-green-200">"Detection System"</p>
                    </div>
                </div>
            </div>

            // Navigation
            <nav class="flex-1 p-4 space-y-2 overflow-y-auto">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(path, icon, label)| view! { <NavItem path=path icon=icon label=label /> })
                    .collect_view()}
            </nav>

            // User section
            <div class="p-4 border-t border-green-600">
                <div class="flex items-center gap-3 mb-4">
                    <div class="w-10 h-10 bg-green-500 rounded-full flex items-center justify-center">
                        <span class="text-lg">"👤"</span>
                    </div>
                    <div class="flex-1 min-w-0">
                        <p class="font-medium truncate">
                            {move || {
                                session
                                    .current_user()
                                    .map(|u| u.name)
                                    .unwrap_or_else(|| "User".to_string())
                            }}
                        </p>
                        <p class="text-xs text-green-200 truncate">
                            {move || session.current_user().map(|u| u.email).unwrap_or_default()}
                        </p>
                    </div>
                </div>
                <button
                    on:click=on_logout
                    class="w-full flex items-center justify-center gap-2 px-4 py-2
                           bg-red-600 hover:bg-red-700 rounded-lg transition-colors"
                >
                    <span>"Logout"</span>
                </button>
            </div>
        </aside>
    }
}

/// Individual navigation link
#[component]
fn NavItem(path: &'static str, icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=path
            class="flex items-center gap-3 px-4 py-3 rounded-lg hover:bg-green-800 transition-all"
            active_class="bg-green-900 shadow-lg"
        >
            <span>{icon}</span>
            <span class="font-medium">{label}</span>
        </A>
    }
}
