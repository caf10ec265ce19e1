//! App Root Component
//!
//! Routing, the authentication route guard, and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Sidebar, Toast};
use crate::pages::{About, AuthPage, Dashboard, DiseaseInfo, History, PredictDisease, Profile};
use crate::state::{provide_notifications, provide_session, use_session};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide session and notification state to all components
    provide_session();
    provide_notifications();

    view! {
        <Router>
            <Routes>
                // Public entry screen
                <Route path="/" view=AuthPage />

                // Protected shell: sidebar plus the routed page
                <Route path="" view=DashboardLayout>
                    <Route path="dashboard" view=Dashboard />
                    <Route path="predict" view=PredictDisease />
                    <Route path="disease-info" view=DiseaseInfo />
                    <Route path="history" view=History />
                    <Route path="profile" view=Profile />
                    <Route path="about" view=About />

                    // Unmatched protected paths fall back to the dashboard
                    <Route path="*any" view=|| view! { <Redirect path="/dashboard" /> } />
                </Route>
            </Routes>

            // Toast notifications
            <Toast />
        </Router>
    }
}

/// Layout for all protected views: consults the session store on every
/// render and bounces to the entry screen while unauthenticated.
#[component]
fn DashboardLayout() -> impl IntoView {
    let session = use_session();

    view! {
        {move || match session.guard_redirect() {
            Some(target) => view! { <Redirect path=target /> }.into_view(),
            None => view! {
                <div class="flex h-screen bg-gray-50">
                    <Sidebar />
                    <main class="flex-1 overflow-y-auto">
                        <div class="p-6 lg:p-8">
                            <Outlet />
                        </div>
                    </main>
                </div>
            }
            .into_view(),
        }}
    }
}
