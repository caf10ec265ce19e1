//! Profile Page
//!
//! Account details with a local-only edit mode. Edits live in this view's
//! form state and are discarded on navigation; nothing is written back to
//! the session store or persisted anywhere.

use leptos::*;

use crate::state::{use_notifications, use_session};

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let session = use_session();
    let notify = use_notifications();

    let user = session.current_user();

    let (editing, set_editing) = create_signal(false);
    let (name, set_name) =
        create_signal(user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let (email, set_email) =
        create_signal(user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let (phone, set_phone) = create_signal("+94 77 123 4567".to_string());
    let (location, set_location) = create_signal("Colombo, Sri Lanka".to_string());

    let on_toggle = move |_| {
        if editing.get_untracked() {
            set_editing.set(false);
            // Local form state only; a persistence backend comes later.
            notify.show_success("Profile updated successfully!");
        } else {
            set_editing.set(true);
        }
    };

    view! {
        <div class="max-w-4xl mx-auto">
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-800 mb-2">"My Profile"</h1>
                <p class="text-gray-600">"Manage your account information and preferences"</p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                // Summary card
                <div class="lg:col-span-1 bg-white rounded-xl shadow-lg p-6 border border-gray-200 h-fit">
                    <div class="text-center">
                        <div class="w-32 h-32 bg-gray-200 rounded-full mx-auto mb-4
                                    flex items-center justify-center text-5xl">
                            "👤"
                        </div>
                        <h2 class="text-xl font-bold text-gray-800 mb-1">{move || name.get()}</h2>
                        <p class="text-gray-600 text-sm mb-4">{move || email.get()}</p>
                        <div class="bg-green-50 rounded-lg p-3 text-sm">
                            <p class="text-gray-600">"Member since"</p>
                            <p class="font-semibold text-green-700">"November 2024"</p>
                        </div>
                    </div>
                </div>

                // Details card
                <div class="lg:col-span-2 bg-white rounded-xl shadow-lg p-6 border border-gray-200">
                    <div class="flex items-center justify-between mb-6">
                        <h2 class="text-xl font-bold text-gray-800">"Personal Information"</h2>
                        <button
                            on:click=on_toggle
                            class="flex items-center gap-2 px-4 py-2 bg-green-600 text-white
                                   rounded-lg hover:bg-green-700 transition-colors"
                        >
                            {move || if editing.get() { "Save" } else { "Edit" }}
                        </button>
                    </div>

                    <div class="space-y-4">
                        <ProfileField
                            label="Full Name"
                            value=name
                            set_value=set_name
                            editing=editing
                        />
                        <ProfileField
                            label="Email Address"
                            value=email
                            set_value=set_email
                            editing=editing
                        />
                        <ProfileField
                            label="Phone Number"
                            value=phone
                            set_value=set_phone
                            editing=editing
                        />
                        <ProfileField
                            label="Location"
                            value=location
                            set_value=set_location
                            editing=editing
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}

/// One editable profile field; read-only unless edit mode is on
#[component]
fn ProfileField(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    editing: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-2">{label}</label>
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                disabled=move || !editing.get()
                class="w-full px-4 py-3 border border-gray-300 rounded-lg
                       focus:ring-2 focus:ring-green-500 outline-none
                       disabled:bg-gray-50 disabled:text-gray-600"
            />
        </div>
    }
}
