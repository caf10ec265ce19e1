//! Auth Page
//!
//! Public entry screen with login/register sub-forms. Authentication is
//! mocked: login accepts any email, registration only checks that the two
//! password fields agree before handing the profile to the session store.

use leptos::*;
use leptos_router::use_navigate;

use crate::state::{use_notifications, use_session, Credentials};

/// Check a registration submission before it may touch the session store.
fn validate_registration(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}

/// Entry screen component
#[component]
pub fn AuthPage() -> impl IntoView {
    let session = use_session();
    let notify = use_notifications();
    let navigate = use_navigate();

    let (is_login, set_is_login) = create_signal(true);
    let (show_password, set_show_password) = create_signal(false);

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email_value = email.get_untracked();
        if email_value.is_empty() {
            return;
        }

        if is_login.get_untracked() {
            session.login(Credentials { email: email_value });
        } else {
            if let Err(message) =
                validate_registration(&password.get_untracked(), &confirm.get_untracked())
            {
                // Abort before any session store mutation.
                notify.show_error(message);
                return;
            }
            session.register(name.get_untracked(), email_value);
        }

        navigate("/dashboard", Default::default());
    };

    view! {
        <div class="min-h-screen flex">
            // Left side - hero panel
            <div class="hidden lg:flex lg:w-3/5 relative overflow-hidden bg-gradient-to-br from-green-900 to-green-500">
                <div class="relative z-10 flex flex-col justify-center items-center w-full p-12 text-white text-center">
                    <span class="text-7xl mb-6">"🌶️"</span>
                    <h1 class="text-5xl font-bold mb-4">"Chili Leaf Disease Prediction"</h1>
                    <p class="text-xl text-green-100 mb-8">
                        "Advanced AI-powered disease detection for healthier crops"
                    </p>
                    <div class="flex gap-8 justify-center">
                        <HeroStat value="95%" label="Accuracy" />
                        <HeroStat value="10+" label="Diseases" />
                        <HeroStat value="Fast" label="Results" />
                    </div>
                </div>
            </div>

            // Right side - form
            <div class="w-full lg:w-2/5 flex items-center justify-center p-8 bg-gray-50">
                <div class="w-full max-w-md">
                    <div class="bg-white rounded-xl shadow-lg p-8">
                        // Login/Register toggle
                        <div class="flex mb-8 bg-gray-100 rounded-lg p-1">
                            <TabButton
                                label="Login"
                                selected=Signal::derive(move || is_login.get())
                                on_click=move |_| set_is_login.set(true)
                            />
                            <TabButton
                                label="Register"
                                selected=Signal::derive(move || !is_login.get())
                                on_click=move |_| set_is_login.set(false)
                            />
                        </div>

                        <form on:submit=on_submit class="space-y-5">
                            // Full name (register only)
                            {move || {
                                if !is_login.get() {
                                    view! {
                                        <FormField label="Full Name">
                                            <input
                                                type="text"
                                                required
                                                placeholder="Enter your full name"
                                                prop:value=move || name.get()
                                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                                class="w-full px-4 py-3 border border-gray-300 rounded-lg
                                                       focus:ring-2 focus:ring-green-500 outline-none"
                                            />
                                        </FormField>
                                    }
                                    .into_view()
                                } else {
                                    view! {}.into_view()
                                }
                            }}

                            <FormField label="Email Address">
                                <input
                                    type="email"
                                    required
                                    placeholder="Enter your email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    class="w-full px-4 py-3 border border-gray-300 rounded-lg
                                           focus:ring-2 focus:ring-green-500 outline-none"
                                />
                            </FormField>

                            <FormField label="Password">
                                <div class="relative">
                                    <input
                                        type=move || if show_password.get() { "text" } else { "password" }
                                        required
                                        placeholder="Enter your password"
                                        prop:value=move || password.get()
                                        on:input=move |ev| set_password.set(event_target_value(&ev))
                                        class="w-full px-4 py-3 pr-12 border border-gray-300 rounded-lg
                                               focus:ring-2 focus:ring-green-500 outline-none"
                                    />
                                    <button
                                        type="button"
                                        on:click=move |_| set_show_password.update(|v| *v = !*v)
                                        class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 hover:text-gray-600"
                                    >
                                        {move || if show_password.get() { "🙈" } else { "👁️" }}
                                    </button>
                                </div>
                            </FormField>

                            // Confirm password (register only)
                            {move || {
                                if !is_login.get() {
                                    view! {
                                        <FormField label="Confirm Password">
                                            <input
                                                type="password"
                                                required
                                                placeholder="Confirm your password"
                                                prop:value=move || confirm.get()
                                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                                class="w-full px-4 py-3 border border-gray-300 rounded-lg
                                                       focus:ring-2 focus:ring-green-500 outline-none"
                                            />
                                        </FormField>
                                    }
                                    .into_view()
                                } else {
                                    view! {}.into_view()
                                }
                            }}

                            <button
                                type="submit"
                                class="w-full bg-gradient-to-r from-green-600 to-green-800 text-white py-3
                                       rounded-lg font-semibold shadow-lg hover:shadow-xl transition-all"
                            >
                                {move || if is_login.get() { "Login" } else { "Create Account" }}
                            </button>
                        </form>

                        <div class="mt-6 text-center text-sm text-gray-600">
                            {move || {
                                if is_login.get() {
                                    view! {
                                        <p>
                                            "Don't have an account? "
                                            <button
                                                on:click=move |_| set_is_login.set(false)
                                                class="text-green-600 font-medium hover:text-green-700"
                                            >
                                                "Register now"
                                            </button>
                                        </p>
                                    }
                                } else {
                                    view! {
                                        <p>
                                            "Already have an account? "
                                            <button
                                                on:click=move |_| set_is_login.set(true)
                                                class="text-green-600 font-medium hover:text-green-700"
                                            >
                                                "Login here"
                                            </button>
                                        </p>
                                    }
                                }
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Headline number on the hero panel
#[component]
fn HeroStat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-4xl font-bold">{value}</div>
            <div class="text-sm text-green-200">{label}</div>
        </div>
    }
}

/// Login/register tab switch button
#[component]
fn TabButton(
    label: &'static str,
    #[prop(into)] selected: Signal<bool>,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_click
            class=move || {
                let base = "flex-1 py-2 px-4 rounded-md font-medium transition-all";
                if selected.get() {
                    format!("{} bg-gradient-to-r from-green-500 to-green-700 text-white shadow-md", base)
                } else {
                    format!("{} text-gray-600 hover:text-gray-800", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// Labeled form field wrapper
#[component]
fn FormField(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-2">{label}</label>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_passwords_pass() {
        assert_eq!(validate_registration("hunter2", "hunter2"), Ok(()));
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        assert_eq!(
            validate_registration("hunter2", "hunter3"),
            Err("Passwords do not match")
        );
    }

    #[test]
    fn empty_password_is_rejected() {
        assert_eq!(
            validate_registration("", ""),
            Err("Password is required")
        );
    }
}
