//! Session Store
//!
//! Single source of truth for "who is logged in". The current identity lives
//! in a reactive signal for the lifetime of the page session; there is no
//! persistence, so a reload starts over unauthenticated.

use leptos::*;
use serde::{Deserialize, Serialize};

/// The authenticated user for this page session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Login form payload. No password field: the mock backend never checks one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
}

/// Session store provided to the whole component tree.
///
/// The only writers are [`login`](Self::login), [`register`](Self::register)
/// and [`logout`](Self::logout), so `is_authenticated()` is always consistent
/// with `current_user()` by construction.
#[derive(Clone, Copy)]
pub struct SessionState {
    current_user: RwSignal<Option<User>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_user: create_rw_signal(None),
        }
    }

    /// Mock login: any submitted email is accepted without verification and
    /// the display name is derived from the email's local part. This is
    /// intentional prototype behavior, not a missing check — a real identity
    /// backend slots in at the `api` boundary later.
    pub fn login(&self, credentials: Credentials) {
        let name = local_part(&credentials.email).to_string();
        self.current_user.set(Some(User {
            name,
            email: credentials.email,
        }));
    }

    /// Mock registration: unconditionally becomes the current user. The
    /// password collected by the form never reaches the store.
    pub fn register(&self, name: String, email: String) {
        self.current_user.set(Some(User { name, email }));
    }

    /// Clears the session. Idempotent.
    pub fn logout(&self) {
        self.current_user.set(None);
    }

    pub fn current_user(&self) -> Option<User> {
        self.current_user.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.with(|user| user.is_some())
    }

    /// Route guard decision for protected views: `Some(path)` means the
    /// requested view must not render and the router should go to `path`
    /// (the entry screen) instead. Reads the session reactively, so a
    /// logout re-runs any view that consulted the guard.
    pub fn guard_redirect(&self) -> Option<&'static str> {
        if self.is_authenticated() {
            None
        } else {
            Some("/")
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything before the first `@`, or the whole string if there is none.
pub fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Provide the session store to the component tree.
pub fn provide_session() {
    provide_context(SessionState::new());
}

/// Fetch the session store from context.
pub fn use_session() -> SessionState {
    use_context::<SessionState>().expect("SessionState not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_runtime(test: impl FnOnce()) {
        let runtime = create_runtime();
        test();
        runtime.dispose();
    }

    #[test]
    fn starts_unauthenticated() {
        with_runtime(|| {
            let session = SessionState::new();
            assert!(!session.is_authenticated());
            assert_eq!(session.current_user(), None);
        });
    }

    #[test]
    fn login_derives_name_from_email() {
        with_runtime(|| {
            let session = SessionState::new();
            session.login(Credentials {
                email: "farmer@example.com".to_string(),
            });

            assert!(session.is_authenticated());
            let user = session.current_user().unwrap();
            assert_eq!(user.name, "farmer");
            assert_eq!(user.email, "farmer@example.com");
        });
    }

    #[test]
    fn register_sets_user_verbatim() {
        with_runtime(|| {
            let session = SessionState::new();
            session.register("Nimal Perera".to_string(), "nimal@farm.lk".to_string());

            let user = session.current_user().unwrap();
            assert_eq!(user.name, "Nimal Perera");
            assert_eq!(user.email, "nimal@farm.lk");
        });
    }

    #[test]
    fn logout_clears_session_and_is_idempotent() {
        with_runtime(|| {
            let session = SessionState::new();
            session.login(Credentials {
                email: "farmer@example.com".to_string(),
            });

            session.logout();
            assert!(!session.is_authenticated());
            assert_eq!(session.current_user(), None);

            // A second logout is a no-op.
            session.logout();
            assert!(!session.is_authenticated());
        });
    }

    #[test]
    fn guard_redirects_only_while_unauthenticated() {
        with_runtime(|| {
            let session = SessionState::new();
            assert_eq!(session.guard_redirect(), Some("/"));

            session.login(Credentials {
                email: "farmer@example.com".to_string(),
            });
            assert_eq!(session.guard_redirect(), None);

            session.logout();
            assert_eq!(session.guard_redirect(), Some("/"));
        });
    }

    #[test]
    fn local_part_handles_missing_at_sign() {
        assert_eq!(local_part("farmer@example.com"), "farmer");
        assert_eq!(local_part("no-at-sign"), "no-at-sign");
        assert_eq!(local_part(""), "");
    }
}
