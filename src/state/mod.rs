//! State Management
//!
//! Session store and toast notification state shared across the app.

pub mod notify;
pub mod session;

pub use notify::{provide_notifications, use_notifications, Notifications};
pub use session::{provide_session, use_session, Credentials, SessionState, User};
