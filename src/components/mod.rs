//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod disease_card;
pub mod sidebar;
pub mod toast;

pub use disease_card::DiseaseCard;
pub use sidebar::Sidebar;
pub use toast::Toast;
