//! Pages
//!
//! Top-level page components for each route.

pub mod about;
pub mod auth;
pub mod dashboard;
pub mod disease_info;
pub mod history;
pub mod predict;
pub mod profile;

pub use about::About;
pub use auth::AuthPage;
pub use dashboard::Dashboard;
pub use disease_info::DiseaseInfo;
pub use history::History;
pub use predict::PredictDisease;
pub use profile::Profile;
