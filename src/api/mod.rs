//! Stub API Boundary
//!
//! Stand-in for the future inference and persistence services. Everything
//! here returns canned in-memory data; the function signatures are the
//! contracts a real backend will have to honor.

pub mod client;

pub use client::{
    classify_image, compute_stats, fetch_dashboard_stats, fetch_history, ApiError, DashboardStats,
    HistoryRecord, Prediction, Severity, ANALYSIS_DELAY_MS,
};
