//! Stub API Client
//!
//! Async functions shaped like calls to a real disease-detection backend.
//! `classify_image` waits out a fixed timer and then returns the one canned
//! prediction regardless of input; the history endpoints serve a static
//! record set. No operation can currently fail — the [`ApiError`] variants
//! exist so the failure taxonomy is already named for whoever wires up the
//! real services.

use chrono::{Datelike, NaiveDate};
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Simulated inference latency in milliseconds.
pub const ANALYSIS_DELAY_MS: u32 = 2_000;

/// Failure taxonomy for the backend boundary. The stubs never return these;
/// a real implementation maps transport, inference, and input problems onto
/// the matching variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiError {
    Network(String),
    Inference(String),
    Validation(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Inference(msg) => write!(f, "Inference failed: {}", msg),
            ApiError::Validation(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

/// Disease severity reported with a prediction and in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Badge classes for severity pills, shared by the catalog cards and the
    /// prediction result panel.
    pub fn badge_class(self) -> &'static str {
        match self {
            Severity::High => "bg-red-100 text-red-800 border-red-300",
            Severity::Medium => "bg-yellow-100 text-yellow-800 border-yellow-300",
            Severity::Low => "bg-green-100 text-green-800 border-green-300",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        };
        f.write_str(label)
    }
}

/// Result of a leaf image classification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub disease: String,
    pub confidence: f64,
    pub severity: Severity,
    pub recommendation: String,
}

impl Prediction {
    /// The single payload the mock classifier returns for every image.
    pub fn canned() -> Self {
        Self {
            disease: "Bacterial Spot".to_string(),
            confidence: 92.5,
            severity: Severity::Medium,
            recommendation: "Apply copper-based fungicide and remove affected leaves"
                .to_string(),
        }
    }
}

/// Classify a leaf image.
///
/// Contract for the real service: `POST image bytes -> Prediction |
/// ApiError::{Network, Inference, Validation}`. The stub ignores the payload,
/// sleeps for [`ANALYSIS_DELAY_MS`], and returns [`Prediction::canned`].
pub async fn classify_image(image: &[u8]) -> Result<Prediction, ApiError> {
    let _ = image;
    TimeoutFuture::new(ANALYSIS_DELAY_MS).await;
    Ok(Prediction::canned())
}

/// One past prediction, as the history service would report it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: u32,
    pub date: NaiveDate,
    pub disease: String,
    pub confidence: f64,
    pub healthy: bool,
}

impl HistoryRecord {
    pub fn status_label(&self) -> &'static str {
        if self.healthy {
            "Healthy"
        } else {
            "Detected"
        }
    }
}

/// Aggregates shown on the dashboard and above the history table. Derived
/// from the history records so the two pages always agree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_scans: u32,
    pub diseases_detected: u32,
    pub healthy_scans: u32,
    pub this_month: u32,
    pub average_confidence: f64,
}

/// Fetch all past predictions, newest first.
pub async fn fetch_history() -> Result<Vec<HistoryRecord>, ApiError> {
    Ok(history_records())
}

/// Fetch the dashboard aggregates.
pub async fn fetch_dashboard_stats() -> Result<DashboardStats, ApiError> {
    Ok(compute_stats(&history_records()))
}

/// Aggregate a record set. "This month" is the calendar month of the newest
/// record, so the mock numbers stay stable as wall-clock time moves on.
pub fn compute_stats(records: &[HistoryRecord]) -> DashboardStats {
    let total_scans = records.len() as u32;
    let healthy_scans = records.iter().filter(|r| r.healthy).count() as u32;
    let diseases_detected = total_scans - healthy_scans;

    let this_month = match records.iter().map(|r| r.date).max() {
        Some(latest) => records
            .iter()
            .filter(|r| r.date.year() == latest.year() && r.date.month() == latest.month())
            .count() as u32,
        None => 0,
    };

    let average_confidence = if records.is_empty() {
        0.0
    } else {
        let sum: f64 = records.iter().map(|r| r.confidence).sum();
        (sum / records.len() as f64 * 10.0).round() / 10.0
    };

    DashboardStats {
        total_scans,
        diseases_detected,
        healthy_scans,
        this_month,
        average_confidence,
    }
}

/// The static record set backing the history and dashboard pages.
fn history_records() -> Vec<HistoryRecord> {
    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, d).unwrap()
    }

    vec![
        HistoryRecord {
            id: 1,
            date: day(21),
            disease: "Bacterial Spot".to_string(),
            confidence: 92.5,
            healthy: false,
        },
        HistoryRecord {
            id: 2,
            date: day(20),
            disease: "Healthy Leaf".to_string(),
            confidence: 98.2,
            healthy: true,
        },
        HistoryRecord {
            id: 3,
            date: day(19),
            disease: "Leaf Curl".to_string(),
            confidence: 87.3,
            healthy: false,
        },
        HistoryRecord {
            id: 4,
            date: day(18),
            disease: "Powdery Mildew".to_string(),
            confidence: 91.8,
            healthy: false,
        },
        HistoryRecord {
            id: 5,
            date: day(17),
            disease: "Healthy Leaf".to_string(),
            confidence: 96.5,
            healthy: true,
        },
        HistoryRecord {
            id: 6,
            date: day(16),
            disease: "Anthracnose".to_string(),
            confidence: 89.2,
            healthy: false,
        },
        HistoryRecord {
            id: 7,
            date: day(15),
            disease: "Healthy Leaf".to_string(),
            confidence: 97.8,
            healthy: true,
        },
        HistoryRecord {
            id: 8,
            date: day(14),
            disease: "Mosaic Virus".to_string(),
            confidence: 93.1,
            healthy: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_prediction_is_fixed() {
        let prediction = Prediction::canned();
        assert_eq!(prediction.disease, "Bacterial Spot");
        assert_eq!(prediction.confidence, 92.5);
        assert_eq!(prediction.severity, Severity::Medium);
        assert_eq!(
            prediction.recommendation,
            "Apply copper-based fungicide and remove affected leaves"
        );
    }

    #[test]
    fn stats_match_the_record_set() {
        let stats = compute_stats(&history_records());
        assert_eq!(stats.total_scans, 8);
        assert_eq!(stats.diseases_detected, 5);
        assert_eq!(stats.healthy_scans, 3);
        // All mock records fall in November 2024.
        assert_eq!(stats.this_month, 8);
        assert_eq!(stats.average_confidence, 93.3);
    }

    #[test]
    fn stats_on_empty_records() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_scans, 0);
        assert_eq!(stats.this_month, 0);
        assert_eq!(stats.average_confidence, 0.0);
    }

    #[test]
    fn severity_badges_map_to_colors() {
        assert!(Severity::High.badge_class().contains("red"));
        assert!(Severity::Medium.badge_class().contains("yellow"));
        assert!(Severity::Low.badge_class().contains("green"));
        assert_eq!(Severity::Medium.to_string(), "Medium");
    }

    #[test]
    fn records_are_newest_first() {
        let records = history_records();
        assert!(records.windows(2).all(|w| w[0].date > w[1].date));
        assert_eq!(records[0].status_label(), "Detected");
        assert_eq!(records[1].status_label(), "Healthy");
    }
}
