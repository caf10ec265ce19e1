//! Disease Info Page
//!
//! Static catalog of common chili leaf diseases and their symptoms.

use leptos::*;

use crate::api::Severity;
use crate::components::DiseaseCard;

/// One catalog entry.
pub struct Disease {
    pub name: &'static str,
    pub symptoms: &'static str,
    pub severity: Severity,
}

/// The diseases this system is being trained to recognize.
pub const DISEASE_CATALOG: [Disease; 8] = [
    Disease {
        name: "Bacterial Spot",
        symptoms: "Small, dark spots on leaves that may have a yellow halo. \
                   Spots can merge and cause leaf drop.",
        severity: Severity::High,
    },
    Disease {
        name: "Leaf Curl",
        symptoms: "Leaves curl upward or downward, often becoming distorted \
                   and stunted in growth.",
        severity: Severity::Medium,
    },
    Disease {
        name: "Powdery Mildew",
        symptoms: "White powdery coating on leaves, stems, and fruits. Leaves \
                   may yellow and drop.",
        severity: Severity::Medium,
    },
    Disease {
        name: "Anthracnose",
        symptoms: "Circular spots with dark edges on fruits and leaves. Can \
                   cause fruit rot.",
        severity: Severity::High,
    },
    Disease {
        name: "Mosaic Virus",
        symptoms: "Mottled yellow and green patterns on leaves. Stunted growth \
                   and distorted leaves.",
        severity: Severity::High,
    },
    Disease {
        name: "Root Rot",
        symptoms: "Wilting despite adequate water, yellowing leaves, and soft, \
                   brown roots.",
        severity: Severity::High,
    },
    Disease {
        name: "Cercospora Leaf Spot",
        symptoms: "Circular gray spots with dark borders. Can cause severe \
                   defoliation.",
        severity: Severity::Medium,
    },
    Disease {
        name: "Aphid Infestation",
        symptoms: "Small insects on undersides of leaves. Causes curling and \
                   yellowing of leaves.",
        severity: Severity::Low,
    },
];

/// Disease catalog page component
#[component]
pub fn DiseaseInfo() -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto">
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-800 mb-2">"Chili Leaf Diseases"</h1>
                <p class="text-gray-600">
                    "Learn about common diseases affecting chili plants and their symptoms"
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {DISEASE_CATALOG
                    .iter()
                    .map(|disease| view! {
                        <DiseaseCard
                            name=disease.name
                            symptoms=disease.symptoms
                            severity=disease.severity
                        />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_eight_diseases() {
        assert_eq!(DISEASE_CATALOG.len(), 8);
        assert!(DISEASE_CATALOG.iter().any(|d| d.name == "Bacterial Spot"));
    }

    #[test]
    fn catalog_names_are_unique() {
        for (i, a) in DISEASE_CATALOG.iter().enumerate() {
            for b in &DISEASE_CATALOG[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
