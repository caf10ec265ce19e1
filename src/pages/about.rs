//! About Page
//!
//! Static project overview.

use leptos::*;

const TECH_STACK: [&str; 8] = [
    "Rust",
    "Leptos",
    "WebAssembly",
    "Tailwind CSS",
    "Trunk",
    "Machine Learning",
    "TensorFlow",
    "REST API",
];

/// About page component
#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="max-w-5xl mx-auto">
            <div class="text-center mb-12">
                <div class="text-6xl mb-4">"🌶️"</div>
                <h1 class="text-4xl font-bold text-gray-800 mb-3">"About This Project"</h1>
                <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                    "AI-powered solution for early detection and management of chili leaf diseases"
                </p>
            </div>

            // Project overview
            <div class="bg-white rounded-xl shadow-lg p-8 mb-8 border border-gray-200">
                <h2 class="text-2xl font-bold text-gray-800 mb-4">"Project Overview"</h2>
                <p class="text-gray-700 leading-relaxed mb-4">
                    "The Chili Leaf Disease Prediction System helps farmers and agricultural \
                     professionals identify diseases in chili plants quickly and accurately. \
                     The dashboard analyzes leaf images and returns disease predictions with \
                     treatment recommendations."
                </p>
                <p class="text-gray-700 leading-relaxed">
                    "This build is a research prototype: the classifier, accounts, and history \
                     are simulated client-side so the workflows can be evaluated before the \
                     inference and persistence services are wired in."
                </p>
            </div>

            // Feature cards
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                <FeatureCard
                    icon="🎯"
                    title="High Accuracy"
                    description="Machine learning models trained on thousands of images for reliable predictions"
                />
                <FeatureCard
                    icon="💡"
                    title="Smart Analysis"
                    description="Disease detection with confidence scores and severity assessment"
                />
                <FeatureCard
                    icon="🏅"
                    title="Research-Based"
                    description="Built on scientific research and validated agricultural practices"
                />
            </div>

            // Goals
            <div class="bg-gradient-to-br from-green-50 to-green-100 rounded-xl p-8 mb-8 border border-green-200">
                <h2 class="text-2xl font-bold text-gray-800 mb-4">"Research Purpose"</h2>
                <p class="text-gray-700 leading-relaxed mb-4">
                    "The project aims to bridge the gap between advanced AI technology and \
                     practical agricultural applications, making disease detection available \
                     to farmers, agronomists, and agricultural students."
                </p>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mt-6">
                    <GoalList
                        title="Primary Goals"
                        items=[
                            "Early disease detection and prevention",
                            "Reduce crop losses through timely intervention",
                            "Provide actionable insights to farmers",
                        ]
                    />
                    <GoalList
                        title="Technical Objectives"
                        items=[
                            "Achieve 95%+ prediction accuracy",
                            "Real-time image processing",
                            "User-friendly interface design",
                        ]
                    />
                </div>
            </div>

            // Tech stack
            <div class="bg-gray-800 rounded-xl p-8 text-white">
                <h2 class="text-2xl font-bold mb-4">"Technology Stack"</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {TECH_STACK
                        .into_iter()
                        .map(|tech| view! {
                            <div class="bg-gray-700 rounded-lg p-3 text-center font-medium text-sm
                                        hover:bg-gray-600 transition-colors">
                                {tech}
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 border border-gray-200">
            <div class="w-12 h-12 bg-gradient-to-br from-green-500 to-green-600 rounded-lg
                        flex items-center justify-center mb-4 text-xl">
                {icon}
            </div>
            <h3 class="text-lg font-bold text-gray-800 mb-2">{title}</h3>
            <p class="text-gray-600 text-sm">{description}</p>
        </div>
    }
}

#[component]
fn GoalList(title: &'static str, items: [&'static str; 3]) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg p-4 shadow-sm">
            <h3 class="font-semibold text-gray-800 mb-2">{title}</h3>
            <ul class="space-y-2 text-sm text-gray-700">
                {items
                    .into_iter()
                    .map(|item| view! { <li>"• " {item}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
