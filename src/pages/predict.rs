//! Predict Page
//!
//! Leaf image upload with preview and the simulated disease prediction.
//!
//! The analysis is a one-shot timer behind the `api` stub. Each run carries a
//! generation token: clearing the image or leaving the page bumps the token,
//! so a completion that arrives afterwards is dropped instead of writing into
//! a view that no longer wants it.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::api::Prediction;
use crate::state::use_notifications;

/// Read the chosen file as a data URL and stage it for analysis. Any result
/// from a previous image is discarded on select.
fn load_preview(
    file: web_sys::File,
    set_file_name: WriteSignal<Option<String>>,
    set_preview: WriteSignal<Option<String>>,
    set_prediction: WriteSignal<Option<Prediction>>,
) {
    set_file_name.set(Some(file.name()));
    set_prediction.set(None);

    let Ok(reader) = web_sys::FileReader::new() else {
        return;
    };

    let onload = {
        let reader = reader.clone();
        wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Ok(result) = reader.result() {
                if let Some(data_url) = result.as_string() {
                    let _ = set_preview.try_set(Some(data_url));
                }
            }
        }) as Box<dyn FnMut(_)>)
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let _ = reader.read_as_data_url(&file);
}

/// Predict page component
#[component]
pub fn PredictDisease() -> impl IntoView {
    let notify = use_notifications();

    let (file_name, set_file_name) = create_signal(None::<String>);
    let (preview, set_preview) = create_signal(None::<String>);
    let (prediction, set_prediction) = create_signal(None::<Prediction>);
    let (analyzing, set_analyzing) = create_signal(false);

    // Generation token for in-flight analyses; see the module docs.
    let run_id = create_rw_signal(0u64);

    let on_select = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            load_preview(file, set_file_name, set_preview, set_prediction);
        }
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            if file.type_().starts_with("image/") {
                load_preview(file, set_file_name, set_preview, set_prediction);
            }
        }
    };

    let on_predict = move |_| {
        let Some(data_url) = preview.get_untracked() else {
            return;
        };

        let id = run_id.get_untracked() + 1;
        run_id.set(id);
        set_analyzing.set(true);

        spawn_local(async move {
            let outcome = api::classify_image(data_url.as_bytes()).await;

            // Stale run: the image was cleared or the view was left while
            // the analysis timer was pending.
            if run_id.try_get_untracked() != Some(id) {
                return;
            }

            match outcome {
                Ok(result) => set_prediction.set(Some(result)),
                Err(e) => notify.show_error(&e.to_string()),
            }
            set_analyzing.set(false);
        });
    };

    // One reset for file, preview, result, and any pending analysis.
    let clear_image = move |_| {
        run_id.update(|id| *id += 1);
        set_file_name.set(None);
        set_preview.set(None);
        set_prediction.set(None);
        set_analyzing.set(false);
    };

    view! {
        <div class="max-w-4xl mx-auto">
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-800 mb-2">"Predict Chili Leaf Disease"</h1>
                <p class="text-gray-600">
                    "Upload an image of a chili leaf to detect potential diseases"
                </p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                // Upload section
                <div class="bg-white rounded-xl shadow-lg p-6 border border-gray-200">
                    <h2 class="text-xl font-bold text-gray-800 mb-4">"Upload Image"</h2>

                    {move || {
                        match preview.get() {
                            None => view! {
                                <div
                                    on:drop=on_drop
                                    on:dragover=move |ev: web_sys::DragEvent| ev.prevent_default()
                                    class="border-2 border-dashed border-gray-300 rounded-lg p-12
                                           text-center hover:border-green-500 transition-colors"
                                >
                                    <label class="cursor-pointer">
                                        <input
                                            type="file"
                                            accept="image/*"
                                            class="hidden"
                                            on:change=on_select
                                        />
                                        <div class="text-5xl mb-4">"📤"</div>
                                        <p class="text-gray-600 mb-2">
                                            "Drop your image here or click to browse"
                                        </p>
                                        <p class="text-sm text-gray-500">"Supports: JPG, PNG, JPEG"</p>
                                    </label>
                                </div>
                            }
                            .into_view(),
                            Some(data_url) => view! {
                                <div class="relative">
                                    <img
                                        src=data_url
                                        alt=move || file_name.get().unwrap_or_default()
                                        class="w-full rounded-lg shadow-md"
                                    />
                                    <button
                                        on:click=clear_image
                                        class="absolute top-2 right-2 px-3 py-1 bg-red-500 text-white
                                               rounded-full hover:bg-red-600 transition-colors"
                                    >
                                        "✕"
                                    </button>
                                </div>
                            }
                            .into_view(),
                        }
                    }}

                    // Predict button: visible once an image is staged, until a result lands
                    {move || {
                        if preview.get().is_some() && prediction.get().is_none() {
                            view! {
                                <button
                                    on:click=on_predict
                                    disabled=move || analyzing.get()
                                    class="w-full mt-6 bg-gradient-to-r from-green-600 to-green-700
                                           text-white py-3 rounded-lg font-semibold shadow-lg
                                           hover:shadow-xl transition-all disabled:opacity-50
                                           disabled:cursor-not-allowed"
                                >
                                    {move || if analyzing.get() { "Analyzing..." } else { "Predict Disease" }}
                                </button>
                            }
                            .into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }}
                </div>

                // Result section
                <div class="bg-white rounded-xl shadow-lg p-6 border border-gray-200">
                    <h2 class="text-xl font-bold text-gray-800 mb-4">"Prediction Result"</h2>

                    {move || {
                        match prediction.get() {
                            None => view! {
                                <div class="flex flex-col items-center justify-center h-64 text-gray-400">
                                    <div class="text-6xl mb-4">"🖼️"</div>
                                    <p>"Upload an image to see prediction results"</p>
                                </div>
                            }
                            .into_view(),
                            Some(result) => view! {
                                <ResultPanel result=result on_clear=clear_image />
                            }
                            .into_view(),
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

/// Prediction result details
#[component]
fn ResultPanel(
    result: Prediction,
    on_clear: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div class="bg-gradient-to-r from-green-50 to-green-100 p-4 rounded-lg border border-green-200">
                <p class="text-sm text-gray-600 mb-1">"Detected Disease"</p>
                <p class="text-2xl font-bold text-green-700">{result.disease.clone()}</p>
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div class="bg-gray-50 p-4 rounded-lg">
                    <p class="text-sm text-gray-600 mb-1">"Confidence"</p>
                    <p class="text-xl font-bold text-gray-800">
                        {format!("{}%", result.confidence)}
                    </p>
                </div>
                <div class="bg-gray-50 p-4 rounded-lg">
                    <p class="text-sm text-gray-600 mb-1">"Severity"</p>
                    <p class="text-xl font-bold text-gray-800">{result.severity.to_string()}</p>
                </div>
            </div>

            <div class="bg-yellow-50 border border-yellow-200 rounded-lg p-4">
                <div class="flex items-start gap-3">
                    <span class="text-yellow-600">"⚠️"</span>
                    <div>
                        <p class="font-medium text-yellow-800 mb-1">"Recommendation"</p>
                        <p class="text-sm text-yellow-700">{result.recommendation.clone()}</p>
                    </div>
                </div>
            </div>

            <button
                on:click=on_clear
                class="w-full bg-gray-600 text-white py-2 rounded-lg font-medium
                       hover:bg-gray-700 transition-colors"
            >
                "Analyze Another Image"
            </button>
        </div>
    }
}
