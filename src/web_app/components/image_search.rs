// web_app/components/image_search.rs - Search by image
//
// - ImageSearchModal: pick or drop an image and send it for analysis
// - ImageSearchResults: detected category with a link into the listing

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::common::{Button, Loader, ModalWrapper, SecondaryButton};
use crate::web_app::actions::error_message;
use crate::web_app::api::{ImageAnalyzer, ImageUpload};
use crate::web_app::image_search::{superseded_preview, validate_image, SUPPORTED_FORMATS};
use crate::web_app::model::ImageAnalysis;
use crate::web_app::server_fns::analyzer_endpoint;

const IMAGE_ERROR_ALERT: &str = "Error processing image. Please try again.";

/// An accepted image plus a displayable preview URL
#[derive(Clone, Debug)]
pub struct SelectedImage {
    pub upload: ImageUpload,
    pub preview: Option<String>,
}

/// What the results view needs once analysis succeeds
#[derive(Clone, Debug)]
pub struct ImageSearchOutcome {
    pub analysis: ImageAnalysis,
    pub preview: Option<String>,
}

fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        tracing::warn!("alert failed: {:?}", e);
    }
}

/// Give an object URL created for a preview back to the browser
pub(crate) fn release_preview(url: Option<String>) {
    let Some(url) = url else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = web_sys::Url::revoke_object_url(&url) {
            tracing::warn!("Could not revoke preview {}: {:?}", url, e);
        }
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = url;
}

/// Swap the selected image, releasing the preview it no longer shows
fn replace_selected(selected: RwSignal<Option<SelectedImage>>, next: Option<SelectedImage>) {
    let current = selected.with_untracked(|s| s.as_ref().and_then(|i| i.preview.clone()));
    let next_preview = next.as_ref().and_then(|i| i.preview.as_deref());
    release_preview(superseded_preview(current.as_deref(), next_preview));
    selected.set(next);
}

#[cfg(feature = "hydrate")]
async fn read_file(file: &web_sys::File) -> Result<ImageUpload, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    Ok(ImageUpload {
        file_name: file.name(),
        mime: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

/// Validate and read a picked file. Non-images and oversized files are ignored.
fn accept_file(file: web_sys::File, selected: RwSignal<Option<SelectedImage>>) {
    if let Err(rejection) = validate_image(&file.type_(), file.size() as u64) {
        tracing::warn!("Ignoring {}: {}", file.name(), rejection);
        return;
    }

    #[cfg(feature = "hydrate")]
    spawn_local(async move {
        match read_file(&file).await {
            Ok(upload) => {
                let preview = web_sys::Url::create_object_url_with_blob(&file).ok();
                replace_selected(selected, Some(SelectedImage { upload, preview }));
            }
            Err(e) => {
                tracing::error!("Could not read {}: {}", file.name(), e);
                alert(IMAGE_ERROR_ALERT);
            }
        }
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = selected;
}

async fn upload_image(upload: ImageUpload) -> Result<ImageAnalysis, String> {
    let endpoint = analyzer_endpoint().await.map_err(|e| error_message(&e))?;
    ImageAnalyzer::new(reqwest::Client::new(), endpoint)
        .analyze(upload)
        .await
        .map_err(|e| e.to_string())
}

/// Upload modal. Closing is blocked while an upload is in flight.
#[component]
pub fn ImageSearchModal(
    on_close: Callback<()>,
    on_results: Callback<ImageSearchOutcome>,
) -> impl IntoView {
    let selected = RwSignal::new(None::<SelectedImage>);
    let processing = RwSignal::new(false);
    let drag_active = RwSignal::new(false);

    let close = Callback::new(move |()| {
        replace_selected(selected, None);
        drag_active.set(false);
        on_close.run(());
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            accept_file(file, selected);
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            accept_file(file, selected);
        }
    };

    let process = Callback::new(move |()| {
        let Some(image) = selected.get_untracked() else {
            return;
        };
        processing.set(true);
        spawn_local(async move {
            let result = upload_image(image.upload).await;
            processing.set(false);
            match result {
                Ok(analysis) => {
                    tracing::info!("Image analysis result: {:?}", analysis);
                    // The preview now belongs to the results view
                    selected.set(None);
                    on_results.run(ImageSearchOutcome {
                        analysis,
                        preview: image.preview,
                    });
                }
                Err(e) => {
                    tracing::error!("Error processing image: {}", e);
                    alert(IMAGE_ERROR_ALERT);
                }
            }
        });
    });

    view! {
        <ModalWrapper on_close=close title="Search by Image" locked=processing>
            {move || match selected.get() {
                None => view! {
                    <label
                        class=move || {
                            if drag_active.get() {
                                "flex flex-col items-center justify-center gap-3 p-10 border-2 border-dashed \
                                 border-purple-500 bg-purple-50 rounded-xl cursor-pointer"
                            } else {
                                "flex flex-col items-center justify-center gap-3 p-10 border-2 border-dashed \
                                 border-slate-300 hover:border-purple-400 rounded-xl cursor-pointer"
                            }
                        }
                        on:dragenter=move |ev: leptos::ev::DragEvent| { ev.prevent_default(); drag_active.set(true); }
                        on:dragover=move |ev: leptos::ev::DragEvent| { ev.prevent_default(); drag_active.set(true); }
                        on:dragleave=move |_| drag_active.set(false)
                        on:drop=on_drop
                    >
                        <span class="text-4xl">"📷"</span>
                        <span class="font-semibold text-slate-700">"Drop an image here or click to browse"</span>
                        <span class="text-xs text-slate-400">"Supports: " {SUPPORTED_FORMATS} " (max 10MB)"</span>
                        <input type="file" accept="image/*" class="hidden" on:change=on_file_change />
                    </label>
                }
                .into_any(),
                Some(image) => view! {
                    <div class="space-y-4">
                        {image.preview.map(|src| view! {
                            <img src=src alt="Selected" class="w-full h-64 object-contain rounded-xl border border-slate-200" />
                        })}
                        <p class="text-sm text-slate-500 text-center">{image.upload.file_name}</p>
                        <Show
                            when=move || processing.get()
                            fallback=move || view! {
                                <div class="flex gap-3 justify-center">
                                    <Button on_click=process>"Search Products"</Button>
                                    <SecondaryButton on_click=Callback::new(move |()| replace_selected(selected, None))>
                                        "Remove"
                                    </SecondaryButton>
                                </div>
                            }
                        >
                            <Loader message="Analyzing image..." />
                        </Show>
                    </div>
                }
                .into_any(),
            }}
        </ModalWrapper>
    }
}

/// Detected category, confidence and the raw analyzer response
#[component]
pub fn ImageSearchResults(
    outcome: ImageSearchOutcome,
    on_close: Callback<()>,
    on_new_search: Callback<()>,
) -> impl IntoView {
    let navigate = use_navigate();
    let analysis = outcome.analysis;
    let category = analysis.display_category();
    let browse_href = analysis.browse_href();
    let confidence = analysis.confidence_percent();
    let raw = analysis.raw_json();

    let browse = move |_| {
        if let Some(href) = browse_href.as_deref() {
            on_close.run(());
            navigate(href, NavigateOptions::default());
        }
    };

    let prompt = match &category {
        Some(c) => format!("We detected \"{}\" in your image. Click \"Browse Category\" to explore this category.", c),
        None => "Click \"Browse Category\" to explore products in the detected category".to_string(),
    };

    view! {
        <ModalWrapper on_close=on_close title="Image Search Results">
            <div class="flex flex-col lg:flex-row gap-6">
                <div class="lg:w-1/3 space-y-4">
                    {outcome.preview.map(|src| view! {
                        <div>
                            <h3 class="font-semibold text-slate-800 mb-3">"Your Image"</h3>
                            <img src=src alt="Search" class="w-full h-48 object-cover rounded-xl border-2 border-slate-200" />
                        </div>
                    })}

                    <h3 class="font-semibold text-slate-800">"Analysis Results"</h3>
                    <div class="bg-slate-50 rounded-lg p-4 space-y-3">
                        {category.clone().map(|c| view! {
                            <div>
                                <h4 class="font-medium text-slate-700 text-sm mb-2">"Detected Category:"</h4>
                                <span class="bg-purple-100 text-purple-800 px-3 py-2 rounded-full text-sm font-medium">{c}</span>
                            </div>
                        })}
                        {confidence.map(|pct| view! {
                            <div>
                                <h4 class="font-medium text-slate-700 text-sm mb-2">"Confidence:"</h4>
                                <span class="bg-green-100 text-green-800 px-2 py-1 rounded text-xs">{pct} "%"</span>
                            </div>
                        })}
                        <details class="text-xs text-slate-500 bg-slate-100 p-2 rounded">
                            <summary class="cursor-pointer">"Raw API Response"</summary>
                            <pre class="mt-2 whitespace-pre-wrap">{raw}</pre>
                        </details>
                    </div>

                    <div class="space-y-2">
                        <button
                            type="button"
                            class="w-full bg-gradient-to-r from-green-600 to-emerald-600 text-white py-2 px-4 \
                                   rounded-lg font-medium hover:from-green-700 hover:to-emerald-700 transition-all"
                            on:click=browse
                        >
                            "Browse Category"
                        </button>
                        <SecondaryButton on_click=on_new_search>"New Search"</SecondaryButton>
                    </div>
                </div>

                <div class="lg:w-2/3 flex flex-col items-center justify-center py-12 text-center">
                    <h4 class="text-lg font-semibold text-slate-600 mb-2">
                        "Ready to Browse " {category.unwrap_or_else(|| "Category".to_string())}
                    </h4>
                    <p class="text-slate-500 max-w-sm">{prompt}</p>
                </div>
            </div>
        </ModalWrapper>
    }
}
