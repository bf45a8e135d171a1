// web_app/components/comparison.rs - Side-by-side comparison of two picked products

use leptos::prelude::*;

use super::common::{Button, Loader, SecondaryButton};
use crate::web_app::actions::error_message;
use crate::web_app::compare::CompareSelection;
use crate::web_app::model::ProductComparison;
use crate::web_app::server_fns::compare_products;

/// Tray under the filter bar. Appears once something is picked.
#[component]
pub fn ComparePanel(selection: RwSignal<CompareSelection>) -> impl IntoView {
    let comparison = Action::new(move |pair: &(String, String)| {
        let (first, second) = pair.clone();
        async move { compare_products(first, second).await }
    });
    let pending = comparison.pending();
    let result = comparison.value();

    let ready = move || selection.with(|s| s.pair().is_some());

    let on_compare = Callback::new(move |()| {
        if let Some(pair) = selection.with_untracked(|s| s.pair()) {
            comparison.dispatch(pair);
        }
    });
    let on_clear = Callback::new(move |()| {
        selection.update(|s| s.clear());
        result.set(None);
    });

    view! {
        <Show when=move || selection.with(|s| !s.is_empty())>
            <section class="bg-white rounded-2xl shadow-sm p-5 mb-8 border border-purple-100">
                <div class="flex flex-wrap items-center justify-between gap-4">
                    <div class="flex flex-wrap items-center gap-2 text-sm">
                        <span class="font-semibold text-slate-700">"Compare:"</span>
                        {move || selection.with(|s| {
                            s.products()
                                .iter()
                                .map(|p| view! {
                                    <span class="px-2 py-1 bg-purple-50 text-purple-700 rounded-lg">
                                        {p.product_name.clone()}
                                    </span>
                                })
                                .collect_view()
                        })}
                        <span class="text-slate-400">
                            {move || format!("{}/{}", selection.with(|s| s.len()), CompareSelection::CAPACITY)}
                        </span>
                    </div>
                    <div class="flex gap-2">
                        <Button
                            on_click=on_compare
                            disabled=Signal::derive(move || !ready() || pending.get())
                        >
                            "Compare Products"
                        </Button>
                        <SecondaryButton on_click=on_clear>"Clear"</SecondaryButton>
                    </div>
                </div>

                <Show when=move || pending.get()>
                    <Loader message="Comparing products..." />
                </Show>

                {move || result.get().map(|outcome| match outcome {
                    Ok(comparison) => view! { <ComparisonResult comparison=comparison /> }.into_any(),
                    Err(e) => view! {
                        <p class="mt-4 text-sm text-red-600">{error_message(&e)}</p>
                    }
                    .into_any(),
                })}
            </section>
        </Show>
    }
}

#[component]
fn ComparisonResult(comparison: ProductComparison) -> impl IntoView {
    view! {
        <div class="mt-5 space-y-3">
            <ul class="list-disc pl-6 space-y-1 text-sm text-slate-700">
                {comparison
                    .comparison_points
                    .into_iter()
                    .map(|point| view! { <li>{point}</li> })
                    .collect_view()}
            </ul>
            {(!comparison.final_opinion.is_empty()).then(|| view! {
                <p class="text-sm font-semibold text-slate-900 bg-slate-50 rounded-lg p-3">
                    "Final Opinion: " {comparison.final_opinion}
                </p>
            })}
        </div>
    }
}
