// web_app/components/common.rs - Reusable UI components
//
// Small building blocks shared by the pages: loader, error panel, buttons,
// modal shell, count badge and price tag.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;
use rust_decimal::Decimal;

/// Loading spinner component
#[component]
pub fn Loader(
    /// Optional message to display below the spinner
    #[prop(default = "Please wait...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-slate-200 border-t-purple-600"></div>
            <span class="mt-4 text-slate-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Blocking panel shown in place of the product grid when a fetch fails
#[component]
pub fn ErrorPanel(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="flex justify-center items-center h-[200px]">
            <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
                <div class="bg-red-100 p-2 rounded-full text-red-600">
                    <span class="text-xl font-bold">"⚠"</span>
                </div>
                <div>
                    <h3 class="text-red-800 font-bold mb-1">"Something went wrong"</h3>
                    <p class="text-red-600 text-sm">{error}</p>
                </div>
            </div>
        </div>
    }
}

/// Primary button component
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-gradient-to-r from-purple-600 to-pink-600 text-white rounded-lg \
                      hover:from-purple-500 hover:to-pink-500 transition-all \
                      disabled:opacity-50 disabled:cursor-not-allowed font-semibold shadow-md";

    view! {
        <button
            type="button"
            disabled=move || disabled.get()
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let class = "px-4 py-2 bg-white text-slate-700 rounded-lg hover:bg-slate-50 \
                 transition-colors border border-slate-300 disabled:opacity-50 \
                 font-medium shadow-sm";

    view! {
        <button
            type="button"
            disabled=move || disabled.get()
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Modal wrapper component
///
/// Backdrop plus a titled card. Open/close is owned by the parent.
#[component]
pub fn ModalWrapper(
    children: Children,
    on_close: Callback<()>,
    #[prop(default = "")]
    title: &'static str,
    #[prop(default = "")]
    subtitle: &'static str,
    /// Ignore close requests (e.g. while an upload is running)
    #[prop(into, default = Signal::from(false))]
    locked: Signal<bool>,
) -> impl IntoView {
    let request_close = move || {
        if !locked.get_untracked() {
            on_close.run(());
        }
    };

    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            request_close();
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 sm:p-6"
            on:keydown=handle_keydown
        >
            <div
                class="absolute inset-0 bg-slate-900/60 backdrop-blur-sm"
                on:click=move |_| request_close()
            ></div>

            <div
                class="relative bg-white rounded-2xl shadow-2xl w-full max-w-3xl max-h-[90vh] flex flex-col overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-center px-6 py-4 border-b border-slate-100 bg-gradient-to-r from-purple-600 to-pink-600 text-white">
                    <div>
                        <h2 class="text-xl font-bold">{title}</h2>
                        <Show when=move || !subtitle.is_empty()>
                            <p class="text-sm text-white/80">{subtitle}</p>
                        </Show>
                    </div>
                    <button
                        class="hover:bg-white/20 rounded-full p-2 transition-colors disabled:opacity-50"
                        disabled=move || locked.get()
                        on:click=move |_| request_close()
                        title="Close"
                    >
                        "✕"
                    </button>
                </div>

                <div class="p-6 overflow-y-auto">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Small counter bubble, used for the cart. Zero is shown.
#[component]
pub fn CountBadge(
    count: Signal<usize>,
    children: Children,
) -> impl IntoView {
    view! {
        <span class="relative inline-flex">
            {children()}
            <span class="absolute -top-2 -right-3 min-w-[20px] h-5 px-1 rounded-full bg-pink-500 \
                         text-white text-[0.7rem] font-bold flex items-center justify-center">
                {move || count.get()}
            </span>
        </span>
    }
}

/// Format a price with two decimals
pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", price)
}

/// Price tag; shows the list price struck through when a special price applies
#[component]
pub fn PriceTag(
    price: Option<Decimal>,
    special_price: Option<Decimal>,
) -> impl IntoView {
    match (price, special_price) {
        (Some(list), Some(special)) if special < list => view! {
            <div class="flex items-baseline gap-2">
                <span class="text-slate-400 line-through text-sm">{format_price(list)}</span>
                <span class="text-xl font-bold text-green-600">{format_price(special)}</span>
            </div>
        }
        .into_any(),
        (_, Some(only)) | (Some(only), None) => view! {
            <span class="text-xl font-bold text-slate-800">{format_price(only)}</span>
        }
        .into_any(),
        (None, None) => view! {
            <span class="text-sm text-slate-400">"Price unavailable"</span>
        }
        .into_any(),
    }
}
