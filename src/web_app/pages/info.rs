// web_app/pages/info.rs - Static pages

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto px-4 py-16 space-y-4">
            <h1 class="text-4xl font-bold text-slate-900">"About Us"</h1>
            <p class="text-slate-600 leading-relaxed">
                "E-Shop brings together a curated catalog, keyword and category browsing, "
                "and search by image so you can find products the way you think about them."
            </p>
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto px-4 py-16 space-y-4">
            <h1 class="text-4xl font-bold text-slate-900">"Contact Us"</h1>
            <p class="text-slate-600">"Questions about an order? Reach us at support@e-shop.example."</p>
        </div>
    }
}

/// 404 Not Found page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-300 mb-4">"404"</h1>
                <p class="text-xl text-slate-600 mb-8">"Page not found"</p>
                <a
                    href="/products"
                    class="px-6 py-3 bg-purple-600 text-white rounded-lg hover:bg-purple-700 transition-colors"
                >
                    "Browse Products"
                </a>
            </div>
        </div>
    }
}
