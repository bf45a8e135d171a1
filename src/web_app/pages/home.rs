// web_app/pages/home.rs - Landing page

use leptos::prelude::*;

use crate::web_app::actions::spawn_load_products;
use crate::web_app::components::{ErrorPanel, HeroBanner, Loader, ProductGrid};
use crate::web_app::model::{Product, ProductRequest};
use crate::web_app::store::Store;

/// Products shown under "Featured Products"
pub const FEATURED_COUNT: usize = 4;

pub fn featured(products: &[Product]) -> Vec<Product> {
    products.iter().take(FEATURED_COUNT).cloned().collect()
}

const FEATURES: [(&str, &str, &str); 3] = [
    ("⭐", "Premium Quality", "Handpicked products with guaranteed quality and authenticity"),
    ("🚚", "Fast Shipping", "Quick delivery to your doorstep with real-time tracking"),
    ("💬", "24/7 Support", "Round-the-clock customer service for all your needs"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let store = Store::expect();
    let products = store.products();
    let is_loading = store.is_loading();
    let error = store.error_message();

    // Unfiltered first page, fetched once on mount
    Effect::new(move |_| spawn_load_products(store, ProductRequest::default()));

    let featured_products =
        Signal::derive(move || products.with(|p| p.as_deref().map(featured).unwrap_or_default()));

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 via-purple-50 to-pink-50">
            <div class="lg:px-14 sm:px-8 px-4 py-6">
                <HeroBanner />
            </div>

            <div class="py-16 bg-white/60">
                <div class="lg:px-14 sm:px-8 px-4 grid md:grid-cols-3 gap-8">
                    {FEATURES
                        .into_iter()
                        .map(|(icon, title, text)| view! {
                            <div class="text-center p-6 bg-white/80 rounded-2xl shadow-lg border border-purple-100">
                                <div class="w-16 h-16 bg-gradient-to-br from-purple-600 to-pink-600 rounded-full \
                                            flex items-center justify-center mx-auto mb-4 text-2xl">
                                    {icon}
                                </div>
                                <h3 class="text-xl font-bold text-slate-800 mb-2">{title}</h3>
                                <p class="text-slate-600">{text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="py-16 lg:px-14 sm:px-8 px-4">
                <div class="text-center mb-16">
                    <h1 class="text-5xl font-bold bg-gradient-to-r from-purple-600 via-pink-600 to-red-600 \
                               bg-clip-text text-transparent mb-4">
                        "Featured Products"
                    </h1>
                    <p class="text-slate-600 text-lg max-w-2xl mx-auto">
                        "Discover our handpicked selection of top-rated items just for you!"
                    </p>
                </div>

                {move || {
                    if is_loading.get() {
                        view! { <Loader /> }.into_any()
                    } else if let Some(message) = error.get() {
                        view! { <ErrorPanel error=message /> }.into_any()
                    } else {
                        view! {
                            <ProductGrid products=featured_products />
                            <div class="text-center mt-12">
                                <a
                                    href="/products"
                                    class="inline-flex items-center gap-3 px-8 py-4 bg-gradient-to-r from-purple-600 \
                                           via-pink-600 to-red-600 text-white font-semibold rounded-2xl shadow-lg"
                                >
                                    "View All Products →"
                                </a>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64) -> Product {
        serde_json::from_value(serde_json::json!({ "productId": id })).unwrap()
    }

    #[test]
    fn test_featured_takes_first_four() {
        let products: Vec<Product> = (1..=6).map(product).collect();
        let ids: Vec<i64> = featured(&products).iter().map(|p| p.product_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(featured(&products[..2]).len(), 2);
    }
}
