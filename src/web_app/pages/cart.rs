// web_app/pages/cart.rs - Cart page

use leptos::prelude::*;

use crate::web_app::model::CartItem;
use crate::web_app::store::{Action, Store};

/// Total number of units across all lines
pub fn total_units(items: &[CartItem]) -> u32 {
    items.iter().map(|i| i.quantity).sum()
}

#[component]
pub fn CartPage() -> impl IntoView {
    let store = Store::expect();
    let items = store.cart_items();

    view! {
        <div class="max-w-3xl mx-auto px-4 py-10">
            <h1 class="text-3xl font-bold text-slate-900 mb-6">"Your Cart"</h1>
            <Show
                when=move || items.with(|i| !i.is_empty())
                fallback=|| view! {
                    <div class="bg-white rounded-2xl p-12 border border-slate-100 text-center">
                        <p class="text-slate-500 mb-6">"Your cart is empty."</p>
                        <a href="/products" class="px-6 py-3 bg-purple-600 text-white rounded-lg hover:bg-purple-700">
                            "Start Shopping"
                        </a>
                    </div>
                }
            >
                <ul class="bg-white rounded-2xl border border-slate-100 divide-y divide-slate-100">
                    <For
                        each=move || items.get()
                        key=|item| (item.product_id, item.quantity)
                        children=move |item| {
                            let product_id = item.product_id;
                            view! {
                                <li class="flex items-center justify-between p-4">
                                    <span class="font-medium text-slate-800">{item.product_name}</span>
                                    <div class="flex items-center gap-4">
                                        <span class="text-slate-500">"× " {item.quantity}</span>
                                        <button
                                            type="button"
                                            class="text-sm text-rose-600 hover:underline"
                                            on:click=move |_| store.dispatch(Action::RemoveFromCart(product_id))
                                        >
                                            "Remove"
                                        </button>
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
                <p class="mt-4 text-right text-slate-600">
                    {move || items.with(|i| format!("{} item(s)", total_units(i)))}
                </p>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_units() {
        let items = vec![
            CartItem { product_id: 1, product_name: "A".into(), quantity: 2 },
            CartItem { product_id: 2, product_name: "B".into(), quantity: 1 },
        ];
        assert_eq!(total_units(&items), 3);
        assert_eq!(total_units(&[]), 0);
    }
}
