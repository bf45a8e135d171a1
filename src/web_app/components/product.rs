// web_app/components/product.rs - Product display components
//
// - ProductCard: grid card with cart and compare actions
// - ProductDetail: full view shown in a modal
// - ProductGrid: grid layout for a page of products

use leptos::prelude::*;

use super::common::{ModalWrapper, PriceTag};
use crate::web_app::compare::CompareSelection;
use crate::web_app::model::{CartItem, Product};
use crate::web_app::store::{Action, Store};

/// Placeholder shown when a product has no image URL
const NO_IMAGE: &str = "📦";

/// Card-sized description text
///
/// Cuts to `max` characters on a char boundary and appends "..." when
/// anything was dropped. A missing description yields an empty string.
pub fn description_preview(description: Option<&str>, max: usize) -> String {
    let description = description.unwrap_or_default().trim();
    match description.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &description[..idx]),
        None => description.to_string(),
    }
}

/// Product photo, or a placeholder when the product has none
#[component]
fn ProductImage(
    /// Image URL as sent by the catalog
    image: Option<String>,
    /// Tailwind height class
    #[prop(default = "h-48")]
    height: &'static str,
) -> impl IntoView {
    match image.filter(|src| !src.is_empty()) {
        Some(src) => view! {
            <img src=src class=format!("{} w-full object-cover", height) loading="lazy" />
        }
        .into_any(),
        None => view! {
            <div class=format!("{} bg-slate-100 flex items-center justify-center text-slate-300", height)>
                <span class="text-4xl">{NO_IMAGE}</span>
            </div>
        }
        .into_any(),
    }
}

/// Green or red availability pill
#[component]
fn StockBadge(
    /// Whether any quantity is left
    in_stock: bool,
) -> impl IntoView {
    if in_stock {
        view! {
            <span class="text-xs px-2 py-1 bg-green-100 text-green-700 rounded-full font-medium flex items-center gap-1">
                <span class="w-1.5 h-1.5 bg-green-500 rounded-full"></span>
                "In Stock"
            </span>
        }
        .into_any()
    } else {
        view! {
            <span class="text-xs px-2 py-1 bg-red-100 text-red-700 rounded-full font-medium flex items-center gap-1">
                <span class="w-1.5 h-1.5 bg-red-500 rounded-full"></span>
                "Out of Stock"
            </span>
        }
        .into_any()
    }
}

/// Product card for the listing grid
///
/// Clicking the card body opens the detail view; the buttons add to the cart
/// and mark the product for comparison.
#[component]
pub fn ProductCard(
    /// Product to display
    product: Product,
    /// Click handler for viewing details
    on_click: Callback<Product>,
    /// Compare picks, when the grid offers comparison
    #[prop(optional)]
    compare: Option<RwSignal<CompareSelection>>,
) -> impl IntoView {
    let store = Store::expect();
    let product_id = product.product_id;
    let in_stock = product.in_stock();
    let preview = description_preview(product.description.as_deref(), 120);

    let for_detail = product.clone();
    let for_cart = CartItem::from(&product);
    let for_compare = product.clone();

    let add_to_cart = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        tracing::debug!(product_id, "add to cart");
        store.dispatch(Action::AddToCart(for_cart.clone()));
    };

    view! {
        <div
            class="group bg-white rounded-xl shadow-sm hover:shadow-xl \
                   transition-all duration-300 cursor-pointer border border-slate-100 \
                   flex flex-col h-full overflow-hidden transform hover:-translate-y-1"
            on:click=move |_| on_click.run(for_detail.clone())
        >
            <ProductImage image=product.image.clone() />

            <div class="p-5 flex flex-col flex-1">
                <div class="flex justify-between items-start mb-3 gap-2">
                    <h3 class="font-bold text-slate-900 line-clamp-2 text-lg group-hover:text-purple-600 transition-colors">
                        {product.product_name.clone()}
                    </h3>
                    <StockBadge in_stock=in_stock />
                </div>

                <p class="text-slate-600 text-sm mb-4 line-clamp-3 flex-1">{preview}</p>

                <div class="flex justify-between items-center pt-3 border-t border-slate-100 gap-2">
                    <PriceTag price=product.price special_price=product.special_price />
                    <button
                        type="button"
                        class="px-3 py-1.5 bg-purple-600 text-white text-sm rounded-lg font-semibold \
                               hover:bg-purple-500 disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=!in_stock
                        on:click=add_to_cart
                    >
                        "Add to Cart"
                    </button>
                </div>

                {compare.map(|selection| {
                    let picked = move || selection.with(|s| s.contains(product_id));
                    view! {
                        <label
                            class="mt-3 flex items-center gap-2 text-xs text-slate-500 cursor-pointer"
                            on:click=|ev| ev.stop_propagation()
                        >
                            <input
                                type="checkbox"
                                class="h-4 w-4 rounded border-slate-300 text-purple-600"
                                prop:checked=picked
                                on:change=move |_| selection.update(|s| s.toggle(for_compare.clone()))
                            />
                            "Compare"
                        </label>
                    }
                })}
            </div>
        </div>
    }
}

/// Product detail view, shown in a modal
///
/// Full description, discount and available quantity, with its own
/// "Add to Cart" button.
#[component]
pub fn ProductDetail(
    /// Product to display
    product: Product,
) -> impl IntoView {
    let store = Store::expect();
    let in_stock = product.in_stock();
    let cart_item = CartItem::from(&product);

    view! {
        <div class="flex flex-col md:flex-row gap-6">
            <div class="w-full md:w-1/3 rounded-xl overflow-hidden">
                <ProductImage image=product.image.clone() height="h-64" />
            </div>

            <div class="flex-1 space-y-4">
                <h2 class="text-3xl font-bold text-slate-900 leading-tight">
                    {product.product_name.clone()}
                </h2>
                <div class="flex items-center gap-4">
                    <PriceTag price=product.price special_price=product.special_price />
                    {product.discount.filter(|d| !d.is_zero()).map(|d| view! {
                        <span class="text-xs px-2 py-1 bg-pink-100 text-pink-700 rounded-full font-semibold">
                            {format!("{}% off", d.normalize())}
                        </span>
                    })}
                </div>
                <div class="flex items-center gap-2">
                    <StockBadge in_stock=in_stock />
                    {product.quantity.filter(|q| *q > 0).map(|q| view! {
                        <span class="text-sm text-slate-500">"(" {q} " available)"</span>
                    })}
                </div>
                <p class="text-slate-600 leading-relaxed">
                    {product.description.clone().unwrap_or_default()}
                </p>
                <button
                    type="button"
                    class="px-5 py-2 bg-purple-600 text-white rounded-lg font-semibold \
                           hover:bg-purple-500 disabled:opacity-50"
                    disabled=!in_stock
                    on:click=move |_| store.dispatch(Action::AddToCart(cart_item.clone()))
                >
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}

/// Grid of product cards with a detail modal
///
/// Clicking a card opens `ProductDetail` for it; closing the modal returns to
/// the grid.
#[component]
pub fn ProductGrid(
    /// Products to show, in order
    #[prop(into)]
    products: Signal<Vec<Product>>,
    /// Compare picks shared with the comparison panel
    #[prop(optional)]
    compare: Option<RwSignal<CompareSelection>>,
) -> impl IntoView {
    let selected = RwSignal::new(None::<Product>);
    let on_click = Callback::new(move |product: Product| selected.set(Some(product)));
    let on_close = Callback::new(move |()| selected.set(None));

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
            <For
                each=move || products.get()
                key=|p| p.product_id
                children=move |product| {
                    match compare {
                        Some(selection) => view! {
                            <ProductCard product=product on_click=on_click compare=selection />
                        }
                        .into_any(),
                        None => view! { <ProductCard product=product on_click=on_click /> }.into_any(),
                    }
                }
            />
        </div>

        {move || selected.get().map(|product| view! {
            <ModalWrapper on_close=on_close title="Product Details">
                <ProductDetail product=product />
            </ModalWrapper>
        })}
    }
}
