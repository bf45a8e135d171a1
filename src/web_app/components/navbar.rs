// web_app/components/navbar.rs - Top navigation bar
//
// Owns the image search flow: the upload modal and the results modal are
// opened from here so they are reachable from every page.

use leptos::prelude::*;

use super::common::CountBadge;
use super::image_search::{release_preview, ImageSearchModal, ImageSearchOutcome, ImageSearchResults};
use crate::web_app::hooks::use_pathname;
use crate::web_app::image_search::superseded_preview;
use crate::web_app::store::Store;

/// Navigation entries, in display order
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/products", "Products"),
    ("/about", "About"),
    ("/contact", "Contact"),
];

/// A link is highlighted only on an exact path match
pub fn is_active(current: &str, link: &str) -> bool {
    current == link
}

fn link_class(active: bool) -> &'static str {
    if active {
        "text-white font-semibold bg-gradient-to-r from-purple-600 to-pink-600 px-4 py-2 rounded-lg shadow-lg transition-all block"
    } else {
        "text-slate-200 hover:text-white hover:bg-white/10 px-4 py-2 rounded-lg transition-all block"
    }
}

/// Which image search modal is showing, if any
#[derive(Clone, Debug, Default)]
enum ImageSearchView {
    #[default]
    Closed,
    Upload,
    Results(ImageSearchOutcome),
}

impl ImageSearchView {
    fn preview(&self) -> Option<&str> {
        match self {
            ImageSearchView::Results(outcome) => outcome.preview.as_deref(),
            _ => None,
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let store = Store::expect();
    let cart_count = store.cart_count();
    let pathname = use_pathname();
    let menu_open = RwSignal::new(false);
    let image_search = RwSignal::new(ImageSearchView::Closed);

    // Leaving the results view releases its image preview
    let show = move |next: ImageSearchView| {
        let leaving = image_search.with_untracked(|v| v.preview().map(str::to_string));
        release_preview(superseded_preview(leaving.as_deref(), next.preview()));
        image_search.set(next);
    };

    let open_upload = Callback::new(move |()| show(ImageSearchView::Upload));
    let close = Callback::new(move |()| show(ImageSearchView::Closed));
    let show_results =
        Callback::new(move |outcome: ImageSearchOutcome| show(ImageSearchView::Results(outcome)));

    view! {
        <nav class="h-[80px] bg-gradient-to-r from-slate-900 via-purple-900 to-slate-900 text-white z-40 \
                    flex items-center sticky top-0 shadow-2xl border-b border-purple-500/20">
            <div class="lg:px-14 sm:px-8 px-4 w-full flex justify-between items-center">
                <a href="/" class="flex items-center text-2xl font-bold group">
                    <span class="mr-3 p-2 bg-gradient-to-br from-purple-600 to-pink-600 rounded-xl shadow-lg">"🏬"</span>
                    <span class="bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent text-3xl font-extrabold">
                        "E-Shop"
                    </span>
                </a>

                <ul class=move || {
                    if menu_open.get() {
                        "flex flex-col sm:flex-row gap-4 sm:gap-8 sm:items-center absolute sm:static left-0 top-[80px] \
                         w-full sm:w-fit px-6 sm:px-0 pb-8 sm:pb-0 bg-slate-900 sm:bg-transparent"
                    } else {
                        "hidden sm:flex sm:flex-row sm:gap-8 sm:items-center"
                    }
                }>
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! {
                            <li class="font-medium">
                                <a
                                    href=href
                                    class=move || link_class(is_active(&pathname.get(), href))
                                    on:click=move |_| menu_open.set(false)
                                >
                                    {label}
                                </a>
                            </li>
                        })
                        .collect_view()}

                    <li class="font-medium">
                        <button
                            type="button"
                            title="Search by Image"
                            class="flex items-center gap-2 px-4 py-2 bg-gradient-to-r from-emerald-600 via-teal-600 \
                                   to-cyan-600 text-white font-semibold rounded-lg shadow-lg \
                                   hover:from-emerald-500 hover:via-teal-500 hover:to-cyan-500 transition-all"
                            on:click=move |_| open_upload.run(())
                        >
                            <span>"📷"</span>
                            <span class="sm:inline hidden">"Search by Image"</span>
                            <span class="sm:hidden inline">"Image"</span>
                        </button>
                    </li>

                    <li class="font-medium">
                        <a
                            href="/cart"
                            class=move || link_class(is_active(&pathname.get(), "/cart"))
                        >
                            <CountBadge count=Signal::from(cart_count)>
                                <span class="text-2xl">"🛒"</span>
                            </CountBadge>
                        </a>
                    </li>
                </ul>

                <button
                    type="button"
                    class="sm:hidden p-2 rounded-lg bg-white/10 hover:bg-white/20 border border-white/20"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
        </nav>

        {move || match image_search.get() {
            ImageSearchView::Closed => ().into_any(),
            ImageSearchView::Upload => view! {
                <ImageSearchModal on_close=close on_results=show_results />
            }
            .into_any(),
            ImageSearchView::Results(outcome) => view! {
                <ImageSearchResults outcome=outcome on_close=close on_new_search=open_upload />
            }
            .into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_is_exact_match() {
        assert!(is_active("/products", "/products"));
        assert!(!is_active("/products", "/"));
        assert!(!is_active("/", "/products"));
    }

    #[test]
    fn test_nav_links_order() {
        let labels: Vec<&str> = NAV_LINKS.iter().map(|(_, label)| *label).collect();
        assert_eq!(labels, vec!["Home", "Products", "About", "Contact"]);
    }
}
