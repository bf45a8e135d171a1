// web_app/components/filter.rs - Filter bar components
//
// Every control here writes to the URL only; the product listing follows the
// URL through `use_product_filter`.
//
// - SearchInput: debounced keyword box
// - CategorySelect: category dropdown fed from the store
// - SortToggle: price sort direction
// - ClearFilters: back to the bare listing
// - Paginations: page controls driven by the store's pagination block

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::web_app::debounce::Debouncer;
use crate::web_app::hooks::{use_filter_state, use_pathname, use_query_params};
use crate::web_app::query::{
    adjacent_pages, clear_filters, keyword_commit, select_category, toggle_sort, with_page,
    ALL_CATEGORIES, PARAM_KEYWORD,
};
use crate::web_app::store::Store;

/// Keyword search box
///
/// Typing (or the inline clear button) only updates the box. The value is
/// committed to the `keyword` query parameter once the input has been quiet
/// for the debounce delay; an empty value removes the parameter.
#[component]
pub fn SearchInput() -> impl IntoView {
    let params = use_query_params();
    let pathname = use_pathname();
    let navigate = use_navigate();

    let url_keyword = Memo::new(move |_| {
        params.with(|p| p.get(PARAM_KEYWORD).unwrap_or_default().to_string())
    });
    let term = RwSignal::new(url_keyword.get_untracked());

    let debouncer = StoredValue::new(Debouncer::<String>::default());
    let timer = StoredValue::new(None::<TimeoutHandle>);

    let clear_timer = move || {
        timer.update_value(|t| {
            if let Some(handle) = t.take() {
                handle.clear();
            }
        });
    };
    let cancel_pending = move || {
        debouncer.update_value(|d| d.cancel());
        clear_timer();
    };

    // Back/forward or another control changed the keyword
    Effect::new(move |_| {
        let keyword = url_keyword.get();
        cancel_pending();
        term.set(keyword);
    });

    on_cleanup(cancel_pending);

    // Restart the quiet period with `value` as the only pending commit
    let schedule = move |value: String| {
        let Some(ticket) = debouncer.try_update_value(|d| d.push(value)) else {
            return;
        };
        let delay = debouncer.with_value(|d| d.delay());
        clear_timer();

        let navigate = navigate.clone();
        let scheduled = set_timeout_with_handle(
            move || {
                let Some(committed) = debouncer.try_update_value(|d| d.fire(ticket)).flatten()
                else {
                    return;
                };
                let Some(href) = keyword_commit(
                    &params.get_untracked(),
                    &committed,
                    &pathname.get_untracked(),
                ) else {
                    return;
                };
                tracing::debug!(%href, "search committed");
                navigate(&href, NavigateOptions::default());
            },
            delay,
        );

        match scheduled {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(e) => tracing::warn!("Could not schedule search: {:?}", e),
        }
    };

    let on_input = {
        let schedule = schedule.clone();
        move |ev| {
            let value = event_target_value(&ev);
            term.set(value.clone());
            schedule(value);
        }
    };

    let on_clear = move |_| {
        term.set(String::new());
        schedule(String::new());
    };

    view! {
        <div class="relative flex-1 min-w-[220px]">
            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                <span class="text-slate-400">"🔍"</span>
            </div>
            <input
                type="text"
                placeholder="Search products..."
                class="w-full pl-10 pr-10 py-2.5 border-2 border-slate-200 rounded-xl \
                       focus:ring-4 focus:ring-purple-100 focus:border-purple-500 \
                       outline-none transition-all"
                prop:value=move || term.get()
                on:input=on_input
            />
            <button
                type="button"
                title="Clear search"
                class=move || {
                    if term.with(String::is_empty) {
                        "hidden"
                    } else {
                        "absolute inset-y-0 right-0 pr-3 flex items-center text-slate-400 hover:text-slate-600"
                    }
                }
                on:click=on_clear
            >
                "✕"
            </button>
        </div>
    }
}

/// Category dropdown
///
/// Options come from the store's category list, headed by "All Categories".
/// Choosing one replaces the whole query with `?category=<name>`; "All
/// Categories" returns to the bare listing.
#[component]
pub fn CategorySelect() -> impl IntoView {
    let store = Store::expect();
    let categories = store.categories();
    let filter = use_filter_state();
    let pathname = use_pathname();
    let navigate = use_navigate();

    let on_change = move |ev| {
        let value = event_target_value(&ev);
        navigate(
            &select_category(&value, &pathname.get_untracked()),
            NavigateOptions::default(),
        );
    };

    view! {
        <div class="flex items-center gap-3 bg-white px-4 py-2 rounded-lg border border-slate-200 shadow-sm">
            <label class="text-sm font-medium text-slate-600">"Category:"</label>
            <select
                class="text-sm font-semibold text-slate-800 bg-transparent border-none \
                       focus:ring-0 cursor-pointer pr-8"
                on:change=on_change
            >
                <option
                    value=ALL_CATEGORIES
                    selected=move || filter.with(|f| f.category.is_none())
                >
                    "All Categories"
                </option>
                <For
                    each=move || categories.get().unwrap_or_default()
                    key=|c| c.category_id
                    children=move |category| {
                        let name = category.category_name.clone();
                        let for_check = name.clone();
                        let value = name.clone();
                        view! {
                            <option
                                value=value
                                selected=move || filter.with(|f| f.category.as_deref() == Some(for_check.as_str()))
                            >
                                {name}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Price sort toggle
///
/// Flips between ascending and descending and always drops the page
/// parameter, keeping the rest of the query.
#[component]
pub fn SortToggle() -> impl IntoView {
    let params = use_query_params();
    let filter = use_filter_state();
    let pathname = use_pathname();
    let navigate = use_navigate();

    let on_click = move |_| {
        let href = toggle_sort(&params.get_untracked(), &pathname.get_untracked());
        navigate(&href, NavigateOptions::default());
    };

    view! {
        <button
            type="button"
            class="flex items-center gap-2 px-4 py-2 bg-white border border-slate-200 rounded-lg \
                   shadow-sm hover:bg-slate-50 transition-all text-sm font-semibold text-slate-700"
            on:click=on_click
        >
            "Sort By Price: "
            <span class="text-purple-700">{move || filter.with(|f| f.sort_order.label())}</span>
        </button>
    }
}

/// "Clear All" button
///
/// Disabled unless a keyword, a category or a descending sort is active.
#[component]
pub fn ClearFilters() -> impl IntoView {
    let filter = use_filter_state();
    let pathname = use_pathname();
    let navigate = use_navigate();

    view! {
        <button
            type="button"
            class="text-xs font-semibold text-rose-600 hover:text-rose-800 hover:underline \
                   uppercase tracking-wide disabled:opacity-40 disabled:no-underline"
            disabled=move || !filter.with(|f| f.has_active_filters())
            on:click=move |_| navigate(&clear_filters(&pathname.get_untracked()), NavigateOptions::default())
        >
            "Clear All"
        </button>
    }
}

/// Search box, category dropdown, sort toggle and clear button in one row
#[component]
pub fn FilterBar() -> impl IntoView {
    view! {
        <section class="bg-white rounded-2xl shadow-sm p-4 mb-8 border border-slate-100">
            <div class="flex flex-wrap items-center gap-4">
                <SearchInput />
                <CategorySelect />
                <SortToggle />
                <ClearFilters />
            </div>
        </section>
    }
}

/// Page numbers shown around the current page
///
/// All numbers are 1-based. `current` is clamped into `1..=total` first, so an
/// out-of-range page from the URL still yields a sensible window.
pub fn page_window(current: u32, total: u32, radius: u32) -> Vec<u32> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let start = current.saturating_sub(radius).max(1);
    let end = current.saturating_add(radius).min(total);
    (start..=end).collect()
}

/// Pagination controls
///
/// The current page comes from the URL, the page count from the store's
/// pagination block. Hidden when there is a single page.
#[component]
pub fn Paginations() -> impl IntoView {
    let store = Store::expect();
    let pagination = store.pagination();
    let params = use_query_params();
    let filter = use_filter_state();
    let pathname = use_pathname();

    let current = move || filter.with(|f| f.page);
    let total_pages = move || pagination.with(|p| p.total_pages);
    let neighbours = move || adjacent_pages(current(), total_pages());
    // Link target for a 1-based page, keeping every other parameter
    let href_for = move |page: u32| {
        params.with(|p| with_page(p, page, &pathname.get()))
    };

    let button_class = "px-4 py-2 bg-white border border-slate-200 rounded-lg shadow-sm \
                        hover:bg-slate-50 hover:border-slate-300 transition-all font-medium text-slate-700";
    let disabled_class = "px-4 py-2 bg-white border border-slate-200 rounded-lg shadow-sm \
                          opacity-50 pointer-events-none font-medium text-slate-700";

    view! {
        <Show when=move || { total_pages() > 1 }>
            <nav class="flex items-center justify-center gap-2 mt-12 mb-8">
                <a
                    href=move || href_for(neighbours().0)
                    class=move || { if current() > 1 { button_class } else { disabled_class } }
                >
                    "← Previous"
                </a>

                {move || {
                    page_window(current(), total_pages(), 2)
                        .into_iter()
                        .map(|page| {
                            let active = page == current();
                            view! {
                                <a
                                    href=href_for(page)
                                    class={if active {
                                        "px-3 py-2 rounded-lg bg-purple-600 text-white font-bold shadow-sm"
                                    } else {
                                        "px-3 py-2 rounded-lg bg-white border border-slate-200 text-slate-700 hover:bg-slate-50"
                                    }}
                                >
                                    {page}
                                </a>
                            }
                        })
                        .collect_view()
                }}

                <a
                    href=move || href_for(neighbours().1)
                    class=move || { if current() < total_pages() { button_class } else { disabled_class } }
                >
                    "Next →"
                </a>
            </nav>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window_clamps_to_range() {
        assert_eq!(page_window(1, 10, 2), vec![1, 2, 3]);
        assert_eq!(page_window(5, 10, 2), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(10, 10, 2), vec![8, 9, 10]);
    }

    #[test]
    fn test_page_window_empty_and_out_of_range() {
        assert!(page_window(1, 0, 2).is_empty());
        assert_eq!(page_window(40, 3, 1), vec![2, 3]);
    }

    #[test]
    fn test_page_window_at_numeric_limits() {
        assert_eq!(page_window(u32::MAX, u32::MAX, 2), vec![u32::MAX - 2, u32::MAX - 1, u32::MAX]);
        assert_eq!(page_window(u32::MAX, 5, 2), vec![3, 4, 5]);
    }
}
