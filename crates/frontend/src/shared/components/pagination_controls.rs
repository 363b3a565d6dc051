use crate::shared::icons::icon;
use crate::shared::list_utils::{page_window, PageButton};
use leptos::prelude::*;

/// Pagination bar: first/previous, a window of page numbers, next/last and a
/// page-size selector. Pages are 0-based; labels are 1-based.
///
/// `disabled` locks navigation while a fetch is in flight. The server total is
/// hidden while client-side filters narrow the page.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    /// Defaults to [10, 20, 50]
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(into, default = Signal::stored(false))] filtered: Signal<bool>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 20, 50]);
    let is_first = move || disabled.get() || current_page.get() == 0;
    let is_last = move || disabled.get() || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=is_first
                title="Primera página"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                disabled=is_first
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>

            {move || {
                let current = current_page.get();
                page_window(current, total_pages.get())
                    .into_iter()
                    .map(|button| match button {
                        PageButton::Page(p) => {
                            let class = if p == current {
                                "pagination-btn pagination-btn--active"
                            } else {
                                "pagination-btn"
                            };
                            view! {
                                <button
                                    class=class
                                    disabled=move || disabled.get()
                                    on:click=move |_| on_page_change.run(p)
                                >
                                    {(p + 1).to_string()}
                                </button>
                            }
                            .into_any()
                        }
                        PageButton::Ellipsis => view! { <span class="pagination-ellipsis">"…"</span> }.into_any(),
                    })
                    .collect_view()
            }}

            <button
                class="pagination-btn"
                on:click=move |_| {
                    if !is_last() {
                        on_page_change.run(current_page.get() + 1);
                    }
                }
                disabled=is_last
                title="Página siguiente"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().saturating_sub(1))
                disabled=is_last
                title="Última página"
            >
                {icon("chevrons-right")}
            </button>

            {move || {
                total_label(total_count.get(), filtered.get())
                    .map(|text| view! { <span class="pagination-info">{text}</span> })
            }}
            <select
                class="page-size-select"
                disabled=move || disabled.get()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Server-wide record count, or nothing while filters narrow the page.
pub fn total_label(total_count: usize, filtered: bool) -> Option<String> {
    (!filtered).then(|| format!("{} registros", total_count))
}
