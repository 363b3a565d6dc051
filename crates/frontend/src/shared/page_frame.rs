//! Root wrapper for every page shown in the main area.
//!
//! The root element gets `id="{entity}--{category}"` (e.g.
//! `"a003_sale--list"`) and `data-page-category`, so a page found in the DOM
//! inspector maps straight to its `domain/` or `projections/` directory.

use leptos::prelude::*;

/// Table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";
/// Create/edit form or single-record view.
pub const PAGE_CAT_DETAIL: &str = "detail";
/// Read-only analytics.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class=page_class(category) data-page-category=category>
            {children()}
        </div>
    }
}
