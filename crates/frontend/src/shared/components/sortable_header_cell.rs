//! Sortable table header cell.
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Cliente"
//!     sort_field="nombreCliente"
//!     current_sort_field=Signal::derive(move || state.with(|s| s.query.sort_field.clone()))
//!     sort_dir=Signal::derive(move || state.with(|s| s.query.sort_dir))
//!     on_sort=Callback::new(toggle_sort)
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SortDirection};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    /// Backend sort key of the column
    #[prop(into)]
    sort_field: String,
    #[prop(into)] current_sort_field: Signal<String>,
    #[prop(into)] sort_dir: Signal<SortDirection>,
    on_sort: Callback<String>,
    #[prop(optional, default = 100.0)] min_width: f64,
    /// Ignores clicks while the list is loading
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let field_click = sort_field.clone();
    let field_class = sort_field.clone();
    let field_indicator = sort_field;
    let cursor = move || {
        if disabled.get() {
            "cursor: progress;"
        } else {
            "cursor: pointer;"
        }
    };

    view! {
        <TableHeaderCell resizable=true min_width=min_width>
            <div
                class="table__sortable-header"
                style=cursor
                on:click=move |_| {
                    if !disabled.get_untracked() {
                        on_sort.run(field_click.clone());
                    }
                }
            >
                {label}
                <span class=move || get_sort_class(&current_sort_field.get(), &field_class)>
                    {move || {
                        get_sort_indicator(&current_sort_field.get(), &field_indicator, sort_dir.get())
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
