pub mod state;

use self::state::{create_state, COL_NOMBRE};
use crate::domain::a002_branch::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::list_utils::{apply_filters, visible_count_label, ColumnFilter};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::request_guard::RequestGuard;
use contracts::domain::a002_branch::Branch;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn BranchList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let guard = RequestGuard::new();

    let load_items = move || {
        let (page, size) = state.with_untracked(|s| (s.query.page, s.query.size));
        let ticket = guard.begin();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::fetch_branches(page, size).await;
            if !guard.is_current(ticket) {
                log::debug!("branches list: stale page {} dropped", page);
                return;
            }
            match result {
                Ok(result) => state.update(|s| {
                    s.items = result.content;
                    s.total_count = result.total_elements;
                    s.total_pages = result.total_pages;
                    s.is_loaded = true;
                }),
                Err(e) => {
                    log::warn!("branches list: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
        }
    });

    let search = RwSignal::new(String::new());
    Effect::new(move || {
        let v = search.get();
        untrack(move || state.update(|s| s.filters.set(COL_NOMBRE, ColumnFilter::Contains(v))));
    });
    let visible = Signal::derive(move || state.with(|s| apply_filters(&s.items, &s.filters)));

    let go_to_page = move |page: usize| {
        let refetch = state
            .try_update(|s| {
                let total = s.total_pages;
                s.query.go_to_page(page, total)
            })
            .unwrap_or(false);
        if refetch {
            load_items();
        }
    };
    let change_page_size = move |size: usize| {
        let refetch = state.try_update(|s| s.query.change_page_size(size)).unwrap_or(false);
        if refetch {
            load_items();
        }
    };
    let count_label = Signal::derive(move || {
        state.with(|s| {
            visible_count_label(
                visible.with(Vec::len),
                s.items.len(),
                s.total_count,
                s.filters.is_active(),
            )
        })
    });

    view! {
        <PageFrame page_id="a002_branch--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Sedes"</h1>
                </div>
                <div class="page__header-right">
                    <Input value=search placeholder="Buscar sede..." />
                    <Button
                        on_click=move |_| load_items()
                        disabled=Signal::derive(move || loading.get())
                    >
                        "Actualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=200.0>"Nombre"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Tipo"</TableHeaderCell>
                            <TableHeaderCell min_width=240.0>"Dirección"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Capacidad"</TableHeaderCell>
                            <TableHeaderCell min_width=80.0>"Activa"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || visible.get()
                            key=|b| b.clone()
                            children=move |branch: Branch| {
                                let tipo = branch.tipo.label();
                                let capacity = branch.capacity_label();
                                let activa = if branch.activo { "Sí" } else { "No" };
                                let nombre = branch.nombre;
                                let direccion = branch.direccion;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{nombre}</TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{tipo}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{direccion}</TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{capacity}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{activa}</TableCellLayout></TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <div class="list-footer">
                    <span class="text-muted">{move || count_label.get()}</span>
                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.query.page))
                        total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                        total_count=Signal::derive(move || state.with(|s| s.total_count))
                        page_size=Signal::derive(move || state.with(|s| s.query.size))
                        on_page_change=Callback::new(go_to_page)
                        on_page_size_change=Callback::new(change_page_size)
                        disabled=loading
                        filtered=Signal::derive(move || state.with(|s| s.filters.is_active()))
                    />
                </div>
            </div>
        </PageFrame>
    }
}
