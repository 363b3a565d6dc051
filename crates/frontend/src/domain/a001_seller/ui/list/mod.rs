pub mod state;

use self::state::create_state;
use crate::domain::a001_seller::api;
use crate::domain::a001_seller::ui::details::SellerCreateForm;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_pill::StatusPill;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::request_guard::RequestGuard;
use contracts::domain::a001_seller::Seller;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn SellerList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let show_create = RwSignal::new(false);
    let guard = RequestGuard::new();

    let load_items = move || {
        let (page, size) = state.with_untracked(|s| (s.query.page, s.query.size));
        let ticket = guard.begin();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::fetch_sellers(page, size).await;
            if !guard.is_current(ticket) {
                log::debug!("sellers list: stale page {} dropped", page);
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
                    log::warn!("sellers list: {}", e);
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

    // Re-fetch only after the create call has resolved.
    let on_saved = Callback::new(move |_: Seller| {
        show_create.set(false);
        load_items();
    });

    view! {
        <PageFrame page_id="a001_seller--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Vendedores"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| show_create.set(true)
                    >
                        "Nuevo vendedor"
                    </Button>
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
                            <TableHeaderCell min_width=80.0>"ID"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"DNI"</TableHeaderCell>
                            <TableHeaderCell min_width=220.0>"Nombres"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Tipo"</TableHeaderCell>
                            <TableHeaderCell min_width=180.0>"Sede"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Estado"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || state.get().items
                            key=|s| s.clone()
                            children=move |seller: Seller| {
                                let id = seller.seller_id;
                                let branch = seller.branch_label().to_string();
                                let seller_type = seller.seller_type.label();
                                let status_code = seller.seller_status.code().to_string();
                                let status_label = seller.seller_status.label().to_string();
                                let dni = seller.dni;
                                let full_name = seller.full_name;
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{id}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{dni}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{full_name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{seller_type}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{branch}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusPill code=status_code label=status_label />
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.query.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    total_count=Signal::derive(move || state.with(|s| s.total_count))
                    page_size=Signal::derive(move || state.with(|s| s.query.size))
                    on_page_change=Callback::new(go_to_page)
                    on_page_size_change=Callback::new(change_page_size)
                    disabled=loading
                />
            </div>

            <Show when=move || show_create.get()>
                <SellerCreateForm
                    on_saved=on_saved
                    on_close=Callback::new(move |_| show_create.set(false))
                />
            </Show>
        </PageFrame>
    }
}
