pub mod state;

use self::state::{create_state, row_key};
use crate::domain::a005_coupon::api;
use crate::domain::a005_coupon::ui::details::CouponDetails;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_pill::StatusPill;
use crate::shared::date_utils::format_date;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::request_guard::RequestGuard;
use contracts::domain::a005_coupon::CuponResponse;
use contracts::domain::common::money::format_soles;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Which coupon the dialog is showing: `Some(None)` for a new one.
type Editing = Option<Option<CuponResponse>>;

#[component]
pub fn CouponList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let editing = RwSignal::new(Editing::None);
    let guard = RequestGuard::new();

    let load_items = move || {
        let (page, size) = state.with_untracked(|s| (s.query.page, s.query.size));
        let ticket = guard.begin();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::fetch_coupons(page, size).await;
            if !guard.is_current(ticket) {
                log::debug!("coupons list: stale page {} dropped", page);
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
                    log::warn!("coupons list: {}", e);
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

    let on_saved = Callback::new(move |_: CuponResponse| {
        editing.set(None);
        load_items();
    });

    view! {
        <PageFrame page_id="a005_coupon--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Cupones"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(None))
                    >
                        "Nuevo cupón"
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
                            <TableHeaderCell min_width=120.0>"Código"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Descuento"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Expira"</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>"Usos"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Monto mínimo"</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>"Estado"</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || state.get().items
                            key=row_key
                            children=move |coupon: CuponResponse| {
                                let value = coupon.value_label();
                                let usage = coupon.usage_label();
                                let expires = format_date(&coupon.fecha_expiracion.to_string());
                                let minimum = format_soles(coupon.monto_minimo_requerido);
                                let status_code = coupon.estado.code().to_string();
                                let status_label = coupon.estado.label().to_string();
                                let codigo = coupon.codigo.clone();
                                let for_edit = coupon;
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{codigo}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{value}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{expires}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{usage}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{minimum}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <StatusPill code=status_code label=status_label />
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                size=ButtonSize::Small
                                                on_click=move |_| editing.set(Some(Some(for_edit.clone())))
                                            >
                                                "Editar"
                                            </Button>
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

            {move || editing.get().map(|existing| view! {
                <CouponDetails
                    existing=existing
                    on_saved=on_saved
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </PageFrame>
    }
}
