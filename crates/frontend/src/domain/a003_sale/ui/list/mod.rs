pub mod state;

use self::state::{create_state, COL_CLIENTE, COL_ESTADO, COL_FECHA, COL_NUM_VENTA};
use crate::domain::a003_sale::api;
use crate::layout::global_context::{AppGlobalContext, PageKey};
use crate::layout::notifications::use_notifications;
use crate::shared::async_op::{AsyncOperation, OpStatus};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::components::status_pill::StatusPill;
use crate::shared::date_utils::{format_datetime, local_offset};
use crate::shared::list_utils::{apply_filters, visible_count_label, ColumnFilter, DateFilter};
use crate::shared::modal::ConfirmDialog;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::request_guard::RequestGuard;
use crate::shared::transition::{plan, replace_record, run_transition};
use chrono::NaiveDate;
use contracts::domain::a003_sale::{Sale, SaleAction, SaleStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn SaleList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifications = use_notifications();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let guard = RequestGuard::new();

    // Only the newest request writes; sort and page clicks supersede older ones.
    let load_items = move || {
        let query = state.with_untracked(|s| s.query.clone());
        let ticket = guard.begin();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::fetch_sales(&query).await;
            if !guard.is_current(ticket) {
                log::debug!("sales list: stale response for {} dropped", query.to_query_string());
                return;
            }
            match result {
                Ok(page) => {
                    state.update(|s| {
                        s.items = page.content;
                        s.total_count = page.total_elements;
                        s.total_pages = page.total_pages;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::warn!("sales list: {}", e);
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

    // Filters narrow the loaded page only.
    let code_filter = RwSignal::new(String::new());
    let client_filter = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());
    let date_filter = RwSignal::new(String::new());
    Effect::new(move |_| {
        let code = code_filter.get();
        let client = client_filter.get();
        let status = status_filter.get();
        let day = NaiveDate::parse_from_str(date_filter.get().trim(), "%Y-%m-%d").ok();
        untrack(move || {
            state.update(|s| {
                s.filters.set(COL_NUM_VENTA, ColumnFilter::Contains(code));
                s.filters.set(COL_CLIENTE, ColumnFilter::Contains(client));
                s.filters.set(COL_ESTADO, ColumnFilter::Exact(status));
                s.filters.set_date(day.map(|day| DateFilter {
                    column: COL_FECHA.to_string(),
                    day,
                    offset: local_offset(),
                }));
            });
        });
    });
    let clear_filters = move || {
        code_filter.set(String::new());
        client_filter.set(String::new());
        status_filter.set(String::new());
        date_filter.set(String::new());
    };

    let visible = Signal::derive(move || state.with(|s| apply_filters(&s.items, &s.filters)));
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

    let toggle_sort = move |field: String| {
        let refetch = state.try_update(|s| s.query.toggle_sort(&field)).unwrap_or(false);
        if refetch {
            load_items();
        }
    };
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

    // Cancel: confirm first, then one call; the row is replaced on success only.
    let pending_cancel = RwSignal::new(None::<Sale>);
    let cancel_op = AsyncOperation::new(move |id: i64| {
        let items = state.with_untracked(|s| s.items.clone());
        async move {
            run_transition(&items, &id, SaleAction::Cancel, |sale: Sale| async move {
                api::cancel_sale(sale.id).await
            })
            .await
        }
    })
    .notify_errors(notifications);
    let cancel_pending = cancel_op.pending_signal();

    let ask_cancel = move |id: i64| {
        let checked = state.with_untracked(|s| plan(&s.items, &id, SaleAction::Cancel));
        match checked {
            Ok((sale, _)) => pending_cancel.set(Some(sale)),
            Err(e) => notifications.info(e.to_string()),
        }
    };
    let confirm_cancel = {
        let cancel_op = cancel_op.clone();
        move || {
            let Some(sale) = pending_cancel.get_untracked() else {
                return;
            };
            cancel_op.run(sale.id, move |record: Sale| {
                let num_venta = record.num_venta.clone();
                state.update(|s| {
                    replace_record(&mut s.items, record);
                });
                pending_cancel.set(None);
                notifications.success(format!("Venta {} cancelada", num_venta));
            });
        }
    };
    let cancel_status = cancel_op.status;
    Effect::new(move |_| {
        if cancel_status.get() == OpStatus::Error {
            pending_cancel.set(None);
        }
    });

    let current_sort_field = Signal::derive(move || state.with(|s| s.query.sort_field.clone()));
    let sort_dir = Signal::derive(move || state.with(|s| s.query.sort_dir));

    view! {
        <PageFrame page_id="a003_sale--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Ventas"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.open(PageKey::SaleRegistration)
                    >
                        "Nueva venta"
                    </Button>
                    <Button
                        on_click=move |_| load_items()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Cargando..." } else { "Actualizar" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Código"</Label>
                                <Input value=code_filter placeholder="VENTA-..." />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Cliente"</Label>
                                <Input value=client_filter placeholder="Nombre del cliente" />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Estado"</Label>
                                <Select value=status_filter>
                                    <option value="">"Todos"</option>
                                    {SaleStatus::ALL
                                        .into_iter()
                                        .map(|st| {
                                            view! { <option value=st.code()>{st.label()}</option> }
                                        })
                                        .collect_view()}
                                </Select>
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Fecha"</Label>
                                <input
                                    type="date"
                                    class="input"
                                    prop:value=move || date_filter.get()
                                    on:input=move |ev| date_filter.set(event_target_value(&ev))
                                />
                            </Flex>
                            <Button
                                on_click=move |_| clear_filters()
                                disabled=Signal::derive(move || !state.with(|s| s.filters.is_active()))
                            >
                                "Limpiar filtros"
                            </Button>
                        </Flex>
                    </div>
                </div>

                {move || {
                    error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })
                }}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell
                                    label="N° Venta"
                                    sort_field=COL_NUM_VENTA
                                    current_sort_field=current_sort_field
                                    sort_dir=sort_dir
                                    on_sort=Callback::new(toggle_sort)
                                    disabled=loading
                                />
                                <SortableHeaderCell
                                    label="Cliente"
                                    sort_field=COL_CLIENTE
                                    current_sort_field=current_sort_field
                                    sort_dir=sort_dir
                                    on_sort=Callback::new(toggle_sort)
                                    disabled=loading
                                    min_width=200.0
                                />
                                <TableHeaderCell min_width=100.0>"Origen"</TableHeaderCell>
                                <SortableHeaderCell
                                    label="Estado"
                                    sort_field=COL_ESTADO
                                    current_sort_field=current_sort_field
                                    sort_dir=sort_dir
                                    on_sort=Callback::new(toggle_sort)
                                    disabled=loading
                                />
                                <SortableHeaderCell
                                    label="Fecha"
                                    sort_field=COL_FECHA
                                    current_sort_field=current_sort_field
                                    sort_dir=sort_dir
                                    on_sort=Callback::new(toggle_sort)
                                    disabled=loading
                                    min_width=140.0
                                />
                                <TableHeaderCell min_width=180.0>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|sale| sale.clone()
                                children=move |sale: Sale| {
                                    let id = sale.id;
                                    let editable = sale.is_editable();
                                    let cancellable = sale.is_cancellable();
                                    let origin = sale.origen_venta.label();
                                    let status_code = sale.estado.code().to_string();
                                    let status_label = sale.estado.label().to_string();
                                    let created = format_datetime(&sale.fecha_venta_creada);
                                    let num_venta = sale.num_venta.clone();
                                    let cliente = sale.nombre_cliente.clone();
                                    let for_edit = sale;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{num_venta}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{cliente}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{origin}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusPill code=status_code label=status_label />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        disabled=Signal::derive(move || !editable)
                                                        on_click=move |_| ctx.open_sale_draft(for_edit.clone())
                                                    >
                                                        "Editar"
                                                    </Button>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        disabled=Signal::derive(move || {
                                                            !cancellable || cancel_pending.get()
                                                        })
                                                        on_click=move |_| ask_cancel(id)
                                                    >
                                                        "Cancelar"
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

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

            <Show when=move || pending_cancel.with(Option::is_some)>
                <ConfirmDialog
                    title="Cancelar venta"
                    message=Signal::derive(move || {
                        pending_cancel
                            .get()
                            .map(|s| {
                                format!(
                                    "¿Desea cancelar la venta {}? Esta acción no se puede deshacer.",
                                    s.num_venta,
                                )
                            })
                            .unwrap_or_default()
                    })
                    confirm_label="Cancelar venta"
                    pending=cancel_pending
                    on_confirm=Callback::new({
                        let confirm_cancel = confirm_cancel.clone();
                        move |_| confirm_cancel()
                    })
                    on_cancel=Callback::new(move |_| {
                        if !cancel_pending.get_untracked() {
                            pending_cancel.set(None);
                        }
                    })
                />
            </Show>
        </PageFrame>
    }
}

