pub mod state;

use self::state::{create_state, row_key, COL_CLIENTE, COL_EMISION, COL_TOTAL};
use crate::domain::a004_quotation::service;
use crate::domain::a004_quotation::ui::details::QuotationEditor;
use crate::layout::global_context::{AppGlobalContext, PageKey};
use crate::layout::notifications::use_notifications;
use crate::shared::async_op::AsyncOperation;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::components::status_pill::StatusPill;
use crate::shared::date_utils::today_local;
use crate::shared::modal::ConfirmDialog;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::transition::{plan, replace_record, run_transition};
use contracts::domain::a004_quotation::{Quotation, QuotationAction};
use contracts::domain::common::money::format_soles;
use contracts::domain::common::Lifecycle;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn QuotationList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifications = use_notifications();
    let state = create_state();
    let editing = RwSignal::new(None::<Quotation>);
    let pending_accept = RwSignal::new(None::<Quotation>);

    let send_op = AsyncOperation::new(move |id: String| {
        let items = state.with_untracked(|s| s.items.clone());
        async move {
            run_transition(&items, &id, QuotationAction::Send, service::send_quotation).await
        }
    })
    .notify_errors(notifications);
    let sending = send_op.pending_signal();

    let accept_op = AsyncOperation::new(move |id: String| {
        let items = state.with_untracked(|s| s.items.clone());
        async move {
            run_transition(&items, &id, QuotationAction::Accept, service::accept_quotation).await
        }
    })
    .notify_errors(notifications);
    let accepting = accept_op.pending_signal();

    // Single click; outside Draft the controller refuses and nothing is sent.
    let send = move |id: String| {
        send_op.run(id, move |record: Quotation| {
            let cliente = record.cliente.clone();
            state.update(|s| {
                replace_record(&mut s.items, record);
            });
            notifications.success(format!("Cotización enviada a {}", cliente));
        });
    };

    let ask_accept = move |id: String| {
        match state.with_untracked(|s| plan(&s.items, &id, QuotationAction::Accept)) {
            Ok((quotation, _)) => pending_accept.set(Some(quotation)),
            Err(e) => notifications.info(e.to_string()),
        }
    };
    let confirm_accept = move || {
        let Some(quotation) = pending_accept.get_untracked() else {
            return;
        };
        accept_op.run(quotation.id, move |record: Quotation| {
            state.update(|s| {
                replace_record(&mut s.items, record);
            });
            pending_accept.set(None);
            notifications.success("Cotización aceptada");
        });
    };

    let on_saved = Callback::new(move |quotation: Quotation| {
        state.update(|s| s.save(quotation));
        editing.set(None);
        notifications.success("Cotización guardada como borrador");
    });

    let toggle_sort = move |field: String| state.update(|s| s.toggle_sort(&field));
    let current_sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_dir = Signal::derive(move || state.with(|s| s.sort_dir));

    view! {
        <PageFrame page_id="a004_quotation--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Cotizaciones"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(Quotation::new_draft("", today_local())))
                    >
                        "Nueva cotización"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell
                                label="Cliente"
                                sort_field=COL_CLIENTE
                                current_sort_field=current_sort_field
                                sort_dir=sort_dir
                                on_sort=Callback::new(toggle_sort)
                                min_width=200.0
                            />
                            <SortableHeaderCell
                                label="Emisión"
                                sort_field=COL_EMISION
                                current_sort_field=current_sort_field
                                sort_dir=sort_dir
                                on_sort=Callback::new(toggle_sort)
                            />
                            <TableHeaderCell min_width=100.0>"Vence"</TableHeaderCell>
                            <TableHeaderCell min_width=70.0>"Ítems"</TableHeaderCell>
                            <SortableHeaderCell
                                label="Total"
                                sort_field=COL_TOTAL
                                current_sort_field=current_sort_field
                                sort_dir=sort_dir
                                on_sort=Callback::new(toggle_sort)
                            />
                            <TableHeaderCell min_width=100.0>"Estado"</TableHeaderCell>
                            <TableHeaderCell min_width=260.0>"Acciones"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || state.with(|s| s.sorted())
                            key=row_key
                            children=move |q: Quotation| {
                                let id_send = q.id.clone();
                                let id_accept = q.id.clone();
                                let editable = q.is_editable();
                                let acceptable = q.allows(QuotationAction::Accept);
                                let convertible = q.can_convert_to_sale();
                                let send = send.clone();
                                let cliente = q.cliente.clone();
                                let emision = q.fecha_emision.format("%d/%m/%Y").to_string();
                                let vence = q.fecha_vencimiento.format("%d/%m/%Y").to_string();
                                let item_count = q.items.len();
                                let total = format_soles(q.total());
                                let status_code = q.estado.code().to_string();
                                let status_label = q.estado.label().to_string();
                                let for_edit = q;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{cliente}</TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{emision}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{vence}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{item_count}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{total}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <StatusPill code=status_code label=status_label />
                                        </TableCell>
                                        <TableCell>
                                            <Flex gap=FlexGap::Small>
                                                <Button
                                                    size=ButtonSize::Small
                                                    disabled=Signal::derive(move || !editable)
                                                    on_click=move |_| editing.set(Some(for_edit.clone()))
                                                >
                                                    "Editar"
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    disabled=Signal::derive(move || !editable || sending.get())
                                                    on_click=move |_| send(id_send.clone())
                                                >
                                                    "Enviar"
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    disabled=Signal::derive(move || !acceptable || accepting.get())
                                                    on_click=move |_| ask_accept(id_accept.clone())
                                                >
                                                    "Aceptar"
                                                </Button>
                                                <Show when=move || convertible>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Primary
                                                        on_click=move |_| ctx.open(PageKey::SaleRegistration)
                                                    >
                                                        "Generar venta"
                                                    </Button>
                                                </Show>
                                            </Flex>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <Show when=move || state.with(|s| s.items.is_empty())>
                    <p class="text-muted">"No hay cotizaciones registradas."</p>
                </Show>
            </div>

            {move || editing.get().map(|quotation| view! {
                <QuotationEditor
                    quotation=quotation
                    on_saved=on_saved
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}

            <Show when=move || pending_accept.with(Option::is_some)>
                <ConfirmDialog
                    title="Aceptar cotización"
                    message=Signal::derive(move || {
                        pending_accept
                            .get()
                            .map(|q| format!("¿Confirma que {} aceptó la cotización por {}?", q.cliente, format_soles(q.total())))
                            .unwrap_or_default()
                    })
                    confirm_label="Aceptar"
                    pending=accepting
                    on_confirm=Callback::new({
                        let confirm_accept = confirm_accept.clone();
                        move |_| confirm_accept()
                    })
                    on_cancel=Callback::new(move |_| pending_accept.set(None))
                />
            </Show>
        </PageFrame>
    }
}
