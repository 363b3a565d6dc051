use crate::projections::p900_sales_by_channel::api;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::shared::request_guard::RequestGuard;
use contracts::domain::common::money::format_soles;
use contracts::projections::p900_sales_by_channel::{ChannelShare, ChannelSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn SalesByChannelList() -> impl IntoView {
    let summary = RwSignal::new(None::<ChannelSummary>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let guard = RequestGuard::new();

    let load = move || {
        let ticket = guard.begin();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::fetch_sales_by_channel().await;
            if !guard.is_current(ticket) {
                return;
            }
            match result {
                Ok(rows) => summary.set(Some(ChannelSummary::from_rows(rows))),
                Err(e) => {
                    log::warn!("sales by channel: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if summary.with_untracked(Option::is_none) {
            load();
        }
    });

    view! {
        <PageFrame page_id="p900_sales_by_channel--list" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Ventas por canal"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Cargando..." } else { "Actualizar" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })
                }}

                <Show when=move || loading.get() && summary.with(Option::is_none)>
                    <Spinner />
                </Show>

                {move || summary.get().map(summary_table)}
            </div>
        </PageFrame>
    }
}

fn summary_table(summary: ChannelSummary) -> impl IntoView {
    let total_ventas = summary.total_ventas;
    let total_ingresos = format_soles(summary.total_ingresos);
    let rows = summary
        .rows
        .into_iter()
        .map(|share: ChannelShare| {
            let canal = share.row.canal.label();
            let ventas = share.row.cantidad_ventas;
            let ingresos = format_soles(share.row.ingresos_totales);
            let porcentaje = format!("{:.2} %", share.porcentaje_ingresos);
            view! {
                <TableRow>
                    <TableCell><TableCellLayout>{canal}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{ventas}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{ingresos}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{porcentaje}</TableCellLayout></TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell min_width=200.0>"Canal"</TableHeaderCell>
                    <TableHeaderCell min_width=120.0>"Ventas"</TableHeaderCell>
                    <TableHeaderCell min_width=140.0>"Ingresos"</TableHeaderCell>
                    <TableHeaderCell min_width=100.0>"% ingresos"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {rows}
                <TableRow class="table__totals-row">
                    <TableCell><TableCellLayout><strong>"Total"</strong></TableCellLayout></TableCell>
                    <TableCell><TableCellLayout><strong>{total_ventas}</strong></TableCellLayout></TableCell>
                    <TableCell><TableCellLayout><strong>{total_ingresos}</strong></TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>""</TableCellLayout></TableCell>
                </TableRow>
            </TableBody>
        </Table>
    }
}
