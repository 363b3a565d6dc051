pub mod view_model;

use self::view_model::QuotationEditorVm;
use crate::domain::a004_quotation::catalog::catalog;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a004_quotation::{Quotation, QuotationItem};
use contracts::domain::common::field_error::summary;
use contracts::domain::common::money::format_soles;
use leptos::prelude::*;
use thaw::*;

/// Create/edit dialog for a draft quotation.
#[component]
pub fn QuotationEditor(
    quotation: Quotation,
    on_saved: Callback<Quotation>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = if quotation.items.is_empty() && quotation.cliente.is_empty() {
        "Nueva cotización"
    } else {
        "Editar cotización"
    };
    let vm = QuotationEditorVm::new(quotation);
    let subtotal = vm.subtotal();
    let igv = vm.igv();
    let total = vm.total();

    view! {
        <Modal title=title on_close=on_close>
            {move || {
                vm.errors.with(|e| {
                    summary(e).map(|m| view! { <div class="alert alert--error">{m.to_string()}</div> })
                })
            }}

            <Flex vertical=true gap=FlexGap::Medium>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Cliente"</Label>
                    <Input value=vm.cliente placeholder="Nombre del cliente" />
                </Flex>
                <p class="text-muted">
                    {move || vm.draft.with(|q| format!(
                        "Emisión {} · Vence {}",
                        q.fecha_emision.format("%d/%m/%Y"),
                        q.fecha_vencimiento.format("%d/%m/%Y"),
                    ))}
                </p>

                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Producto"</Label>
                        <Select value=vm.product_id>
                            <option value="">"Seleccione un producto"</option>
                            {catalog()
                                .into_iter()
                                .map(|p| {
                                    let text = format!("{} ({})", p.nombre, format_soles(p.precio));
                                    view! { <option value=p.id>{text}</option> }
                                })
                                .collect_view()}
                        </Select>
                    </Flex>
                    <Button on_click=move |_| vm.add_selected()>
                        {icon("plus")}
                        " Agregar"
                    </Button>
                </Flex>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=220.0>"Descripción"</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>"Cantidad"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"P. Unitario"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Total"</TableHeaderCell>
                            <TableHeaderCell min_width=50.0>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || vm.draft.with(|q| q.items.clone())
                            key=|item| item.id.clone()
                            children=move |item: QuotationItem| {
                                let id_qty = item.id.clone();
                                let id_remove = item.id.clone();
                                let descripcion = item.descripcion;
                                let precio = format_soles(item.precio_unitario);
                                let quantity = vm.quantity_text(item.id.clone());
                                let line_total = vm.line_total(item.id);
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{descripcion}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <input
                                                type="number"
                                                min="1"
                                                class="input input--qty"
                                                prop:value=move || quantity.get()
                                                on:change=move |ev| {
                                                    vm.update_quantity(&id_qty, &event_target_value(&ev))
                                                }
                                            />
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{precio}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{move || format_soles(line_total.get())}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <button
                                                class="button button--icon"
                                                title="Quitar"
                                                on:click=move |_| vm.remove_item(&id_remove)
                                            >
                                                {icon("trash")}
                                            </button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <div class="totals">
                    <div>"Subtotal: " {move || format_soles(subtotal.get())}</div>
                    <div>"IGV (18%): " {move || format_soles(igv.get())}</div>
                    <div class="totals__grand">"Total: " {move || format_soles(total.get())}</div>
                </div>

                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(|q| on_saved.run(q))
                    >
                        {icon("save")}
                        " Guardar"
                    </Button>
                    <Button on_click=move |_| on_close.run(())>"Cancelar"</Button>
                </Flex>
            </Flex>
        </Modal>
    }
}
