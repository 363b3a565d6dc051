pub mod view_model;

use self::view_model::CouponDetailsVm;
use crate::layout::notifications::use_notifications;
use crate::shared::components::field_message::FieldMessage;
use crate::shared::modal::Modal;
use contracts::domain::a005_coupon::{
    CuponResponse, DiscountType, FIELD_CODIGO, FIELD_FECHA_EXPIRACION, FIELD_MONTO_MINIMO,
    FIELD_USOS_MAXIMOS, FIELD_VALOR,
};
use contracts::domain::common::field_error::summary;
use leptos::prelude::*;
use thaw::*;

/// Create/edit coupon dialog. `existing` switches it to edit mode (PUT).
#[component]
pub fn CouponDetails(
    existing: Option<CuponResponse>,
    on_saved: Callback<CuponResponse>,
    on_close: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let vm = CouponDetailsVm::new(existing.as_ref());
    let edit_mode = vm.is_edit_mode();
    let saving = vm.save.pending_signal();
    let save_error = vm.save.error;
    let errors = vm.errors;
    let title = if edit_mode { "Editar cupón" } else { "Nuevo cupón" };
    let codigo = vm.codigo;
    let tipo_descuento = vm.tipo_descuento;
    let valor = vm.valor;
    let fecha_expiracion = vm.fecha_expiracion;
    let usos_maximos = vm.usos_maximos;
    let monto_minimo = vm.monto_minimo;
    let codigo_error = vm.error_for(FIELD_CODIGO);
    let valor_error = vm.error_for(FIELD_VALOR);
    let fecha_error = vm.error_for(FIELD_FECHA_EXPIRACION);
    let usos_error = vm.error_for(FIELD_USOS_MAXIMOS);
    let monto_error = vm.error_for(FIELD_MONTO_MINIMO);

    let submit = move || {
        vm.save_command(move |coupon: CuponResponse| {
            let verb = if edit_mode { "actualizado" } else { "creado" };
            notifications.success(format!("Cupón {} {}", coupon.codigo, verb));
            on_saved.run(coupon);
        });
    };

    view! {
        <Modal title=title on_close=on_close>
            {move || {
                save_error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })
            }}
            {move || {
                errors.with(|e| {
                    summary(e)
                        .map(|m| view! { <div class="alert alert--warning">{m.to_string()}</div> })
                })
            }}

            <Flex vertical=true gap=FlexGap::Medium>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Código"</Label>
                    <Input value=codigo placeholder="VERANO25" />
                    <FieldMessage message=codigo_error />
                </Flex>
                <Flex gap=FlexGap::Small>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Tipo de descuento"</Label>
                        <Select value=tipo_descuento>
                            {DiscountType::ALL
                                .into_iter()
                                .map(|t| view! { <option value=t.code()>{t.label()}</option> })
                                .collect_view()}
                        </Select>
                    </Flex>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Valor"</Label>
                        <Input value=valor />
                        <FieldMessage message=valor_error />
                    </Flex>
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Fecha de expiración"</Label>
                    <input
                        type="date"
                        class="input"
                        prop:value=move || fecha_expiracion.get()
                        on:input=move |ev| fecha_expiracion.set(event_target_value(&ev))
                    />
                    <FieldMessage message=fecha_error />
                </Flex>
                <Flex gap=FlexGap::Small>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Usos máximos"</Label>
                        <Input value=usos_maximos placeholder="Vacío o 0 = ilimitado" />
                        <FieldMessage message=usos_error />
                    </Flex>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Monto mínimo (S/)"</Label>
                        <Input value=monto_minimo />
                        <FieldMessage message=monto_error />
                    </Flex>
                </Flex>

                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| submit()
                        disabled=saving
                    >
                        {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                    </Button>
                    <Button on_click=move |_| on_close.run(()) disabled=saving>"Cancelar"</Button>
                </Flex>
            </Flex>
        </Modal>
    }
}
