pub mod view_model;

use self::view_model::SellerDetailsVm;
use crate::layout::notifications::use_notifications;
use crate::shared::components::field_message::FieldMessage;
use crate::shared::modal::Modal;
use contracts::domain::a001_seller::{Seller, SellerType};
use contracts::domain::a002_branch::Branch;
use leptos::prelude::*;
use thaw::*;

/// Seller registration form, shown as a modal over the seller list.
#[component]
pub fn SellerCreateForm(on_saved: Callback<Seller>, on_close: Callback<()>) -> impl IntoView {
    let notifications = use_notifications();
    let vm = SellerDetailsVm::new();
    let saving = vm.save.pending_signal();
    let save_error = vm.save.error;
    let dni = vm.dni;
    let full_name = vm.full_name;
    let seller_type = vm.seller_type;
    let branch_id = vm.branch_id;
    let branches = vm.branches;
    let dni_error = vm.error_for("dni");
    let full_name_error = vm.error_for("fullName");
    let branch_error = vm.error_for("branchId");

    let submit = move || {
        vm.save_command(move |seller: Seller| {
            notifications.success(format!("Vendedor {} registrado", seller.full_name));
            on_saved.run(seller);
        });
    };

    view! {
        <Modal title="Nuevo vendedor" on_close=on_close>
            {move || {
                save_error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })
            }}

            <Flex vertical=true gap=FlexGap::Medium>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"DNI"</Label>
                    <Input value=dni placeholder="8 dígitos" />
                    <FieldMessage message=dni_error />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Nombres completos"</Label>
                    <Input value=full_name />
                    <FieldMessage message=full_name_error />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Tipo"</Label>
                    <Select value=seller_type>
                        {SellerType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.code()>{t.label()}</option> })
                            .collect_view()}
                    </Select>
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Sede"</Label>
                    <Select value=branch_id>
                        <option value="">"Seleccione una sede"</option>
                        <For
                            each=move || branches.get()
                            key=|b: &Branch| b.id
                            children=|b: Branch| {
                                let value = b.id.to_string();
                                view! { <option value=value>{b.nombre}</option> }
                            }
                        />
                    </Select>
                    <FieldMessage message=branch_error />
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
