use crate::domain::a003_sale::api;
use crate::layout::global_context::{AppGlobalContext, PageKey};
use crate::layout::notifications::use_notifications;
use crate::shared::async_op::AsyncOperation;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::system::session::use_session;
use contracts::domain::a003_sale::CreateDraftSaleResponse;
use leptos::prelude::*;
use thaw::*;

/// Direct sale registration. "Crear orden" opens a draft on the backend;
/// opened from "Editar" on the sale list, the page continues that draft
/// instead. Confirming the sale is not available yet.
#[component]
pub fn SaleRegistration() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();
    let notifications = use_notifications();
    let editing = ctx.sale_draft.get_untracked();
    let draft_id = RwSignal::new(editing.as_ref().map(|sale| sale.id));
    let title = match &editing {
        Some(sale) => format!("Editar venta {}", sale.num_venta),
        None => "Registrar venta".to_string(),
    };
    let client_line = editing
        .filter(|sale| !sale.nombre_cliente.is_empty())
        .map(|sale| format!("Cliente: {}", sale.nombre_cliente));

    let create_op = AsyncOperation::new(|usuario: String| api::create_draft_sale(usuario))
        .notify_errors(notifications);
    let creating = create_op.pending_signal();
    let create_error = create_op.error;

    let create_draft = move || {
        let usuario = session.user_name();
        create_op.run(usuario, move |created: CreateDraftSaleResponse| {
            log::info!("draft sale {} created", created.venta_id);
            draft_id.set(Some(created.venta_id));
            notifications.success(format!("Orden #{} creada en borrador", created.venta_id));
        });
    };

    view! {
        <PageFrame page_id="a003_sale--registration" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="page__header-right">
                    <Button on_click=move |_| ctx.open(PageKey::Sales)>"Volver a ventas"</Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    create_error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })
                }}

                <div class="form-card">
                    {client_line.map(|line| view! { <p>{line}</p> })}
                    {move || match draft_id.get() {
                        Some(id) => {
                            let text = format!(
                                "Orden #{} en borrador. Agregue los productos y confirme la venta.",
                                id,
                            );
                            view! { <p>{text}</p> }.into_any()
                        }
                        None => view! {
                            <p class="text-muted">"Aún no se ha creado una orden para esta venta."</p>
                        }
                        .into_any(),
                    }}

                    <Flex gap=FlexGap::Small>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| create_draft()
                            disabled=Signal::derive(move || {
                                creating.get() || draft_id.with(Option::is_some)
                            })
                        >
                            {move || if creating.get() { "Creando..." } else { "Crear orden" }}
                        </Button>
                        // No backend operation exists for confirming a direct sale yet.
                        <Button disabled=true attr:title="Disponible próximamente">
                            "Confirmar Venta"
                        </Button>
                    </Flex>
                </div>
            </div>
        </PageFrame>
    }
}
