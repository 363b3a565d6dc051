use crate::domain::a001_seller::api;
use crate::shared::api_utils::ApiError;
use crate::shared::components::status_pill::StatusPill;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::domain::a001_seller::Seller;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Inline banner for a failed lookup: css modifier and text. 404 and 400
/// are expected answers and render as warnings, not errors.
fn lookup_banner(error: &ApiError) -> (&'static str, String) {
    match error {
        ApiError::NotFound(_) => (
            "alert--warning",
            "No se encontró un vendedor con ese código".to_string(),
        ),
        ApiError::Rejected(message) => ("alert--warning", message.clone()),
        other => ("alert--error", other.to_string()),
    }
}

fn parse_seller_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

#[component]
pub fn SellerLookup() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let result = RwSignal::new(None::<Result<Seller, ApiError>>);
    let input_error = RwSignal::new(None::<&'static str>);
    let (searching, set_searching) = signal(false);

    let search = move || {
        if searching.get_untracked() {
            return;
        }
        let Some(id) = parse_seller_id(&query.get_untracked()) else {
            input_error.set(Some("Ingrese un código de vendedor válido"));
            return;
        };
        input_error.set(None);
        set_searching.set(true);
        spawn_local(async move {
            let found = api::fetch_seller(id).await;
            if let Err(e) = &found {
                log::info!("seller lookup {}: {}", id, e);
            }
            result.set(Some(found));
            set_searching.set(false);
        });
    };

    view! {
        <PageFrame page_id="a001_seller--lookup" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Buscar vendedor"</h1>
                </div>
            </div>

            <div class="page__content">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Código de vendedor"</Label>
                        <Input value=query placeholder="Ej. 15" />
                    </Flex>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| search()
                        disabled=Signal::derive(move || searching.get())
                    >
                        {move || if searching.get() { "Buscando..." } else { "Buscar" }}
                    </Button>
                </Flex>

                {move || input_error.get().map(|m| view! { <span class="form__error">{m}</span> })}

                {move || result.get().map(|r| match r {
                    Ok(seller) => view! {
                        <div class="form-card">
                            <h3>{seller.full_name.clone()}</h3>
                            <p>{format!("DNI: {}", seller.dni)}</p>
                            <p>{format!("Tipo: {}", seller.seller_type.label())}</p>
                            <p>{format!("Sede: {}", seller.branch_label())}</p>
                            <StatusPill
                                code=seller.seller_status.code().to_string()
                                label=seller.seller_status.label().to_string()
                            />
                        </div>
                    }
                    .into_any(),
                    Err(e) => {
                        let (class, message) = lookup_banner(&e);
                        view! { <div class=format!("alert {}", class)>{message}</div> }.into_any()
                    }
                })}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_outcomes_render_as_warnings() {
        let rejected = ApiError::Rejected("El vendedor está inactivo".into());
        let (class, message) = lookup_banner(&rejected);
        assert_eq!(class, "alert--warning");
        assert_eq!(message, "El vendedor está inactivo");

        let (class, _) = lookup_banner(&ApiError::NotFound("x".into()));
        assert_eq!(class, "alert--warning");

        let (class, message) = lookup_banner(&ApiError::Http {
            status: 500,
            message: "Error al buscar el vendedor (HTTP 500)".into(),
        });
        assert_eq!(class, "alert--error");
        assert_eq!(message, "Error al buscar el vendedor (HTTP 500)");
    }

    #[test]
    fn test_parse_seller_id() {
        assert_eq!(parse_seller_id(" 15 "), Some(15));
        assert_eq!(parse_seller_id("0"), None);
        assert_eq!(parse_seller_id("abc"), None);
    }
}
