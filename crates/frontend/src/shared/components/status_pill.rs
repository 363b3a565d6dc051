use leptos::prelude::*;

/// Colour variant of a status code, by wire spelling.
pub fn pill_variant(code: &str) -> &'static str {
    match code {
        "BORRADOR" => "warning",
        "ENVIADA" => "primary",
        "CONFIRMADA" | "ACEPTADA" | "ACTIVO" | "ACTIVE" => "success",
        "CANCELADA" | "EXPIRADO" | "AGOTADO" | "INACTIVE" => "error",
        _ => "neutral",
    }
}

/// Coloured label for a record status.
#[component]
pub fn StatusPill(
    /// Wire code, e.g. `CANCELADA`; picks the colour
    #[prop(into)]
    code: Signal<String>,
    /// Display text, e.g. `Cancelada`
    #[prop(into)]
    label: Signal<String>,
) -> impl IntoView {
    view! {
        <span class=move || format!("badge badge--{}", pill_variant(&code.get()))>
            {move || label.get()}
        </span>
    }
}
