//! Top navigation bar: sidebar toggle, title, current role and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::session::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let role_label = move || {
        session
            .role()
            .map(|r| r.label())
            .unwrap_or("Sin sesión")
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Ocultar navegación" } else { "Mostrar navegación" }
                >
                    {move || if ctx.left_open.get() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Gestión de Ventas"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__user">
                    {icon("user")}
                    {role_label}
                </span>
                <button
                    class="top-header__icon-btn"
                    title="Cerrar sesión"
                    on:click=move |_| session.logout()
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
