use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::Notifications;
use crate::routes::routes::AppRoutes;
use crate::system::session::Session;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Role persisted by a previous login, if any.
    provide_context(Session::init_from_storage());
    provide_context(AppGlobalContext::new());
    provide_context(Notifications::new());

    view! {
        <AppRoutes />
    }
}
