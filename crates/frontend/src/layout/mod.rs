pub mod global_context;
pub mod notifications;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;
use notifications::ToastHost;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + Send + Sync + 'static,
    C: Fn() -> AnyView + Send + Sync + 'static,
{
    let ctx = use_context::<global_context::AppGlobalContext>()
        .expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <Show when=move || ctx.left_open.get()>
                    <aside class="app-sidebar">{left()}</aside>
                </Show>

                <main class="app-main">
                    {center()}
                </main>
            </div>

            <ToastHost />
        </div>
    }
}
