use crate::layout::global_context::{AppGlobalContext, PageKey};
use crate::shared::icons::icon;
use crate::system::session::use_session;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let items = move || {
        session
            .role()
            .map(|role| {
                PageKey::ALL
                    .into_iter()
                    .filter(|p| p.allowed_for(role))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    view! {
        <nav class="sidebar">
            <For
                each=items
                key=|page| page.key()
                children=move |page| {
                    view! {
                        <a
                            href="#"
                            class=move || {
                                if ctx.active.get() == page {
                                    "sidebar__item sidebar__item--active"
                                } else {
                                    "sidebar__item"
                                }
                            }
                            on:click=move |e| {
                                e.prevent_default();
                                ctx.open(page);
                            }
                        >
                            {icon(page.icon())}
                            <span class="sidebar__label">{page.title()}</span>
                        </a>
                    }
                }
            />
        </nav>
    }
}
