use leptos::prelude::*;

/// Validation message under a form field; renders nothing when valid.
#[component]
pub fn FieldMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|m| view! { <span class="form__error">{m}</span> })}
    }
}
