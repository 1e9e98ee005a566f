//! Shared page chrome: brand header, footer, and small status helpers.

use leptos::prelude::*;

/// Standard page frame used by every route.
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    view! {
        <div class="page">
            <header class="page__header">
                <a class="page__brand" href="/">"EShoppingZone"</a>
            </header>
            <main class="page__main">{children()}</main>
            <footer class="page__footer">"© 2025 EShoppingZone. All rights reserved."</footer>
        </div>
    }
}

/// Neutral waiting indicator shown while data or the session resolves.
#[component]
pub fn LoadingText() -> impl IntoView {
    view! { <p class="status status--loading">"Loading..."</p> }
}

/// Inline error line; renders nothing while the message is empty.
#[component]
pub fn ErrorText(message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <p class="status status--error">{move || message.get()}</p>
        </Show>
    }
}
