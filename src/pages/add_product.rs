//! Admin: add a new product.

#[cfg(test)]
#[path = "add_product_test.rs"]
mod add_product_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::guard::{Access, use_gate};
use crate::components::layout::{ErrorText, PageShell};
use crate::net::api;
use crate::net::types::{Category, NewProduct, Role};

/// Client-side form validation; rejected input never reaches the network.
pub(crate) fn validate_product(
    name: &str,
    price: &str,
    description: &str,
    category: &str,
) -> Result<NewProduct, String> {
    if [name, price, description, category]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err("All fields, including category name, are required.".to_owned());
    }
    let price: f64 = price
        .trim()
        .parse()
        .map_err(|_| "Price must be a positive number.".to_owned())?;
    if !price.is_finite() || price <= 0.0 {
        return Err("Price must be a positive number.".to_owned());
    }
    Ok(NewProduct {
        name: name.trim().to_owned(),
        price,
        description: description.trim().to_owned(),
        category: Category {
            name: category.trim().to_owned(),
        },
    })
}

#[component]
pub fn AddProductPage() -> impl IntoView {
    let navigate = use_navigate();
    let _allowed = use_gate(Access::Role(Role::Admin));

    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        error.set(String::new());
        success.set(String::new());

        let product = match validate_product(&name.get(), &price.get(), &description.get(), &category.get()) {
            Ok(product) => product,
            Err(message) => {
                error.set(message);
                return;
            }
        };

        pending.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_product(&product).await {
                Ok(_) => {
                    success.set("Product added successfully!".to_owned());
                    name.set(String::new());
                    price.set(String::new());
                    description.set(String::new());
                    category.set(String::new());
                    // Let the success message show briefly before moving on.
                    gloo_timers::future::TimeoutFuture::new(2000).await;
                    navigate("/manageProducts", NavigateOptions::default());
                }
                Err(err) => error.set(err.to_string()),
            }
            pending.set(false);
        });
    };

    view! {
        <PageShell>
            <h1 class="page__title">"Add Product"</h1>
            <ErrorText message=error.into()/>
            <Show when=move || !success.get().is_empty()>
                <p class="status status--ok">{move || success.get()}</p>
            </Show>
            <form class="form card card--narrow" on:submit=submit>
                <label class="form__label">
                    "Name"
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Enter product name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Price"
                    <input
                        class="form__input"
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="Enter price"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Description"
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Enter product description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Category Name"
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Enter category name"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Adding..." } else { "Add Product" }}
                </button>
            </form>
        </PageShell>
    }
}
