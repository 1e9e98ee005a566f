//! Admin: product catalog management (edit, delete).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::guard::{Access, use_gate};
use crate::components::layout::{ErrorText, LoadingText, PageShell};
use crate::net::api;
use crate::net::types::{Category, Product, Role};
use crate::pages::add_product::validate_product;
use crate::util::dialog::confirm;

#[component]
pub fn ManageProductsPage() -> impl IntoView {
    let allowed = use_gate(Access::Role(Role::Admin));

    let products = RwSignal::new(Vec::<Product>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let editing = RwSignal::new(None::<Product>);
    let edit_name = RwSignal::new(String::new());
    let edit_price = RwSignal::new(String::new());
    let edit_description = RwSignal::new(String::new());
    let edit_category = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    // Admin data is fetched only once the gate allows; a USER never
    // triggers these requests.
    Effect::new(move || {
        if !allowed.get() {
            return;
        }
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(list) => products.set(list),
                Err(err) => {
                    log::error!("failed to load products: {err}");
                    error.set("Failed to load products or categories".to_owned());
                    loading.set(false);
                    return;
                }
            }
            match api::fetch_categories().await {
                Ok(list) => categories.set(list),
                Err(err) => {
                    log::error!("failed to load categories: {err}");
                    error.set("Failed to load products or categories".to_owned());
                }
            }
            loading.set(false);
        });
    });

    let start_edit = move |product: Product| {
        edit_name.set(product.name.clone());
        edit_price.set(format!("{}", product.price));
        edit_description.set(product.description.clone().unwrap_or_default());
        edit_category.set(product.category.as_ref().map(|c| c.name.clone()).unwrap_or_default());
        editing.set(Some(product));
    };

    let delete = move |product_id: i64| {
        if !confirm("Are you sure you want to delete this product?") {
            return;
        }
        spawn_local(async move {
            match api::delete_product(product_id).await {
                Ok(()) => products.update(|list| list.retain(|p| p.product_id != product_id)),
                Err(err) => error.set(err.to_string()),
            }
        });
    };

    let submit_edit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = editing.get() else {
            return;
        };
        let updated = match validate_product(
            &edit_name.get(),
            &edit_price.get(),
            &edit_description.get(),
            &edit_category.get(),
        ) {
            Ok(updated) => updated,
            Err(message) => {
                error.set(message);
                return;
            }
        };
        spawn_local(async move {
            match api::update_product(current.product_id, &updated).await {
                Ok(saved) => {
                    products.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|p| p.product_id == current.product_id) {
                            *slot = saved;
                        }
                    });
                    editing.set(None);
                }
                Err(err) => error.set(err.to_string()),
            }
        });
    };

    view! {
        <PageShell>
            <h1 class="page__title">"Manage Products"</h1>
            <ErrorText message=error.into()/>
            <Show when=move || !loading.get() fallback=LoadingText>
                <Show
                    when=move || editing.get().is_none()
                    fallback=move || {
                        let submit_edit = submit_edit.clone();
                        view! {
                            <form class="form card card--narrow" on:submit=submit_edit>
                                <h2 class="card__title">"Edit Product"</h2>
                                <label class="form__label">
                                    "Name"
                                    <input
                                        class="form__input"
                                        type="text"
                                        prop:value=move || edit_name.get()
                                        on:input=move |ev| edit_name.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="form__label">
                                    "Price"
                                    <input
                                        class="form__input"
                                        type="number"
                                        min="0"
                                        step="0.01"
                                        prop:value=move || edit_price.get()
                                        on:input=move |ev| edit_price.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="form__label">
                                    "Description"
                                    <input
                                        class="form__input"
                                        type="text"
                                        prop:value=move || edit_description.get()
                                        on:input=move |ev| edit_description.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="form__label">
                                    "Category"
                                    <input
                                        class="form__input"
                                        type="text"
                                        prop:value=move || edit_category.get()
                                        on:input=move |ev| edit_category.set(event_target_value(&ev))
                                    />
                                </label>
                                <div class="row">
                                    <button class="btn btn--primary" type="submit">"Save"</button>
                                    <button class="btn" type="button" on:click=move |_| editing.set(None)>
                                        "Cancel"
                                    </button>
                                </div>
                            </form>
                        }
                    }
                >
                    <Show when=move || !categories.with(Vec::is_empty)>
                        <p class="muted">
                            {move || {
                                categories.with(|list| {
                                    let names: Vec<&str> =
                                        list.iter().map(|c| c.name.as_str()).collect();
                                    format!("Categories: {}", names.join(", "))
                                })
                            }}
                        </p>
                    </Show>
                    <div class="grid">
                        <For
                            each=move || products.get()
                            key=|product| product.product_id
                            children=move |product: Product| {
                                let id = product.product_id;
                                let start_edit = start_edit.clone();
                                let for_edit = product.clone();
                                view! {
                                    <div class="card">
                                        <h3 class="card__title">{product.name.clone()}</h3>
                                        <p class="card__price">{format!("${:.2}", product.price)}</p>
                                        <p class="muted">
                                            {product
                                                .category
                                                .as_ref()
                                                .map(|c| c.name.clone())
                                                .unwrap_or_default()}
                                        </p>
                                        <div class="row">
                                            <button class="btn" on:click=move |_| start_edit(for_edit.clone())>
                                                "Edit"
                                            </button>
                                            <button class="btn btn--danger" on:click=move |_| delete(id)>
                                                "Delete"
                                            </button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </PageShell>
    }
}
