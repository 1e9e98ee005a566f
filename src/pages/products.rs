//! Public product catalog listing.

use leptos::prelude::*;

use crate::components::layout::{LoadingText, PageShell};
use crate::net::api;

#[component]
pub fn ProductListPage() -> impl IntoView {
    let products = LocalResource::new(|| api::fetch_products());

    view! {
        <PageShell>
            <h1 class="page__title">"Products"</h1>
            <Suspense fallback=LoadingText>
                {move || {
                    products.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="muted">"No products available."</p> }.into_any()
                        }
                        Ok(list) => view! {
                            <div class="grid">
                                {list
                                    .into_iter()
                                    .map(|product| {
                                        let href = format!("/product/{}", product.product_id);
                                        view! {
                                            <div class="card">
                                                <h2 class="card__title">{product.name}</h2>
                                                <p class="card__price">{format!("${:.2}", product.price)}</p>
                                                <p class="muted">
                                                    {product.description.unwrap_or_default()}
                                                </p>
                                                <a class="btn btn--primary" href=href>"View Details"</a>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any(),
                        Err(_) => view! { <p class="status status--error">"Failed to load products"</p> }
                            .into_any(),
                    })
                }}
            </Suspense>
        </PageShell>
    }
}
