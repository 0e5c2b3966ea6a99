//! Read-only view of a single category.

#[cfg(test)]
#[path = "category_details_test.rs"]
mod category_details_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api::{CategoryApi, HttpApi};
use crate::net::error::ApiError;
use crate::net::types::Category;
use crate::util::storage::{BrowserStorage, TokenStorage, require_token};

/// Fetch one category with the stored token.
///
/// # Errors
///
/// Returns an [`ApiError`] if no token is stored or the request fails.
pub async fn fetch_category<Api, Storage>(api: &Api, storage: &Storage, id: &str) -> Result<Category, ApiError>
where
    Api: CategoryApi + ?Sized,
    Storage: TokenStorage + ?Sized,
{
    let token = require_token(storage)?;
    api.get_category(&token, id).await
}

#[component]
pub fn CategoryDetailsPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<HttpApi>());
    let params = use_params_map();
    let category = RwSignal::new(None::<Category>);

    Effect::new(move || {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        category.set(None);
        leptos::task::spawn_local(async move {
            match fetch_category(&api.get_value(), &BrowserStorage, &id).await {
                Ok(found) => category.set(Some(found)),
                Err(e) => log::warn!("category {id}: {e}"),
            }
        });
    });

    view! {
        <Show
            when=move || category.with(Option::is_some)
            fallback=|| {
                view! {
                    <div class="loading">
                        <h2>"Loading..."</h2>
                        <div class="loading__spinner"></div>
                    </div>
                }
            }
        >
            {move || {
                category
                    .get()
                    .map(|c| {
                        view! {
                            <div class="category-details">
                                <h2>"Category Details"</h2>
                                <p><strong>"ID: "</strong>{c.id.clone()}</p>
                                <p><strong>"Name: "</strong>{c.name.clone()}</p>
                                <p><strong>"Status: "</strong>{c.status_label()}</p>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
