//! Edit form for a single category's name and active flag.

#[cfg(test)]
#[path = "category_edit_test.rs"]
mod category_edit_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::category_details::fetch_category;
use crate::app::AppRoute;
use crate::net::api::{CategoryApi, HttpApi};
use crate::net::error::ApiError;
use crate::net::types::Category;
use crate::util::storage::{BrowserStorage, TokenStorage, require_token};

pub const UPDATE_FAILURE: &str = "Failed to update category.";

/// Send the edited category; on success the dashboard is next.
///
/// # Errors
///
/// Returns an [`ApiError`] if no token is stored or the request fails.
pub async fn save_category<Api, Storage>(api: &Api, storage: &Storage, category: &Category) -> Result<AppRoute, ApiError>
where
    Api: CategoryApi + ?Sized,
    Storage: TokenStorage + ?Sized,
{
    let token = require_token(storage)?;
    api.update_category(&token, category).await?;
    log::info!("category {}: updated", category.id);
    Ok(AppRoute::Dashboard)
}

#[component]
pub fn CategoryEditPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<HttpApi>());
    let params = use_params_map();
    let category = RwSignal::new(None::<Category>);

    Effect::new(move || {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        category.set(None);
        leptos::task::spawn_local(async move {
            match fetch_category(&api.get_value(), &BrowserStorage, &id).await {
                Ok(found) => category.set(Some(found)),
                Err(e) => log::warn!("category {id}: fetch for edit failed: {e}"),
            }
        });
    });

    view! {
        <Show
            when=move || category.with(Option::is_some)
            fallback=|| view! { <div class="loading">"Loading..."</div> }
        >
            {move || category.get().map(|initial| view! { <CategoryEditForm initial=initial/> })}
        </Show>
    }
}

#[component]
fn CategoryEditForm(initial: Category) -> impl IntoView {
    let api = StoredValue::new(expect_context::<HttpApi>());
    let navigate = use_navigate();

    let id = initial.id;
    let name = RwSignal::new(initial.name);
    let is_active = RwSignal::new(initial.is_active);
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let category = Category { id: id.clone(), name: name.get_untracked(), is_active: is_active.get_untracked() };
        message.set(String::new());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match save_category(&api.get_value(), &BrowserStorage, &category).await {
                Ok(route) => navigate(&route.path(), NavigateOptions::default()),
                Err(e) => {
                    log::warn!("category {}: update failed: {e}", category.id);
                    message.set(UPDATE_FAILURE.to_owned());
                }
            }
        });
    };

    view! {
        <div class="category-edit">
            <h2>"Edit Category"</h2>
            <form class="category-form" on:submit=on_submit>
                <input
                    class="category-form__input"
                    type="text"
                    id="name"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <label class="category-form__check">
                    <input
                        type="checkbox"
                        id="isActive"
                        prop:checked=move || is_active.get()
                        on:change=move |ev| is_active.set(event_target_checked(&ev))
                    />
                    "Active"
                </label>
                <button class="btn btn--primary" type="submit">"Save"</button>
                <Show when=move || !message.get().is_empty()>
                    <p class="category-edit__error">{move || message.get()}</p>
                </Show>
            </form>
        </div>
    }
}
