//! Dashboard page: add, list, and delete categories.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. Categories are fetched once on mount when a token is
//! stored; create/delete results are folded into `CategoriesState` so the
//! table updates without a refetch.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::AppRoute;
use crate::components::field_error::FieldError;
use crate::net::api::{CategoryApi, HttpApi};
use crate::net::error::ApiError;
use crate::net::types::{Category, CategoryDraft};
use crate::state::categories::CategoriesState;
use crate::state::session::Session;
use crate::util::storage::{BrowserStorage, TokenStorage, require_token};
use crate::util::validation::{CategoryErrors, CategoryForm, validate_category};

/// Fetch the category list, or `None` when no token is stored.
pub async fn load_categories<Api, Storage>(api: &Api, storage: &Storage) -> Option<Result<Vec<Category>, ApiError>>
where
    Api: CategoryApi + ?Sized,
    Storage: TokenStorage + ?Sized,
{
    let token = storage.load_token()?;
    Some(api.list_categories(&token).await)
}

/// Create a category with the stored token.
///
/// # Errors
///
/// Returns an [`ApiError`] if no token is stored or the request fails.
pub async fn add_category<Api, Storage>(api: &Api, storage: &Storage, draft: &CategoryDraft) -> Result<Category, ApiError>
where
    Api: CategoryApi + ?Sized,
    Storage: TokenStorage + ?Sized,
{
    let token = require_token(storage)?;
    api.create_category(&token, draft).await
}

/// Delete a category with the stored token.
///
/// # Errors
///
/// Returns an [`ApiError`] if no token is stored or the request fails.
pub async fn remove_category<Api, Storage>(api: &Api, storage: &Storage, id: &str) -> Result<(), ApiError>
where
    Api: CategoryApi + ?Sized,
    Storage: TokenStorage + ?Sized,
{
    let token = require_token(storage)?;
    api.delete_category(&token, id).await
}

/// Header text describing where the current sign-in came from.
///
/// After a reload the in-memory session is empty even though the stored
/// token still opens this page.
pub fn session_label(session: &Session) -> &'static str {
    match session.token.as_deref() {
        Some(token) if !token.is_empty() => "Signed in",
        _ => "Signed in (saved session)",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<HttpApi>());
    let session = expect_context::<RwSignal<Session>>();
    let categories = RwSignal::new(CategoriesState { loading: true, ..CategoriesState::default() });

    leptos::task::spawn_local(async move {
        let api = api.get_value();
        match load_categories(&api, &BrowserStorage).await {
            Some(result) => categories.update(|s| s.apply_loaded(result)),
            None => categories.update(|s| s.loading = false),
        }
    });

    let name = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let errors = RwSignal::new(CategoryErrors::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = CategoryForm { name: name.get_untracked(), status: status.get_untracked() };
        let draft = match validate_category(&form) {
            Ok(draft) => draft,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(CategoryErrors::default());
        leptos::task::spawn_local(async move {
            let result = add_category(&api.get_value(), &BrowserStorage, &draft).await;
            if result.is_ok() {
                name.set(String::new());
                status.set(String::new());
            }
            categories.update(|s| s.apply_created(result));
        });
    };

    let on_delete = Callback::new(move |id: String| {
        leptos::task::spawn_local(async move {
            let result = remove_category(&api.get_value(), &BrowserStorage, &id).await;
            categories.update(|s| s.apply_deleted(&id, result));
        });
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard Page"</h1>
                <span class="dashboard-page__session">{move || session_label(&session.get())}</span>
            </header>

            <section class="dashboard-page__add">
                <h2>"Add New Category"</h2>
                <form class="category-form" on:submit=on_submit>
                    <div class="category-form__field">
                        <input
                            class="category-form__input"
                            type="text"
                            placeholder="Category Name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <FieldError message=Signal::derive(move || errors.get().name)/>
                    </div>
                    <div class="category-form__field">
                        <select
                            class="category-form__input"
                            prop:value=move || status.get()
                            on:change=move |ev| status.set(event_target_value(&ev))
                        >
                            <option value="">"Select Status"</option>
                            <option value="true">"Active"</option>
                            <option value="false">"Inactive"</option>
                        </select>
                        <FieldError message=Signal::derive(move || errors.get().status)/>
                    </div>
                    <button class="btn btn--primary" type="submit">"Add Category"</button>
                </form>
                <Show when=move || categories.with(|s| s.success.is_some())>
                    <p class="dashboard-page__success">
                        {move || categories.with(|s| s.success.clone().unwrap_or_default())}
                    </p>
                </Show>
                <Show when=move || categories.with(|s| s.error.is_some())>
                    <p class="dashboard-page__error">
                        {move || categories.with(|s| s.error.clone().unwrap_or_default())}
                    </p>
                </Show>
            </section>

            <section class="dashboard-page__list">
                <h2>"Categories"</h2>
                <Show
                    when=move || !categories.with(|s| s.loading)
                    fallback=|| view! { <p>"Loading categories..."</p> }
                >
                    <table class="category-table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Name"</th>
                                <th>"Status"</th>
                                <th>"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || categories.with(CategoriesState::ordered)
                                key=|category| category.id.clone()
                                let:category
                            >
                                <CategoryRow category=category on_delete=on_delete/>
                            </For>
                        </tbody>
                    </table>
                </Show>
            </section>
        </div>
    }
}

#[component]
fn CategoryRow(category: Category, on_delete: Callback<String>) -> impl IntoView {
    let navigate = use_navigate();
    let edit_path = AppRoute::CategoryEdit(category.id.clone()).path();
    let details_path = AppRoute::CategoryDetails(category.id.clone()).path();
    let delete_id = category.id.clone();

    view! {
        <tr>
            <td>{category.id.clone()}</td>
            <td>{category.name.clone()}</td>
            <td>{category.status_label()}</td>
            <td class="category-table__actions">
                <button
                    class="btn btn--primary"
                    on:click=move |_| navigate(&edit_path, NavigateOptions::default())
                >
                    "Edit"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                    "Delete"
                </button>
                <A href=details_path attr:class="btn btn--success">"Details"</A>
            </td>
        </tr>
    }
}
