use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Page not found"</h2>
            <A href=AppRoute::Home.path()>"Back to start"</A>
        </div>
    }
}
