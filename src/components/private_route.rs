//! Wrapper that gates protected routes on the persisted token.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::notices::Notices;
use crate::util::guard::{enforce, evaluate};
use crate::util::storage::{BrowserStorage, TokenStorage};

/// Render `children` when a token is stored, otherwise notify and redirect.
///
/// The decision runs once when the route mounts, so a denial produces a
/// single notice.
#[component]
pub fn PrivateRoute(children: Children) -> impl IntoView {
    let notices = expect_context::<RwSignal<Notices>>();
    let decision = evaluate(BrowserStorage.load_token().as_deref());

    let redirect = notices.try_update(|n| enforce(&decision, n)).flatten();
    match redirect {
        None => children().into_any(),
        Some(route) => view! { <Redirect path=route.path()/> }.into_any(),
    }
}
