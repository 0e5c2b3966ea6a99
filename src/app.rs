//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{private_route::PrivateRoute, toast_host::ToastHost};
use crate::config::AppConfig;
use crate::net::api::HttpApi;
use crate::pages::{
    category_details::CategoryDetailsPage, category_edit::CategoryEditPage, dashboard::DashboardPage,
    login::LoginPage, not_found::NotFoundPage, register::RegisterPage,
};
use crate::state::notices::Notices;
use crate::state::session::SessionStore;

/// Navigable screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Register,
    Login,
    Dashboard,
    CategoryDetails(String),
    CategoryEdit(String),
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            AppRoute::Home => "/".to_owned(),
            AppRoute::Register => "/register".to_owned(),
            AppRoute::Login => "/login".to_owned(),
            AppRoute::Dashboard => "/dashboard".to_owned(),
            AppRoute::CategoryDetails(id) => format!("/category/{id}"),
            AppRoute::CategoryEdit(id) => format!("/category/edit/{id}"),
        }
    }
}

/// Root application component.
///
/// Creates the process-wide session store, mirrors it into a signal for
/// reactive views, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new();
    let session = RwSignal::new(store.read());
    let subscription = store.subscribe(move |next| session.set(next.clone()));
    on_cleanup({
        let store = store.clone();
        move || store.unsubscribe(subscription)
    });

    provide_context(store);
    provide_context(session);
    provide_context(RwSignal::new(Notices::default()));
    provide_context(HttpApi::new(AppConfig::from_build_env()));

    view! {
        <Title text="Category Dashboard"/>

        <Router>
            <ToastHost/>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=RegisterPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <PrivateRoute><DashboardPage/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("category"), ParamSegment("id"))
                        view=|| view! { <PrivateRoute><CategoryDetailsPage/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("category"), StaticSegment("edit"), ParamSegment("id"))
                        view=|| view! { <PrivateRoute><CategoryEditPage/></PrivateRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
