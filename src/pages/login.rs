//! Login page: email + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the token is written to storage first, then pushed into the
//! session store, then the user is sent to the dashboard. The two writes are
//! independent; a storage failure is logged and the dispatch still happens.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::AppRoute;
use crate::components::field_error::FieldError;
use crate::net::api::{AuthApi, HttpApi};
use crate::state::session::{SessionEvent, SessionStore};
use crate::util::storage::{BrowserStorage, TokenStorage};
use crate::util::validation::{LoginErrors, LoginForm, validate_login};

/// Fallback when the server rejects a login without an explanation.
pub const LOGIN_REJECTED: &str = "Failed to login.";

/// Result of one login submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Form failed validation; nothing was sent.
    Invalid(LoginErrors),
    /// Login failed; the message was also dispatched to the session store.
    Rejected(String),
    /// Login succeeded; go here next.
    Navigate(AppRoute),
}

/// Validate, call the API, then persist and record the outcome.
pub async fn submit_login<Api, Storage>(
    api: &Api,
    storage: &Storage,
    store: &SessionStore,
    form: &LoginForm,
) -> LoginOutcome
where
    Api: AuthApi + ?Sized,
    Storage: TokenStorage + ?Sized,
{
    let request = match validate_login(form) {
        Ok(request) => request,
        Err(errors) => return LoginOutcome::Invalid(errors),
    };

    match api.login(&request).await {
        Ok(token) => {
            if let Err(e) = storage.store_token(&token) {
                log::warn!("login: token not persisted: {e}");
            }
            store.dispatch(SessionEvent::Success(token));
            log::info!("login: signed in");
            LoginOutcome::Navigate(AppRoute::Dashboard)
        }
        Err(e) => {
            log::warn!("login: {e}");
            let message = e.user_message(LOGIN_REJECTED);
            store.dispatch(SessionEvent::Failure(message.clone()));
            LoginOutcome::Rejected(message)
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginErrors::default());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        busy.set(true);
        message.set(String::new());

        let api = api.clone();
        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_login(&api, &BrowserStorage, &store, &form).await;
            busy.set(false);
            match outcome {
                LoginOutcome::Invalid(field_errors) => errors.set(field_errors),
                LoginOutcome::Rejected(text) => {
                    errors.set(LoginErrors::default());
                    message.set(text);
                }
                LoginOutcome::Navigate(route) => navigate(&route.path(), NavigateOptions::default()),
            }
        });
    };

    view! {
        <div class="auth-page" data-testid="login">
            <div class="auth-card">
                <h2>"Login"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "Email:"
                        <input
                            class="auth-input"
                            type="text"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError message=Signal::derive(move || errors.get().email)/>
                    <label class="auth-label">
                        "Password:"
                        <input
                            class="auth-input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError message=Signal::derive(move || errors.get().password)/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                    <Show when=move || !message.get().is_empty()>
                        <p class="auth-message auth-message--error">{move || message.get()}</p>
                    </Show>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href=AppRoute::Register.path()>"Register here"</A>
                    "."
                </p>
            </div>
        </div>
    }
}
