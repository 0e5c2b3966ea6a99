//! Registration page; also served at `/`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The register endpoint issues no token. A successful registration still
//! dispatches `Success` with an empty placeholder so the session error is
//! cleared, and then sends the user to the login page. Storage is untouched.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::AppRoute;
use crate::components::field_error::FieldError;
use crate::net::api::{AuthApi, HttpApi};
use crate::state::session::{SessionEvent, SessionStore};
use crate::util::validation::{RegisterErrors, RegisterForm, validate_registration};

/// Fallback when the server rejects a registration without an explanation.
pub const REGISTER_REJECTED: &str = "Registration failed.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    Invalid(RegisterErrors),
    Rejected(String),
    Navigate(AppRoute),
}

/// Validate, call the API, and record the outcome in the session store.
pub async fn submit_registration<Api>(api: &Api, store: &SessionStore, form: &RegisterForm) -> RegisterOutcome
where
    Api: AuthApi + ?Sized,
{
    let request = match validate_registration(form) {
        Ok(request) => request,
        Err(errors) => return RegisterOutcome::Invalid(errors),
    };

    match api.register(&request).await {
        Ok(()) => {
            store.dispatch(SessionEvent::Success(String::new()));
            log::info!("register: account created");
            RegisterOutcome::Navigate(AppRoute::Login)
        }
        Err(e) => {
            log::warn!("register: {e}");
            let message = e.user_message(REGISTER_REJECTED);
            store.dispatch(SessionEvent::Failure(message.clone()));
            RegisterOutcome::Rejected(message)
        }
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(RegisterErrors::default());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = RegisterForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        busy.set(true);
        message.set(String::new());

        let api = api.clone();
        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_registration(&api, &store, &form).await;
            busy.set(false);
            match outcome {
                RegisterOutcome::Invalid(field_errors) => errors.set(field_errors),
                RegisterOutcome::Rejected(text) => {
                    errors.set(RegisterErrors::default());
                    message.set(text);
                }
                RegisterOutcome::Navigate(route) => navigate(&route.path(), NavigateOptions::default()),
            }
        });
    };

    view! {
        <div class="auth-page" data-testid="register">
            <div class="auth-card">
                <h2>"Register"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "Name:"
                        <input
                            class="auth-input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError message=Signal::derive(move || errors.get().name)/>
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
                        "Register"
                    </button>
                    <Show when=move || !message.get().is_empty()>
                        <p class="auth-message auth-message--error">{move || message.get()}</p>
                    </Show>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href=AppRoute::Login.path()>"Login here"</A>
                    "."
                </p>
            </div>
        </div>
    }
}
