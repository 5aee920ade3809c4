//! Demo login: any non-empty email and password signs in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{LoginError, Session};
use crate::util::auth::replace_options;
use crate::util::delay::sleep_ms;

/// Simulated verification latency before the session flag is committed.
pub const LOGIN_DELAY_MS: u64 = 500;

/// Sign in and return where to go next, consuming the remembered path.
///
/// # Errors
///
/// Returns the verifier's [`LoginError`]; the remembered path is kept so a
/// retry still lands on it.
pub fn complete_login(session: &Session, email: &str, password: &str) -> Result<String, LoginError> {
    session.login(email, password)?;
    Ok(session.take_redirect_target())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        busy.set(true);
        let session = session.clone();
        let navigate = navigate.clone();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        leptos::task::spawn_local(async move {
            sleep_ms(LOGIN_DELAY_MS).await;
            match complete_login(&session, &email_value, &password_value) {
                Ok(target) => {
                    busy.set(false);
                    navigate(&target, replace_options());
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">"🏛️"</div>
                    <h1>"Heritage Atlas"</h1>
                    <p>"Welcome back! Please login to continue."</p>
                </div>
                <form class="login-form" on:submit=on_submit>
                    {move || error.get().map(|message| view! { <div class="error-message">{message}</div> })}
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            required
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            required
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                    <div class="login-footer">
                        <p>"Demo: Use any email and password to login"</p>
                    </div>
                </form>
            </div>
        </div>
    }
}
