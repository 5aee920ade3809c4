//! Navigation guard wiring for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The protected layout installs the guard once; it re-runs on every location
//! change inside the layout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::state::session::{GuardDecision, LOGIN_PATH, Session, redirect_target};

/// Navigation options for guard redirects: the protected entry is replaced
/// so Back does not bounce into the guard again.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Evaluate the guard for `pathname` + `search`, remembering the target when
/// the session is unauthenticated.
pub fn check_navigation(session: &Session, pathname: &str, search: &str) -> bool {
    let target = redirect_target(pathname, search);
    session.guard(&target) == GuardDecision::Allow
}

/// Track the current location and redirect to `/login` while unauthenticated.
///
/// `authorized` stays `false` until the first check passes, so protected
/// content never renders before the guard has run.
pub fn install_session_guard<F>(session: Session, authorized: RwSignal<bool>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let pathname = location.pathname.get();
        let search = location.search.get();
        let allowed = check_navigation(&session, &pathname, &search);
        authorized.set(allowed);
        if !allowed {
            navigate(LOGIN_PATH, replace_options());
        }
    });
}
