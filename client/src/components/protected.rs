//! Layout for every route behind the session guard.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::state::session::Session;
use crate::util::auth::install_session_guard;
use crate::util::navigation::reload_on_reentry;

/// Header plus the matched child route, rendered only once the guard allows
/// the current location.
#[component]
pub fn ProtectedLayout() -> impl IntoView {
    let session = expect_context::<Session>();
    let authorized = RwSignal::new(false);
    install_session_guard(session, authorized, use_navigate());
    let on_click = reload_on_reentry();

    view! {
        <Show
            when=move || authorized.get()
            fallback=|| view! { <div class="loading">"Checking session..."</div> }
        >
            <div class="layout" on:click=on_click>
                <Header/>
                <main class="main-content">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}
