//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::protected::ProtectedLayout;
use crate::pages::{
    about::AboutPage, home::HomePage, login::LoginPage, map::MapPage, product_detail::ProductDetailPage,
    products::ProductsPage, upload::UploadPage,
};
use crate::state::navigation::NavigationEpoch;
use crate::state::session::{LANDING_PATH, Session};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the browser session and navigation epoch and sets up the route
/// table. Everything but `/login` sits behind the session guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Session::browser());
    provide_context(RwSignal::new(NavigationEpoch::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/heritage-atlas.css"/>
        <Title text="Heritage Atlas"/>

        <Router>
            <div class="App">
                <Routes fallback=|| view! { <Redirect path=LANDING_PATH/> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <ParentRoute path=StaticSegment("") view=ProtectedLayout>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("products") view=ProductsPage/>
                        <Route path=(StaticSegment("products"), ParamSegment("id")) view=ProductDetailPage/>
                        <Route path=StaticSegment("upload") view=UploadPage/>
                        <Route path=StaticSegment("map") view=MapPage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                    </ParentRoute>
                </Routes>
            </div>
        </Router>
    }
}
