//! Root component and SSR document shell.
//!
//! ARCHITECTURE
//! ============
//! `App` provides the page-wide `ScrollState` signal and mounts the landing
//! page at `/`. `shell` wraps it in the HTML document the server renders.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::content::{HERO_TAGLINE, ORG_NAME, ORG_SHORT};
use crate::pages::landing::LandingPage;
use crate::state::scroll::ScrollState;

/// HTML document rendered by the server around `App`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(ScrollState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/uora.css" />
        <Title text=format!("{ORG_SHORT} | {ORG_NAME}") />
        <Meta name="description" content=HERO_TAGLINE />
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=StaticSegment("") view=LandingPage />
            </Routes>
        </Router>
    }
}
