//! Root application component with routing and the content provider.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content;
use crate::pages::proposal::ProposalPage;

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
/// Loads the page content once, provides it as context, and publishes the
/// page title and description.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = content::load();
    let title = content.meta.title.clone();
    let description = content.meta.description.clone();
    provide_context(content);

    view! {
        <Stylesheet id="leptos" href="/pkg/valentine.css"/>
        <Title text=title/>
        <Meta name="description" content=description/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ProposalPage/>
            </Routes>
        </Router>
    }
}
