// Core application modules and components
use crate::components::{error_template, header};
use crate::routes::Page;
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{footer, p},
    prelude::*,
};
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ProtectedRoute, Route, Router, Routes},
};

pub mod api;
pub mod auth;
pub mod bootstrap;
pub mod browser;
mod components;
pub mod config;
pub mod context;
mod home;
mod login;
pub mod routes;
pub mod types;

pub use bootstrap::{BootError, BootOutcome, Browser, Session, boot};
pub use context::AppContext;

/// Root view. Provides `context` to every page below it.
#[must_use]
pub fn component(context: AppContext) -> impl IntoView {
    provide_meta_context();
    let auth = context.auth.clone();
    let navigator = context.navigator.clone();
    provide_context(context);

    // Restored sessions load their profile here; a URL token is already being fetched.
    Effect::new(move |_| {
        if auth.needs_profile() {
            auth.fetch_user();
        }
    });

    view! {
        <Title text="Writer Studio"/>
        <Router>
            <div class="overflow-auto min-h-screen text-white font-sans bg-[#1e1e1e]">
                {header::component}
                <main class="container flex flex-col gap-8 px-4 pt-10 pb-14 mx-auto mt-16 max-w-4xl md:px-0">
                    <Routes fallback=|| {
                        let mut outside_errors = Errors::default();
                        outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                        error_template::component(outside_errors)
                    }>
                        <ProtectedRoute
                            path=StaticSegment("")
                            view=home::component
                            condition=move || Some(navigator.admits(Page::Home))
                            redirect_path=|| Page::Login.path()
                        />
                        <Route path=StaticSegment("login") view=login::component/>
                    </Routes>
                </main>
                {footer_component()}
            </div>
        </Router>
    }
}

fn footer_component() -> impl IntoView {
    footer()
        .class("fixed right-0 bottom-0 left-0 z-10 py-2 text-center md:py-4 bg-[#1e1e1e]/80 backdrop-blur-md")
        .child(
            p().class("text-gray-400")
                .child(format!("Writer Studio \u{a9} {}", Utc::now().year())),
        )
}
