use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::{context::AppContext, routes::Page};

/// Sign-in page. Authentication itself happens on the backend, which sends
/// the browser back to `/?token=...` once it succeeds.
pub fn component() -> impl IntoView {
    let AppContext {
        auth,
        config,
        navigator,
    } = expect_context::<AppContext>();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let target = navigator.destination(Page::Login.path());
        if target != Page::Login {
            navigate(target.path(), NavigateOptions::default());
        }
    });

    view! {
        <Title text="Writer Studio \u{2013} Sign in"/>
        <section class="flex flex-col gap-6 items-start">
            <h1 class="text-5xl font-extrabold leading-tight text-[#ffef5c]">"Sign in to continue"</h1>
            <p class="text-gray-300">"Your drafts and projects are waiting behind your account."</p>
            <a
                href=config.login_url
                class="py-3 px-6 text-lg font-semibold transition-colors bg-[#ffef5c] text-[#1e1e1e] hover:bg-[#ffef5c]/90"
            >
                "Sign in"
            </a>
            <Show when=move || auth.is_loading() fallback=|| ()>
                <p class="text-sm italic text-gray-400">"Checking your session..."</p>
            </Show>
        </section>
    }
}
