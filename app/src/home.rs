//! Landing page for a signed-in writer.
//!
//! Shows the loaded profile, a spinner while the profile request is running,
//! and a hint when the backend could not provide one.

use leptos::prelude::*;
use leptos_meta::{Title, TitleProps};

use crate::{components::loader, context::AppContext};

pub fn component() -> impl IntoView {
    let AppContext { auth, .. } = expect_context::<AppContext>();
    let user = auth.user;

    let pending = move || {
        if auth.is_loading() {
            loader::component().into_any()
        } else {
            view! {
                <p class="text-gray-400">"Your profile could not be loaded. Try signing in again."</p>
            }
            .into_any()
        }
    };

    view! {
        {Title(TitleProps::builder().text("Writer Studio \u{2013} Home").build())}
        <section class="flex flex-col gap-4">
            <Show when=move || user.with(Option::is_some) fallback=pending>
                {move || {
                    user.get().map(|user| {
                        view! {
                            <h1 class="text-3xl font-bold text-[#ffef5c]">
                                {format!("Welcome back, {}", user.display_name())}
                            </h1>
                            <p class="text-gray-300">{user.email.clone().unwrap_or_default()}</p>
                            {user.is_admin.then(|| view! {
                                <span class="py-1 px-2 w-fit text-xs text-black rounded-lg bg-[#ffef5c]">"admin"</span>
                            })}
                        }
                    })
                }}
            </Show>
        </section>
    }
}
