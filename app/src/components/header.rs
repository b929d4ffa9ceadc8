use icondata::FiUser;
use leptos::logging;
use leptos::{ev, prelude::*, svg::svg};
use leptos_router::components::A;

use crate::browser::WebBrowser;
use crate::context::AppContext;
use crate::routes::Page;

pub fn component() -> impl IntoView {
    let AppContext { auth, .. } = expect_context::<AppContext>();
    let user = auth.user;
    let token = auth.token;

    // The protected route reacts to the cleared token and redirects to login.
    let logout = move |_: ev::MouseEvent| match WebBrowser::new() {
        Ok(browser) => auth.logout(&browser),
        Err(err) => logging::warn!("logout without browser access: {err}"),
    };

    view! {
        <header class="fixed top-0 right-0 left-0 z-10 py-6 px-4 md:px-6 bg-[#1e1e1e]/80 backdrop-blur-md">
            <div class="container mx-auto max-w-5xl">
                <div class="flex flex-row justify-between items-center text-white">
                    <div class="text-lg font-bold transition-all duration-500 sm:text-3xl hover:text-[#ffef5c]">
                        <A href=Page::Home.path()>"studio"</A>
                    </div>
                    <Show when=move || token.with(Option::is_some) fallback=|| view! { <A href=Page::Login.path()>"sign in"</A> }>
                        <div class="flex flex-row gap-3 items-center text-sm">
                            {svg().attr("viewBox", FiUser.view_box).attr("innerHTML", FiUser.data).attr("style", "filter: brightness(0) invert(1);").class("size-4")}
                            <span>{move || user.get().map(|user| user.display_name().to_owned()).unwrap_or_default()}</span>
                            <button class="hover:underline text-[#ffef5c]" on:click=logout.clone()>"sign out"</button>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
