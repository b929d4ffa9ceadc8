use leptos::{
    html::{div, p},
    prelude::*,
};

/// Spinner shown while the user profile is on its way.
pub fn component() -> impl IntoView {
    div()
        .class("flex flex-col gap-2 justify-center items-center py-12")
        .child((
            div().class("rounded-full border-2 border-gray-500 animate-spin size-8 border-t-[#ffef5c]"),
            p().class("text-sm italic text-gray-400")
                .child("Loading your profile..."),
        ))
}
