//! Error page rendered for unknown routes.

use http::status::StatusCode;
use leptos::prelude::*;
use leptos_router::components::A;
use thiserror::Error;

use crate::routes::Page;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Lists every `AppError` found in `errors`; other error types are skipped.
pub fn component(errors: Errors) -> impl IntoView {
    let errors: Vec<AppError> = errors
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
        .collect();
    let heading = if errors.len() > 1 { "Errors" } else { "Error" };

    view! {
        <div class="grid place-content-center px-4 h-full antialiased">
            <h1 class="mb-6 text-center">{heading}</h1>
            <For
                each=move || errors.clone().into_iter().enumerate()
                key=|(index, _error)| *index
                children=|(_, error)| {
                    view! {
                        <div class="flex flex-col gap-1 justify-center items-center">
                            <h1 class="text-xl tracking-widest text-gray-400 uppercase">
                                {format!("{}| {error}", error.status_code())}
                            </h1>
                            <div class="mt-6 text-center duration-200 hover:text-[#68b5fc]">
                                <A href=Page::Home.path()>"Go back home"</A>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_display() {
        assert_eq!(AppError::NotFound.to_string(), "Not Found");
    }
}
