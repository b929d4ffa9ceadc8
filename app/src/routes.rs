//! Page table and the guard the router consults before rendering a page.

use crate::auth::AuthStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    NotFound,
}

impl Page {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::NotFound => "/404",
        }
    }

    #[must_use]
    pub const fn requires_auth(self) -> bool {
        matches!(self, Self::Home)
    }

    /// Resolves a location path, ignoring any query or trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" => Self::Home,
            "/login" => Self::Login,
            _ => Self::NotFound,
        }
    }
}

/// Route guard bound to the auth store, which therefore has to exist first.
#[derive(Debug, Clone)]
pub struct Navigator {
    auth: AuthStore,
}

impl Navigator {
    #[must_use]
    pub const fn new(auth: AuthStore) -> Self {
        Self { auth }
    }

    pub fn admits(&self, page: Page) -> bool {
        !page.requires_auth() || self.auth.is_authenticated()
    }

    /// The page actually shown for `path`: guarded pages fall back to login,
    /// and a signed-in user visiting login is sent home.
    pub fn destination(&self, path: &str) -> Page {
        match Page::from_path(path) {
            Page::Login if self.auth.is_authenticated() => Page::Home,
            page if !self.admits(page) => Page::Login,
            page => page,
        }
    }
}
