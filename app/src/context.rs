use crate::auth::AuthStore;
use crate::bootstrap::Browser;
use crate::config::BootConfig;
use crate::routes::Navigator;

/// Everything the mounted application shares, built once per page load and
/// provided to the view tree as a Leptos context.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: BootConfig,
    pub auth: AuthStore,
    pub navigator: Navigator,
}

impl AppContext {
    /// Registers the auth store, then the router guard that depends on it.
    pub fn assemble<B: Browser + ?Sized>(config: BootConfig, browser: &B) -> Self {
        let auth = AuthStore::restore(browser, &config);
        let navigator = Navigator::new(auth.clone());
        Self {
            config,
            auth,
            navigator,
        }
    }
}
