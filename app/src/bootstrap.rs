//! The one-shot client boot sequence.
//!
//! `boot` assembles the [`AppContext`] (auth store first, router second),
//! consumes an authentication token handed over in the page URL and finally
//! mounts the view tree. The page environment is reached only through the
//! [`Browser`] trait and the store only through [`Session`], so the whole
//! sequence runs natively under test.

use std::sync::Arc;

use leptos::logging;
use thiserror::Error;

use crate::config::BootConfig;
use crate::context::AppContext;

#[derive(Debug, Error)]
pub enum BootError {
    #[error("no browser window is available")]
    NoWindow,
    #[error("failed to read page location: {0}")]
    Location(String),
    #[error("durable storage is unavailable")]
    StorageUnavailable,
    #[error("durable storage rejected the operation: {0}")]
    Storage(String),
    #[error("failed to rewrite history entry: {0}")]
    History(String),
    #[error("mount target '{0}' not found")]
    MissingAnchor(String),
}

/// Removes a durable storage key from outside the boot sequence, e.g. from a
/// background request that finds the stored token rejected.
pub type StorageEvictor = Arc<dyn Fn(&str) -> Result<(), BootError> + Send + Sync>;

/// The parts of the page the boot sequence touches.
#[cfg_attr(test, mockall::automock)]
pub trait Browser {
    /// Raw query string of the current location, including the leading `?`
    /// when one is present.
    fn query_string(&self) -> Result<String, BootError>;
    /// Scheme, host and port of the current page.
    fn origin(&self) -> Result<String, BootError>;
    fn load_item(&self, key: &str) -> Result<Option<String>, BootError>;
    fn store_item(&self, key: &str, value: &str) -> Result<(), BootError>;
    fn remove_item(&self, key: &str) -> Result<(), BootError>;
    /// Replaces the current history entry with `path`, keeping the document
    /// title. Must neither push an entry nor reload the page.
    fn replace_url(&self, path: &str) -> Result<(), BootError>;
    /// Storage access that outlives this handle. `None` when the page cannot
    /// provide one; stale tokens then stay stored until logout.
    fn storage_evictor(&self) -> Option<StorageEvictor> {
        None
    }
}

/// Authentication state as seen by the boot sequence.
#[cfg_attr(test, mockall::automock)]
pub trait Session {
    fn set_token(&self, token: String);
    /// Starts loading the user profile. Returns immediately; completion and
    /// failure are never reported back to the caller.
    fn fetch_user(&self);
}

/// What the token path did during a boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BootOutcome {
    pub token_applied: bool,
    pub persisted: bool,
    pub url_cleaned: bool,
}

/// Returns the first non-empty value of `param` in a form-encoded query.
#[must_use]
pub fn extract_token(query: &str, param: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

pub struct Bootstrap<'a> {
    config: &'a BootConfig,
}

impl<'a> Bootstrap<'a> {
    #[must_use]
    pub const fn new(config: &'a BootConfig) -> Self {
        Self { config }
    }

    /// Applies a URL token, if any, then mounts. Mount always runs last;
    /// its failure is the only error returned.
    pub fn run<B, S, M>(&self, browser: &B, session: &S, mount: M) -> Result<BootOutcome, BootError>
    where
        B: Browser + ?Sized,
        S: Session + ?Sized,
        M: FnOnce(&str) -> Result<(), BootError>,
    {
        let outcome = self.apply_url_token(browser, session);
        mount(&self.config.anchor)?;
        logging::log!("application mounted at {}", self.config.anchor);
        Ok(outcome)
    }

    fn apply_url_token<B, S>(&self, browser: &B, session: &S) -> BootOutcome
    where
        B: Browser + ?Sized,
        S: Session + ?Sized,
    {
        let query = match browser.query_string() {
            Ok(query) => query,
            Err(err) => {
                logging::warn!("skipping token handoff: {err}");
                return BootOutcome::default();
            }
        };
        let Some(token) = extract_token(&query, &self.config.token_param) else {
            return BootOutcome::default();
        };

        session.set_token(token.clone());
        let persisted = browser
            .store_item(&self.config.storage_key, &token)
            .inspect_err(|err| logging::warn!("token kept in memory only: {err}"))
            .is_ok();
        let url_cleaned = browser
            .replace_url(&self.config.landing_path)
            .inspect_err(|err| logging::warn!("token left in the address bar: {err}"))
            .is_ok();
        // Not awaited; the store logs its own failures.
        session.fetch_user();

        BootOutcome {
            token_applied: true,
            persisted,
            url_cleaned,
        }
    }
}

/// Runs the full sequence: build the context, hand over a URL token, mount.
///
/// `mount` receives the anchor selector and its own copy of the context.
pub fn boot<B, M>(browser: &B, config: BootConfig, mount: M) -> Result<BootOutcome, BootError>
where
    B: Browser + ?Sized,
    M: FnOnce(&str, AppContext) -> Result<(), BootError>,
{
    let context = AppContext::assemble(config, browser);
    let mounted = context.clone();
    Bootstrap::new(&context.config).run(browser, &context.auth, move |anchor| mount(anchor, mounted))
}
