//! Authentication state shared by every view.
//!
//! `AuthStore` is a cheap handle over reactive signals. The boot sequence
//! writes the token through the [`Session`] trait; views read it to guard
//! routes and to render the user badge.

use std::fmt;

use leptos::logging;
use leptos::prelude::*;

use crate::api::{ApiClient, ApiError};
use crate::bootstrap::{Browser, Session, StorageEvictor};
use crate::config::BootConfig;
use crate::types::User;

#[derive(Clone)]
pub struct AuthStore {
    pub token: RwSignal<Option<String>>,
    pub user: RwSignal<Option<User>>,
    loading: RwSignal<bool>,
    storage_key: String,
    api: ApiClient,
    evictor: Option<StorageEvictor>,
}

impl fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthStore")
            .field("token", &self.token)
            .field("user", &self.user)
            .field("loading", &self.loading)
            .field("storage_key", &self.storage_key)
            .field("api", &self.api)
            .finish_non_exhaustive()
    }
}

impl AuthStore {
    #[must_use]
    pub fn new(api: ApiClient, storage_key: impl Into<String>, token: Option<String>) -> Self {
        Self {
            token: RwSignal::new(token),
            user: RwSignal::new(None),
            loading: RwSignal::new(false),
            storage_key: storage_key.into(),
            api,
            evictor: None,
        }
    }

    /// Lets a rejected token be dropped from durable storage as well.
    #[must_use]
    pub fn with_evictor(mut self, evictor: StorageEvictor) -> Self {
        self.evictor = Some(evictor);
        self
    }

    /// Builds the store from whatever a previous visit left in durable
    /// storage. Unreadable storage means a signed-out start.
    pub fn restore<B: Browser + ?Sized>(browser: &B, config: &BootConfig) -> Self {
        let origin = browser
            .origin()
            .inspect_err(|err| logging::warn!("page origin unknown, API calls will fail: {err}"))
            .unwrap_or_default();
        let token = browser
            .load_item(&config.storage_key)
            .inspect_err(|err| logging::warn!("could not restore session: {err}"))
            .ok()
            .flatten()
            .filter(|token| !token.is_empty());
        let store = Self::new(ApiClient::new(&origin, &config.api_base), &config.storage_key, token);
        match browser.storage_evictor() {
            Some(evictor) => store.with_evictor(evictor),
            None => store,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// A token is held, no profile is loaded and no request is in flight.
    pub fn needs_profile(&self) -> bool {
        self.is_authenticated() && self.user.with(Option::is_none) && !self.loading.get_untracked()
    }

    pub fn set_token(&self, token: String) {
        self.token.set(Some(token));
    }

    /// Loads the profile in the background; the result only lands in the
    /// `user` signal.
    pub fn fetch_user(&self) {
        self.loading.set(true);
        let store = self.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = store.refresh_user().await {
                logging::warn!("could not load user profile: {err}");
            }
        });
    }

    /// Fetches the profile for the current token. A 401 signs the session
    /// out in memory and in durable storage, unless the token changed while
    /// the request was running.
    pub async fn refresh_user(&self) -> Result<User, ApiError> {
        let Some(token) = self.token.get_untracked() else {
            self.loading.set(false);
            return Err(ApiError::MissingToken);
        };
        self.loading.set(true);
        let result = self.api.current_user(&token).await;
        self.loading.set(false);

        match &result {
            Ok(user) => self.user.set(Some(user.clone())),
            Err(ApiError::Unauthorized) => {
                if self.token.get_untracked().as_deref() == Some(token.as_str()) {
                    self.token.set(None);
                    self.user.set(None);
                    self.evict_stored_token();
                }
            }
            Err(_) => {}
        }
        result
    }

    fn evict_stored_token(&self) {
        let Some(evict) = &self.evictor else {
            return;
        };
        if let Err(err) = evict(&self.storage_key) {
            logging::warn!("rejected token could not be removed from storage: {err}");
        }
    }

    /// Forgets the session in memory and in durable storage.
    pub fn logout<B: Browser + ?Sized>(&self, browser: &B) {
        self.token.set(None);
        self.user.set(None);
        if let Err(err) = browser.remove_item(&self.storage_key) {
            logging::warn!("stored token could not be removed: {err}");
        }
    }
}

impl Session for AuthStore {
    fn set_token(&self, token: String) {
        Self::set_token(self, token);
    }

    fn fetch_user(&self) {
        Self::fetch_user(self);
    }
}
