//! End-to-end runs of the boot sequence against an in-memory page.

use app::bootstrap::{BootError, Bootstrap, Browser, Session, boot};
use app::config::BootConfig;
use app::routes::Page;
use leptos::prelude::GetUntracked as _;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// A page with a history stack, a title and durable storage.
struct MemoryPage {
    entries: RefCell<Vec<String>>,
    cursor: Cell<usize>,
    titles: RefCell<Vec<String>>,
    title: String,
    storage: RefCell<HashMap<String, String>>,
    storage_writes: Cell<usize>,
    events: Rc<RefCell<Vec<&'static str>>>,
}

impl MemoryPage {
    fn new(history: &[&str], events: Rc<RefCell<Vec<&'static str>>>) -> Self {
        Self {
            entries: RefCell::new(history.iter().map(|s| (*s).to_owned()).collect()),
            cursor: Cell::new(history.len() - 1),
            titles: RefCell::new(vec!["Writer Studio".to_owned(); history.len()]),
            title: "Writer Studio".to_owned(),
            storage: RefCell::new(HashMap::new()),
            storage_writes: Cell::new(0),
            events,
        }
    }

    fn current_url(&self) -> String {
        self.entries.borrow()[self.cursor.get()].clone()
    }

    fn back(&self) {
        self.cursor.set(self.cursor.get().saturating_sub(1));
    }

    fn entry_count(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl Browser for MemoryPage {
    fn query_string(&self) -> Result<String, BootError> {
        let url = self.current_url();
        Ok(url.find('?').map(|at| url[at..].to_owned()).unwrap_or_default())
    }

    fn origin(&self) -> Result<String, BootError> {
        Ok("https://studio.example".to_owned())
    }

    fn load_item(&self, key: &str) -> Result<Option<String>, BootError> {
        Ok(self.storage.borrow().get(key).cloned())
    }

    fn store_item(&self, key: &str, value: &str) -> Result<(), BootError> {
        self.events.borrow_mut().push("store");
        self.storage_writes.set(self.storage_writes.get() + 1);
        self.storage
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), BootError> {
        self.storage.borrow_mut().remove(key);
        Ok(())
    }

    fn replace_url(&self, path: &str) -> Result<(), BootError> {
        self.events.borrow_mut().push("replace");
        let cursor = self.cursor.get();
        self.entries.borrow_mut()[cursor] = path.to_owned();
        self.titles.borrow_mut()[cursor] = self.title.clone();
        Ok(())
    }
}

#[derive(Default)]
struct RecordingSession {
    token: RefCell<Option<String>>,
    fetches: Cell<usize>,
    events: Rc<RefCell<Vec<&'static str>>>,
}

impl Session for RecordingSession {
    fn set_token(&self, token: String) {
        self.events.borrow_mut().push("set_token");
        *self.token.borrow_mut() = Some(token);
    }

    fn fetch_user(&self) {
        self.events.borrow_mut().push("fetch_user");
        self.fetches.set(self.fetches.get() + 1);
    }
}

fn setup(history: &[&str]) -> (MemoryPage, RecordingSession, Rc<RefCell<Vec<&'static str>>>) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let page = MemoryPage::new(history, events.clone());
    let session = RecordingSession {
        events: events.clone(),
        ..Default::default()
    };
    (page, session, events)
}

fn run(page: &MemoryPage, session: &RecordingSession, events: &Rc<RefCell<Vec<&'static str>>>) {
    let config = BootConfig::default();
    Bootstrap::new(&config)
        .run(page, session, |anchor| {
            assert_eq!(anchor, "#app");
            events.borrow_mut().push("mount");
            Ok(())
        })
        .expect("boot succeeds");
}

#[test]
fn no_token_leaves_everything_untouched() {
    let (page, session, events) = setup(&["/?lang=en"]);
    session.token.replace(Some("earlier".to_owned()));

    run(&page, &session, &events);

    assert_eq!(session.token.borrow().as_deref(), Some("earlier"));
    assert_eq!(page.storage_writes.get(), 0);
    assert_eq!(page.current_url(), "/?lang=en");
    assert_eq!(session.fetches.get(), 0);
    assert_eq!(*events.borrow(), vec!["mount"]);
}

#[test]
fn token_is_applied_persisted_and_removed_from_url() {
    let (page, session, events) = setup(&["/?token=abc123"]);

    run(&page, &session, &events);

    assert_eq!(session.token.borrow().as_deref(), Some("abc123"));
    assert_eq!(
        page.storage.borrow().get("token").map(String::as_str),
        Some("abc123")
    );
    assert_eq!(page.current_url(), "/");
    assert_eq!(session.fetches.get(), 1);
    assert_eq!(
        *events.borrow(),
        vec!["set_token", "store", "replace", "fetch_user", "mount"]
    );
}

#[test]
fn url_rewrite_replaces_the_history_entry() {
    let (page, session, events) = setup(&["/login", "/?token=abc123"]);

    run(&page, &session, &events);

    assert_eq!(page.entry_count(), 2);
    assert_eq!(page.titles.borrow()[1], "Writer Studio");
    page.back();
    assert_eq!(page.current_url(), "/login");
    assert!(!page.entries.borrow().iter().any(|url| url.contains("token")));
}

#[test]
fn mount_runs_with_and_without_token() {
    for url in ["/", "/?token=abc123", "/?token="] {
        let (page, session, events) = setup(&[url]);
        run(&page, &session, &events);
        assert_eq!(events.borrow().last(), Some(&"mount"), "url {url}");
    }
}

#[test]
fn reload_after_rewrite_does_not_reprocess_token() {
    let (page, session, events) = setup(&["/?token=abc123"]);
    run(&page, &session, &events);
    events.borrow_mut().clear();

    // Same page, second load.
    run(&page, &session, &events);

    assert_eq!(session.fetches.get(), 1);
    assert_eq!(page.storage_writes.get(), 1);
    assert_eq!(*events.borrow(), vec!["mount"]);
}

#[test]
fn boot_restores_previous_session_before_mount() {
    let (page, _session, _events) = setup(&["/"]);
    page.storage
        .borrow_mut()
        .insert("token".to_owned(), "from-last-visit".to_owned());

    let outcome = boot(&page, BootConfig::default(), |anchor, context| {
        assert_eq!(anchor, "#app");
        assert!(context.auth.is_authenticated());
        assert_eq!(context.navigator.destination("/"), Page::Home);
        Ok(())
    })
    .expect("boot succeeds");

    assert!(!outcome.token_applied);
    assert_eq!(page.storage_writes.get(), 0);
}

#[test]
fn boot_hands_url_token_to_the_store() {
    // The profile request is spawned, never polled here.
    _ = any_spawner::Executor::init_futures_executor();
    let (page, _session, events) = setup(&["/login", "/?token=abc123"]);
    let mounted = RefCell::new(None);

    let outcome = boot(&page, BootConfig::default(), |anchor, context| {
        assert_eq!(anchor, "#app");
        events.borrow_mut().push("mount");
        mounted.replace(Some(context));
        Ok(())
    })
    .expect("boot succeeds");

    let context = mounted.take().expect("mount ran");
    assert!(outcome.token_applied && outcome.persisted && outcome.url_cleaned);
    assert_eq!(context.auth.token.get_untracked().as_deref(), Some("abc123"));
    assert!(context.auth.is_loading());
    assert!(!context.auth.needs_profile());
    assert_eq!(context.navigator.destination("/"), Page::Home);
    assert_eq!(
        page.storage.borrow().get("token").map(String::as_str),
        Some("abc123")
    );
    assert_eq!(page.current_url(), "/");
    assert_eq!(page.entry_count(), 2);
    assert_eq!(*events.borrow(), vec!["store", "replace", "mount"]);
}

#[test]
fn boot_reports_missing_anchor() {
    let (page, _session, _events) = setup(&["/"]);
    let result = boot(&page, BootConfig::default(), |anchor, _context| {
        Err(BootError::MissingAnchor(anchor.to_owned()))
    });
    assert!(matches!(result, Err(BootError::MissingAnchor(anchor)) if anchor == "#app"));
}
