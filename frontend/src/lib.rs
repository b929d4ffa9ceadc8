//! WebAssembly entry point of the writer studio client.
//!
//! Sets up console logging and the panic hook, then runs the boot sequence
//! from `app` against the live page and mounts the view tree.

use app::{AppContext, BootError, bootstrap, browser::WebBrowser, config::BootConfig};
use leptos::prelude::document;
use any_spawner::Executor;
use wasm_bindgen::JsCast as _;
use web_sys::HtmlElement;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
/// Boots the client once the WASM module is instantiated.
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    // The user fetch is spawned before mounting, so the executor must exist first.
    _ = Executor::init_wasm_bindgen();

    let config = BootConfig::from_build_env();
    if let Err(err) = config.validate() {
        log::error!("Refusing to boot with invalid configuration: {err}");
        return;
    }
    let browser = match WebBrowser::new() {
        Ok(browser) => browser,
        Err(err) => {
            log::error!("Cannot boot outside a browser window: {err}");
            return;
        }
    };

    match bootstrap::boot(&browser, config, mount) {
        Ok(outcome) => log::debug!("Boot finished: {outcome:?}"),
        Err(err) => log::error!("Boot failed: {err}"),
    }
}

/// Mounts the root view into the element matched by `selector`.
fn mount(selector: &str, context: AppContext) -> Result<(), BootError> {
    let anchor = document()
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| BootError::MissingAnchor(selector.to_owned()))?;
    leptos::mount::mount_to(anchor, move || app::component(context)).forget();
    Ok(())
}
