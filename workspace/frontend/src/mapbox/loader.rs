//! Process-wide mapbox-gl loader: injects the CDN script and stylesheet
//! at most once and broadcasts readiness to every mounted widget.
//!
//! The state machine itself lives in `common::LibraryLoader`; this module
//! owns the DOM half (element creation, `onload` wiring) and the
//! `thread_local!` singleton.

use std::cell::RefCell;

use common::{LibraryLoader, SubscriberId, Subscription};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::bindings;

const SCRIPT_ID: &str = "mapbox-gl-js";
const CSS_ID: &str = "mapbox-gl-css";
const SCRIPT_URL: &str = "https://api.mapbox.com/mapbox-gl-js/v2.14.1/mapbox-gl.js";
const CSS_URL: &str = "https://api.mapbox.com/mapbox-gl-js/v2.14.1/mapbox-gl.css";

thread_local! {
    static LOADER: RefCell<LibraryLoader> = RefCell::new(LibraryLoader::new());
}

pub fn is_ready() -> bool {
    LOADER.with(|loader| loader.borrow().is_ready())
}

/// Makes sure the library has been requested. The first call injects the
/// script and stylesheet; if the `mapboxgl` global is already present the
/// loader skips injection and broadcasts readiness immediately.
pub fn ensure_loaded() {
    if !is_ready() && bindings::library_present() {
        log::debug!("mapboxgl global already present, skipping injection");
        broadcast_ready();
        return;
    }

    let result = LOADER.with(|loader| loader.borrow_mut().request(inject_resources));
    if let Err(err) = result {
        log::error!("Failed to inject mapbox-gl resources: {:?}", err);
    }
}

/// Registers a one-shot readiness callback. Returns `None` when the
/// library was already ready and the callback ran synchronously.
pub fn subscribe(on_ready: impl FnOnce() + 'static) -> Option<SubscriberId> {
    let subscription = LOADER.with(|loader| loader.borrow_mut().subscribe(Box::new(on_ready)));
    match subscription {
        Subscription::Immediate(callback) => {
            callback();
            None
        }
        Subscription::Registered(id) => Some(id),
    }
}

/// Drops a pending registration; widgets call this on unmount so a late
/// broadcast cannot touch a component that is gone.
pub fn unsubscribe(id: SubscriberId) {
    LOADER.with(|loader| loader.borrow_mut().unsubscribe(id));
}

fn broadcast_ready() {
    // Drain under the borrow, invoke after releasing it.
    let callbacks = LOADER.with(|loader| loader.borrow_mut().notify_loaded());
    for callback in callbacks {
        callback();
    }
}

fn inject_resources() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    if document.get_element_by_id(SCRIPT_ID).is_none() {
        let script: web_sys::HtmlScriptElement =
            document.create_element("script")?.dyn_into()?;
        script.set_id(SCRIPT_ID);
        script.set_src(SCRIPT_URL);
        script.set_attribute("async", "true")?;

        let onload = Closure::once(move || {
            log::info!("mapbox-gl script loaded");
            broadcast_ready();
        });
        script.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        document
            .body()
            .ok_or_else(|| JsValue::from_str("no document body"))?
            .append_child(&script)?;
    }

    if document.get_element_by_id(CSS_ID).is_none() {
        let link: web_sys::HtmlLinkElement = document.create_element("link")?.dyn_into()?;
        link.set_id(CSS_ID);
        link.set_href(CSS_URL);
        link.set_rel("stylesheet");

        document
            .head()
            .ok_or_else(|| JsValue::from_str("no document head"))?
            .append_child(&link)?;
    }

    Ok(())
}
