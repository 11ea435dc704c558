use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::mapbox::loader;
use crate::settings;

/// Readiness of the external mapping library as seen by one widget.
#[derive(Clone, PartialEq)]
pub enum LibraryState {
    Loading,
    Ready,
    Unavailable(String),
}

impl LibraryState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Requests the mapping library on mount and tracks its readiness.
///
/// A widget mounting after the library is ready resolves synchronously;
/// otherwise it subscribes for the one-shot broadcast and unsubscribes on
/// unmount so the callback can never outlive the component. A load that
/// exceeds the configured timeout surfaces as `Unavailable` instead of a
/// permanent spinner.
#[hook]
pub fn use_map_library() -> LibraryState {
    let state = use_state(|| {
        if loader::is_ready() {
            LibraryState::Ready
        } else {
            LibraryState::Loading
        }
    });

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            loader::ensure_loaded();

            let subscription = {
                let state = state.clone();
                loader::subscribe(move || {
                    log::debug!("map widget received library-ready signal");
                    state.set(LibraryState::Ready);
                })
            };

            let timeout_ms = settings::get_settings().map_load_timeout_ms;
            let timeout = Timeout::new(timeout_ms, move || {
                if !loader::is_ready() {
                    log::warn!("mapping library did not load within {}ms", timeout_ms);
                    state.set(LibraryState::Unavailable(
                        "The map library took too long to load.".to_string(),
                    ));
                }
            });

            move || {
                if let Some(id) = subscription {
                    loader::unsubscribe(id);
                }
                drop(timeout);
            }
        });
    }

    (*state).clone()
}
