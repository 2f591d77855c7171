//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error
//! handling. Everything degrades to a no-op when no window is available.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Read a localStorage value.
pub fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Write a localStorage value; silently dropped if storage is unavailable.
pub fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Set the URL hash (adds to browser history and fires `hashchange`).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Navigate one step back in the session history, if there is one.
///
/// Returns `false` when the history is too shallow to go back, so the
/// caller can fall back to an explicit route.
pub fn history_back() -> bool {
    if let Some(window) = window()
        && let Ok(history) = window.history()
        && history.length().map(|len| len > 1).unwrap_or(false)
    {
        history.back().is_ok()
    } else {
        false
    }
}

// =============================================================================
// Overlay Support
// =============================================================================

/// Resolve the overlay render target: the dedicated host element when the
/// page provides one, otherwise the document body.
pub fn overlay_host(host_id: &str) -> Option<web_sys::Element> {
    let document = document()?;
    document
        .get_element_by_id(host_id)
        .or_else(|| document.body().map(web_sys::Element::from))
}

/// Suppress page scrolling, returning the previous inline `overflow` value
/// so it can be restored exactly.
pub fn lock_body_scroll() -> Option<String> {
    let body = document()?.body()?;
    let style = body.style();
    let previous = style.get_property_value("overflow").unwrap_or_default();
    let _ = style.set_property("overflow", "hidden");
    Some(previous)
}

/// Restore the inline `overflow` value captured by [`lock_body_scroll`].
pub fn restore_body_scroll(previous: &str) {
    if let Some(document) = document()
        && let Some(body) = document.body()
    {
        let _ = body.style().set_property("overflow", previous);
    }
}

/// Toggle the `dark` class on the document element.
pub fn set_root_theme_class(dark: bool) {
    if let Some(document) = document()
        && let Some(root) = document.document_element()
    {
        let _ = root.class_list().toggle_with_force("dark", dark);
    }
}

// =============================================================================
// Removable Event Listeners
// =============================================================================

/// A registered event listener that unregisters itself when dropped.
///
/// `Closure::forget()` is only right for listeners that live as long as
/// the app; overlay and dropdown listeners must be strictly bracketed by
/// their open state, so they hold a handle instead.
pub struct ListenerHandle {
    target: web_sys::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}

/// Register a document-level event listener.
pub fn listen_document(
    event: &'static str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Option<ListenerHandle> {
    let document = document()?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    let target: web_sys::EventTarget = document.into();
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .ok()?;
    Some(ListenerHandle {
        target,
        event,
        closure,
    })
}
