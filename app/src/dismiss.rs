//! Outside-interaction dismissal for the settings sidebar.
//!
//! The document-level `mousedown` listener is modeled as a scoped resource:
//! [`OutsideClickGuard`] owns the closure and unregisters it on drop, so the
//! listener lives exactly as long as the panel is open and never outlives the
//! component that attached it.

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use folio_types::PanelState;

/// Owns a document-level `mousedown` listener that dismisses the panel on
/// outside interactions. Dropping the guard removes the listener.
pub struct OutsideClickGuard {
    listener: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl OutsideClickGuard {
    /// Registers the listener. A pointer-down whose target lies inside any of
    /// the elements named by `within_ids` is left to that element's own
    /// handlers; anything else closes the panel. Returns `None` when there is
    /// no document to attach to.
    pub fn attach(
        within_ids: &'static [&'static str],
        mut panel: Signal<PanelState>,
    ) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let listener =
            Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| {
                let within = within_ids.iter().any(|id| target_within(&event, id));
                // try_write: a late event can arrive after the component
                // owning the signal has unmounted.
                if let Ok(mut state) = panel.try_write() {
                    state.dismiss_outside(within);
                }
            });
        document
            .add_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { listener })
    }
}

impl Drop for OutsideClickGuard {
    fn drop(&mut self) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document.remove_event_listener_with_callback(
                "mousedown",
                self.listener.as_ref().unchecked_ref(),
            );
        }
    }
}

/// True when the event target is, or is contained in, the element with `id`.
fn target_within(event: &web_sys::MouseEvent, id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    let Some(target) = event.target() else {
        return false;
    };
    match target.dyn_ref::<web_sys::Node>() {
        Some(node) => element.contains(Some(node)),
        None => false,
    }
}
