//! DOM-backed focus host.

use ui_focus::{FocusCandidate, FocusHost, FocusTarget};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Selector matching natively or explicitly focusable elements.
pub const FOCUSABLE_SELECTOR: &str = concat!(
    "input:not([disabled]),",
    "select:not([disabled]),",
    "textarea:not([disabled]),",
    "embed,",
    "iframe,",
    "object,",
    "a[href],",
    "area[href],",
    "button:not([disabled]),",
    "[tabindex],",
    "audio[controls],",
    "video[controls],",
    "*[tabindex]:not([aria-disabled]),",
    "*[contenteditable]",
);

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

fn is_display_none(window: &web_sys::Window, element: &web_sys::Element) -> bool {
    window
        .get_computed_style(element)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("display").ok())
        .is_some_and(|display| display == "none")
}

/// Returns whether `element` or an ancestor below `container` is rendered with `display: none`.
fn hidden_within(
    window: &web_sys::Window,
    container: &web_sys::HtmlElement,
    element: &web_sys::Element,
) -> bool {
    let container: &web_sys::Element = container;
    let mut cursor = Some(element.clone());
    while let Some(current) = cursor {
        if &current == container {
            return false;
        }
        if is_display_none(window, &current) {
            return true;
        }
        cursor = current.parent_element();
    }
    false
}

#[derive(Debug, Clone, Copy, Default)]
/// Focus host backed by the browser document.
pub struct DomFocusHost;

impl FocusHost for DomFocusHost {
    type Node = web_sys::HtmlElement;

    fn active_element(&self) -> Option<web_sys::HtmlElement> {
        document()
            .and_then(|document| document.active_element())
            .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
    }

    fn focus(&self, node: &web_sys::HtmlElement) -> bool {
        if node.focus().is_err() {
            return false;
        }
        self.active_element().as_ref() == Some(node)
    }

    fn contains(&self, container: &web_sys::HtmlElement, node: &web_sys::HtmlElement) -> bool {
        let node: &web_sys::Node = node;
        container.contains(Some(node))
    }

    fn is_connected(&self, node: &web_sys::HtmlElement) -> bool {
        node.is_connected()
    }

    fn candidates(
        &self,
        container: &web_sys::HtmlElement,
    ) -> Vec<FocusCandidate<web_sys::HtmlElement>> {
        let Some(window) = web_sys::window() else {
            return Vec::new();
        };
        let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
            return Vec::new();
        };

        let mut candidates = Vec::new();
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<web_sys::HtmlElement>() else {
                continue;
            };
            if element.has_attribute("disabled") {
                continue;
            }
            if hidden_within(&window, container, &element) {
                continue;
            }
            let tab_index = element.tab_index();
            candidates.push(FocusCandidate::new(element, tab_index));
        }
        candidates
    }

    fn resolve(&self, target: &FocusTarget) -> Option<web_sys::HtmlElement> {
        let FocusTarget::ElementId(id) = target;
        document()
            .and_then(|document| document.get_element_by_id(id))
            .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
    }
}

/// Runs `task` on the next macrotask, after the current render has been committed.
///
/// Off `wasm32` there is no event loop to yield to, so `task` runs immediately.
pub fn defer(task: impl FnOnce() + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(task);
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            0,
        );
    }
    #[cfg(not(target_arch = "wasm32"))]
    task();
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn deferred_task_runs_without_an_event_loop() {
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);

        defer(move || flag.set(true));

        assert!(ran.get());
    }

    #[test]
    fn selector_lists_every_focusable_family_once() {
        let parts: Vec<&str> = FOCUSABLE_SELECTOR.split(',').collect();

        assert_eq!(parts.len(), 14);
        assert!(parts.iter().all(|part| !part.trim().is_empty()));
        assert!(parts.contains(&"button:not([disabled])"));
        assert!(parts.contains(&"*[contenteditable]"));
    }
}
