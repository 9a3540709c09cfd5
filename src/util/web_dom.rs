//! [`PageDom`] over the real document. Requires a browser environment.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlInputElement, Window};

use crate::error::GateError;
use crate::net::firebase::js_error_text;
use crate::util::dom::{FormSubmission, PageDom, SubmitHandler};

impl FormSubmission for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

struct BoundListener {
    target: Element,
    closure: Closure<dyn Fn(Event)>,
}

/// Document-backed page. Holds the active submit listener so it is released
/// when the form is re-rendered.
pub struct WebDom {
    window: Window,
    document: Document,
    listener: RefCell<Option<BoundListener>>,
}

impl WebDom {
    /// Grab the global `window` and its document.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Js`] outside a browser main thread.
    pub fn from_window() -> Result<Self, GateError> {
        let window = web_sys::window().ok_or_else(|| GateError::Js("no global window".to_owned()))?;
        let document = window
            .document()
            .ok_or_else(|| GateError::Js("window has no document".to_owned()))?;
        Ok(Self { window, document, listener: RefCell::new(None) })
    }

    fn element(&self, id: &str) -> Result<Element, GateError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| GateError::MissingElement(id.to_owned()))
    }

    /// Text of an inline config element such as
    /// `<script type="application/json" id="signin-gate-config">`.
    #[must_use]
    pub fn inline_text(&self, id: &str) -> Option<String> {
        self.document.get_element_by_id(id).and_then(|el| el.text_content())
    }
}

impl PageDom for WebDom {
    fn replace_markup(&self, root_id: &str, markup: &str) -> Result<(), GateError> {
        self.element(root_id)?.set_inner_html(markup);
        Ok(())
    }

    fn bind_submit(&self, form_id: &str, handler: SubmitHandler) -> Result<(), GateError> {
        let form = self.element(form_id)?;
        let closure = Closure::<dyn Fn(Event)>::new(move |event: Event| handler(&event));
        form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
            .map_err(|e| GateError::Js(js_error_text(&e)))?;

        if let Some(previous) = self.listener.borrow_mut().replace(BoundListener { target: form, closure }) {
            // The old form is normally gone already; detach in case it was not.
            if let Err(e) = previous
                .target
                .remove_event_listener_with_callback("submit", previous.closure.as_ref().unchecked_ref())
            {
                log::debug!("stale submit listener not removed: {}", js_error_text(&e));
            }
        }
        Ok(())
    }

    fn input_value(&self, id: &str) -> Result<String, GateError> {
        let input = self
            .element(id)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| GateError::UnexpectedElement { id: id.to_owned(), expected: "input" })?;
        Ok(input.value())
    }

    fn alert(&self, message: &str) -> Result<(), GateError> {
        self.window
            .alert_with_message(message)
            .map_err(|e| GateError::Js(js_error_text(&e)))
    }

    fn reload(&self) -> Result<(), GateError> {
        self.window
            .location()
            .reload()
            .map_err(|e| GateError::Js(js_error_text(&e)))
    }
}
