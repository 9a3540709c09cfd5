//! Sign-in form view model and the renderer that owns the gate root.
//!
//! DESIGN
//! ======
//! The form is fixed markup: one email input, one password input, one submit
//! button. `GateRenderer` is the only writer of the root element; it replaces
//! the root wholesale on every render and rebinds the submit handler to the
//! freshly created form, so a re-render never duplicates anything.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::GateConfig;
use crate::error::GateError;
use crate::util::dom::{PageDom, SubmitHandler};

/// Ids and text of the sign-in form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateView {
    pub root_id: String,
    pub form_id: String,
    pub email_input_id: String,
    pub password_input_id: String,
    pub email_placeholder: String,
    pub password_placeholder: String,
    pub submit_label: String,
}

impl GateView {
    #[must_use]
    pub fn from_config(config: &GateConfig) -> Self {
        Self {
            root_id: config.root_id.clone(),
            form_id: config.form_id.clone(),
            email_input_id: config.email_input_id.clone(),
            password_input_id: config.password_input_id.clone(),
            email_placeholder: config.email_placeholder.clone(),
            password_placeholder: config.password_placeholder.clone(),
            submit_label: config.submit_label.clone(),
        }
    }

    /// The form markup injected into the root element.
    #[must_use]
    pub fn markup(&self) -> String {
        format!(
            concat!(
                r#"<div><form id="{form}">"#,
                r#"<input id="{email}" type="text" placeholder="{email_placeholder}" required />"#,
                r#"<input id="{password}" type="password" placeholder="{password_placeholder}" required />"#,
                r#"<button type="submit">{label}</button>"#,
                "</form></div>",
            ),
            form = escape_html(&self.form_id),
            email = escape_html(&self.email_input_id),
            email_placeholder = escape_html(&self.email_placeholder),
            password = escape_html(&self.password_input_id),
            password_placeholder = escape_html(&self.password_placeholder),
            label = escape_html(&self.submit_label),
        )
    }
}

impl Default for GateView {
    fn default() -> Self {
        Self::from_config(&GateConfig::default())
    }
}

/// Escape text for use in element content and double-quoted attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Owns the gate root: writes the form and binds its submit handler.
pub struct GateRenderer<D: PageDom> {
    view: GateView,
    dom: Rc<D>,
    renders: Cell<usize>,
}

impl<D: PageDom> GateRenderer<D> {
    pub fn new(view: GateView, dom: Rc<D>) -> Self {
        Self { view, dom, renders: Cell::new(0) }
    }

    #[must_use]
    pub fn view(&self) -> &GateView {
        &self.view
    }

    /// How many times the form has been rendered.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }

    /// Replace the root content with the form and bind `on_submit` to it.
    ///
    /// # Errors
    ///
    /// Returns the DOM error if the root or the new form cannot be found.
    pub fn render(&self, on_submit: &SubmitHandler) -> Result<(), GateError> {
        self.dom.replace_markup(&self.view.root_id, &self.view.markup())?;
        self.dom.bind_submit(&self.view.form_id, Rc::clone(on_submit))?;
        self.renders.set(self.renders.get() + 1);
        log::debug!("sign-in form rendered into #{}", self.view.root_id);
        Ok(())
    }
}
