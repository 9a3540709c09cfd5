//! The narrow DOM interface used by the gate.

use std::rc::Rc;

use crate::error::GateError;

/// A submit event the handler may stop from navigating.
pub trait FormSubmission {
    fn prevent_default(&self);
}

/// Handler bound to the gate form's `submit` event.
pub type SubmitHandler = Rc<dyn Fn(&dyn FormSubmission)>;

/// Every page operation the gate performs.
///
/// Only the renderer writes (`replace_markup`, `bind_submit`); only the
/// submitter reads (`input_value`) and navigates (`alert`, `reload`).
pub trait PageDom {
    /// Replace the whole content of the element `root_id` with `markup`.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::MissingElement`] if the root does not exist.
    fn replace_markup(&self, root_id: &str, markup: &str) -> Result<(), GateError>;

    /// Attach `handler` to the `submit` event of the form `form_id`,
    /// replacing any handler bound by an earlier render.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::MissingElement`] if the form does not exist.
    fn bind_submit(&self, form_id: &str, handler: SubmitHandler) -> Result<(), GateError>;

    /// Current value of the input element `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::MissingElement`] or
    /// [`GateError::UnexpectedElement`] when `id` is not an input.
    fn input_value(&self, id: &str) -> Result<String, GateError>;

    /// Show a blocking alert dialog.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Js`] if the browser refuses the dialog.
    fn alert(&self, message: &str) -> Result<(), GateError>;

    /// Reload the current page.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Js`] if navigation is refused.
    fn reload(&self) -> Result<(), GateError>;
}
