//! Credential submission: read the form, sign in, reload or alert.
//!
//! ERROR HANDLING
//! ==============
//! A rejected sign-in is shown to the user with `alert` and nothing else
//! happens; the form stays in place for the next attempt. Attempts share no
//! state, so there is no retry limit and no backoff.

use std::rc::Rc;

use futures::FutureExt as _;
use futures::future::{self, LocalBoxFuture};

use crate::error::{GateError, SignInFailure};
use crate::gate::Spawner;
use crate::gate::view::GateView;
use crate::net::provider::IdentityProvider;
use crate::state::auth::Credentials;
use crate::util::dom::{FormSubmission, PageDom, SubmitHandler};

/// How a single submission ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The provider accepted the credentials; a reload was issued.
    SignedIn,
    /// The provider rejected the credentials; the message was alerted.
    Rejected(SignInFailure),
    /// The form fields could not be read; the provider was not called.
    Unreadable(GateError),
}

pub struct CredentialSubmitter<P: IdentityProvider, D: PageDom> {
    email_input_id: String,
    password_input_id: String,
    provider: Rc<P>,
    dom: Rc<D>,
}

impl<P, D> CredentialSubmitter<P, D>
where
    P: IdentityProvider + 'static,
    D: PageDom + 'static,
{
    pub fn new(view: &GateView, provider: Rc<P>, dom: Rc<D>) -> Self {
        Self {
            email_input_id: view.email_input_id.clone(),
            password_input_id: view.password_input_id.clone(),
            provider,
            dom,
        }
    }

    /// Read both fields as they are right now. No validation beyond what the
    /// browser's `required` attribute already enforced.
    ///
    /// # Errors
    ///
    /// Returns the DOM error if either input is missing.
    pub fn read_credentials(&self) -> Result<Credentials, GateError> {
        let email = self.dom.input_value(&self.email_input_id)?;
        let password = self.dom.input_value(&self.password_input_id)?;
        Ok(Credentials { email, password })
    }

    /// Run one sign-in attempt with the current field values.
    pub fn submit(&self) -> LocalBoxFuture<'static, SubmitOutcome> {
        let credentials = match self.read_credentials() {
            Ok(credentials) => credentials,
            Err(e) => {
                log::error!("cannot read sign-in form: {e}");
                return future::ready(SubmitOutcome::Unreadable(e)).boxed_local();
            }
        };
        let attempt = self.provider.sign_in_with_email_and_password(credentials);
        let dom = Rc::clone(&self.dom);
        async move {
            match attempt.await {
                Ok(()) => {
                    if let Err(e) = dom.reload() {
                        log::error!("reload after sign-in failed: {e}");
                    }
                    SubmitOutcome::SignedIn
                }
                Err(failure) => {
                    if let Err(e) = dom.alert(&failure.message) {
                        log::error!("sign-in alert failed: {e}");
                    }
                    SubmitOutcome::Rejected(failure)
                }
            }
        }
        .boxed_local()
    }

    /// Build the form's submit handler: stop the native navigation, then run
    /// [`Self::submit`] on `spawner`.
    pub fn handler(self: Rc<Self>, spawner: Spawner) -> SubmitHandler {
        Rc::new(move |event: &dyn FormSubmission| {
            event.prevent_default();
            spawner(self.submit().map(drop).boxed_local());
        })
    }
}
