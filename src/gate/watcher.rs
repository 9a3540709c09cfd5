//! Auth-state watcher: the gate's single provider subscription.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::GateError;
use crate::net::provider::IdentityProvider;
use crate::state::auth::AuthState;

/// Subscribes once per page and reacts to every reported transition.
#[derive(Default)]
pub struct AuthStateWatcher {
    subscribed: Cell<bool>,
    last_state: Rc<RefCell<Option<AuthState>>>,
}

impl AuthStateWatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscribed.get()
    }

    /// Most recent state the provider reported, if any yet.
    #[must_use]
    pub fn last_state(&self) -> Option<AuthState> {
        self.last_state.borrow().clone()
    }

    /// Subscribe to `provider`. Every callback logs the state; `on_absent`
    /// runs on each report of no session.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::AlreadySubscribed`] on a second call (the
    /// provider is not contacted), or the provider's subscription error.
    pub fn install<P, F>(&self, provider: &P, on_absent: F) -> Result<(), GateError>
    where
        P: IdentityProvider + ?Sized,
        F: Fn() + 'static,
    {
        if self.subscribed.get() {
            return Err(GateError::AlreadySubscribed);
        }
        let last_state = Rc::clone(&self.last_state);
        provider.on_auth_state_changed(Box::new(move |state: AuthState| {
            log::info!("{state}");
            let absent = !state.is_present();
            *last_state.borrow_mut() = Some(state);
            if absent {
                on_absent();
            }
        }))?;
        self.subscribed.set(true);
        Ok(())
    }
}
