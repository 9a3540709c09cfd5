//! Provider-neutral identity seam. Enables fakes in tests.

use futures::future::LocalBoxFuture;

use crate::error::{GateError, SignInFailure};
use crate::state::auth::{AuthState, Credentials};

/// Listener invoked on every auth-state transition for the page's lifetime.
pub type AuthStateCallback = Box<dyn Fn(AuthState)>;

/// The two operations the gate needs from an external identity service.
///
/// Implementations run on the browser's single-threaded event loop, so
/// neither callbacks nor futures are required to be `Send`.
pub trait IdentityProvider {
    /// Register `callback` for auth-state changes. The provider owns the
    /// registration until the page goes away; there is no unsubscribe.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Subscription`] if the provider refuses the
    /// listener.
    fn on_auth_state_changed(&self, callback: AuthStateCallback) -> Result<(), GateError>;

    /// Start an email/password sign-in. Resolves once the provider accepts
    /// or rejects the credentials.
    fn sign_in_with_email_and_password(
        &self,
        credentials: Credentials,
    ) -> LocalBoxFuture<'static, Result<(), SignInFailure>>;
}
