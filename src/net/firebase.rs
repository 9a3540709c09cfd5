//! Firebase Auth bindings over the compat (`firebase.*`) global.
//!
//! The host page loads `firebase-app-compat.js` and `firebase-auth-compat.js`
//! before this module runs. If a [`FirebaseConfig`] is supplied the app is
//! initialised here; otherwise the page is expected to have done it.

use std::cell::RefCell;

use futures::future::LocalBoxFuture;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::config::FirebaseConfig;
use crate::error::{GateError, SignInFailure};
use crate::net::provider::{AuthStateCallback, IdentityProvider};
use crate::state::auth::{AuthState, Credentials, User};

#[wasm_bindgen]
extern "C" {
    /// `firebase.auth.Auth` instance.
    #[derive(Clone)]
    pub type Auth;

    #[wasm_bindgen(catch, js_namespace = firebase, js_name = initializeApp)]
    fn initialize_app(options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = firebase, js_name = auth)]
    fn firebase_auth() -> Result<Auth, JsValue>;

    #[wasm_bindgen(catch, method, js_name = onAuthStateChanged)]
    fn on_auth_state_changed(this: &Auth, observer: &Function) -> Result<Function, JsValue>;

    #[wasm_bindgen(method, js_name = signInWithEmailAndPassword)]
    fn sign_in_with_email_and_password(this: &Auth, email: &str, password: &str) -> Promise;
}

/// Render a thrown JS value as text for error messages.
pub(crate) fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn string_field(value: &JsValue, name: &str) -> Option<String> {
    match Reflect::get(value, &JsValue::from_str(name)) {
        Ok(field) => field.as_string(),
        Err(_) => None,
    }
}

/// Map the callback argument of `onAuthStateChanged`: `null` or `undefined`
/// means no session, anything else is read as a user object.
#[must_use]
pub fn auth_state_from_js(value: &JsValue) -> AuthState {
    if value.is_null() || value.is_undefined() {
        return AuthState::Absent;
    }
    AuthState::Present(User {
        uid: string_field(value, "uid").unwrap_or_default(),
        email: string_field(value, "email"),
    })
}

/// Map a rejected `signInWithEmailAndPassword` promise to its `code` and
/// `message`, falling back to `auth/unknown` and the value as text.
#[must_use]
pub fn sign_in_failure_from_js(value: &JsValue) -> SignInFailure {
    SignInFailure::from_parts(string_field(value, "code"), string_field(value, "message"), &js_error_text(value))
}

/// [`IdentityProvider`] backed by `firebase.auth()`.
pub struct FirebaseProvider {
    auth: Auth,
    // Lives as long as the provider; the JS side calls into it on every transition.
    observer: RefCell<Option<Closure<dyn Fn(JsValue)>>>,
    // Returned by `onAuthStateChanged`; held, never called.
    unsubscribe: RefCell<Option<Function>>,
}

impl FirebaseProvider {
    /// Initialise Firebase (when `config` is given) and acquire `auth()`.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Js`] if the SDK is missing or rejects the config.
    pub fn connect(config: Option<&FirebaseConfig>) -> Result<Self, GateError> {
        if let Some(config) = config {
            let json = serde_json::to_string(config).map_err(GateError::Config)?;
            let options = js_sys::JSON::parse(&json).map_err(|e| GateError::Js(js_error_text(&e)))?;
            initialize_app(&options).map_err(|e| GateError::Js(js_error_text(&e)))?;
            log::debug!("firebase app initialised for project {}", config.project_id);
        }
        let auth = firebase_auth().map_err(|e| GateError::Js(js_error_text(&e)))?;
        Ok(Self { auth, observer: RefCell::new(None), unsubscribe: RefCell::new(None) })
    }
}

impl IdentityProvider for FirebaseProvider {
    fn on_auth_state_changed(&self, callback: AuthStateCallback) -> Result<(), GateError> {
        let observer = Closure::<dyn Fn(JsValue)>::new(move |user: JsValue| {
            callback(auth_state_from_js(&user));
        });
        let unsubscribe = self
            .auth
            .on_auth_state_changed(observer.as_ref().unchecked_ref())
            .map_err(|e| GateError::Subscription(js_error_text(&e)))?;
        *self.observer.borrow_mut() = Some(observer);
        *self.unsubscribe.borrow_mut() = Some(unsubscribe);
        Ok(())
    }

    fn sign_in_with_email_and_password(
        &self,
        credentials: Credentials,
    ) -> LocalBoxFuture<'static, Result<(), SignInFailure>> {
        let promise = self
            .auth
            .sign_in_with_email_and_password(&credentials.email, &credentials.password);
        Box::pin(async move {
            match JsFuture::from(promise).await {
                Ok(_) => Ok(()),
                Err(e) => Err(sign_in_failure_from_js(&e)),
            }
        })
    }
}
