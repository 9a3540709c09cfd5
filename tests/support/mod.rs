//! In-memory provider and page used by the gate flow tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use futures::FutureExt as _;
use futures::future::{self, LocalBoxFuture};

use signin_gate::config::GateConfig;
use signin_gate::error::{GateError, SignInFailure};
use signin_gate::gate::{AuthGate, Spawner};
use signin_gate::net::provider::{AuthStateCallback, IdentityProvider};
use signin_gate::state::auth::{AuthState, Credentials, User};
use signin_gate::util::dom::{FormSubmission, PageDom, SubmitHandler};

// =============================================================================
// PROVIDER
// =============================================================================

#[derive(Default)]
pub struct FakeProvider {
    listeners: RefCell<Vec<AuthStateCallback>>,
    pub subscribe_calls: Cell<usize>,
    pub refuse_subscription: Cell<bool>,
    pub sign_in_calls: RefCell<Vec<Credentials>>,
    results: RefCell<VecDeque<Result<(), SignInFailure>>>,
}

impl FakeProvider {
    /// Queue the result of the next sign-in call. Unqueued calls succeed.
    pub fn push_result(&self, result: Result<(), SignInFailure>) {
        self.results.borrow_mut().push_back(result);
    }

    /// Deliver `state` to every registered listener.
    pub fn emit(&self, state: &AuthState) {
        for listener in self.listeners.borrow().iter() {
            listener(state.clone());
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl IdentityProvider for FakeProvider {
    fn on_auth_state_changed(&self, callback: AuthStateCallback) -> Result<(), GateError> {
        self.subscribe_calls.set(self.subscribe_calls.get() + 1);
        if self.refuse_subscription.get() {
            return Err(GateError::Subscription("auth/internal-error".to_owned()));
        }
        self.listeners.borrow_mut().push(callback);
        Ok(())
    }

    fn sign_in_with_email_and_password(
        &self,
        credentials: Credentials,
    ) -> LocalBoxFuture<'static, Result<(), SignInFailure>> {
        self.sign_in_calls.borrow_mut().push(credentials);
        let result = self.results.borrow_mut().pop_front().unwrap_or(Ok(()));
        future::ready(result).boxed_local()
    }
}

// =============================================================================
// PAGE
// =============================================================================

pub const ORIGINAL_ROOT: &str = "<p>protected tool</p>";

/// A page with a single root element and whatever inputs the root markup
/// declares. Input values are set with [`FakeDom::type_into`].
pub struct FakeDom {
    pub root_id: String,
    pub root: RefCell<String>,
    pub replace_calls: Cell<usize>,
    pub handler: RefCell<Option<(String, SubmitHandler)>>,
    pub bind_calls: Cell<usize>,
    values: RefCell<HashMap<String, String>>,
    pub alerts: RefCell<Vec<String>>,
    pub reloads: Cell<usize>,
}

impl FakeDom {
    pub fn new(root_id: &str) -> Self {
        Self {
            root_id: root_id.to_owned(),
            root: RefCell::new(ORIGINAL_ROOT.to_owned()),
            replace_calls: Cell::new(0),
            handler: RefCell::new(None),
            bind_calls: Cell::new(0),
            values: RefCell::new(HashMap::new()),
            alerts: RefCell::new(Vec::new()),
            reloads: Cell::new(0),
        }
    }

    fn has_element(&self, id: &str) -> bool {
        self.root.borrow().contains(&format!(r#"id="{id}""#))
    }

    pub fn type_into(&self, id: &str, value: &str) {
        self.values.borrow_mut().insert(id.to_owned(), value.to_owned());
    }

    pub fn root_markup(&self) -> String {
        self.root.borrow().clone()
    }

    pub fn count_in_root(&self, needle: &str) -> usize {
        self.root.borrow().matches(needle).count()
    }

    /// Fire the form's submit event, as the browser would on button click.
    pub fn submit(&self) -> FakeSubmission {
        let submission = FakeSubmission::default();
        let handler = self.handler.borrow().as_ref().map(|(_, h)| Rc::clone(h));
        if let Some(handler) = handler {
            handler(&submission);
        }
        submission
    }
}

impl PageDom for FakeDom {
    fn replace_markup(&self, root_id: &str, markup: &str) -> Result<(), GateError> {
        if root_id != self.root_id {
            return Err(GateError::MissingElement(root_id.to_owned()));
        }
        self.replace_calls.set(self.replace_calls.get() + 1);
        // The old form and its listener go away with the old markup.
        self.handler.borrow_mut().take();
        *self.root.borrow_mut() = markup.to_owned();
        Ok(())
    }

    fn bind_submit(&self, form_id: &str, handler: SubmitHandler) -> Result<(), GateError> {
        if !self.has_element(form_id) {
            return Err(GateError::MissingElement(form_id.to_owned()));
        }
        self.bind_calls.set(self.bind_calls.get() + 1);
        *self.handler.borrow_mut() = Some((form_id.to_owned(), handler));
        Ok(())
    }

    fn input_value(&self, id: &str) -> Result<String, GateError> {
        if !self.has_element(id) {
            return Err(GateError::MissingElement(id.to_owned()));
        }
        Ok(self.values.borrow().get(id).cloned().unwrap_or_default())
    }

    fn alert(&self, message: &str) -> Result<(), GateError> {
        self.alerts.borrow_mut().push(message.to_owned());
        Ok(())
    }

    fn reload(&self) -> Result<(), GateError> {
        self.reloads.set(self.reloads.get() + 1);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeSubmission {
    pub prevented: Cell<bool>,
}

impl FormSubmission for FakeSubmission {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

// =============================================================================
// HARNESS
// =============================================================================

/// Runs each spawned attempt to completion before the submit handler returns.
pub fn blocking_spawner() -> Spawner {
    Rc::new(|attempt: LocalBoxFuture<'static, ()>| futures::executor::block_on(attempt))
}

pub struct Harness {
    pub provider: Rc<FakeProvider>,
    pub dom: Rc<FakeDom>,
    pub gate: AuthGate<FakeProvider, FakeDom>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(&GateConfig::default())
    }

    pub fn with_config(config: &GateConfig) -> Self {
        let provider = Rc::new(FakeProvider::default());
        let dom = Rc::new(FakeDom::new(&config.root_id));
        let gate = AuthGate::new(config, Rc::clone(&provider), Rc::clone(&dom), blocking_spawner());
        Self { provider, dom, gate }
    }

    /// Start the gate and report "no session".
    pub fn signed_out() -> Self {
        let harness = Self::new();
        harness.gate.start().unwrap();
        harness.provider.emit(&AuthState::Absent);
        harness
    }
}

pub fn alice() -> User {
    User { uid: "u1".to_owned(), email: Some("alice@example.com".to_owned()) }
}
