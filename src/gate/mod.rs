//! The sign-in gate: watcher, renderer and submitter wired together.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` is called once on page load. The provider then drives everything:
//! each "no session" report renders the form, each form submission runs one
//! sign-in attempt, and a successful attempt reloads the page so the next
//! load starts from scratch.

pub mod submit;
pub mod view;
pub mod watcher;

use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::config::GateConfig;
use crate::error::GateError;
use crate::net::provider::IdentityProvider;
use crate::util::dom::{PageDom, SubmitHandler};
use submit::CredentialSubmitter;
use view::{GateRenderer, GateView};
use watcher::AuthStateWatcher;

/// Runs a sign-in attempt to completion on the page's event loop.
///
/// The browser build passes `wasm_bindgen_futures::spawn_local`.
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

pub struct AuthGate<P: IdentityProvider, D: PageDom> {
    provider: Rc<P>,
    watcher: AuthStateWatcher,
    renderer: Rc<GateRenderer<D>>,
    on_submit: SubmitHandler,
}

impl<P, D> AuthGate<P, D>
where
    P: IdentityProvider + 'static,
    D: PageDom + 'static,
{
    pub fn new(config: &GateConfig, provider: Rc<P>, dom: Rc<D>, spawner: Spawner) -> Self {
        let view = GateView::from_config(config);
        let submitter = Rc::new(CredentialSubmitter::new(&view, Rc::clone(&provider), Rc::clone(&dom)));
        Self {
            provider,
            watcher: AuthStateWatcher::new(),
            renderer: Rc::new(GateRenderer::new(view, dom)),
            on_submit: submitter.handler(spawner),
        }
    }

    /// Subscribe to auth-state changes. Call once per page load.
    ///
    /// # Errors
    ///
    /// Fails fast with the provider's subscription error, or
    /// [`GateError::AlreadySubscribed`] when called twice.
    pub fn start(&self) -> Result<(), GateError> {
        let renderer = Rc::clone(&self.renderer);
        let on_submit = Rc::clone(&self.on_submit);
        self.watcher.install(self.provider.as_ref(), move || {
            if let Err(e) = renderer.render(&on_submit) {
                log::error!("sign-in form not rendered: {e}");
            }
        })
    }

    #[must_use]
    pub fn watcher(&self) -> &AuthStateWatcher {
        &self.watcher
    }

    #[must_use]
    pub fn renderer(&self) -> &GateRenderer<D> {
        &self.renderer
    }
}
