//! WASM entry points.
//!
//! The module's start function runs the gate once the page has loaded: at
//! once if `load` already fired, otherwise from a `load` listener. Hosts that
//! want their own config or timing call [`start_gate`] or
//! [`start_gate_on_load`].

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::{GateConfig, INLINE_CONFIG_ID};
use crate::error::GateError;
use crate::gate::{AuthGate, Spawner};
use crate::net::firebase::{FirebaseProvider, js_error_text};
use crate::util::web_dom::WebDom;

type BrowserGate = AuthGate<FirebaseProvider, WebDom>;

thread_local! {
    // The gate's callbacks live as long as the page.
    static GATE: RefCell<Option<BrowserGate>> = const { RefCell::new(None) };
}

/// When the gate started relative to the page's `load` event.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStart {
    /// The page had already loaded; the gate ran immediately.
    Immediate,
    /// A `load` listener was added; the gate runs when it fires.
    Deferred,
}

/// Module start: install the panic hook and run the gate with the inline
/// config once the page has loaded.
///
/// Startup errors are logged, not thrown: a throw here would abort module
/// instantiation for the host.
#[wasm_bindgen(start)]
pub fn boot() {
    console_error_panic_hook::set_once();
    match when_loaded(None) {
        Ok(start) => log::debug!("gate start: {start:?}"),
        Err(GateError::AlreadySubscribed) => log::debug!("gate already started"),
        Err(e) => log::error!("gate not started: {e}"),
    }
}

/// Start the gate now. `config_json` overrides the inline config element.
///
/// # Errors
///
/// Throws the startup error (bad config, Firebase unavailable, subscription
/// refused) to the caller.
#[wasm_bindgen]
pub fn start_gate(config_json: Option<String>) -> Result<(), JsValue> {
    run(config_json.as_deref()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Start the gate once the page has loaded, reporting whether it ran
/// immediately or waits for `load`.
///
/// # Errors
///
/// Throws an immediate startup failure to the caller. A deferred start that
/// fails throws from the `load` listener instead.
#[wasm_bindgen]
pub fn start_gate_on_load(config_json: Option<String>) -> Result<LoadStart, JsValue> {
    when_loaded(config_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn when_loaded(config_json: Option<String>) -> Result<LoadStart, GateError> {
    let window = web_sys::window().ok_or_else(|| GateError::Js("no global window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| GateError::Js("window has no document".to_owned()))?;
    if document.ready_state() == "complete" {
        run(config_json.as_deref())?;
        return Ok(LoadStart::Immediate);
    }
    let on_load = Closure::once_into_js(move || match run(config_json.as_deref()) {
        Ok(()) => {}
        // The host already called `start_gate` explicitly.
        Err(GateError::AlreadySubscribed) => log::debug!("gate already started before load"),
        Err(e) => wasm_bindgen::throw_str(&e.to_string()),
    });
    window
        .add_event_listener_with_callback("load", on_load.unchecked_ref())
        .map_err(|e| GateError::Js(js_error_text(&e)))?;
    Ok(LoadStart::Deferred)
}

fn run(config_json: Option<&str>) -> Result<(), GateError> {
    if GATE.with(|slot| slot.borrow().is_some()) {
        return Err(GateError::AlreadySubscribed);
    }
    let dom = Rc::new(WebDom::from_window()?);
    let config = match config_json.map(str::to_owned).or_else(|| dom.inline_text(INLINE_CONFIG_ID)) {
        Some(raw) => GateConfig::from_json(&raw),
        None => Ok(GateConfig::default()),
    };
    let config = match config {
        Ok(config) => {
            init_logging(config.level()?);
            config
        }
        Err(e) => {
            init_logging(log::Level::Info);
            log::error!("{e}");
            return Err(e);
        }
    };

    let provider = match FirebaseProvider::connect(config.firebase.as_ref()) {
        Ok(provider) => Rc::new(provider),
        Err(e) => {
            log::error!("identity provider unavailable: {e}");
            return Err(e);
        }
    };
    let spawner: Spawner = Rc::new(|attempt: LocalBoxFuture<'static, ()>| wasm_bindgen_futures::spawn_local(attempt));
    let gate = AuthGate::new(&config, provider, dom, spawner);
    if let Err(e) = gate.start() {
        log::error!("{e}");
        return Err(e);
    }
    GATE.with(|slot| *slot.borrow_mut() = Some(gate));
    Ok(())
}

fn init_logging(level: log::Level) {
    if let Err(e) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {e}");
    }
}
