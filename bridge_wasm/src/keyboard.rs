//! Keyboard input binding
//!
//! One listener closure is created on first registration and assigned to
//! `document.onkeydown`. Every later registration reassigns that same
//! closure, replacing any handler other code put there, and swaps the Rust
//! handler behind it.

use bridge_core::{Config, KeyIdentifier, KeyboardBridge, SubscriptionHandle};
use js_sys::Function;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

type KeydownListener = Closure<dyn FnMut(KeyboardEvent)>;

thread_local! {
    static BRIDGE: KeyboardBridge = KeyboardBridge::default();
    static LISTENER: RefCell<Option<KeydownListener>> = RefCell::new(None);
    // Exception thrown by a JS handler, rethrown once dispatch has finished
    static HANDLER_ERROR: RefCell<Option<JsValue>> = RefCell::new(None);
}

/// Extract key from keyboard event
pub fn key_from_event(event: &KeyboardEvent) -> KeyIdentifier {
    KeyIdentifier::from(event.key())
}

pub fn configure(config: &Config) {
    BRIDGE.with(|bridge| bridge.configure(config));
}

/// Make `handler` the only receiver of keydown events
pub fn register<F>(handler: F) -> Result<SubscriptionHandle, JsValue>
where
    F: Fn(&KeyIdentifier) + 'static,
{
    install_listener(&document()?);
    let handle = BRIDGE.with(|bridge| bridge.register(handler));
    log::debug!("keydown handler registered: {:?}", handle);
    Ok(handle)
}

/// Withdraw a registration; stale handles are ignored
pub fn unregister(handle: SubscriptionHandle) -> bool {
    BRIDGE.with(|bridge| bridge.unregister(handle))
}

/// Register a JS function as the keydown handler.
///
/// The function is called with the key string. If it throws, the exception
/// is rethrown to the host after the bridge has finished dispatching.
pub fn register_js(func: Function) -> Result<SubscriptionHandle, JsValue> {
    register(move |key: &KeyIdentifier| {
        if let Err(error) = func.call1(&JsValue::NULL, &JsValue::from_str(key.as_str())) {
            HANDLER_ERROR.with(|slot| *slot.borrow_mut() = Some(error));
        }
    })
}

fn install_listener(document: &Document) {
    LISTENER.with(|slot| {
        let mut slot = slot.borrow_mut();
        let listener = slot.get_or_insert_with(new_listener);
        document.set_onkeydown(Some(listener.as_ref().unchecked_ref()));
    });
}

fn new_listener() -> KeydownListener {
    let bridge = BRIDGE.with(|bridge| bridge.clone());
    Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        let key = key_from_event(&event);
        let repeat = event.repeat();
        drop(event);
        bridge.notify(&key, repeat);
        drop(key);
        // throw_val skips destructors, so nothing owned may be live here
        if let Some(error) = take_handler_error() {
            wasm_bindgen::throw_val(error);
        }
    })
}

fn take_handler_error() -> Option<JsValue> {
    HANDLER_ERROR.with(|slot| slot.borrow_mut().take())
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("Document not available"))
}
