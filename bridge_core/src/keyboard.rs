//! Keydown routing
//!
//! One global slot holds the active handler. Registering replaces whatever
//! was there (last registration wins); notifications that arrive while the
//! slot is empty are dropped, never buffered.

use crate::config::Config;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Opaque key token as supplied by the host (`KeyboardEvent.key`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyIdentifier(String);

impl KeyIdentifier {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for KeyIdentifier {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for KeyIdentifier {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl AsRef<str> for KeyIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for KeyIdentifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for KeyIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for KeyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies one registration in a [`KeydownSlot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

pub type KeydownHandler = Rc<dyn Fn(&KeyIdentifier)>;

struct Registration {
    handle: SubscriptionHandle,
    handler: KeydownHandler,
}

/// The single keydown subscription slot
#[derive(Default)]
pub struct KeydownSlot {
    active: Option<Registration>,
    next_id: u64,
}

impl KeydownSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `handler`, discarding any previous registration
    pub fn register(&mut self, handler: KeydownHandler) -> SubscriptionHandle {
        let handle = SubscriptionHandle(self.next_id);
        self.next_id += 1;
        if let Some(previous) = self.active.replace(Registration { handle, handler }) {
            log::debug!(
                "keydown handler {:?} replaced by {:?}",
                previous.handle,
                handle
            );
        }
        handle
    }

    /// Remove the active handler if `handle` still names it
    pub fn unregister(&mut self, handle: SubscriptionHandle) -> bool {
        if self.active_handle() != Some(handle) {
            return false;
        }
        self.active = None;
        true
    }

    pub fn is_registered(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_handle(&self) -> Option<SubscriptionHandle> {
        self.active.as_ref().map(|r| r.handle)
    }

    /// Deliver one notification to the active handler.
    ///
    /// The slot is not borrowed while the handler runs, so the handler may
    /// register, unregister, or raise further keydowns; those reach whichever
    /// handler is active at that moment. Returns whether a handler was invoked.
    pub fn dispatch(slot: &RefCell<Self>, key: &KeyIdentifier) -> bool {
        let handler = slot.borrow().active.as_ref().map(|r| r.handler.clone());
        let Some(handler) = handler else {
            return false;
        };
        handler(key);
        true
    }
}

/// Host-agnostic keyboard bridge.
///
/// Cloning shares the same slot; the host binding keeps one clone inside its
/// event listener and hands others to the application.
#[derive(Clone)]
pub struct KeyboardBridge {
    slot: Rc<RefCell<KeydownSlot>>,
    config: Rc<RefCell<Config>>,
}

impl KeyboardBridge {
    pub fn new(config: &Config) -> Self {
        Self {
            slot: Rc::new(RefCell::new(KeydownSlot::new())),
            config: Rc::new(RefCell::new(config.clone())),
        }
    }

    pub fn configure(&self, config: &Config) {
        *self.config.borrow_mut() = config.clone();
    }

    /// Register `handler` as the only keydown handler
    pub fn register<F>(&self, handler: F) -> SubscriptionHandle
    where
        F: Fn(&KeyIdentifier) + 'static,
    {
        self.slot.borrow_mut().register(Rc::new(handler))
    }

    pub fn unregister(&self, handle: SubscriptionHandle) -> bool {
        self.slot.borrow_mut().unregister(handle)
    }

    pub fn is_registered(&self) -> bool {
        self.slot.borrow().is_registered()
    }

    /// Handle one host keydown notification
    pub fn notify(&self, key: &KeyIdentifier, repeat: bool) -> bool {
        let forwards = self.config.borrow().forwards(repeat);
        if !forwards {
            return false;
        }
        KeydownSlot::dispatch(&self.slot, key)
    }
}

impl Default for KeyboardBridge {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
