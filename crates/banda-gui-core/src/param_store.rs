//! Parameter store trait and change-notification plumbing.
//!
//! [`ParamStore`] abstracts over the parameter storage mechanism, letting
//! the same editor work in the standalone preview shell (backed by atomic
//! floats) and inside a plugin wrapper (backed by the host's parameter
//! state). All derived UI state flows from the store: controls write
//! through it, and the editor re-derives relevance and curves only when a
//! change notification arrives.
//!
//! ```text
//! controls ──► ParamStore::set(key, value)
//!                      │
//!                 ChangeHub::notify()            (any thread)
//!                      │
//! Subscription::drain() at frame start           (presentation thread)
//!                      │
//! EqualizerEditor::on_params_changed()
//! ```
//!
//! Notification is coarse — "something changed" — because the editor's
//! handler is a full, idempotent re-derive. Listener lifetime is scoped:
//! [`Subscription`] deregisters itself on drop, on every exit path.

use banda_core::ParamKey;
use crossbeam_channel::{Receiver, Sender, unbounded};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Trait for keyed parameter access with change notification.
///
/// Implementations must be thread-safe: `set` may be called from the
/// presentation thread (control edits) while automation writes arrive from
/// elsewhere. Values are plain units (Hz, dB); implementations clamp to the
/// descriptor range on write.
pub trait ParamStore: Send + Sync {
    /// Current value for `key`.
    ///
    /// Returns `0.0` for keys outside the store's configured band count.
    fn get(&self, key: ParamKey) -> f32;

    /// Write a new value for `key`, clamped to the parameter's range.
    ///
    /// Out-of-range keys are silently ignored. Every accepted write fires
    /// change notification.
    fn set(&self, key: ParamKey, value: f32);

    /// Register a listener for change notification.
    fn subscribe(&self) -> Subscription;
}

struct Listener {
    id: u64,
    tx: Sender<()>,
}

struct HubShared {
    listeners: Mutex<Vec<Listener>>,
    repaint: Mutex<Option<Box<dyn Fn() + Send + Sync>>>,
    next_id: AtomicU64,
}

/// Fan-out point for parameter-change notification.
///
/// Stores own a hub and call [`notify`](Self::notify) after every accepted
/// write; external automation sources can share the same hub. Notification
/// is queue-based so it is safe from any thread — the receiving editor
/// drains its [`Subscription`] on the presentation thread.
#[derive(Clone)]
pub struct ChangeHub {
    shared: Arc<HubShared>,
}

impl ChangeHub {
    /// Create a hub with no listeners.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(HubShared {
                listeners: Mutex::new(Vec::new()),
                repaint: Mutex::new(None),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Register a listener.
    ///
    /// The returned [`Subscription`] deregisters itself when dropped.
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = unbounded();
        let id = self.shared.next_id.fetch_add(1, Ordering::Relaxed);
        self.shared.listeners.lock().push(Listener { id, tx });
        Subscription {
            id,
            rx,
            hub: Arc::downgrade(&self.shared),
        }
    }

    /// Queue a notification for every live listener and wake the UI.
    ///
    /// Callable from any thread.
    pub fn notify(&self) {
        for listener in self.shared.listeners.lock().iter() {
            let _ = listener.tx.send(());
        }
        if let Some(hook) = self.shared.repaint.lock().as_ref() {
            hook();
        }
    }

    /// Install a hook invoked on every notification, typically
    /// `egui::Context::request_repaint` (which is thread-safe).
    pub fn set_repaint_hook(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.shared.repaint.lock() = Some(Box::new(hook));
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.shared.listeners.lock().len()
    }
}

impl Default for ChangeHub {
    fn default() -> Self {
        Self::new()
    }
}

/// A registered listener's receiving end.
///
/// Dropping the subscription removes the listener from the hub before any
/// of the owner's other state is torn down — declare it as the first field
/// of the owning struct so field drop order enforces that.
pub struct Subscription {
    id: u64,
    rx: Receiver<()>,
    hub: Weak<HubShared>,
}

impl Subscription {
    /// Drain queued notifications; `true` if any arrived since the last
    /// drain. This is the marshal point onto the presentation thread.
    pub fn drain(&self) -> bool {
        let mut any = false;
        while self.rx.try_recv().is_ok() {
            any = true;
        }
        any
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.hub.upgrade() {
            shared.listeners.lock().retain(|l| l.id != self.id);
        }
    }
}
