//! Host event bus
//!
//! Single-threaded fan-out of resize/scroll notifications. Listeners are
//! owned by the bus and detached when their [`Subscription`] guard drops,
//! so a torn-down widget can never be called back.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use tracing::trace;

/// Notifications from the host environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    /// Container mounted (first layout available)
    Mounted,
    /// Viewport size changed
    Resized,
    /// Scroll offset changed
    Scrolled,
}

type Listener = Box<dyn FnMut(HostEvent)>;

struct Slot {
    id: u64,
    listener: Listener,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    slots: Vec<Slot>,
    /// Set while the outermost `emit` is draining `pending`
    dispatching: bool,
    /// Events waiting for delivery, in arrival order
    pending: VecDeque<HostEvent>,
    /// Ids dropped while their slot was checked out for dispatch
    removed: Vec<u64>,
}

/// Event bus handle. Clones share the same listeners.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Rc<RefCell<Registry>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` until the returned guard is dropped
    pub fn subscribe(&self, listener: impl FnMut(HostEvent) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.slots.push(Slot {
            id,
            listener: Box::new(listener),
        });

        Subscription {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Deliver `event` to every live listener, in subscription order.
    ///
    /// Listeners may subscribe, unsubscribe or emit from inside the callback.
    /// An event emitted during delivery is queued and reaches every listener
    /// once the current event has been delivered.
    pub fn emit(&self, event: HostEvent) {
        {
            let mut registry = self.registry.borrow_mut();
            registry.pending.push_back(event);
            if registry.dispatching {
                trace!(?event, "emit queued during dispatch");
                return;
            }
            registry.dispatching = true;
        }

        loop {
            let next = self.registry.borrow_mut().pending.pop_front();
            let Some(event) = next else {
                break;
            };
            self.dispatch(event);
        }
        self.registry.borrow_mut().dispatching = false;
    }

    fn dispatch(&self, event: HostEvent) {
        let mut slots = std::mem::take(&mut self.registry.borrow_mut().slots);
        trace!(?event, listeners = slots.len(), "emit");

        for slot in slots.iter_mut() {
            let detached = self.registry.borrow().removed.contains(&slot.id);
            if !detached {
                (slot.listener)(event);
            }
        }

        let mut registry = self.registry.borrow_mut();
        let removed = std::mem::take(&mut registry.removed);
        slots.retain(|slot| !removed.contains(&slot.id));
        // Listeners added during dispatch go after the existing ones
        slots.append(&mut registry.slots);
        registry.slots = slots;
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().slots.len()
    }
}

/// Guard for a registered listener. Dropping it detaches the listener.
#[must_use = "dropping a Subscription detaches its listener immediately"]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Subscription {
    /// Detach now (same as dropping)
    pub fn detach(self) {}

    /// Whether the bus still exists
    pub fn is_bus_alive(&self) -> bool {
        self.registry.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = registry.borrow_mut();
        let before = registry.slots.len();
        registry.slots.retain(|slot| slot.id != self.id);
        if registry.slots.len() == before && registry.dispatching {
            registry.removed.push(self.id);
        }
        trace!(id = self.id, "subscription detached");
    }
}
