//! Input routing with disposable subscriptions.
//!
//! Everything here runs on the UI task, so the registry is shared through
//! `Rc<RefCell<..>>` rather than a lock.

use crate::input::{Command, InputAdapter, InputEvent};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::debug;

type Registry = Vec<(u64, Box<dyn InputAdapter>)>;

#[derive(Default)]
struct Inner {
    next_id: u64,
    adapters: Registry,
}

#[derive(Default, Clone)]
pub struct InputRouter {
    inner: Rc<RefCell<Inner>>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<T>(&self, adapter: T) -> Subscription
    where
        T: InputAdapter + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.adapters.push((id, Box::new(adapter)));
        debug!(id, "input adapter subscribed");
        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Run `event` through every live adapter, in subscription order.
    pub fn dispatch(&self, event: &InputEvent) -> Vec<Command> {
        self.inner
            .borrow_mut()
            .adapters
            .iter_mut()
            .filter_map(|(_, adapter)| adapter.translate(event))
            .collect()
    }

    pub fn active(&self) -> usize {
        self.inner.borrow().adapters.len()
    }
}

/// Handle for one registered adapter. Dropping it unregisters the adapter.
#[must_use = "dropping a subscription unregisters its adapter"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Inner>>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        let Some(inner) = self.registry.upgrade() else {
            return false;
        };
        let found = inner.borrow().adapters.iter().any(|(id, _)| *id == self.id);
        found
    }

    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            inner.borrow_mut().adapters.retain(|(id, _)| *id != self.id);
            debug!(id = self.id, "input adapter released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ButtonSource, KeySource, NavButton, NavKey, SwipeSource};

    #[test]
    fn dispatch_reaches_matching_adapters() {
        let router = InputRouter::new();
        let _buttons = router.subscribe(ButtonSource);
        let _keys = router.subscribe(KeySource);
        let _swipe = router.subscribe(SwipeSource::default());
        assert_eq!(router.active(), 3);

        assert_eq!(
            router.dispatch(&InputEvent::Click(NavButton::Next)),
            vec![Command::Advance]
        );
        assert_eq!(
            router.dispatch(&InputEvent::Key(NavKey::MoveLeft)),
            vec![Command::Retreat]
        );
        assert!(router
            .dispatch(&InputEvent::TouchStart { x: 300.0, y: 0.0 })
            .is_empty());
        assert_eq!(
            router.dispatch(&InputEvent::TouchEnd { x: 200.0, y: 0.0 }),
            vec![Command::Advance]
        );
    }

    #[test]
    fn dropped_subscription_stops_receiving() {
        let router = InputRouter::new();
        let keys = router.subscribe(KeySource);
        let buttons = router.subscribe(ButtonSource);
        assert!(keys.is_active());

        drop(keys);
        assert_eq!(router.active(), 1);
        assert!(router.dispatch(&InputEvent::Key(NavKey::MoveRight)).is_empty());

        buttons.cancel();
        assert_eq!(router.active(), 0);
    }

    #[test]
    fn subscription_outliving_router_is_harmless() {
        let router = InputRouter::new();
        let sub = router.subscribe(KeySource);
        drop(router);
        assert!(!sub.is_active());
        drop(sub);
    }
}
