//! Correlating the current location with subtree paths.
//!
//! [`PathMatcher`] answers "is this location under that path?".
//! [`LocationBus`] turns it into a subscription: folders register a
//! callback for their path and get it invoked on every navigation that
//! lands inside their subtree, until the returned [`Subscription`] is
//! dropped.
//!
//! The bus is single-threaded (`Rc`) like the UI it serves.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Segment-aware prefix matcher for a subtree root path.
///
/// `/resources/guides` matches `/resources/guides` and
/// `/resources/guides/setup`, but not `/resources/guides-old`.
/// Trailing slashes are ignored on both sides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathMatcher {
    root: String,
}

impl PathMatcher {
    pub fn new(root: &str) -> Self {
        Self {
            root: root.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn matches(&self, location: &str) -> bool {
        let location = location.trim_end_matches('/');
        match location.strip_prefix(self.root.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

type Callback = Rc<RefCell<dyn FnMut()>>;

struct Entry {
    id: u64,
    matcher: PathMatcher,
    callback: Callback,
    live: Rc<Cell<bool>>,
}

#[derive(Default)]
struct BusState {
    next_id: u64,
    current: Option<String>,
    entries: Vec<Entry>,
}

/// Location change fan-out with explicit subscriptions.
///
/// Cloning yields another handle to the same bus.
#[derive(Clone, Default)]
pub struct LocationBus {
    state: Rc<RefCell<BusState>>,
}

impl LocationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for locations under `root`.
    ///
    /// If a location was already published and it lies under `root`, the
    /// callback fires once before this returns.
    pub fn subscribe<F>(&self, root: &str, callback: F) -> Subscription
    where
        F: FnMut() + 'static,
    {
        let matcher = PathMatcher::new(root);
        let callback: Callback = Rc::new(RefCell::new(callback));
        let live = Rc::new(Cell::new(true));

        let (id, fire_now) = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let fire_now = state
                .current
                .as_deref()
                .is_some_and(|location| matcher.matches(location));
            state.entries.push(Entry {
                id,
                matcher,
                callback: Rc::clone(&callback),
                live: Rc::clone(&live),
            });
            (id, fire_now)
        };

        let subscription = Subscription {
            id,
            bus: Rc::downgrade(&self.state),
            live,
        };
        if fire_now {
            invoke(&callback, &subscription.live);
        }
        subscription
    }

    /// Record `location` and invoke every live subscription it falls under.
    pub fn publish(&self, location: &str) {
        let matched: Vec<(Callback, Rc<Cell<bool>>)> = {
            let mut state = self.state.borrow_mut();
            state.current = Some(location.to_string());
            state.entries.retain(|e| e.live.get());
            state
                .entries
                .iter()
                .filter(|e| e.matcher.matches(location))
                .map(|e| (Rc::clone(&e.callback), Rc::clone(&e.live)))
                .collect()
        };

        // Callbacks run without the bus borrowed so they may subscribe,
        // unsubscribe or publish.
        for (callback, live) in &matched {
            invoke(callback, live);
        }
    }

    /// Last published location.
    pub fn current(&self) -> Option<String> {
        self.state.borrow().current.clone()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.state
            .borrow()
            .entries
            .iter()
            .filter(|e| e.live.get())
            .count()
    }
}

fn invoke(callback: &Callback, live: &Cell<bool>) {
    if !live.get() {
        return;
    }
    // A callback that re-publishes to itself is skipped rather than re-entered.
    if let Ok(mut f) = callback.try_borrow_mut() {
        f();
    }
}

/// Registration handle returned by [`LocationBus::subscribe`].
///
/// Dropping it unsubscribes; the callback is never invoked afterwards.
pub struct Subscription {
    id: u64,
    bus: Weak<RefCell<BusState>>,
    live: Rc<Cell<bool>>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.live.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.live.set(false);
        if let Some(bus) = self.bus.upgrade()
            && let Ok(mut state) = bus.try_borrow_mut()
        {
            state.entries.retain(|e| e.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        (count, move || c.set(c.get() + 1))
    }

    #[test]
    fn test_matcher() {
        let m = PathMatcher::new("/resources/guides");
        assert!(m.matches("/resources/guides"));
        assert!(m.matches("/resources/guides/"));
        assert!(m.matches("/resources/guides/setup"));
        assert!(!m.matches("/resources/guides-old"));
        assert!(!m.matches("/resources"));
        assert!(!m.matches("/blog/guides"));
    }

    #[test]
    fn test_matcher_trailing_slash_root() {
        let m = PathMatcher::new("/resources/");
        assert_eq!(m.root(), "/resources");
        assert!(m.matches("/resources/api"));
    }

    #[test]
    fn test_empty_root_matches_everything() {
        let m = PathMatcher::new("/");
        assert!(m.matches("/"));
        assert!(m.matches("/anything/at/all"));
    }

    #[test]
    fn test_publish_invokes_matching_only() {
        let bus = LocationBus::new();
        let (guides, on_guides) = counter();
        let (api, on_api) = counter();
        let _g = bus.subscribe("/resources/guides", on_guides);
        let _a = bus.subscribe("/resources/api", on_api);

        bus.publish("/resources/guides/setup");
        assert_eq!(guides.get(), 1);
        assert_eq!(api.get(), 0);

        bus.publish("/resources/api/client");
        assert_eq!(guides.get(), 1);
        assert_eq!(api.get(), 1);
    }

    #[test]
    fn test_fires_on_every_matching_navigation() {
        let bus = LocationBus::new();
        let (count, on_match) = counter();
        let _sub = bus.subscribe("/resources/guides", on_match);

        bus.publish("/resources/guides/a");
        bus.publish("/resources/other");
        bus.publish("/resources/guides/b");
        bus.publish("/resources/guides/b");
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_subscribe_fires_for_current_location() {
        let bus = LocationBus::new();
        bus.publish("/resources/guides/setup");

        let (count, on_match) = counter();
        let _sub = bus.subscribe("/resources/guides", on_match);
        assert_eq!(count.get(), 1);

        let (other, on_other) = counter();
        let _o = bus.subscribe("/resources/api", on_other);
        assert_eq!(other.get(), 0);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus = LocationBus::new();
        let (count, on_match) = counter();
        let sub = bus.subscribe("/resources", on_match);
        assert_eq!(bus.subscriber_count(), 1);
        assert!(sub.is_active());

        drop(sub);
        assert_eq!(bus.subscriber_count(), 0);
        bus.publish("/resources/guides");
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_drop_during_publish_prevents_invocation() {
        let bus = LocationBus::new();
        let later: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let (count, on_match) = counter();

        let slot = Rc::clone(&later);
        let _first = bus.subscribe("/resources", move || {
            slot.borrow_mut().take();
        });
        *later.borrow_mut() = Some(bus.subscribe("/resources", on_match));

        bus.publish("/resources/guides");
        assert_eq!(count.get(), 0);
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn test_reentrant_publish_and_subscribe() {
        let bus = LocationBus::new();
        let inner_bus = bus.clone();
        let held: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));
        let held_inner = Rc::clone(&held);

        let _sub = bus.subscribe("/resources", move || {
            held_inner
                .borrow_mut()
                .push(inner_bus.subscribe("/resources/api", || {}));
            inner_bus.publish("/resources/api");
        });

        bus.publish("/resources/guides");
        assert_eq!(bus.current().as_deref(), Some("/resources/api"));
        assert_eq!(held.borrow().len(), 1);
    }

    #[test]
    fn test_subscription_outlives_bus() {
        let bus = LocationBus::new();
        let sub = bus.subscribe("/resources", || {});
        drop(bus);
        assert!(sub.is_active());
        drop(sub);
    }
}
