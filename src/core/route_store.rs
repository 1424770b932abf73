use crate::domain::model::Route;
use crate::domain::ports::{ListenerId, Location};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

pub type RouteCallback = Arc<dyn Fn(&Route) + Send + Sync>;

struct Shared {
    current: RwLock<Route>,
    subscribers: Mutex<Vec<(u64, RouteCallback)>>,
    next_id: AtomicU64,
}

impl Shared {
    /// Reads the fragment while holding the route lock, so the last refresh
    /// always stores the latest fragment even when notifications from
    /// concurrent writers arrive out of order.
    fn refresh(&self, read_fragment: impl FnOnce() -> String) {
        let route = {
            let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
            let route = Route::from_fragment(&read_fragment());
            *current = route.clone();
            route
        };
        tracing::debug!("Route changed to {}", route);

        let subscribers: Vec<RouteCallback> = self
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in subscribers {
            callback(&route);
        }
    }

    fn remove(&self, id: u64) {
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .retain(|(existing, _)| *existing != id);
    }
}

/// Owner of the current route.
///
/// The fragment-change listener registered in [`RouteStore::new`] is the only
/// writer of the route value. [`RouteStore::navigate`] writes the fragment and
/// lets that notification update the store, so the store never disagrees
/// with the address bar.
pub struct RouteStore<L: Location + 'static> {
    location: Arc<L>,
    shared: Arc<Shared>,
    listener: ListenerId,
}

impl<L: Location + 'static> RouteStore<L> {
    pub fn new(location: Arc<L>) -> Self {
        let initial = Route::from_fragment(&location.fragment());
        tracing::debug!("Initial route: {}", initial);

        let shared = Arc::new(Shared {
            current: RwLock::new(initial),
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        });

        let weak_shared: Weak<Shared> = Arc::downgrade(&shared);
        let weak_location: Weak<L> = Arc::downgrade(&location);
        // The notification only signals a change; the fragment itself is read
        // back from the location.
        let listener = location.add_fragment_listener(Arc::new(move |_fragment: &str| {
            if let (Some(shared), Some(location)) = (weak_shared.upgrade(), weak_location.upgrade())
            {
                shared.refresh(|| location.fragment());
            }
        }));

        Self {
            location,
            shared,
            listener,
        }
    }

    pub fn current(&self) -> Route {
        self.shared
            .current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Points the environment at `target`. The target is not checked against
    /// the known pages.
    pub fn navigate(&self, target: &str) {
        tracing::debug!("Navigating to {}", target);
        self.location.set_fragment(target);
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Route) + Send + Sync + 'static,
    {
        let id = self.shared.next_id.fetch_add(1, Ordering::Relaxed);
        self.shared
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((id, Arc::new(callback)));
        Subscription {
            shared: Arc::downgrade(&self.shared),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn location(&self) -> &Arc<L> {
        &self.location
    }
}

impl<L: Location + 'static> Drop for RouteStore<L> {
    fn drop(&mut self) {
        self.location.remove_fragment_listener(self.listener);
    }
}

/// Handle for a route subscription; dropping it deregisters the callback.
pub struct Subscription {
    shared: Weak<Shared>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.remove(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryLocation;
    use crate::domain::ports::FragmentListener;
    use std::thread;

    #[test]
    fn test_initial_route_defaults_to_root() {
        let store = RouteStore::new(Arc::new(MemoryLocation::default()));
        assert_eq!(store.current(), Route::root());

        let store = RouteStore::new(Arc::new(MemoryLocation::new("#/track")));
        assert_eq!(store.current().as_str(), "/track");
    }

    #[test]
    fn test_navigate_updates_through_fragment_change() {
        let location = Arc::new(MemoryLocation::default());
        let store = RouteStore::new(location.clone());

        store.navigate("/contact");
        assert_eq!(location.fragment(), "#/contact");
        assert_eq!(store.current().as_str(), "/contact");
    }

    #[test]
    fn test_external_fragment_change_is_observed() {
        let location = Arc::new(MemoryLocation::default());
        let store = RouteStore::new(location.clone());

        location.set_fragment("#/services");
        assert_eq!(store.current().as_str(), "/services");

        location.set_fragment("");
        assert_eq!(store.current(), Route::root());
    }

    #[test]
    fn test_unknown_target_is_accepted() {
        let location = Arc::new(MemoryLocation::default());
        let store = RouteStore::new(location);

        store.navigate("/unknown");
        assert_eq!(store.current().as_str(), "/unknown");
    }

    #[test]
    fn test_subscribers_receive_routes_until_dropped() {
        let location = Arc::new(MemoryLocation::default());
        let store = RouteStore::new(location);
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));

        let sink = seen.clone();
        let subscription = store.subscribe(move |route| {
            sink.lock().unwrap().push(route.to_string());
        });
        assert_eq!(store.subscriber_count(), 1);

        store.navigate("/about");
        store.navigate("/track");
        subscription.unsubscribe();
        store.navigate("/contact");

        assert_eq!(store.subscriber_count(), 0);
        assert_eq!(*seen.lock().unwrap(), vec!["/about", "/track"]);
    }

    #[test]
    fn test_dropping_store_removes_listener() {
        let location = Arc::new(MemoryLocation::default());
        let store = RouteStore::new(location.clone());
        assert_eq!(location.listener_count(), 1);

        drop(store);
        assert_eq!(location.listener_count(), 0);
        location.set_fragment("/about");
    }

    /// Location whose change notifications carry an outdated fragment, as a
    /// notification from an earlier write can when writers race.
    #[derive(Default)]
    struct LaggingLocation {
        fragment: Mutex<String>,
        listeners: Mutex<Vec<FragmentListener>>,
    }

    impl Location for LaggingLocation {
        fn fragment(&self) -> String {
            self.fragment.lock().unwrap().clone()
        }

        fn set_fragment(&self, fragment: &str) {
            let previous = std::mem::replace(&mut *self.fragment.lock().unwrap(), fragment.to_string());
            let listeners = self.listeners.lock().unwrap().clone();
            for listener in listeners {
                listener(&previous);
            }
        }

        fn add_fragment_listener(&self, listener: FragmentListener) -> ListenerId {
            let mut listeners = self.listeners.lock().unwrap();
            listeners.push(listener);
            ListenerId(listeners.len() as u64)
        }

        fn remove_fragment_listener(&self, _id: ListenerId) {}
    }

    #[test]
    fn test_route_follows_location_not_notification() {
        let location = Arc::new(LaggingLocation::default());
        let store = RouteStore::new(location.clone());

        store.navigate("#/track");
        assert_eq!(store.current().as_str(), "/track");

        store.navigate("#/about");
        assert_eq!(store.current(), Route::from_fragment(&location.fragment()));
    }

    #[test]
    fn test_concurrent_navigation_settles_on_final_fragment() {
        for _ in 0..50 {
            let location = Arc::new(MemoryLocation::default());
            let store = Arc::new(RouteStore::new(location.clone()));

            let writers: Vec<_> = ["/about", "/services", "/track", "/contact"]
                .into_iter()
                .map(|target| {
                    let store = store.clone();
                    thread::spawn(move || store.navigate(target))
                })
                .collect();
            for writer in writers {
                writer.join().unwrap();
            }

            assert_eq!(store.current(), Route::from_fragment(&location.fragment()));
        }
    }
}
