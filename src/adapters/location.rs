use crate::domain::ports::{FragmentListener, ListenerId, Location};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

#[derive(Debug)]
struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    fn current(&self) -> &str {
        &self.entries[self.index]
    }
}

/// In-process stand-in for a browser tab's location and session history.
///
/// Each distinct fragment write pushes a history entry and drops any forward
/// entries, so [`back`](Self::back) and [`forward`](Self::forward) traverse
/// pages the same way the browser buttons do.
pub struct MemoryLocation {
    history: Mutex<History>,
    listeners: Mutex<Vec<(ListenerId, FragmentListener)>>,
    next_id: AtomicU64,
}

impl MemoryLocation {
    pub fn new(initial_fragment: &str) -> Self {
        Self {
            history: Mutex::new(History {
                entries: vec![normalize(initial_fragment)],
                index: 0,
            }),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Steps back one history entry. Returns `false` at the start of history.
    pub fn back(&self) -> bool {
        self.traverse(-1)
    }

    /// Steps forward one history entry. Returns `false` at the end of history.
    pub fn forward(&self) -> bool {
        self.traverse(1)
    }

    pub fn history_len(&self) -> usize {
        self.lock_history().entries.len()
    }

    pub fn listener_count(&self) -> usize {
        self.lock_listeners().len()
    }

    fn traverse(&self, delta: isize) -> bool {
        let fragment = {
            let mut history = self.lock_history();
            let target = history.index as isize + delta;
            if target < 0 || target as usize >= history.entries.len() {
                return false;
            }
            let previous = history.current().to_string();
            history.index = target as usize;
            let current = history.current().to_string();
            if previous == current {
                return true;
            }
            current
        };
        self.notify(&fragment);
        true
    }

    fn notify(&self, fragment: &str) {
        // Snapshot so listeners may register, deregister or navigate.
        let listeners: Vec<FragmentListener> = self
            .lock_listeners()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        tracing::debug!(
            "Fragment changed to '{}', notifying {} listeners",
            fragment,
            listeners.len()
        );
        for listener in listeners {
            listener(fragment);
        }
    }

    fn lock_history(&self) -> std::sync::MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_listeners(&self) -> std::sync::MutexGuard<'_, Vec<(ListenerId, FragmentListener)>> {
        self.listeners.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("")
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> String {
        self.lock_history().current().to_string()
    }

    fn set_fragment(&self, fragment: &str) {
        let fragment = normalize(fragment);
        {
            let mut history = self.lock_history();
            if history.current() == fragment {
                return;
            }
            let keep = history.index + 1;
            history.entries.truncate(keep);
            history.entries.push(fragment.clone());
            history.index = keep;
        }
        self.notify(&fragment);
    }

    fn add_fragment_listener(&self, listener: FragmentListener) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock_listeners().push((id, listener));
        id
    }

    fn remove_fragment_listener(&self, id: ListenerId) {
        self.lock_listeners().retain(|(existing, _)| *existing != id);
    }
}

/// `location.hash` reads back with a leading `#`, or empty when unset.
fn normalize(fragment: &str) -> String {
    let value = fragment.strip_prefix('#').unwrap_or(fragment);
    if value.is_empty() {
        String::new()
    } else {
        format!("#{}", value)
    }
}
