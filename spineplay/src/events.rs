//! Named publish/subscribe over boxed callbacks.

/// Handle returned by [`EventHub::on`]/[`EventHub::once`]; the removal key
/// for a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Subscription<T> {
    id: ListenerId,
    event: String,
    once: bool,
    callback: Box<dyn FnMut(&T)>,
}

/// Minimal named event dispatcher. Delivery is synchronous on the caller's
/// thread, in subscription order per event name. Emitting or subscribing from
/// inside a callback is unsupported.
pub struct EventHub<T> {
    subscriptions: Vec<Subscription<T>>,
    next_id: u64,
}

impl<T> Default for EventHub<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EventHub<T> {
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            next_id: 0,
        }
    }

    /// Persistent subscription.
    pub fn on<F>(&mut self, event: &str, callback: F) -> ListenerId
    where
        F: FnMut(&T) + 'static,
    {
        self.subscribe(event, false, Box::new(callback))
    }

    /// Single-fire subscription, removed after its first delivery.
    pub fn once<F>(&mut self, event: &str, callback: F) -> ListenerId
    where
        F: FnMut(&T) + 'static,
    {
        self.subscribe(event, true, Box::new(callback))
    }

    fn subscribe(&mut self, event: &str, once: bool, callback: Box<dyn FnMut(&T)>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            event: event.to_string(),
            once,
            callback,
        });
        id
    }

    /// Removes the matching subscription. Returns whether one was removed.
    pub fn off(&mut self, event: &str, id: ListenerId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions
            .retain(|sub| !(sub.id == id && sub.event == event));
        self.subscriptions.len() != before
    }

    /// Invokes every current subscriber for `event`, then drops the
    /// single-fire ones that were delivered.
    pub fn emit(&mut self, event: &str, payload: &T) {
        let mut spent = Vec::new();
        for sub in self.subscriptions.iter_mut() {
            if sub.event != event {
                continue;
            }
            (sub.callback)(payload);
            if sub.once {
                spent.push(sub.id);
            }
        }
        if !spent.is_empty() {
            self.subscriptions.retain(|sub| !spent.contains(&sub.id));
        }
    }

    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl<T> std::fmt::Debug for EventHub<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHub")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
