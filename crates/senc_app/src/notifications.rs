//! Synchronous topic pub/sub owned by the controller.
//!
//! Handlers run on the emitting call, in subscription order. The registry is not borrowed while
//! handlers run, so a handler may subscribe, unsubscribe or emit again.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use senc_host::FileParams;

/// Notification topics understood by the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// A changed, recognized key/path should be loaded.
    LoadFile,
    /// The displayed params should be persisted by listeners (URL fragment).
    Params,
    /// A tree finished loading and was rendered.
    Loaded,
    /// A load ended in failure.
    LoadFailed,
}

impl Topic {
    /// Returns a stable string token for logs and diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoadFile => "loadfile",
            Self::Params => "params",
            Self::Loaded => "loaded",
            Self::LoadFailed => "loadfailed",
        }
    }
}

/// Payload delivered to topic subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Request to load the given key/path.
    LoadFile(FileParams),
    /// Params to persist.
    Params(FileParams),
    /// Params whose tree was rendered.
    Loaded(FileParams),
    /// Params whose load failed, with the rendered error message.
    LoadFailed {
        /// Params of the failed load.
        params: FileParams,
        /// Human-readable failure.
        error: String,
    },
}

impl Notification {
    /// Returns the topic this notification is delivered on.
    pub const fn topic(&self) -> Topic {
        match self {
            Self::LoadFile(_) => Topic::LoadFile,
            Self::Params(_) => Topic::Params,
            Self::Loaded(_) => Topic::Loaded,
            Self::LoadFailed { .. } => Topic::LoadFailed,
        }
    }
}

/// Subscriber callback.
pub type NotificationHandler = Rc<dyn Fn(&Notification)>;

/// Handle returned by [`NotificationChannel::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct ChannelState {
    next_id: u64,
    topic_subscribers: HashMap<Topic, Vec<(SubscriptionId, NotificationHandler)>>,
}

#[derive(Clone, Default)]
/// In-process publish/subscribe channel. Clones share the same registry.
pub struct NotificationChannel {
    state: Rc<RefCell<ChannelState>>,
}

impl NotificationChannel {
    /// Adds a handler for `topic` and returns its subscription handle.
    pub fn subscribe(
        &self,
        topic: Topic,
        handler: impl Fn(&Notification) + 'static,
    ) -> SubscriptionId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = SubscriptionId(state.next_id);
        state
            .topic_subscribers
            .entry(topic)
            .or_default()
            .push((id, Rc::new(handler)));
        id
    }

    /// Removes a subscription. Returns `false` when it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.state.borrow_mut();
        let mut removed = false;
        for subscribers in state.topic_subscribers.values_mut() {
            let before = subscribers.len();
            subscribers.retain(|(sub_id, _)| *sub_id != id);
            removed |= subscribers.len() != before;
        }
        state
            .topic_subscribers
            .retain(|_, subscribers| !subscribers.is_empty());
        removed
    }

    /// Delivers `notification` to every subscriber of its topic and returns how many ran.
    pub fn emit(&self, notification: &Notification) -> usize {
        let handlers: Vec<NotificationHandler> = {
            let state = self.state.borrow();
            let Some(subscribers) = state.topic_subscribers.get(&notification.topic()) else {
                return 0;
            };
            subscribers
                .iter()
                .map(|(_, handler)| Rc::clone(handler))
                .collect()
        };

        for handler in &handlers {
            handler(notification);
        }
        handlers.len()
    }

    /// Returns the number of live subscriptions for `topic`.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.state
            .borrow()
            .topic_subscribers
            .get(&topic)
            .map_or(0, Vec::len)
    }
}
