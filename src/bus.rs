//! Page-scoped publish/subscribe channel.
//!
//! The bus decouples the review form, nested deep inside the product tabs,
//! from the product widget that lists reviews. It is owned by the root of
//! the page rather than living in a global.
//!
//! Publishing is a synchronous fan-out: every subscriber of the event's
//! topic runs in registration order before [`EventBus::publish`] returns.
//! Subscribers do not mutate state directly. Each one translates the event
//! into a message for the owner of the bus, which applies the messages in
//! the order they were returned.

use std::fmt;

use crate::catalog::Review;

/// Topics that subscribers can register for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// A review passed validation and was submitted.
    ReviewSubmitted,
}

/// Events carried by the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    /// A review passed validation and was submitted.
    ReviewSubmitted(Review),
}

impl BusEvent {
    /// Returns the topic this event is delivered on.
    #[must_use]
    pub const fn topic(&self) -> Topic {
        match self {
            Self::ReviewSubmitted(_) => Topic::ReviewSubmitted,
        }
    }
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<M> = Box<dyn Fn(&BusEvent) -> Option<M> + Send + Sync>;

struct Subscriber<M> {
    id: SubscriptionId,
    topic: Topic,
    handler: Handler<M>,
}

/// Publish/subscribe bus whose subscribers answer with messages of type `M`.
pub struct EventBus<M> {
    subscribers: Vec<Subscriber<M>>,
    next_id: u64,
}

impl<M> Default for EventBus<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for EventBus<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let topics: Vec<(SubscriptionId, Topic)> = self
            .subscribers
            .iter()
            .map(|subscriber| (subscriber.id, subscriber.topic))
            .collect();
        f.debug_struct("EventBus")
            .field("subscribers", &topics)
            .finish_non_exhaustive()
    }
}

impl<M> EventBus<M> {
    /// Creates a bus with no subscribers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers `handler` for events published on `topic`.
    ///
    /// The subscription lasts until [`EventBus::unsubscribe`] is called or
    /// the bus is dropped.
    pub fn subscribe<F>(&mut self, topic: Topic, handler: F) -> SubscriptionId
    where
        F: Fn(&BusEvent) -> Option<M> + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push(Subscriber {
            id,
            topic,
            handler: Box::new(handler),
        });
        id
    }

    /// Removes a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|subscriber| subscriber.id != id);
        self.subscribers.len() != before
    }

    /// Delivers `event` to every subscriber of its topic.
    ///
    /// Returns the subscribers' messages in registration order. Subscribers
    /// that answer `None` contribute nothing.
    #[must_use = "the messages produced by subscribers must be applied"]
    pub fn publish(&self, event: &BusEvent) -> Vec<M> {
        let topic = event.topic();
        let messages: Vec<M> = self
            .subscribers
            .iter()
            .filter(|subscriber| subscriber.topic == topic)
            .filter_map(|subscriber| (subscriber.handler)(event))
            .collect();
        tracing::debug!(?topic, delivered = messages.len(), "published bus event");
        messages
    }

    /// Number of live subscriptions for `topic`.
    #[must_use]
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.subscribers
            .iter()
            .filter(|subscriber| subscriber.topic == topic)
            .count()
    }
}
