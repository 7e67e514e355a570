/// Events - Notifications from the store to the presentation layer
///
/// The store never calls back into its consumer. Instead every state change
/// a consumer may react to is pushed onto an [`EventQueue`], and the consumer
/// drains the queue after each interaction.
///
/// # Event Types
///
/// - `Sort`: the active sort column or its direction changed
/// - `Jump`: the current page was (re)selected
///
/// # Usage Pattern
///
/// 1. The consumer calls `sort()` / `jump()` on the store
/// 2. Successful transitions push events in the order they happened
/// 3. The consumer calls `drain_events()` and forwards them to its UI layer
///
/// Events serialize as internally tagged JSON for bridging to a UI runtime.

use crate::column::SortDirection;
use serde::Serialize;

/// A single notification emitted by the store
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum StoreEvent {
    /// The active sort column is now `key`, sorted in `direction`
    Sort {
        key: String,
        direction: SortDirection,
    },

    /// The current page moved from `old_page` to `page`
    Jump {
        page: usize,
        old_page: usize,
    },
}

impl StoreEvent {
    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            StoreEvent::Sort { .. } => "sort",
            StoreEvent::Jump { .. } => "jump",
        }
    }
}

/// Ordered buffer of events not yet seen by the consumer
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Vec<StoreEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        EventQueue { events: Vec::new() }
    }

    pub fn push(&mut self, event: StoreEvent) {
        self.events.push(event);
    }

    /// Pending events, oldest first
    pub fn events(&self) -> &[StoreEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Take all pending events, leaving the queue empty
    pub fn drain(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_basic() {
        let mut queue = EventQueue::new();
        assert!(queue.is_empty());

        queue.push(StoreEvent::Jump { page: 2, old_page: 1 });
        queue.push(StoreEvent::Sort {
            key: "age".to_string(),
            direction: SortDirection::Ascending,
        });
        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].name(), "jump");
        assert_eq!(drained[1].name(), "sort");
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_event_json() {
        let sort = StoreEvent::Sort {
            key: "age".to_string(),
            direction: SortDirection::Descending,
        };
        assert_eq!(
            serde_json::to_value(&sort).unwrap(),
            serde_json::json!({"type": "Sort", "key": "age", "direction": "DESC"})
        );

        let jump = StoreEvent::Jump { page: 3, old_page: 1 };
        assert_eq!(
            serde_json::to_value(&jump).unwrap(),
            serde_json::json!({"type": "Jump", "page": 3, "old_page": 1})
        );
    }
}
