use std::collections::HashMap;

use async_trait::async_trait;
use praxia_application::CalendarRepository;
use praxia_core::{AppError, AppResult};
use praxia_domain::{CalendarEvent, EventId, UserId};
use tokio::sync::RwLock;

/// In-memory calendar repository implementation.
///
/// A production implementation must additionally enforce a per-assignee
/// time-range exclusion constraint; this one only stores events for
/// tests and the development API.
#[derive(Debug, Default)]
pub struct InMemoryCalendarRepository {
    events: RwLock<HashMap<EventId, CalendarEvent>>,
}

impl InMemoryCalendarRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl CalendarRepository for InMemoryCalendarRepository {
    async fn save_event(&self, event: CalendarEvent) -> AppResult<()> {
        let mut events = self.events.write().await;

        if events.contains_key(&event.id()) {
            return Err(AppError::Conflict(format!(
                "event '{}' already exists",
                event.id()
            )));
        }

        events.insert(event.id(), event);
        Ok(())
    }

    async fn update_event(&self, event: CalendarEvent) -> AppResult<()> {
        let mut events = self.events.write().await;

        if !events.contains_key(&event.id()) {
            return Err(AppError::NotFound(format!(
                "event '{}' does not exist",
                event.id()
            )));
        }

        events.insert(event.id(), event);
        Ok(())
    }

    async fn find_event(&self, event_id: EventId) -> AppResult<Option<CalendarEvent>> {
        Ok(self.events.read().await.get(&event_id).cloned())
    }

    async fn list_events_for_assignee(&self, assignee: UserId) -> AppResult<Vec<CalendarEvent>> {
        let events = self.events.read().await;

        let mut values: Vec<CalendarEvent> = events
            .values()
            .filter(|event| event.assignee() == assignee)
            .cloned()
            .collect();
        values.sort_by_key(CalendarEvent::starts_at);

        Ok(values)
    }
}
