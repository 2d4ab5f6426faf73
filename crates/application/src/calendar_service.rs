use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use praxia_core::{AppError, AppResult, NonEmptyString};
use praxia_domain::{
    ActorIdentity, CalendarEvent, EventId, Permission, UserId, find_overlaps,
};

use crate::authorization::require_permission;

/// Input payload for scheduling a calendar event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEventInput {
    /// User the commitment belongs to.
    pub assignee: UserId,
    /// Event title.
    pub title: NonEmptyString,
    /// Inclusive start instant.
    pub starts_at: DateTime<Utc>,
    /// Exclusive end instant.
    pub ends_at: DateTime<Utc>,
}

/// Result of a scheduling attempt.
///
/// Overlaps block the write: the caller surfaces them as a conflict
/// response and nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// The event was persisted.
    Scheduled(CalendarEvent),
    /// The proposal double-books the assignee; nothing was written.
    Conflicts(Vec<CalendarEvent>),
}

/// Repository port for calendar events.
///
/// The overlap scan in this service is pre-flight only; production
/// implementations must back double-booking prevention with a
/// per-assignee time-range exclusion constraint.
#[async_trait]
pub trait CalendarRepository: Send + Sync {
    /// Persists a new event.
    async fn save_event(&self, event: CalendarEvent) -> AppResult<()>;

    /// Replaces an existing event.
    async fn update_event(&self, event: CalendarEvent) -> AppResult<()>;

    /// Finds an event by identifier.
    async fn find_event(&self, event_id: EventId) -> AppResult<Option<CalendarEvent>>;

    /// Lists every event assigned to a user, cancelled ones included.
    async fn list_events_for_assignee(&self, assignee: UserId) -> AppResult<Vec<CalendarEvent>>;
}

/// Application service for scheduling workflows.
#[derive(Clone)]
pub struct CalendarService {
    events: Arc<dyn CalendarRepository>,
}

impl CalendarService {
    /// Creates a new service from a repository implementation.
    #[must_use]
    pub fn new(events: Arc<dyn CalendarRepository>) -> Self {
        Self { events }
    }

    /// Schedules an event unless it double-books the assignee.
    pub async fn schedule(
        &self,
        actor: &ActorIdentity,
        input: ScheduleEventInput,
    ) -> AppResult<ScheduleOutcome> {
        require_permission(actor, Permission::CalendarWrite)?;

        let existing = self.events.list_events_for_assignee(input.assignee).await?;
        let overlaps = find_overlaps(
            &existing,
            input.assignee,
            input.starts_at,
            input.ends_at,
            None,
        )?;
        if !overlaps.is_empty() {
            return Ok(ScheduleOutcome::Conflicts(overlaps));
        }

        let event = CalendarEvent::new(input.assignee, input.title, input.starts_at, input.ends_at)?;
        self.events.save_event(event.clone()).await?;

        Ok(ScheduleOutcome::Scheduled(event))
    }

    /// Moves an event unless the new interval double-books the assignee.
    pub async fn reschedule(
        &self,
        actor: &ActorIdentity,
        event_id: EventId,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> AppResult<ScheduleOutcome> {
        require_permission(actor, Permission::CalendarWrite)?;

        let mut event = self.find_event(event_id).await?;
        let existing = self
            .events
            .list_events_for_assignee(event.assignee())
            .await?;
        let overlaps = find_overlaps(
            &existing,
            event.assignee(),
            starts_at,
            ends_at,
            Some(event_id),
        )?;
        if !overlaps.is_empty() {
            return Ok(ScheduleOutcome::Conflicts(overlaps));
        }

        event.reschedule(starts_at, ends_at)?;
        self.events.update_event(event.clone()).await?;

        Ok(ScheduleOutcome::Scheduled(event))
    }

    /// Cancels an event, removing it from overlap detection.
    pub async fn cancel(
        &self,
        actor: &ActorIdentity,
        event_id: EventId,
    ) -> AppResult<CalendarEvent> {
        require_permission(actor, Permission::CalendarWrite)?;

        let mut event = self.find_event(event_id).await?;
        event.cancel();
        self.events.update_event(event.clone()).await?;

        Ok(event)
    }

    /// Reports the overlaps a proposal would cause, persisting nothing.
    pub async fn check_availability(
        &self,
        actor: &ActorIdentity,
        assignee: UserId,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
        exclude_event_id: Option<EventId>,
    ) -> AppResult<Vec<CalendarEvent>> {
        require_permission(actor, Permission::CalendarRead)?;

        let existing = self.events.list_events_for_assignee(assignee).await?;
        find_overlaps(&existing, assignee, starts_at, ends_at, exclude_event_id)
    }

    /// Lists an assignee's events ordered by start instant.
    pub async fn agenda(
        &self,
        actor: &ActorIdentity,
        assignee: UserId,
    ) -> AppResult<Vec<CalendarEvent>> {
        require_permission(actor, Permission::CalendarRead)?;

        let mut events = self.events.list_events_for_assignee(assignee).await?;
        events.sort_by_key(CalendarEvent::starts_at);

        Ok(events)
    }

    async fn find_event(&self, event_id: EventId) -> AppResult<CalendarEvent> {
        self.events
            .find_event(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("event '{event_id}' does not exist")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use praxia_core::{AppError, AppResult, NonEmptyString};
    use praxia_domain::{ActorIdentity, CalendarEvent, EventId, Role, UserId};
    use tokio::sync::Mutex;

    use super::{CalendarRepository, CalendarService, ScheduleEventInput, ScheduleOutcome};

    #[derive(Default)]
    struct FakeCalendarRepository {
        events: Mutex<HashMap<EventId, CalendarEvent>>,
    }

    #[async_trait]
    impl CalendarRepository for FakeCalendarRepository {
        async fn save_event(&self, event: CalendarEvent) -> AppResult<()> {
            self.events.lock().await.insert(event.id(), event);
            Ok(())
        }

        async fn update_event(&self, event: CalendarEvent) -> AppResult<()> {
            self.events.lock().await.insert(event.id(), event);
            Ok(())
        }

        async fn find_event(&self, event_id: EventId) -> AppResult<Option<CalendarEvent>> {
            Ok(self.events.lock().await.get(&event_id).cloned())
        }

        async fn list_events_for_assignee(
            &self,
            assignee: UserId,
        ) -> AppResult<Vec<CalendarEvent>> {
            Ok(self
                .events
                .lock()
                .await
                .values()
                .filter(|event| event.assignee() == assignee)
                .cloned()
                .collect())
        }
    }

    fn staff_actor() -> ActorIdentity {
        ActorIdentity::new(UserId::new(), "Scheduler", Role::Paralegal, None)
    }

    fn instant(value: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(value)
            .unwrap_or_else(|_| panic!("test instant '{value}'"))
            .with_timezone(&Utc)
    }

    fn input(assignee: UserId, start: &str, end: &str) -> ScheduleEventInput {
        ScheduleEventInput {
            assignee,
            title: NonEmptyString::new("Hearing").unwrap_or_else(|_| panic!("test title")),
            starts_at: instant(start),
            ends_at: instant(end),
        }
    }

    #[tokio::test]
    async fn overlapping_proposal_reports_conflicts_and_writes_nothing() {
        let service = CalendarService::new(Arc::new(FakeCalendarRepository::default()));
        let actor = staff_actor();
        let assignee = UserId::new();

        let first = service
            .schedule(
                &actor,
                input(assignee, "2025-01-20T10:00:00Z", "2025-01-20T11:00:00Z"),
            )
            .await
            .unwrap_or_else(|_| panic!("first schedule"));
        let ScheduleOutcome::Scheduled(first_event) = first else {
            panic!("first proposal must schedule");
        };

        let second = service
            .schedule(
                &actor,
                input(assignee, "2025-01-20T10:45:00Z", "2025-01-20T11:15:00Z"),
            )
            .await
            .unwrap_or_else(|_| panic!("second schedule"));

        match second {
            ScheduleOutcome::Conflicts(conflicts) => {
                assert_eq!(conflicts.len(), 1);
                assert_eq!(conflicts[0].id(), first_event.id());
            }
            ScheduleOutcome::Scheduled(_) => panic!("double booking must not schedule"),
        }

        let agenda = service
            .agenda(&actor, assignee)
            .await
            .unwrap_or_else(|_| panic!("agenda"));
        assert_eq!(agenda.len(), 1);
    }

    #[tokio::test]
    async fn touching_proposal_schedules() {
        let service = CalendarService::new(Arc::new(FakeCalendarRepository::default()));
        let actor = staff_actor();
        let assignee = UserId::new();

        let first = service
            .schedule(
                &actor,
                input(assignee, "2025-01-20T10:00:00Z", "2025-01-20T11:00:00Z"),
            )
            .await
            .unwrap_or_else(|_| panic!("first schedule"));
        assert!(matches!(first, ScheduleOutcome::Scheduled(_)));

        let second = service
            .schedule(
                &actor,
                input(assignee, "2025-01-20T11:00:00Z", "2025-01-20T12:00:00Z"),
            )
            .await
            .unwrap_or_else(|_| panic!("second schedule"));
        assert!(matches!(second, ScheduleOutcome::Scheduled(_)));
    }

    #[tokio::test]
    async fn reschedule_ignores_the_event_itself() {
        let service = CalendarService::new(Arc::new(FakeCalendarRepository::default()));
        let actor = staff_actor();
        let assignee = UserId::new();

        let outcome = service
            .schedule(
                &actor,
                input(assignee, "2025-01-20T10:00:00Z", "2025-01-20T11:00:00Z"),
            )
            .await
            .unwrap_or_else(|_| panic!("schedule"));
        let ScheduleOutcome::Scheduled(event) = outcome else {
            panic!("proposal must schedule");
        };

        let moved = service
            .reschedule(
                &actor,
                event.id(),
                instant("2025-01-20T10:30:00Z"),
                instant("2025-01-20T11:30:00Z"),
            )
            .await
            .unwrap_or_else(|_| panic!("reschedule"));

        assert!(matches!(moved, ScheduleOutcome::Scheduled(_)));
    }

    #[tokio::test]
    async fn cancelled_events_free_the_interval() {
        let service = CalendarService::new(Arc::new(FakeCalendarRepository::default()));
        let actor = staff_actor();
        let assignee = UserId::new();

        let outcome = service
            .schedule(
                &actor,
                input(assignee, "2025-01-20T10:00:00Z", "2025-01-20T11:00:00Z"),
            )
            .await
            .unwrap_or_else(|_| panic!("schedule"));
        let ScheduleOutcome::Scheduled(event) = outcome else {
            panic!("proposal must schedule");
        };

        let cancelled = service
            .cancel(&actor, event.id())
            .await
            .unwrap_or_else(|_| panic!("cancel"));
        assert_eq!(
            cancelled.status(),
            praxia_domain::EventStatus::Cancelled
        );

        let retry = service
            .schedule(
                &actor,
                input(assignee, "2025-01-20T10:15:00Z", "2025-01-20T10:45:00Z"),
            )
            .await
            .unwrap_or_else(|_| panic!("retry"));
        assert!(matches!(retry, ScheduleOutcome::Scheduled(_)));
    }

    #[tokio::test]
    async fn inverted_proposal_is_rejected() {
        let service = CalendarService::new(Arc::new(FakeCalendarRepository::default()));
        let actor = staff_actor();

        let result = service
            .schedule(
                &actor,
                input(UserId::new(), "2025-01-20T11:00:00Z", "2025-01-20T10:00:00Z"),
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn guest_may_check_availability_but_not_write() {
        let service = CalendarService::new(Arc::new(FakeCalendarRepository::default()));
        let guest = ActorIdentity::new(UserId::new(), "Guest", Role::Guest, None);
        let assignee = UserId::new();

        let availability = service
            .check_availability(
                &guest,
                assignee,
                instant("2025-01-20T10:00:00Z"),
                instant("2025-01-20T11:00:00Z"),
                None,
            )
            .await;
        assert!(availability.is_ok());

        let write = service
            .schedule(
                &guest,
                input(assignee, "2025-01-20T10:00:00Z", "2025-01-20T11:00:00Z"),
            )
            .await;
        assert!(matches!(write, Err(AppError::Forbidden(_))));
    }
}
