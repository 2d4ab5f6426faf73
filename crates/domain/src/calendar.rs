//! Calendar commitments and the double-booking detector.

use chrono::{DateTime, Utc};
use praxia_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::UserId;

/// Unique identifier for a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random event identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an event identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Lifecycle status of a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// Scheduled; participates in overlap detection.
    Active,
    /// Cancelled; excluded from overlap detection.
    Cancelled,
}

impl EventStatus {
    /// Returns a stable storage value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a storage string into a status.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "active" => Ok(Self::Active),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(AppError::Validation(format!(
                "unknown event status '{value}'"
            ))),
        }
    }
}

/// A calendar commitment for one assignee over a half-open interval.
///
/// `ends_at` is strictly after `starts_at`; both the constructor and
/// [`reschedule`](CalendarEvent::reschedule) enforce it, so a stored
/// event can never carry an empty or inverted interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    id: EventId,
    assignee: UserId,
    title: NonEmptyString,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    status: EventStatus,
}

impl CalendarEvent {
    /// Creates an active event, rejecting empty or inverted intervals.
    pub fn new(
        assignee: UserId,
        title: NonEmptyString,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        validate_interval(starts_at, ends_at)?;

        Ok(Self {
            id: EventId::new(),
            assignee,
            title,
            starts_at,
            ends_at,
            status: EventStatus::Active,
        })
    }

    /// Returns the stable event identifier.
    #[must_use]
    pub fn id(&self) -> EventId {
        self.id
    }

    /// Returns the assigned user.
    #[must_use]
    pub fn assignee(&self) -> UserId {
        self.assignee
    }

    /// Returns the event title.
    #[must_use]
    pub fn title(&self) -> &NonEmptyString {
        &self.title
    }

    /// Returns the inclusive start instant.
    #[must_use]
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    /// Returns the exclusive end instant.
    #[must_use]
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.ends_at
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub fn status(&self) -> EventStatus {
        self.status
    }

    /// Moves the event to a new interval, rejecting invalid bounds.
    pub fn reschedule(
        &mut self,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> AppResult<()> {
        validate_interval(starts_at, ends_at)?;
        self.starts_at = starts_at;
        self.ends_at = ends_at;
        Ok(())
    }

    /// Marks the event cancelled.
    pub fn cancel(&mut self) {
        self.status = EventStatus::Cancelled;
    }
}

/// Finds the assignee's active commitments overlapping the proposal.
///
/// Overlap is half-open: `[s, e)` overlaps `[proposed_start,
/// proposed_end)` iff `s < proposed_end` and `e > proposed_start`, so an
/// event ending exactly when the proposal starts does not conflict.
/// Commitments of other assignees and cancelled events never
/// participate, and `exclude_event_id` removes the event being updated.
/// A proposal with `proposed_end <= proposed_start` is rejected rather
/// than silently reported as conflict-free.
///
/// Every overlapping event is returned; whether a non-empty result
/// blocks the write or merely warns is the caller's decision. The scan
/// is pre-flight only: durable enforcement belongs to a per-assignee
/// time-range exclusion constraint at the persistence layer.
pub fn find_overlaps(
    events: &[CalendarEvent],
    assignee: UserId,
    proposed_start: DateTime<Utc>,
    proposed_end: DateTime<Utc>,
    exclude_event_id: Option<EventId>,
) -> AppResult<Vec<CalendarEvent>> {
    validate_interval(proposed_start, proposed_end)?;

    Ok(events
        .iter()
        .filter(|event| event.assignee == assignee)
        .filter(|event| event.status == EventStatus::Active)
        .filter(|event| Some(event.id) != exclude_event_id)
        .filter(|event| event.starts_at < proposed_end && event.ends_at > proposed_start)
        .cloned()
        .collect())
}

fn validate_interval(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> AppResult<()> {
    if ends_at <= starts_at {
        return Err(AppError::Validation(
            "event must end after it starts".to_owned(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use praxia_core::NonEmptyString;
    use proptest::prelude::*;

    use super::{CalendarEvent, find_overlaps};
    use crate::user::UserId;

    fn instant(value: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(value)
            .unwrap_or_else(|_| panic!("test instant '{value}'"))
            .with_timezone(&Utc)
    }

    fn epoch_offset(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).unwrap_or_else(|| panic!("test timestamp"))
    }

    fn event(assignee: UserId, start: &str, end: &str) -> CalendarEvent {
        CalendarEvent::new(
            assignee,
            NonEmptyString::new("Hearing").unwrap_or_else(|_| panic!("test title")),
            instant(start),
            instant(end),
        )
        .unwrap_or_else(|_| panic!("test event"))
    }

    #[test]
    fn overlapping_interval_is_reported() {
        let assignee = UserId::new();
        let existing = event(assignee, "2025-01-20T10:00:00Z", "2025-01-20T11:00:00Z");
        let overlaps = find_overlaps(
            std::slice::from_ref(&existing),
            assignee,
            instant("2025-01-20T10:45:00Z"),
            instant("2025-01-20T11:15:00Z"),
            None,
        );

        assert!(overlaps.is_ok());
        let overlaps = overlaps.unwrap_or_default();
        assert_eq!(overlaps.len(), 1);
        assert_eq!(overlaps[0].id(), existing.id());
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        let assignee = UserId::new();
        let existing = event(assignee, "2025-01-20T10:00:00Z", "2025-01-20T11:00:00Z");
        let overlaps = find_overlaps(
            &[existing],
            assignee,
            instant("2025-01-20T11:00:00Z"),
            instant("2025-01-20T12:00:00Z"),
            None,
        );

        assert!(overlaps.is_ok());
        assert!(overlaps.unwrap_or_default().is_empty());
    }

    #[test]
    fn other_assignees_never_participate() {
        let assignee = UserId::new();
        let existing = event(UserId::new(), "2025-01-20T10:00:00Z", "2025-01-20T11:00:00Z");
        let overlaps = find_overlaps(
            &[existing],
            assignee,
            instant("2025-01-20T10:30:00Z"),
            instant("2025-01-20T11:30:00Z"),
            None,
        );

        assert!(overlaps.is_ok());
        assert!(overlaps.unwrap_or_default().is_empty());
    }

    #[test]
    fn cancelled_events_never_participate() {
        let assignee = UserId::new();
        let mut existing = event(assignee, "2025-01-20T10:00:00Z", "2025-01-20T11:00:00Z");
        existing.cancel();
        let overlaps = find_overlaps(
            &[existing],
            assignee,
            instant("2025-01-20T10:30:00Z"),
            instant("2025-01-20T11:30:00Z"),
            None,
        );

        assert!(overlaps.is_ok());
        assert!(overlaps.unwrap_or_default().is_empty());
    }

    #[test]
    fn excluded_event_is_skipped_during_updates() {
        let assignee = UserId::new();
        let existing = event(assignee, "2025-01-20T10:00:00Z", "2025-01-20T11:00:00Z");
        let overlaps = find_overlaps(
            std::slice::from_ref(&existing),
            assignee,
            instant("2025-01-20T10:30:00Z"),
            instant("2025-01-20T11:30:00Z"),
            Some(existing.id()),
        );

        assert!(overlaps.is_ok());
        assert!(overlaps.unwrap_or_default().is_empty());
    }

    #[test]
    fn empty_or_inverted_proposal_is_rejected() {
        let assignee = UserId::new();
        let start = instant("2025-01-20T10:00:00Z");

        assert!(find_overlaps(&[], assignee, start, start, None).is_err());
        assert!(
            find_overlaps(&[], assignee, start, instant("2025-01-20T09:00:00Z"), None).is_err()
        );
    }

    #[test]
    fn event_construction_rejects_inverted_interval() {
        let result = CalendarEvent::new(
            UserId::new(),
            NonEmptyString::new("Hearing").unwrap_or_else(|_| panic!("test title")),
            instant("2025-01-20T11:00:00Z"),
            instant("2025-01-20T10:00:00Z"),
        );

        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            first_start in 0i64..100_000,
            first_length in 1i64..50_000,
            second_start in 0i64..100_000,
            second_length in 1i64..50_000,
        ) {
            let assignee = UserId::new();
            let title = NonEmptyString::new("Deposition")
                .unwrap_or_else(|_| panic!("test title"));

            let first = CalendarEvent::new(
                assignee,
                title.clone(),
                epoch_offset(first_start),
                epoch_offset(first_start + first_length),
            )
            .unwrap_or_else(|_| panic!("test event"));
            let second = CalendarEvent::new(
                assignee,
                title,
                epoch_offset(second_start),
                epoch_offset(second_start + second_length),
            )
            .unwrap_or_else(|_| panic!("test event"));

            let forward = find_overlaps(
                std::slice::from_ref(&first),
                assignee,
                second.starts_at(),
                second.ends_at(),
                None,
            )
            .unwrap_or_default();
            let backward = find_overlaps(
                std::slice::from_ref(&second),
                assignee,
                first.starts_at(),
                first.ends_at(),
                None,
            )
            .unwrap_or_default();

            prop_assert_eq!(forward.is_empty(), backward.is_empty());
        }

        #[test]
        fn touching_intervals_never_overlap(
            start in 0i64..100_000,
            first_length in 1i64..50_000,
            second_length in 1i64..50_000,
        ) {
            let assignee = UserId::new();
            let boundary = start + first_length;
            let existing = CalendarEvent::new(
                assignee,
                NonEmptyString::new("Deposition").unwrap_or_else(|_| panic!("test title")),
                epoch_offset(start),
                epoch_offset(boundary),
            )
            .unwrap_or_else(|_| panic!("test event"));

            let overlaps = find_overlaps(
                &[existing],
                assignee,
                epoch_offset(boundary),
                epoch_offset(boundary + second_length),
                None,
            )
            .unwrap_or_default();

            prop_assert!(overlaps.is_empty());
        }
    }
}
