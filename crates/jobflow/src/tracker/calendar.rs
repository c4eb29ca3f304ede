use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::catalog::Stage;
use super::domain::{Application, ApplicationId};

/// One interview occurrence for the calendar view. Past interviews are
/// included; the calendar shows history as well as what is ahead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewEvent {
    pub application_id: ApplicationId,
    pub company: String,
    pub position: String,
    pub scheduled_for: DateTime<Utc>,
    pub notes: String,
}

impl InterviewEvent {
    /// Day bucket used to mark calendar cells.
    pub fn day(&self) -> NaiveDate {
        self.scheduled_for.date_naive()
    }
}

/// Every scheduled interview across the collection, ascending by instant.
pub fn interview_events(applications: &[Application]) -> Vec<InterviewEvent> {
    let mut events: Vec<InterviewEvent> = applications
        .iter()
        .flat_map(|application| {
            application.status_updates.iter().filter_map(|update| {
                let scheduled_for = update.interview_date?;
                if update.stage == Stage::InterviewScheduled {
                    Some(InterviewEvent {
                        application_id: application.id.clone(),
                        company: application.company.clone(),
                        position: application.position.clone(),
                        scheduled_for,
                        notes: update.notes.clone(),
                    })
                } else {
                    None
                }
            })
        })
        .collect();

    events.sort_by_key(|event| event.scheduled_for);
    events
}

/// Events falling on one calendar day.
pub fn events_on<'a>(events: &'a [InterviewEvent], day: NaiveDate) -> Vec<&'a InterviewEvent> {
    events.iter().filter(|event| event.day() == day).collect()
}
