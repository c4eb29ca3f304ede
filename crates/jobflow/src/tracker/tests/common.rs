use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::config::ExportConfig;
use crate::tracker::catalog::Stage;
use crate::tracker::domain::{Application, ApplicationId, Priority, StatusUpdate};
use crate::tracker::service::TrackerService;
use crate::tracker::store::{ApplicationStore, StoreError};

pub(super) fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, d, 9, 0, 0)
        .single()
        .expect("valid fixture instant")
}

pub(super) fn update(id: &str, stage: Stage, created_at: DateTime<Utc>) -> StatusUpdate {
    StatusUpdate {
        id: id.to_string(),
        application_id: String::new(),
        stage,
        notes: String::new(),
        interview_date: None,
        created_at,
    }
}

pub(super) fn interview_update(
    id: &str,
    created_at: DateTime<Utc>,
    interview_date: DateTime<Utc>,
) -> StatusUpdate {
    StatusUpdate {
        interview_date: Some(interview_date),
        notes: "Bring portfolio".to_string(),
        ..update(id, Stage::InterviewScheduled, created_at)
    }
}

pub(super) fn application(
    id: &str,
    company: &str,
    position: &str,
    location: &str,
    application_date: NaiveDate,
    updates: Vec<StatusUpdate>,
) -> Application {
    Application {
        id: ApplicationId(id.to_string()),
        owner_id: "user-1".to_string(),
        company: company.to_string(),
        position: position.to_string(),
        location: location.to_string(),
        description: String::new(),
        notes: String::new(),
        contact_person: String::new(),
        contact_email: String::new(),
        source: String::new(),
        url: String::new(),
        salary: String::new(),
        application_date,
        priority: Priority::Medium,
        status_updates: updates,
    }
}

pub(super) fn date(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).expect("valid fixture date")
}

/// A small collection covering the buckets the screens filter on.
pub(super) fn sample_collection() -> Vec<Application> {
    vec![
        application(
            "a1",
            "Acme",
            "Software Engineer",
            "Paris",
            date(2025, 3, 1),
            vec![
                update("a1-u1", Stage::Applied, day(1)),
                interview_update("a1-u2", day(3), day(20)),
            ],
        ),
        application(
            "a2",
            "Globex",
            "Data Analyst",
            "Lyon",
            date(2025, 2, 10),
            vec![
                update("a2-u1", Stage::Applied, day(1)),
                update("a2-u2", Stage::Rejected, day(5)),
            ],
        ),
        application(
            "a3",
            "Initech",
            "Platform Engineer",
            "Remote",
            date(2025, 3, 4),
            vec![
                update("a3-u1", Stage::Applied, day(1)),
                update("a3-u2", Stage::OfferReceived, day(6)),
                update("a3-u3", Stage::Accepted, day(8)),
            ],
        ),
        application(
            "a4",
            "Umbrella",
            "Research Engineer",
            "Berlin",
            date(2025, 1, 15),
            Vec::new(),
        ),
    ]
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    applications: Vec<Application>,
}

impl MemoryStore {
    pub(super) fn with(applications: Vec<Application>) -> Self {
        Self { applications }
    }
}

impl ApplicationStore for MemoryStore {
    fn list(&self) -> Result<Vec<Application>, StoreError> {
        Ok(self.applications.clone())
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<Application>, StoreError> {
        Ok(self
            .applications
            .iter()
            .find(|application| &application.id == id)
            .cloned())
    }
}

pub(super) struct UnavailableStore;

impl ApplicationStore for UnavailableStore {
    fn list(&self) -> Result<Vec<Application>, StoreError> {
        Err(StoreError::Unavailable("backend offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<Application>, StoreError> {
        Err(StoreError::Unavailable("backend offline".to_string()))
    }
}

pub(super) fn sample_service() -> Arc<TrackerService<MemoryStore>> {
    Arc::new(TrackerService::new(
        Arc::new(MemoryStore::with(sample_collection())),
        ExportConfig::default(),
    ))
}
