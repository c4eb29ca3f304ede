//! Typed deserialization boundary for application payloads fetched from the
//! backend. The wire shape (camelCase fields, nested status objects, string
//! timestamps) is parsed into the typed domain model here so the domain
//! functions downstream never see malformed data.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::catalog::Stage;
use super::domain::{Application, ApplicationId, Priority, StatusUpdate};

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("payload is not a JSON array of applications")]
    NotAnArray,
    #[error("malformed application payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown stage identifier '{0}'")]
    UnknownStage(String),
    #[error("unrecognized timestamp '{0}'")]
    InvalidTimestamp(String),
}

/// Parse a backend JSON document into typed applications.
pub fn applications_from_json(raw: &str) -> Result<Vec<Application>, IngestError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if !value.is_array() {
        return Err(IngestError::NotAnArray);
    }

    let rows: Vec<RawApplication> = serde_json::from_value(value)?;
    rows.into_iter().map(RawApplication::into_domain).collect()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawApplication {
    id: String,
    #[serde(default)]
    user_id: String,
    company: String,
    position: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    location: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    notes: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    contact_person: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    contact_email: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    source: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    url: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    salary: Option<String>,
    application_date: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    priority: Option<String>,
    #[serde(default)]
    status_updates: Vec<RawStatusUpdate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStatusUpdate {
    id: String,
    #[serde(default)]
    application_id: String,
    status: RawStatusRef,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    notes: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    interview_date: Option<String>,
    created_at: String,
}

/// The nested status object as the backend sends it. Only the identifier is
/// consumed; color and ordering come from the catalog, not the wire.
#[derive(Debug, Deserialize)]
struct RawStatusRef {
    name: String,
}

impl RawApplication {
    fn into_domain(self) -> Result<Application, IngestError> {
        let application_date = parse_date(&self.application_date)?;
        let status_updates = self
            .status_updates
            .into_iter()
            .map(RawStatusUpdate::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Application {
            id: ApplicationId(self.id),
            owner_id: self.user_id,
            company: self.company,
            position: self.position,
            location: self.location.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            notes: self.notes.unwrap_or_default(),
            contact_person: self.contact_person.unwrap_or_default(),
            contact_email: self.contact_email.unwrap_or_default(),
            source: self.source.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            salary: self.salary.unwrap_or_default(),
            application_date,
            priority: parse_priority(self.priority.as_deref()),
            status_updates,
        })
    }
}

impl RawStatusUpdate {
    fn into_domain(self) -> Result<StatusUpdate, IngestError> {
        let stage = Stage::from_identifier(&self.status.name)
            .ok_or_else(|| IngestError::UnknownStage(self.status.name.clone()))?;
        let created_at = parse_instant(&self.created_at)?;
        let interview_date = self
            .interview_date
            .as_deref()
            .map(parse_instant)
            .transpose()?;

        Ok(StatusUpdate {
            id: self.id,
            application_id: self.application_id,
            stage,
            notes: self.notes.unwrap_or_default(),
            interview_date,
            created_at,
        })
    }
}

fn parse_priority(raw: Option<&str>) -> Priority {
    match raw.map(str::trim).map(str::to_ascii_uppercase).as_deref() {
        Some("HIGH") => Priority::High,
        Some("LOW") => Priority::Low,
        _ => Priority::Medium,
    }
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, IngestError> {
    let trimmed = value.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    Err(IngestError::InvalidTimestamp(trimmed.to_string()))
}

fn parse_date(value: &str) -> Result<NaiveDate, IngestError> {
    parse_instant(value).map(|instant| instant.date_naive())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
