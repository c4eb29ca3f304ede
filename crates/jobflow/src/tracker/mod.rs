//! The job-application pipeline domain.
//!
//! Every operation here is a synchronous pure function over an in-memory
//! collection the caller already fetched: timelines, dashboard aggregates,
//! query filtering, the CSV export, and the interview calendar. Nothing in
//! this module performs I/O; the `store` trait is the seam to whatever owns
//! the data.

pub mod calendar;
pub mod catalog;
pub mod domain;
pub mod export;
pub mod ingest;
pub mod query;
pub mod report;
pub mod router;
pub mod service;
pub mod store;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use calendar::{events_on, interview_events, InterviewEvent};
pub use catalog::{catalog, Stage, StageDescriptor, UNREACHED_COLOR};
pub use domain::{Application, ApplicationId, Priority, StatusUpdate};
pub use export::{export_csv, ExportError, EXPORT_HEADER};
pub use ingest::{applications_from_json, IngestError};
pub use query::{ApplicationQuery, SortKey, StatusBucket};
pub use report::views::{ApplicationListItem, DashboardSummary};
pub use router::tracker_router;
pub use service::{TrackerService, TrackerServiceError};
pub use store::{ApplicationStore, StoreError};
pub use timeline::{StatusTimeline, TimelineConnector, TimelineMarker, TimelineMode};
