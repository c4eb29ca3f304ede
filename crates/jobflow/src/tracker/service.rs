use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::calendar::{interview_events, InterviewEvent};
use super::domain::ApplicationId;
use super::export::{export_csv, ExportError};
use super::query::ApplicationQuery;
use super::report::views::{ApplicationListItem, DashboardSummary};
use super::store::{ApplicationStore, StoreError};
use super::timeline::{StatusTimeline, TimelineMode};
use crate::config::ExportConfig;

/// Facade composing the store seam with the pure domain operations, so the
/// router and CLI consume one surface.
pub struct TrackerService<S> {
    store: Arc<S>,
    export: ExportConfig,
}

impl<S> TrackerService<S>
where
    S: ApplicationStore + 'static,
{
    pub fn new(store: Arc<S>, export: ExportConfig) -> Self {
        Self { store, export }
    }

    /// Dashboard payload at the given evaluation instant.
    pub fn dashboard(&self, now: DateTime<Utc>) -> Result<DashboardSummary, TrackerServiceError> {
        let applications = self.store.list()?;
        Ok(DashboardSummary::build(&applications, now))
    }

    /// Progress timeline for one application.
    pub fn timeline(
        &self,
        id: &ApplicationId,
        mode: TimelineMode,
    ) -> Result<StatusTimeline, TrackerServiceError> {
        let application = self.store.fetch(id)?.ok_or(StoreError::NotFound)?;
        Ok(StatusTimeline::derive(&application.status_updates, mode))
    }

    /// Filtered, sorted application list views.
    pub fn search(
        &self,
        query: &ApplicationQuery,
    ) -> Result<Vec<ApplicationListItem>, TrackerServiceError> {
        let applications = self.store.list()?;
        Ok(query
            .apply(&applications)
            .into_iter()
            .map(ApplicationListItem::of)
            .collect())
    }

    /// The CSV export document.
    pub fn export(&self) -> Result<String, TrackerServiceError> {
        let applications = self.store.list()?;
        Ok(export_csv(&applications, &self.export)?)
    }

    /// Every scheduled interview, for the calendar screen.
    pub fn calendar(&self) -> Result<Vec<InterviewEvent>, TrackerServiceError> {
        let applications = self.store.list()?;
        Ok(interview_events(&applications))
    }
}

/// Error raised by the tracker facade.
#[derive(Debug, thiserror::Error)]
pub enum TrackerServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
