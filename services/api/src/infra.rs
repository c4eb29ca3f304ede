use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use jobflow::error::AppError;
use jobflow::tracker::{
    applications_from_json, Application, ApplicationId, ApplicationStore, StoreError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read-only in-memory store the service seeds once at startup, standing in
/// for the remote backend that owns the data.
#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationStore {
    applications: Arc<Vec<Application>>,
}

impl InMemoryApplicationStore {
    pub(crate) fn seeded(applications: Vec<Application>) -> Self {
        Self {
            applications: Arc::new(applications),
        }
    }
}

impl ApplicationStore for InMemoryApplicationStore {
    fn list(&self) -> Result<Vec<Application>, StoreError> {
        Ok(self.applications.as_ref().clone())
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<Application>, StoreError> {
        Ok(self
            .applications
            .iter()
            .find(|application| &application.id == id)
            .cloned())
    }
}

/// Load a backend-shaped JSON file through the typed ingest boundary.
pub(crate) fn load_applications(path: &Path) -> Result<Vec<Application>, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(applications_from_json(&raw)?)
}

pub(crate) fn parse_date(raw: &str) -> Result<chrono::NaiveDate, String> {
    chrono::NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
