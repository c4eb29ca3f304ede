use super::domain::{Application, ApplicationId};

/// Seam to the backend that owns the application data. The domain only ever
/// reads whole collections; persistence and auth live behind this boundary.
pub trait ApplicationStore: Send + Sync {
    fn list(&self) -> Result<Vec<Application>, StoreError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<Application>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("application not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
