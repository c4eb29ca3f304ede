use crate::cli::ServeArgs;
use crate::demo::sample_applications;
use crate::infra::{load_applications, AppState, InMemoryApplicationStore};
use crate::routes::with_tracker_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

use jobflow::config::AppConfig;
use jobflow::error::AppError;
use jobflow::telemetry;
use jobflow::tracker::TrackerService;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let applications = match args.applications.take() {
        Some(path) => load_applications(&path)?,
        None => sample_applications(),
    };
    info!(count = applications.len(), "seeded application store");

    let store = Arc::new(InMemoryApplicationStore::seeded(applications));
    let tracker_service = Arc::new(TrackerService::new(store, config.export.clone()));

    let app = with_tracker_routes(tracker_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "job application tracker ready");

    axum::serve(listener, app).await?;
    Ok(())
}
