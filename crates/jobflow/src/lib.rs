//! Domain library for the job-application tracker.
//!
//! The `tracker` module holds the pipeline domain: the stage catalog, the
//! application model, timeline derivation, dashboard aggregation, querying,
//! and the CSV export. `config`, `telemetry`, and `error` carry the ambient
//! plumbing shared with the `jobflow-api` service binary.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracker;
