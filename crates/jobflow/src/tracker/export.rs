use std::fmt::Write as _;

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};

use super::catalog::Stage;
use super::domain::Application;
use crate::config::ExportConfig;

/// Fixed header row of the exported document.
pub const EXPORT_HEADER: [&str; 9] = [
    "Company",
    "Position",
    "Location",
    "Application Date",
    "Current Status",
    "Priority",
    "Contact",
    "Email",
    "URL",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("unable to finish csv document: {0}")]
    Io(#[from] std::io::Error),
    #[error("exported document is not valid utf-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("invalid export date format '{0}'")]
    DateFormat(String),
}

/// Serialize a collection of applications into a CSV document.
///
/// Every field is quoted with embedded quotes doubled, so any value survives
/// a round-trip through a standard CSV parser. Applications missing their
/// identity fields (company, position) are skipped without failing the
/// document; absent optional fields render as empty cells.
pub fn export_csv(
    applications: &[Application],
    config: &ExportConfig,
) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(EXPORT_HEADER)?;

    for application in applications {
        if application.company.trim().is_empty() || application.position.trim().is_empty() {
            continue;
        }

        let date = format_date(application.application_date, &config.date_format)?;
        // The export keeps the source's row rule: last update in stored
        // order, not the sorted-by-timestamp rule used elsewhere.
        let status = application
            .status_updates
            .last()
            .map(|update| update.stage)
            .unwrap_or(Stage::first())
            .identifier();

        writer.write_record([
            application.company.as_str(),
            application.position.as_str(),
            application.location.as_str(),
            date.as_str(),
            status,
            application.priority.label(),
            application.contact_person.as_str(),
            application.contact_email.as_str(),
            application.url.as_str(),
        ])?;
    }

    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Render the date column with the configured strftime format. A bad format
/// string surfaces as an error instead of a panic at display time.
fn format_date(date: NaiveDate, format: &str) -> Result<String, ExportError> {
    let mut rendered = String::new();
    write!(rendered, "{}", date.format(format))
        .map_err(|_| ExportError::DateFormat(format.to_string()))?;
    Ok(rendered)
}
