use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use clap::Args;

use jobflow::config::AppConfig;
use jobflow::error::AppError;
use jobflow::tracker::{
    export_csv, Application, ApplicationId, ApplicationQuery, DashboardSummary, Priority, Stage,
    StatusBucket, StatusTimeline, StatusUpdate, TimelineMode,
};

use crate::infra::{load_applications, parse_date};

#[derive(Args, Debug)]
pub(crate) struct DashboardArgs {
    /// JSON file of applications (defaults to the bundled sample collection)
    #[arg(long)]
    pub(crate) applications: Option<PathBuf>,
    /// Evaluation date for the report (defaults to now)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// JSON file of applications (defaults to the bundled sample collection)
    #[arg(long)]
    pub(crate) applications: Option<PathBuf>,
    /// Destination file; prints to stdout when omitted
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date for the dashboard portion (defaults to now)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let applications = resolve_applications(args.applications)?;
    let now = resolve_instant(args.today);

    let summary = DashboardSummary::build(&applications, now);
    render_dashboard(&summary);
    Ok(())
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let applications = resolve_applications(args.applications)?;
    let config = AppConfig::load()?;

    let document = export_csv(&applications, &config.export)
        .map_err(jobflow::tracker::TrackerServiceError::from)?;

    match args.output {
        Some(path) => {
            fs::write(&path, &document)?;
            println!("Wrote {} rows to {}", document.lines().count() - 1, path.display());
        }
        None => print!("{document}"),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let applications = sample_applications();
    let now = resolve_instant(args.today);

    println!("Job application tracker demo");
    println!("Applications in the sample collection: {}", applications.len());

    let summary = DashboardSummary::build(&applications, now);
    render_dashboard(&summary);

    let showcase = &applications[0];
    println!(
        "\nTimeline for {} — {}",
        showcase.company, showcase.position
    );
    render_timeline(&StatusTimeline::derive(
        &showcase.status_updates,
        TimelineMode::Full,
    ));

    let active = ApplicationQuery {
        bucket: StatusBucket::Active,
        ..ApplicationQuery::default()
    };
    println!("\nActive applications");
    for application in active.apply(&applications) {
        println!(
            "- {} | {} | {}",
            application.company,
            application.position,
            application.current_stage().label()
        );
    }

    let config = AppConfig::load()?;
    let document = export_csv(&applications, &config.export)
        .map_err(jobflow::tracker::TrackerServiceError::from)?;
    println!("\nCSV export\n{document}");

    Ok(())
}

fn resolve_applications(path: Option<PathBuf>) -> Result<Vec<Application>, AppError> {
    match path {
        Some(path) => load_applications(&path),
        None => Ok(sample_applications()),
    }
}

fn resolve_instant(today: Option<NaiveDate>) -> DateTime<Utc> {
    today
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_else(Utc::now)
}

fn render_dashboard(summary: &DashboardSummary) {
    println!(
        "\nTotals: {} tracked, {} in progress, {} upcoming interview(s)",
        summary.total, summary.in_progress, summary.upcoming_interview_count
    );

    println!("\nBy current status");
    for entry in &summary.by_stage {
        println!("- {}: {}", entry.stage_label, entry.count);
    }

    println!("\nBy application month");
    for entry in &summary.by_month {
        println!("- {}: {}", entry.month_label, entry.count);
    }

    println!("\nStage conversion");
    for entry in &summary.conversion_rates {
        println!("- {} -> {}: {}%", entry.from_label, entry.to_label, entry.rate);
    }

    if summary.upcoming_interviews.is_empty() {
        println!("\nUpcoming interviews: none");
    } else {
        println!("\nUpcoming interviews");
        for interview in &summary.upcoming_interviews {
            println!(
                "- {} | {} | {}",
                interview.company,
                interview.position,
                interview.scheduled_for.format("%Y-%m-%d %H:%M")
            );
        }
    }

    println!("\nRecent applications");
    for item in &summary.recent_applications {
        println!(
            "- {} | {} | applied {} | {}",
            item.company, item.position, item.application_date, item.current_stage_label
        );
    }
}

fn render_timeline(timeline: &StatusTimeline) {
    if timeline.is_empty() {
        println!("(no status updates recorded)");
        return;
    }

    for marker in &timeline.markers {
        let state = if marker.terminal {
            "terminal"
        } else if marker.reached {
            "reached"
        } else {
            "pending"
        };
        let cursor = if marker.is_current { " <- current" } else { "" };
        println!(
            "- {} [{}]{}",
            marker.label.unwrap_or(marker.stage.identifier()),
            state,
            cursor
        );
    }
}

fn sample_update(
    application_id: &str,
    suffix: &str,
    stage: Stage,
    created_at: DateTime<Utc>,
    interview_date: Option<DateTime<Utc>>,
    notes: &str,
) -> StatusUpdate {
    StatusUpdate {
        id: format!("{application_id}-{suffix}"),
        application_id: application_id.to_string(),
        stage,
        notes: notes.to_string(),
        interview_date,
        created_at,
    }
}

/// A small believable collection used by the demo and as the default seed
/// for the in-memory store. Interview instants are anchored to the current
/// clock so the upcoming list is never empty out of the box.
pub(crate) fn sample_applications() -> Vec<Application> {
    let now = Utc::now();
    let base = now - Duration::days(45);

    let application = |id: &str,
                       company: &str,
                       position: &str,
                       location: &str,
                       offset_days: i64,
                       priority: Priority,
                       updates: Vec<StatusUpdate>| Application {
        id: ApplicationId(id.to_string()),
        owner_id: "demo-user".to_string(),
        company: company.to_string(),
        position: position.to_string(),
        location: location.to_string(),
        description: String::new(),
        notes: String::new(),
        contact_person: String::new(),
        contact_email: String::new(),
        source: "referral".to_string(),
        url: String::new(),
        salary: String::new(),
        application_date: (base + Duration::days(offset_days)).date_naive(),
        priority,
        status_updates: updates,
    };

    vec![
        application(
            "app-1",
            "Nimbus Analytics",
            "Backend Engineer",
            "Paris",
            0,
            Priority::High,
            vec![
                sample_update("app-1", "u1", Stage::Applied, base, None, ""),
                sample_update(
                    "app-1",
                    "u2",
                    Stage::ResumeReviewed,
                    base + Duration::days(5),
                    None,
                    "",
                ),
                sample_update(
                    "app-1",
                    "u3",
                    Stage::PhoneScreen,
                    base + Duration::days(12),
                    None,
                    "Call went well",
                ),
                sample_update(
                    "app-1",
                    "u4",
                    Stage::InterviewScheduled,
                    base + Duration::days(20),
                    Some(now + Duration::days(7)),
                    "On-site, bring references",
                ),
            ],
        ),
        application(
            "app-2",
            "Helios Labs",
            "Platform Engineer",
            "Remote",
            3,
            Priority::Medium,
            vec![
                sample_update("app-2", "u1", Stage::Applied, base + Duration::days(3), None, ""),
                sample_update(
                    "app-2",
                    "u2",
                    Stage::Rejected,
                    base + Duration::days(15),
                    None,
                    "Position filled internally",
                ),
            ],
        ),
        application(
            "app-3",
            "Corto Systems",
            "Data Engineer",
            "Lyon",
            10,
            Priority::Medium,
            vec![
                sample_update("app-3", "u1", Stage::Applied, base + Duration::days(10), None, ""),
                sample_update(
                    "app-3",
                    "u2",
                    Stage::PhoneScreen,
                    base + Duration::days(18),
                    None,
                    "",
                ),
                sample_update(
                    "app-3",
                    "u3",
                    Stage::OfferReceived,
                    base + Duration::days(30),
                    None,
                    "",
                ),
                sample_update(
                    "app-3",
                    "u4",
                    Stage::Accepted,
                    base + Duration::days(34),
                    None,
                    "Starting next quarter",
                ),
            ],
        ),
        application(
            "app-4",
            "Vega Software",
            "Site Reliability Engineer",
            "Berlin",
            25,
            Priority::High,
            Vec::new(),
        ),
        application(
            "app-5",
            "Atlas Fintech",
            "Rust Engineer",
            "Amsterdam",
            14,
            Priority::Low,
            vec![
                sample_update("app-5", "u1", Stage::Applied, base + Duration::days(14), None, ""),
                sample_update(
                    "app-5",
                    "u2",
                    Stage::OfferReceived,
                    base + Duration::days(28),
                    None,
                    "",
                ),
                sample_update(
                    "app-5",
                    "u3",
                    Stage::Declined,
                    base + Duration::days(32),
                    None,
                    "Took a competing offer",
                ),
            ],
        ),
    ]
}
