use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::tracker::catalog::Stage;
use crate::tracker::domain::{Application, ApplicationId, Priority};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageCountEntry {
    pub stage: Stage,
    pub stage_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCountEntry {
    pub month_label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRateEntry {
    pub from: Stage,
    pub from_label: &'static str,
    pub to: Stage,
    pub to_label: &'static str,
    /// Percentage in [0, 100]; 0 when nobody occupies the earlier stage.
    pub rate: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingInterviewView {
    pub application_id: ApplicationId,
    pub company: String,
    pub position: String,
    pub scheduled_for: DateTime<Utc>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationListItem {
    pub application_id: ApplicationId,
    pub company: String,
    pub position: String,
    pub location: String,
    pub application_date: NaiveDate,
    pub priority: Priority,
    pub priority_label: &'static str,
    pub current_stage: Stage,
    pub current_stage_label: &'static str,
}

impl ApplicationListItem {
    pub fn of(application: &Application) -> Self {
        let current_stage = application.current_stage();
        Self {
            application_id: application.id.clone(),
            company: application.company.clone(),
            position: application.position.clone(),
            location: application.location.clone(),
            application_date: application.application_date,
            priority: application.priority,
            priority_label: application.priority.label(),
            current_stage,
            current_stage_label: current_stage.label(),
        }
    }
}

/// Everything the dashboard screen consumes, derived in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub in_progress: usize,
    pub upcoming_interview_count: usize,
    pub by_stage: Vec<StageCountEntry>,
    pub by_month: Vec<MonthCountEntry>,
    pub conversion_rates: Vec<ConversionRateEntry>,
    pub recent_applications: Vec<ApplicationListItem>,
    pub upcoming_interviews: Vec<UpcomingInterviewView>,
}
