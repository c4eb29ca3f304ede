use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::views::{
    ApplicationListItem, ConversionRateEntry, DashboardSummary, MonthCountEntry, StageCountEntry,
    UpcomingInterviewView,
};
use crate::tracker::catalog::Stage;
use crate::tracker::domain::Application;

/// How many applications the dashboard's recent list shows.
pub const RECENT_APPLICATION_LIMIT: usize = 5;

/// Count applications by their authoritative current stage.
///
/// Entries appear in first-encountered order and zero-count stages are
/// absent, matching what the dashboard chart expects.
pub fn count_by_current_stage(applications: &[Application]) -> Vec<StageCountEntry> {
    let mut entries: Vec<StageCountEntry> = Vec::new();

    for application in applications {
        let stage = application.current_stage();
        match entries.iter_mut().find(|entry| entry.stage == stage) {
            Some(entry) => entry.count += 1,
            None => entries.push(StageCountEntry {
                stage,
                stage_label: stage.label(),
                count: 1,
            }),
        }
    }

    entries
}

/// Count applications by the month of their application date.
///
/// Entry order follows the input array, not the calendar: callers that want
/// a chronological axis sort the collection by date first.
pub fn count_by_application_month(applications: &[Application]) -> Vec<MonthCountEntry> {
    let mut entries: Vec<MonthCountEntry> = Vec::new();

    for application in applications {
        let label = application.application_date.format("%b %Y").to_string();
        match entries.iter_mut().find(|entry| entry.month_label == label) {
            Some(entry) => entry.count += 1,
            None => entries.push(MonthCountEntry {
                month_label: label,
                count: 1,
            }),
        }
    }

    entries
}

/// Stage-to-stage conversion over the catalog's forward path.
///
/// Each adjacent pair reports `round(100 * count_b / count_a)` computed from
/// current-stage counts, 0 when the earlier stage is empty, capped at 100.
pub fn conversion_rates(applications: &[Application]) -> Vec<ConversionRateEntry> {
    let counts: HashMap<Stage, usize> = count_by_current_stage(applications)
        .into_iter()
        .map(|entry| (entry.stage, entry.count))
        .collect();

    Stage::progression()
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            let count_from = counts.get(&from).copied().unwrap_or(0);
            let count_to = counts.get(&to).copied().unwrap_or(0);
            let rate = if count_from == 0 {
                0
            } else {
                let pct = (100.0 * count_to as f64 / count_from as f64).round() as u32;
                pct.min(100) as u8
            };

            ConversionRateEntry {
                from,
                from_label: from.label(),
                to,
                to_label: to.label(),
                rate,
            }
        })
        .collect()
}

/// Interviews scheduled strictly after `now`, ascending by instant.
///
/// The evaluation instant is a parameter so results are reproducible in
/// tests; re-evaluating later naturally shrinks the list as interviews pass.
pub fn upcoming_interviews(
    applications: &[Application],
    now: DateTime<Utc>,
) -> Vec<UpcomingInterviewView> {
    let mut interviews: Vec<UpcomingInterviewView> = applications
        .iter()
        .flat_map(|application| {
            application.status_updates.iter().filter_map(|update| {
                let scheduled_for = update.interview_date?;
                if update.stage == Stage::InterviewScheduled && scheduled_for > now {
                    Some(UpcomingInterviewView {
                        application_id: application.id.clone(),
                        company: application.company.clone(),
                        position: application.position.clone(),
                        scheduled_for,
                        notes: update.notes.clone(),
                    })
                } else {
                    None
                }
            })
        })
        .collect();

    interviews.sort_by_key(|interview| interview.scheduled_for);
    interviews
}

/// The `n` most recently dated applications, ties keeping input order.
/// The source collection is left untouched.
pub fn recent_applications(applications: &[Application], n: usize) -> Vec<&Application> {
    let mut ordered: Vec<&Application> = applications.iter().collect();
    ordered.sort_by(|a, b| b.application_date.cmp(&a.application_date));
    ordered.truncate(n);
    ordered
}

impl DashboardSummary {
    /// Derive the full dashboard payload from an in-memory collection.
    pub fn build(applications: &[Application], now: DateTime<Utc>) -> Self {
        let upcoming = upcoming_interviews(applications, now);
        let in_progress = applications
            .iter()
            .filter(|application| {
                !application
                    .status_updates
                    .iter()
                    .any(|update| matches!(update.stage, Stage::Accepted | Stage::Rejected))
            })
            .count();

        Self {
            total: applications.len(),
            in_progress,
            upcoming_interview_count: upcoming.len(),
            by_stage: count_by_current_stage(applications),
            by_month: count_by_application_month(applications),
            conversion_rates: conversion_rates(applications),
            recent_applications: recent_applications(applications, RECENT_APPLICATION_LIMIT)
                .into_iter()
                .map(ApplicationListItem::of)
                .collect(),
            upcoming_interviews: upcoming,
        }
    }
}
