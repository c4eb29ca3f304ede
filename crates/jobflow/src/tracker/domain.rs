use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::Stage;

/// Identifier wrapper for tracked applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Three-level priority attached to an application by its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Badge background color.
    pub const fn badge_color(self) -> &'static str {
        match self {
            Self::Low => "#DBEAFE",
            Self::Medium => "#FEF3C7",
            Self::High => "#FEE2E2",
        }
    }

    /// Badge text color.
    pub const fn text_color(self) -> &'static str {
        match self {
            Self::Low => "#2563EB",
            Self::Medium => "#D97706",
            Self::High => "#DC2626",
        }
    }
}

/// One recorded stage transition for an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub id: String,
    pub application_id: String,
    pub stage: Stage,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A tracked job application and its recorded stage history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    pub owner_id: String,
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub salary: String,
    pub application_date: NaiveDate,
    pub priority: Priority,
    #[serde(default)]
    pub status_updates: Vec<StatusUpdate>,
}

impl Application {
    /// Status updates in creation order. The sort is stable, so updates whose
    /// timestamps collide (day-granularity inputs do) keep their insertion
    /// order.
    pub fn sorted_updates(&self) -> Vec<&StatusUpdate> {
        let mut updates: Vec<&StatusUpdate> = self.status_updates.iter().collect();
        updates.sort_by_key(|update| update.created_at);
        updates
    }

    /// The most recent update under the authoritative ordering rule, if any.
    pub fn latest_update(&self) -> Option<&StatusUpdate> {
        self.sorted_updates().last().copied()
    }

    /// The authoritative current stage: the stage of the latest update by
    /// creation timestamp, defaulting to the catalog's first entry when no
    /// update has been recorded.
    pub fn current_stage(&self) -> Stage {
        self.latest_update()
            .map(|update| update.stage)
            .unwrap_or(Stage::first())
    }

    /// Distinct stages this application has recorded, in no particular order.
    pub fn reached_stages(&self) -> HashSet<Stage> {
        self.status_updates
            .iter()
            .map(|update| update.stage)
            .collect()
    }
}
