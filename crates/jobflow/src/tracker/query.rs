use serde::{Deserialize, Serialize};

use super::domain::Application;

/// Coarse status-group filter, distinct from exact stage matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusBucket {
    #[default]
    All,
    Active,
    Rejected,
    Accepted,
}

impl StatusBucket {
    /// Lenient parse: any unknown token behaves as `All`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "rejected" => Self::Rejected,
            "accepted" => Self::Accepted,
            _ => Self::All,
        }
    }

    fn matches(self, application: &Application) -> bool {
        let status = application.current_stage().identifier().to_ascii_lowercase();
        match self {
            Self::All => true,
            Self::Active => !matches!(status.as_str(), "rejected" | "accepted" | "declined"),
            Self::Rejected => status == "rejected",
            Self::Accepted => matches!(status.as_str(), "accepted" | "offer"),
        }
    }
}

/// Sort order for the application list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Application date, most recent first.
    #[default]
    Date,
    /// Company name, ascending.
    Company,
    /// Current-stage label, ascending.
    Status,
}

impl SortKey {
    /// Lenient parse: any unknown token falls back to `Date`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "company" => Self::Company,
            "status" => Self::Status,
            _ => Self::Date,
        }
    }
}

/// Client-side filter and sort state over an in-memory collection.
#[derive(Debug, Clone, Default)]
pub struct ApplicationQuery {
    pub text: String,
    pub bucket: StatusBucket,
    pub sort: SortKey,
}

impl ApplicationQuery {
    /// Filter (text AND bucket) then sort. The result is a fresh sequence of
    /// borrows; the input collection is untouched.
    pub fn apply<'a>(&self, applications: &'a [Application]) -> Vec<&'a Application> {
        let needle = self.text.trim().to_lowercase();

        let mut hits: Vec<&Application> = applications
            .iter()
            .filter(|application| {
                matches_text(application, &needle) && self.bucket.matches(application)
            })
            .collect();

        match self.sort {
            SortKey::Date => {
                hits.sort_by(|a, b| b.application_date.cmp(&a.application_date));
            }
            SortKey::Company => {
                hits.sort_by_key(|application| application.company.to_lowercase());
            }
            SortKey::Status => {
                hits.sort_by_key(|application| application.current_stage().label().to_lowercase());
            }
        }

        hits
    }
}

/// Case-insensitive substring match over company, position, and location.
/// An empty query matches everything.
fn matches_text(application: &Application, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    application.company.to_lowercase().contains(needle)
        || application.position.to_lowercase().contains(needle)
        || application.location.to_lowercase().contains(needle)
}
