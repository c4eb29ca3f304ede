use serde::{Deserialize, Serialize};

/// Connector/marker color used for catalog entries that were never reached.
pub const UNREACHED_COLOR: &str = "#E5E7EB";

/// The fixed vocabulary of pipeline stages.
///
/// The first eight variants form the ordered forward path an application
/// walks; `Rejected` and `Declined` are terminal-negative outcomes that sit
/// outside the ordering and are rendered as standalone markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    Applied,
    ResumeReviewed,
    PhoneScreen,
    InterviewScheduled,
    TechnicalInterview,
    FinalInterview,
    OfferReceived,
    Accepted,
    Rejected,
    Declined,
}

impl Stage {
    /// Ordered forward path. This is the one source of ordering truth:
    /// timeline rendering and stage-to-stage conversion both walk this array.
    pub const fn progression() -> [Self; 8] {
        [
            Self::Applied,
            Self::ResumeReviewed,
            Self::PhoneScreen,
            Self::InterviewScheduled,
            Self::TechnicalInterview,
            Self::FinalInterview,
            Self::OfferReceived,
            Self::Accepted,
        ]
    }

    /// Terminal-negative outcomes, in the order they are appended to a
    /// truncated timeline.
    pub const fn terminal_negative() -> [Self; 2] {
        [Self::Rejected, Self::Declined]
    }

    /// Default stage for an application with no recorded updates.
    pub const fn first() -> Self {
        Self::Applied
    }

    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Applied => "APPLIED",
            Self::ResumeReviewed => "RESUME_REVIEWED",
            Self::PhoneScreen => "PHONE_SCREEN",
            Self::InterviewScheduled => "INTERVIEW_SCHEDULED",
            Self::TechnicalInterview => "TECHNICAL_INTERVIEW",
            Self::FinalInterview => "FINAL_INTERVIEW",
            Self::OfferReceived => "OFFER_RECEIVED",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
            Self::Declined => "DECLINED",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::ResumeReviewed => "Resume Reviewed",
            Self::PhoneScreen => "Phone Screen",
            Self::InterviewScheduled => "Interview Scheduled",
            Self::TechnicalInterview => "Technical Interview",
            Self::FinalInterview => "Final Interview",
            Self::OfferReceived => "Offer Received",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Declined => "Declined",
        }
    }

    /// Badge color for the stage.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Applied => "#6B7280",
            Self::ResumeReviewed => "#3B82F6",
            Self::PhoneScreen => "#8B5CF6",
            Self::InterviewScheduled => "#10B981",
            Self::TechnicalInterview => "#F59E0B",
            Self::FinalInterview => "#EF4444",
            Self::OfferReceived => "#6366F1",
            Self::Accepted => "#059669",
            Self::Rejected => "#DC2626",
            Self::Declined => "#9CA3AF",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Applied => "Initial application submitted",
            Self::ResumeReviewed => "Resume has been reviewed",
            Self::PhoneScreen => "Phone screen scheduled or completed",
            Self::InterviewScheduled => "On-site interview scheduled",
            Self::TechnicalInterview => "Technical interview scheduled or completed",
            Self::FinalInterview => "Final round interview",
            Self::OfferReceived => "Offer received from the company",
            Self::Accepted => "Offer accepted",
            Self::Rejected => "Application rejected by the company",
            Self::Declined => "Offer declined by the candidate",
        }
    }

    pub const fn is_terminal_negative(self) -> bool {
        matches!(self, Self::Rejected | Self::Declined)
    }

    /// Position within the forward path; terminal stages carry none.
    pub fn position(self) -> Option<usize> {
        Self::progression().iter().position(|stage| *stage == self)
    }

    /// Case-insensitive lookup by identifier. Unknown identifiers yield
    /// `None`; callers at the ingest boundary decide how to surface that.
    pub fn from_identifier(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_uppercase();
        [Self::progression().as_slice(), Self::terminal_negative().as_slice()]
            .concat()
            .into_iter()
            .find(|stage| stage.identifier() == normalized)
    }
}

/// Display metadata for one catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct StageDescriptor {
    pub stage: Stage,
    pub identifier: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    /// Catalog position for forward-path stages; terminal stages have none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

impl StageDescriptor {
    pub fn of(stage: Stage) -> Self {
        Self {
            stage,
            identifier: stage.identifier(),
            label: stage.label(),
            color: stage.color(),
            description: stage.description(),
            position: stage.position(),
        }
    }
}

/// The ordered catalog of forward-path stages as displayable entries.
pub fn catalog() -> Vec<StageDescriptor> {
    Stage::progression()
        .into_iter()
        .map(StageDescriptor::of)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progression_excludes_terminal_stages() {
        let path = Stage::progression();
        assert_eq!(path.len(), 8);
        assert!(path.iter().all(|stage| !stage.is_terminal_negative()));
        assert_eq!(path[0], Stage::first());
        assert_eq!(path[7], Stage::Accepted);
    }

    #[test]
    fn identifier_lookup_is_case_insensitive() {
        assert_eq!(
            Stage::from_identifier("phone_screen"),
            Some(Stage::PhoneScreen)
        );
        assert_eq!(Stage::from_identifier(" REJECTED "), Some(Stage::Rejected));
        assert_eq!(Stage::from_identifier("GHOSTED"), None);
    }

    #[test]
    fn terminal_stages_have_no_position() {
        assert_eq!(Stage::Rejected.position(), None);
        assert_eq!(Stage::Declined.position(), None);
        assert_eq!(Stage::Applied.position(), Some(0));
        assert_eq!(Stage::Accepted.position(), Some(7));
    }

    #[test]
    fn catalog_entries_follow_progression_order() {
        let entries = catalog();
        assert_eq!(entries.len(), 8);
        for (index, entry) in entries.iter().enumerate() {
            assert_eq!(entry.position, Some(index));
            assert_eq!(entry.stage, Stage::progression()[index]);
        }
    }
}
