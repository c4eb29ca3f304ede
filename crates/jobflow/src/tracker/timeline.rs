use std::collections::HashSet;

use serde::Serialize;

use super::catalog::{Stage, UNREACHED_COLOR};
use super::domain::StatusUpdate;

/// Rendering density for a derived timeline. Compact markers carry no
/// labels; both modes derive the same markers and connectors otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineMode {
    Compact,
    Full,
}

impl TimelineMode {
    /// Lenient parse: anything other than "compact" renders the full view.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "compact" => Self::Compact,
            _ => Self::Full,
        }
    }
}

/// One dot on the progress indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineMarker {
    pub stage: Stage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub color: &'static str,
    pub reached: bool,
    pub is_current: bool,
    pub terminal: bool,
}

/// The line drawn between two consecutive forward-path markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineConnector {
    pub color: &'static str,
}

/// Renderable progress indicator derived from one application's updates.
///
/// Purely derived: the same input always yields the same timeline, and the
/// input is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusTimeline {
    pub mode: TimelineMode,
    pub markers: Vec<TimelineMarker>,
    pub connectors: Vec<TimelineConnector>,
}

impl StatusTimeline {
    /// Derive the timeline for one application's status updates.
    ///
    /// An empty update sequence yields an empty timeline; that is a normal
    /// zero-result, not an error.
    pub fn derive(updates: &[StatusUpdate], mode: TimelineMode) -> Self {
        let mut ordered: Vec<&StatusUpdate> = updates.iter().collect();
        ordered.sort_by_key(|update| update.created_at);

        let Some(latest) = ordered.last() else {
            return Self {
                mode,
                markers: Vec::new(),
                connectors: Vec::new(),
            };
        };
        let current = latest.stage;

        let reached: HashSet<Stage> = ordered.iter().map(|update| update.stage).collect();
        let truncated = Stage::terminal_negative()
            .iter()
            .any(|stage| reached.contains(stage));

        // Once a terminal outcome is recorded the hypothetical remaining
        // forward path is dropped; only stages actually reached stay visible.
        let rendered: Vec<Stage> = Stage::progression()
            .into_iter()
            .filter(|stage| !truncated || reached.contains(stage))
            .collect();

        let mut markers: Vec<TimelineMarker> = rendered
            .iter()
            .map(|&stage| marker(stage, mode, reached.contains(&stage), stage == current, false))
            .collect();

        let connectors: Vec<TimelineConnector> = rendered
            .windows(2)
            .map(|pair| {
                let color = if reached.contains(&pair[0]) && reached.contains(&pair[1]) {
                    pair[0].color()
                } else {
                    UNREACHED_COLOR
                };
                TimelineConnector { color }
            })
            .collect();

        for stage in Stage::terminal_negative() {
            if reached.contains(&stage) {
                markers.push(marker(stage, mode, true, stage == current, true));
            }
        }

        Self {
            mode,
            markers,
            connectors,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

fn marker(
    stage: Stage,
    mode: TimelineMode,
    reached: bool,
    is_current: bool,
    terminal: bool,
) -> TimelineMarker {
    let label = match mode {
        TimelineMode::Full => Some(stage.label()),
        TimelineMode::Compact => None,
    };
    let color = if reached { stage.color() } else { UNREACHED_COLOR };

    TimelineMarker {
        stage,
        label,
        color,
        reached,
        is_current,
        terminal,
    }
}
