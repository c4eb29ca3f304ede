use super::common::*;
use crate::tracker::catalog::{Stage, UNREACHED_COLOR};
use crate::tracker::timeline::{StatusTimeline, TimelineMode};

#[test]
fn empty_updates_render_nothing() {
    let timeline = StatusTimeline::derive(&[], TimelineMode::Full);
    assert!(timeline.is_empty());
    assert!(timeline.connectors.is_empty());
}

#[test]
fn full_walk_marks_reached_stages_and_colors_connectors() {
    let updates = vec![
        update("u1", Stage::Applied, day(1)),
        update("u2", Stage::ResumeReviewed, day(2)),
        update("u3", Stage::PhoneScreen, day(4)),
    ];

    let timeline = StatusTimeline::derive(&updates, TimelineMode::Full);

    // All eight catalog entries render when no terminal outcome was reached.
    assert_eq!(timeline.markers.len(), 8);
    assert_eq!(timeline.connectors.len(), 7);

    let reached: Vec<bool> = timeline.markers.iter().map(|m| m.reached).collect();
    assert_eq!(
        reached,
        vec![true, true, true, false, false, false, false, false]
    );

    let current: Vec<&Stage> = timeline
        .markers
        .iter()
        .filter(|m| m.is_current)
        .map(|m| &m.stage)
        .collect();
    assert_eq!(current, vec![&Stage::PhoneScreen]);

    // Connectors take the earlier stage's color only when both ends are
    // reached; everything past the frontier is neutral.
    assert_eq!(timeline.connectors[0].color, Stage::Applied.color());
    assert_eq!(timeline.connectors[1].color, Stage::ResumeReviewed.color());
    assert_eq!(timeline.connectors[2].color, UNREACHED_COLOR);
    assert_eq!(timeline.connectors[6].color, UNREACHED_COLOR);

    let unreached_marker = &timeline.markers[5];
    assert_eq!(unreached_marker.color, UNREACHED_COLOR);
}

#[test]
fn rejection_truncates_the_unreached_forward_path() {
    let updates = vec![
        update("u1", Stage::Applied, day(1)),
        update("u2", Stage::PhoneScreen, day(3)),
        update("u3", Stage::Rejected, day(5)),
    ];

    let timeline = StatusTimeline::derive(&updates, TimelineMode::Full);

    let stages: Vec<Stage> = timeline.markers.iter().map(|m| m.stage).collect();
    assert_eq!(stages, vec![Stage::Applied, Stage::PhoneScreen, Stage::Rejected]);

    let terminal = timeline.markers.last().expect("terminal marker present");
    assert!(terminal.terminal);
    assert!(terminal.reached);
    assert!(terminal.is_current);
    assert_eq!(terminal.color, Stage::Rejected.color());

    // Only the two rendered forward-path markers are joined.
    assert_eq!(timeline.connectors.len(), 1);
    assert_eq!(timeline.connectors[0].color, Stage::Applied.color());
}

#[test]
fn both_terminal_markers_append_in_check_order() {
    // Declined recorded before rejected: the appended order still follows
    // the catalog's check order, not the timestamps.
    let updates = vec![
        update("u1", Stage::Applied, day(1)),
        update("u2", Stage::Declined, day(3)),
        update("u3", Stage::Rejected, day(6)),
    ];

    let timeline = StatusTimeline::derive(&updates, TimelineMode::Full);
    let tail: Vec<Stage> = timeline
        .markers
        .iter()
        .filter(|m| m.terminal)
        .map(|m| m.stage)
        .collect();

    assert_eq!(tail, vec![Stage::Rejected, Stage::Declined]);
    let current: Vec<Stage> = timeline
        .markers
        .iter()
        .filter(|m| m.is_current)
        .map(|m| m.stage)
        .collect();
    assert_eq!(current, vec![Stage::Rejected]);
}

#[test]
fn input_order_does_not_change_the_timeline() {
    let mut updates = vec![
        update("u1", Stage::Applied, day(1)),
        update("u2", Stage::ResumeReviewed, day(2)),
        update("u3", Stage::PhoneScreen, day(4)),
    ];
    let expected = StatusTimeline::derive(&updates, TimelineMode::Full);

    updates.reverse();
    assert_eq!(StatusTimeline::derive(&updates, TimelineMode::Full), expected);
}

#[test]
fn compact_and_full_modes_agree_except_for_labels() {
    let updates = vec![
        update("u1", Stage::Applied, day(1)),
        update("u2", Stage::Rejected, day(2)),
    ];

    let full = StatusTimeline::derive(&updates, TimelineMode::Full);
    let compact = StatusTimeline::derive(&updates, TimelineMode::Compact);

    assert_eq!(full.markers.len(), compact.markers.len());
    assert_eq!(full.connectors, compact.connectors);
    for (full_marker, compact_marker) in full.markers.iter().zip(&compact.markers) {
        assert_eq!(full_marker.stage, compact_marker.stage);
        assert_eq!(full_marker.reached, compact_marker.reached);
        assert_eq!(full_marker.color, compact_marker.color);
        assert_eq!(full_marker.label, Some(full_marker.stage.label()));
        assert_eq!(compact_marker.label, None);
    }
}

#[test]
fn repeated_stages_collapse_into_one_marker() {
    let updates = vec![
        update("u1", Stage::Applied, day(1)),
        update("u2", Stage::Applied, day(2)),
        update("u3", Stage::Applied, day(3)),
    ];

    let timeline = StatusTimeline::derive(&updates, TimelineMode::Full);
    let reached_count = timeline.markers.iter().filter(|m| m.reached).count();
    assert_eq!(reached_count, 1);
}
