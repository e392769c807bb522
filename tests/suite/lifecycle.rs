//! Controller lifecycle, hover behavior, and snapshots.

use std::time::Duration;

use crate::common::{self, css_of, reveal_stats_bar};

#[test]
fn nothing_happens_before_start() {
    let mut fixture = common::fixture();

    assert!(!fixture.animator.is_running());
    assert!(!fixture.animator.click_anchor(fixture.anchor));
    let hero = fixture.hero;
    fixture.animator.report_visibility([(hero, 1.0)]);
    fixture.animator.advance(Duration::from_secs(1));

    assert_eq!(fixture.animator.pending_events(), 0);
    assert_eq!(fixture.animator.clock(), Duration::ZERO);
    assert_eq!(css_of(&fixture.animator, hero), "");
}

#[test]
fn shutdown_cancels_counters_and_rejects_stimuli() {
    let mut fixture = common::fixture();
    fixture.animator.start();
    reveal_stats_bar(&mut fixture);
    fixture.animator.advance(Duration::from_millis(100));
    assert_eq!(fixture.animator.active_counter_tasks(), 2);

    fixture.animator.shutdown();
    assert!(!fixture.animator.is_running());
    assert_eq!(fixture.animator.active_counter_tasks(), 0);

    let frozen = common::counter_texts(&fixture);
    assert!(!fixture.animator.click_anchor(fixture.anchor));
    fixture.animator.advance(Duration::from_secs(5));
    assert_eq!(fixture.animator.clock(), Duration::from_millis(100));
    assert_eq!(common::counter_texts(&fixture), frozen);

    // Terminal: a second shutdown and a restart both do nothing.
    fixture.animator.shutdown();
    fixture.animator.start();
    assert!(!fixture.animator.is_running());
}

#[test]
fn shutdown_drops_queued_events() {
    let mut fixture = common::fixture();
    fixture.animator.start();
    let stats_bar = fixture.stats_bar;
    fixture.animator.report_visibility([(stats_bar, 1.0)]);
    assert_eq!(fixture.animator.pending_events(), 1);

    fixture.animator.shutdown();
    assert_eq!(fixture.animator.pending_events(), 0);
    assert!(css_of(&fixture.animator, stats_bar).starts_with("opacity: 0;"));
}

#[test]
fn hover_raises_only_bound_cards() {
    let mut fixture = common::fixture();
    fixture.animator.start();
    let card = fixture.cards[2];

    fixture.animator.set_hovered(card, true);
    fixture.animator.process_events();
    let z = fixture.animator.page().element(card).unwrap().style().z_index;
    assert_eq!(z, Some(10));

    fixture.animator.set_hovered(card, false);
    fixture.animator.process_events();
    let z = fixture.animator.page().element(card).unwrap().style().z_index;
    assert_eq!(z, Some(1));

    // The hero is not a card; hovering it changes nothing.
    let hero = fixture.hero;
    fixture.animator.set_hovered(hero, true);
    fixture.animator.process_events();
    let z = fixture.animator.page().element(hero).unwrap().style().z_index;
    assert_eq!(z, None);
}

#[test]
fn snapshot_captures_the_whole_page_in_document_order() {
    let mut fixture = common::fixture();
    fixture.animator.start();
    reveal_stats_bar(&mut fixture);

    let snapshot = fixture.animator.snapshot();
    assert_eq!(snapshot.elements.len(), fixture.animator.page().len());
    assert_eq!(snapshot.elements[0].tag, "body");

    let json = snapshot.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["elements"][0]["tag"], "body");
    assert!(json.contains("stat-number"));
    assert!(json.contains("floating-element"));
}

#[test]
fn clock_only_moves_through_advance() {
    let mut fixture = common::fixture();
    fixture.animator.start();

    fixture.animator.advance(Duration::ZERO);
    assert_eq!(fixture.animator.clock(), Duration::ZERO);

    fixture.animator.advance(Duration::from_millis(5));
    fixture.animator.process_events();
    assert_eq!(fixture.animator.clock(), Duration::from_millis(5));
}
