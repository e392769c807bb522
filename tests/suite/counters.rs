//! Counter animation driven end to end through the animator.

use std::time::Duration;

use festoon_engine::{AnimatorConfig, ElementId, ElementSpec, Page, PageAnimator, RestartPolicy};

use crate::common::{self, counter_texts, reveal_stats_bar, text_of};

const TICK: Duration = Duration::from_millis(20);

#[test]
fn counters_reach_their_goals_exactly() {
    let mut fixture = common::fixture();
    fixture.animator.start();
    reveal_stats_bar(&mut fixture);

    fixture.animator.advance(TICK * 300);
    assert_eq!(counter_texts(&fixture), ["250", "15", "0"]);
    assert_eq!(fixture.animator.active_counter_tasks(), 0);
}

#[test]
fn displayed_values_climb_without_overshooting() {
    let mut fixture = common::fixture();
    fixture.animator.start();
    reveal_stats_bar(&mut fixture);

    let big = fixture.counters[0];
    let mut last = 0;
    for _ in 0..120 {
        fixture.animator.advance(TICK);
        let value: u64 = text_of(&fixture.animator, big).parse().unwrap();
        assert!(value >= last);
        assert!(value <= 250);
        last = value;
    }
    assert_eq!(last, 250);
}

#[test]
fn large_goals_settle_in_one_hundred_ticks() {
    let mut fixture = common::fixture();
    fixture.animator.start();
    reveal_stats_bar(&mut fixture);

    fixture.animator.advance(TICK * 99);
    assert_eq!(text_of(&fixture.animator, fixture.counters[0]), "247");
    fixture.animator.advance(TICK);
    assert_eq!(text_of(&fixture.animator, fixture.counters[0]), "250");
    assert_eq!(fixture.animator.clock(), TICK * 100);
}

#[test]
fn small_goals_step_by_at_least_one() {
    // Goal 15 clamps the increment to 1, finishing in exactly 15 ticks.
    let mut fixture = common::fixture();
    fixture.animator.start();
    reveal_stats_bar(&mut fixture);

    fixture.animator.advance(TICK * 14);
    assert_eq!(text_of(&fixture.animator, fixture.counters[1]), "14");
    fixture.animator.advance(TICK);
    assert_eq!(text_of(&fixture.animator, fixture.counters[1]), "15");
}

#[test]
fn malformed_goal_settles_to_zero_without_a_task() {
    let mut fixture = common::fixture();
    fixture.animator.start();
    reveal_stats_bar(&mut fixture);

    assert_eq!(text_of(&fixture.animator, fixture.counters[2]), "0");
    // Only the two numeric goals scheduled tasks.
    assert_eq!(fixture.animator.active_counter_tasks(), 2);
}

#[test]
fn any_revealed_container_with_counters_triggers_them_all() {
    // The trigger is page-wide: counters outside the revealed container
    // animate along with the ones inside it.
    let mut page = Page::new();
    let root = page.root();
    let section = page.append(root, ElementSpec::new("section").class("animate-on-scroll"));
    let inside = page.append(
        section,
        ElementSpec::new("span")
            .class("stat-number")
            .attr("data-target", "40")
            .text("0"),
    );
    let outside = page.append(
        root,
        ElementSpec::new("span")
            .class("stat-number")
            .attr("data-target", "8")
            .text("0"),
    );

    let mut animator = PageAnimator::new(page, AnimatorConfig::default());
    animator.start();
    animator.report_visibility([(section, 1.0)]);
    animator.process_events();
    assert_eq!(animator.active_counter_tasks(), 2);

    animator.advance(TICK * 50);
    assert_eq!(text_of(&animator, inside), "40");
    assert_eq!(text_of(&animator, outside), "8");
}

fn two_wave_page() -> (Page, ElementId, ElementId, ElementId) {
    let mut page = Page::new();
    let root = page.root();
    let stats = page.append(root, ElementSpec::new("div").class("stats-bar"));
    let first = page.append(
        stats,
        ElementSpec::new("span")
            .class("stat-number")
            .attr("data-target", "200")
            .text("0"),
    );
    let late = page.append(root, ElementSpec::new("section").class("animate-on-scroll"));
    page.append(
        late,
        ElementSpec::new("span")
            .class("stat-number")
            .attr("data-target", "50")
            .text("0"),
    );
    (page, stats, first, late)
}

#[test]
fn second_wave_restarts_running_counters_by_default() {
    let (page, stats, first, late) = two_wave_page();
    let mut animator = PageAnimator::new(page, AnimatorConfig::default());
    animator.start();
    animator.report_visibility([(stats, 1.0)]);
    animator.process_events();
    animator.advance(TICK * 10);
    assert_eq!(text_of(&animator, first), "20");

    // Revealing the second counter section re-animates everything, and
    // the default policy starts the half-done counter over.
    animator.report_visibility([(late, 1.0)]);
    animator.process_events();
    animator.advance(TICK);
    assert_eq!(text_of(&animator, first), "2");
}

#[test]
fn ignore_policy_leaves_running_counters_alone() {
    let (page, stats, first, late) = two_wave_page();
    let mut config = AnimatorConfig::default();
    config.counters.restart_policy = RestartPolicy::Ignore;
    let mut animator = PageAnimator::new(page, config);
    animator.start();
    animator.report_visibility([(stats, 1.0)]);
    animator.process_events();
    animator.advance(TICK * 10);
    assert_eq!(text_of(&animator, first), "20");

    animator.report_visibility([(late, 1.0)]);
    animator.process_events();
    animator.advance(TICK);
    assert_eq!(text_of(&animator, first), "22");
}
