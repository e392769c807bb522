//! Configuration loading through a real file.

use std::time::Duration;

use festoon_engine::{AnimatorConfig, ConfigError, FestoonConfig, RestartPolicy};

use crate::common;

#[test]
fn animator_honors_a_full_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[counters]
tick_ms = 10
restart_policy = "ignore"

[decorations]
glyphs = ["*"]
seed = 5

[reveal]
stagger_ms = 30

[hover]
raised_z = 40
"#,
    )
    .unwrap();

    let raw = FestoonConfig::load_from(&path).unwrap().unwrap();
    let config = AnimatorConfig::resolve(&raw);
    assert_eq!(config.counters.tick, Duration::from_millis(10));
    assert_eq!(config.counters.restart_policy, RestartPolicy::Ignore);

    let mut fixture = common::fixture_with(config);
    fixture.animator.start();

    assert_eq!(
        fixture.animator.page().with_class("floating-element").len(),
        1
    );
    let style = fixture
        .animator
        .page()
        .element(fixture.cards[1])
        .unwrap()
        .style();
    assert_eq!(style.transition_delay, Some(Duration::from_millis(30)));

    common::reveal_stats_bar(&mut fixture);
    fixture.animator.advance(Duration::from_millis(10));
    assert_eq!(common::text_of(&fixture.animator, fixture.counters[1]), "1");

    let raised = fixture.cards[0];
    fixture.animator.set_hovered(raised, true);
    fixture.animator.process_events();
    let z = fixture.animator.page().element(raised).unwrap().style().z_index;
    assert_eq!(z, Some(40));
}

#[test]
fn missing_file_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(FestoonConfig::load_from(&path).unwrap().is_none());
    assert_eq!(AnimatorConfig::default().counters.tick, Duration::from_millis(20));
}

#[test]
fn broken_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "counters = not toml").unwrap();

    let err = FestoonConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), &path);
}
