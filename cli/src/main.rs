//! Festoon CLI - builds the demo page and drives the animator through a
//! scripted session.
//!
//! # Architecture
//!
//! The animator is headless. In a browser the runtime would feed it
//! intersection callbacks, clicks, and hover transitions; here a fixed
//! script stands in for the user, and each step prints what changed so
//! the whole pipeline is visible from the terminal:
//!
//! ```text
//! main() -> scene::certification_page() -> PageAnimator::start()
//!               |
//!               v
//!        report_visibility / click_anchor / set_hovered -> advance()
//! ```

mod scene;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use festoon_engine::{AnimatorConfig, ElementId, FestoonConfig, PageAnimator, config};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    // Diagnostics go to stderr; stdout carries the session transcript.
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

/// Loads the optional config file, falling back to the defaults when it
/// is missing or unusable.
fn resolve_config(path: Option<PathBuf>) -> AnimatorConfig {
    let Some(path) = path else {
        return AnimatorConfig::default();
    };
    match FestoonConfig::load_from(&path) {
        Ok(Some(raw)) => {
            tracing::info!(path = %path.display(), "configuration loaded");
            AnimatorConfig::resolve(&raw)
        }
        Ok(None) => {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            AnimatorConfig::default()
        }
        // The failed load already warned with the cause.
        Err(_) => AnimatorConfig::default(),
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = resolve_config(config::config_path());
    let tick = config.counters.tick;

    let mut animator = PageAnimator::new(scene::certification_page(), config);
    animator.start();

    let page = animator.page();
    let stats_bar = page
        .query_first(".stats-bar")?
        .context("demo page has no stats bar")?;
    let hero = page.query_first(".hero")?.context("demo page has no hero")?;
    let cards = page.with_class("cert-card");
    let stats_anchor = page
        .query_first(r##"a[href="#stats"]"##)?
        .context("demo page has no stats anchor")?;
    let dead_anchor = page
        .query_first(r##"a[href="#archive"]"##)?
        .context("demo page has no archive anchor")?;

    println!("decorations:");
    for id in animator.page().with_class("floating-element") {
        if let Some(element) = animator.page().element(id) {
            println!("  {} {}", element.text(), element.style().to_css());
        }
    }

    // The hero scrolls into view first, then the stats bar and the top
    // two cards. Revealing the stats bar starts every counter.
    animator.report_visibility([(hero, 0.8)]);
    animator.report_visibility([(stats_bar, 0.4), (cards[0], 0.6), (cards[1], 0.15)]);
    animator.process_events();
    println!(
        "revealed: hero, stats bar, two cards; counters live: {}",
        animator.active_counter_tasks()
    );

    for _ in 0..5 {
        animator.advance(tick * 6);
        println!(
            "t={:>5}ms counters: {}",
            animator.clock().as_millis(),
            counter_line(&animator)
        );
    }
    animator.advance(tick * 100);
    println!(
        "t={:>5}ms counters: {} (settled)",
        animator.clock().as_millis(),
        counter_line(&animator)
    );

    // Both clicks are intercepted; only the resolvable one scrolls.
    let stats_click = animator.click_anchor(stats_anchor);
    let dead_click = animator.click_anchor(dead_anchor);
    animator.process_events();
    println!("clicks intercepted: #stats {stats_click}, #archive {dead_click}");
    for request in animator.take_scroll_requests() {
        println!("smooth scroll to element {}", request.target);
    }

    animator.set_hovered(cards[0], true);
    animator.process_events();
    println!("card hovered: {}", card_z(&animator, cards[0]));
    animator.set_hovered(cards[0], false);
    animator.process_events();
    println!("card rested:  {}", card_z(&animator, cards[0]));

    let transition = animator.config().reveal.transition;
    let curve: Vec<String> = (0..=4u32)
        .map(|i| {
            let elapsed = transition.duration * i / 4;
            format!("{:.2}", transition.progress_at(elapsed, Duration::ZERO))
        })
        .collect();
    println!("reveal progress curve: {}", curve.join(" "));

    animator.shutdown();
    println!("final page:");
    println!("{}", animator.snapshot().to_json()?);
    Ok(())
}

fn counter_line(animator: &PageAnimator) -> String {
    animator
        .page()
        .with_class("stat-number")
        .into_iter()
        .filter_map(|id| animator.page().element(id))
        .map(|element| element.text().to_string())
        .collect::<Vec<_>>()
        .join(" / ")
}

fn card_z(animator: &PageAnimator, id: ElementId) -> String {
    animator
        .page()
        .element(id)
        .and_then(|element| element.style().z_index)
        .map_or_else(|| "unset".to_string(), |z| format!("z-index {z}"))
}
