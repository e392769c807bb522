use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use festoon_types::{Easing, Transition};
use thiserror::Error;

use crate::counter::RestartPolicy;

/// The glyph set rendered when no override is configured.
pub const DEFAULT_GLYPHS: [&str; 4] = ["\u{1f3c6}", "\u{1f4dc}", "\u{26a1}", "\u{1f3af}"];

/// Raw shape of `~/.festoon/config.toml`. Everything is optional;
/// [`AnimatorConfig::resolve`] fills defaults and rejects nonsense.
#[derive(Debug, Default, Deserialize)]
pub struct FestoonConfig {
    pub counters: Option<CountersSection>,
    pub decorations: Option<DecorationsSection>,
    pub reveal: Option<RevealSection>,
    pub hover: Option<HoverSection>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// ```toml
/// [counters]
/// tick_ms = 20
/// restart_policy = "ignore"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct CountersSection {
    /// Polling period in milliseconds. Default: 20. Must be positive.
    pub tick_ms: Option<u64>,
    /// What re-animating an in-flight counter does: "restart" (default)
    /// or "ignore".
    pub restart_policy: Option<RestartPolicy>,
}

/// ```toml
/// [decorations]
/// glyphs = ["\u{2728}", "\u{2b50}"]
/// seed = 7
/// position_min_pct = 10.0
/// position_max_pct = 90.0
/// max_delay_ms = 4000
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct DecorationsSection {
    /// One decoration is generated per glyph, in order.
    pub glyphs: Option<Vec<String>>,
    /// Seed for placement randomness; omit for a fresh seed per session.
    pub seed: Option<u64>,
    pub position_min_pct: Option<f32>,
    pub position_max_pct: Option<f32>,
    /// Upper bound (exclusive) for the animation delay. Must be positive.
    pub max_delay_ms: Option<u64>,
}

/// ```toml
/// [reveal]
/// threshold = 0.1
/// hidden_offset_px = 50.0
/// transition_ms = 600
/// easing = "ease-out"
/// stagger_ms = 100
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct RevealSection {
    /// Visible-area ratio that counts as intersecting, in [0, 1].
    pub threshold: Option<f32>,
    /// How far down a pending element sits, in pixels.
    pub hidden_offset_px: Option<f32>,
    pub transition_ms: Option<u64>,
    pub easing: Option<Easing>,
    /// Per-card transition delay step.
    pub stagger_ms: Option<u64>,
}

/// ```toml
/// [hover]
/// raised_z = 10
/// rest_z = 1
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct HoverSection {
    pub raised_z: Option<i32>,
    pub rest_z: Option<i32>,
}

impl FestoonConfig {
    /// Loads `path` if it exists. `Ok(None)` means no file.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".festoon").join("config.toml"))
}

// ============================================================================
// Resolved configuration
// ============================================================================

/// Validated runtime configuration with every default filled in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimatorConfig {
    pub counters: CounterSettings,
    pub decorations: DecorationSettings,
    pub reveal: RevealSettings,
    pub hover: HoverSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSettings {
    /// Time between counter ticks. Always non-zero.
    pub tick: Duration,
    pub restart_policy: RestartPolicy,
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(20),
            restart_policy: RestartPolicy::Restart,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecorationSettings {
    pub glyphs: Vec<String>,
    pub seed: Option<u64>,
    /// Placement range for `top`/`left`, percent of the container.
    /// `position_min` is inclusive, `position_max` exclusive, and the
    /// range is never empty.
    pub position_min: f32,
    pub position_max: f32,
    /// Exclusive upper bound for the animation delay. Always non-zero.
    pub max_delay: Duration,
}

impl Default for DecorationSettings {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_GLYPHS.iter().map(|&g| g.to_string()).collect(),
            seed: None,
            position_min: 10.0,
            position_max: 90.0,
            max_delay: Duration::from_secs(4),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealSettings {
    pub threshold: f32,
    pub hidden_offset: f32,
    pub transition: Transition,
    pub stagger_step: Duration,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            hidden_offset: 50.0,
            transition: Transition::new(Duration::from_millis(600), Easing::EaseOut),
            stagger_step: Duration::from_millis(100),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverSettings {
    pub raised_z: i32,
    pub rest_z: i32,
}

impl Default for HoverSettings {
    fn default() -> Self {
        Self {
            raised_z: 10,
            rest_z: 1,
        }
    }
}

impl AnimatorConfig {
    /// Resolves a raw file config against the defaults. Invalid values
    /// warn and fall back rather than failing the whole session.
    #[must_use]
    pub fn resolve(raw: &FestoonConfig) -> Self {
        let mut config = Self::default();

        if let Some(counters) = &raw.counters {
            if let Some(tick_ms) = counters.tick_ms {
                if tick_ms == 0 {
                    tracing::warn!("counters.tick_ms must be positive, using default");
                } else {
                    config.counters.tick = Duration::from_millis(tick_ms);
                }
            }
            if let Some(policy) = counters.restart_policy {
                config.counters.restart_policy = policy;
            }
        }

        if let Some(decorations) = &raw.decorations {
            if let Some(glyphs) = &decorations.glyphs {
                if glyphs.is_empty() {
                    tracing::warn!("decorations.glyphs is empty, using defaults");
                } else {
                    config.decorations.glyphs = glyphs.clone();
                }
            }
            config.decorations.seed = decorations.seed;
            if let Some(min) = decorations.position_min_pct {
                config.decorations.position_min = min;
            }
            if let Some(max) = decorations.position_max_pct {
                config.decorations.position_max = max;
            }
            let min = config.decorations.position_min;
            let max = config.decorations.position_max;
            if !min.is_finite() || !max.is_finite() || min >= max {
                tracing::warn!(min, max, "decorations position range is invalid, using defaults");
                config.decorations.position_min = DecorationSettings::default().position_min;
                config.decorations.position_max = DecorationSettings::default().position_max;
            }
            if let Some(delay_ms) = decorations.max_delay_ms {
                if delay_ms == 0 {
                    tracing::warn!("decorations.max_delay_ms must be positive, using default");
                } else {
                    config.decorations.max_delay = Duration::from_millis(delay_ms);
                }
            }
        }

        if let Some(reveal) = &raw.reveal {
            if let Some(threshold) = reveal.threshold {
                if threshold.is_finite() && (0.0..=1.0).contains(&threshold) {
                    config.reveal.threshold = threshold;
                } else {
                    tracing::warn!(threshold, "reveal.threshold must be in [0, 1], using default");
                }
            }
            if let Some(offset) = reveal.hidden_offset_px {
                if offset.is_finite() {
                    config.reveal.hidden_offset = offset;
                } else {
                    tracing::warn!("reveal.hidden_offset_px must be finite, using default");
                }
            }
            if let Some(transition_ms) = reveal.transition_ms {
                config.reveal.transition.duration = Duration::from_millis(transition_ms);
            }
            if let Some(easing) = reveal.easing {
                config.reveal.transition.easing = easing;
            }
            if let Some(stagger_ms) = reveal.stagger_ms {
                config.reveal.stagger_step = Duration::from_millis(stagger_ms);
            }
        }

        if let Some(hover) = &raw.hover {
            if let Some(raised_z) = hover.raised_z {
                config.hover.raised_z = raised_z;
            }
            if let Some(rest_z) = hover.rest_z {
                config.hover.rest_z = rest_z;
            }
        }

        config
    }
}
