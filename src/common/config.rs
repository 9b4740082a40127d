use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::layout_engine::cycle::CycleSizes;
use crate::sys::geometry::Size;

pub fn config_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("quadra")
        .join("config.toml")
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// What a repeated directional-move command does.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum MoveExecutionMode {
    /// Snap to the screen edge; no resize, no monitor traversal.
    #[default]
    None,
    /// Cycle the moving axis through the move resize fractions.
    Resize,
    /// Once flush with the edge, cross to the adjacent monitor and snap to
    /// its opposite edge.
    AcrossMonitor,
    /// Monitor traversal; falls back to resize cycling on a single display
    /// and begins resize cycling after wrapping the ring.
    AcrossAndResize,
    /// Monitor traversal along the ring, same-edge snap, never resizing.
    CycleMonitor,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    pub fn parse(input: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Config::parse(&contents)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            settings: Settings::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Master switch for repeated-command cycling (sizes and grid cells).
    #[serde(default = "yes")]
    pub cycling: bool,
    /// Enabled cycle-size subset, bit index = cycle size ordinal.
    #[serde(default = "default_cycle_sizes_mask")]
    pub cycle_sizes_mask: u32,
    #[serde(default)]
    pub move_mode: MoveExecutionMode,
    /// Center the window on the cross axis after a directional move.
    #[serde(default = "no")]
    pub center_on_move: bool,
    /// Keep screen-flush edges pinned through grow/shrink.
    #[serde(default = "no")]
    pub curtain_resize: bool,
    /// Minimum window size after a shrink, as a fraction of the screen.
    #[serde(default = "default_min_fraction")]
    pub min_width_fraction: f64,
    #[serde(default = "default_min_fraction")]
    pub min_height_fraction: f64,
    /// How close an edge must be to the screen edge to count as flush.
    #[serde(default = "default_gap_tolerance")]
    pub gap_tolerance: f64,
    /// Grow/shrink step in points (both axes).
    #[serde(default = "default_resize_step")]
    pub resize_step: f64,
    /// Step for the width-only/height-only variants.
    #[serde(default = "default_resize_step")]
    pub axis_resize_step: f64,
    /// Fraction of the screen used by almost-maximize.
    #[serde(default = "default_almost_maximize_fraction")]
    pub almost_maximize_fraction: f64,
    /// Width of the todo sidebar placements in points.
    #[serde(default = "default_todo_sidebar_width")]
    pub todo_sidebar_width: f64,
    /// Fixed size used by the specified placement. Unset leaves the
    /// specified action unhandled.
    #[serde(default)]
    pub specified_width: Option<f64>,
    #[serde(default)]
    pub specified_height: Option<f64>,
    /// Re-run the window's previous action after next/previous display.
    #[serde(default = "no")]
    pub replay_on_display_change: bool,
    /// Re-maximize on the new display if the window was maximized.
    #[serde(default = "yes")]
    pub keep_maximized_on_display_change: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            cycling: true,
            cycle_sizes_mask: default_cycle_sizes_mask(),
            move_mode: MoveExecutionMode::default(),
            center_on_move: false,
            curtain_resize: false,
            min_width_fraction: default_min_fraction(),
            min_height_fraction: default_min_fraction(),
            gap_tolerance: default_gap_tolerance(),
            resize_step: default_resize_step(),
            axis_resize_step: default_resize_step(),
            almost_maximize_fraction: default_almost_maximize_fraction(),
            todo_sidebar_width: default_todo_sidebar_width(),
            specified_width: None,
            specified_height: None,
            replay_on_display_change: false,
            keep_maximized_on_display_change: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if CycleSizes::from_bits_truncate(self.cycle_sizes_mask).is_empty() {
            issues.push(format!(
                "cycle_sizes_mask {:#x} enables no known cycle size",
                self.cycle_sizes_mask
            ));
        }
        for (name, value) in [
            ("min_width_fraction", self.min_width_fraction),
            ("min_height_fraction", self.min_height_fraction),
        ] {
            if !(0.0..1.0).contains(&value) {
                issues.push(format!("{name} ({value}) must be within [0, 1)"));
            }
        }
        if !(0.0..=1.0).contains(&self.almost_maximize_fraction)
            || self.almost_maximize_fraction == 0.0
        {
            issues.push(format!(
                "almost_maximize_fraction ({}) must be within (0, 1]",
                self.almost_maximize_fraction
            ));
        }
        if self.gap_tolerance < 0.0 {
            issues.push(format!(
                "gap_tolerance ({}) must not be negative",
                self.gap_tolerance
            ));
        }
        for (name, value) in [
            ("resize_step", self.resize_step),
            ("axis_resize_step", self.axis_resize_step),
        ] {
            if value <= 0.0 {
                issues.push(format!("{name} ({value}) must be positive"));
            }
        }
        if self.todo_sidebar_width <= 0.0 {
            issues.push(format!(
                "todo_sidebar_width ({}) must be positive",
                self.todo_sidebar_width
            ));
        }
        match (self.specified_width, self.specified_height) {
            (Some(w), _) if w <= 0.0 => {
                issues.push(format!("specified_width ({w}) must be positive"));
            }
            (_, Some(h)) if h <= 0.0 => {
                issues.push(format!("specified_height ({h}) must be positive"));
            }
            (Some(_), None) | (None, Some(_)) => {
                issues.push("specified_width and specified_height must be set together".into());
            }
            _ => {}
        }

        issues
    }

    /// The sanitized runtime snapshot the engine runs on. Out-of-range
    /// values fall back to their defaults instead of propagating an error;
    /// the engine itself never fails on configuration.
    pub fn engine_settings(&self) -> EngineSettings {
        let defaults = Settings::default();
        let fallback = |name: &str, value: f64, ok: bool, default: f64| {
            if ok {
                value
            } else {
                warn!("{name} ({value}) out of range, using default {default}");
                default
            }
        };
        let specified_size = match (self.specified_width, self.specified_height) {
            (Some(w), Some(h)) if w > 0.0 && h > 0.0 => Some(Size::new(w, h)),
            (None, None) => None,
            _ => {
                warn!("incomplete or non-positive specified size, disabling specified placement");
                None
            }
        };
        EngineSettings {
            cycling: self.cycling,
            cycle_sizes: CycleSizes::sanitized(self.cycle_sizes_mask),
            move_mode: self.move_mode,
            center_on_move: self.center_on_move,
            curtain_resize: self.curtain_resize,
            min_width_fraction: fallback(
                "min_width_fraction",
                self.min_width_fraction,
                (0.0..1.0).contains(&self.min_width_fraction),
                defaults.min_width_fraction,
            ),
            min_height_fraction: fallback(
                "min_height_fraction",
                self.min_height_fraction,
                (0.0..1.0).contains(&self.min_height_fraction),
                defaults.min_height_fraction,
            ),
            gap_tolerance: fallback(
                "gap_tolerance",
                self.gap_tolerance,
                self.gap_tolerance >= 0.0,
                defaults.gap_tolerance,
            ),
            resize_step: fallback(
                "resize_step",
                self.resize_step,
                self.resize_step > 0.0,
                defaults.resize_step,
            ),
            axis_resize_step: fallback(
                "axis_resize_step",
                self.axis_resize_step,
                self.axis_resize_step > 0.0,
                defaults.axis_resize_step,
            ),
            almost_maximize_fraction: fallback(
                "almost_maximize_fraction",
                self.almost_maximize_fraction,
                self.almost_maximize_fraction > 0.0 && self.almost_maximize_fraction <= 1.0,
                defaults.almost_maximize_fraction,
            ),
            todo_sidebar_width: fallback(
                "todo_sidebar_width",
                self.todo_sidebar_width,
                self.todo_sidebar_width > 0.0,
                defaults.todo_sidebar_width,
            ),
            specified_size,
            replay_on_display_change: self.replay_on_display_change,
            keep_maximized_on_display_change: self.keep_maximized_on_display_change,
        }
    }
}

/// The immutable settings snapshot the engine is constructed with. Always
/// produced through [`Settings::engine_settings`], so every field is already
/// in range.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub cycling: bool,
    pub cycle_sizes: CycleSizes,
    pub move_mode: MoveExecutionMode,
    pub center_on_move: bool,
    pub curtain_resize: bool,
    pub min_width_fraction: f64,
    pub min_height_fraction: f64,
    pub gap_tolerance: f64,
    pub resize_step: f64,
    pub axis_resize_step: f64,
    pub almost_maximize_fraction: f64,
    pub todo_sidebar_width: f64,
    pub specified_size: Option<Size>,
    pub replay_on_display_change: bool,
    pub keep_maximized_on_display_change: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Settings::default().engine_settings()
    }
}

fn yes() -> bool {
    true
}

fn no() -> bool {
    false
}

fn default_cycle_sizes_mask() -> u32 {
    CycleSizes::all().bits()
}

fn default_min_fraction() -> f64 {
    0.25
}

fn default_gap_tolerance() -> f64 {
    5.0
}

fn default_resize_step() -> f64 {
    30.0
}

fn default_almost_maximize_fraction() -> f64 {
    0.9
}

fn default_todo_sidebar_width() -> f64 {
    400.0
}
