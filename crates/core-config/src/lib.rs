//! Configuration loading and parsing.
//!
//! Parses `mergeviz.toml` (or an override path provided by the binary) into
//! three sections: `[items]` (how many values to sort), `[color]` (hue,
//! saturation and the lightness range used to encode magnitude) and
//! `[animation]` (per-step frame delay on the terminal surface). Every field
//! has a default so a missing file or a partial file is valid.
//!
//! The raw item count is retained; the count actually drawn is computed by
//! `Config::apply_context` against the current drawing surface. A terminal
//! needs at least one column per item and one line per recursion depth, so
//! the effective count is clamped to `min(columns, 2^(rows - 1))`. The HTML
//! surface is unbounded. Unknown fields are ignored (TOML deserialization
//! tolerance) so older binaries accept newer files.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf, time::Duration};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "mergeviz.toml";

/// Largest item count any surface accepts; values are `u32`, `0..count`.
pub const MAX_ITEM_COUNT: usize = u32::MAX as usize;

/// Size of the surface the visualization will be drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigContext {
    /// Usable columns; `None` when the surface has no width limit.
    pub columns: Option<u16>,
    /// Usable lines (one per recursion depth); `None` when unbounded.
    pub rows: Option<u16>,
}

impl ConfigContext {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns: Some(columns),
            rows: Some(rows),
        }
    }

    /// Context for surfaces without geometry limits (HTML output).
    pub fn unbounded() -> Self {
        Self {
            columns: None,
            rows: None,
        }
    }

    /// Largest item count whose recursion lanes fit in `rows` lines.
    fn max_items_for_rows(rows: u16) -> usize {
        match rows {
            0 => 0,
            // ceil(log2 n) + 1 <= rows  <=>  n <= 2^(rows - 1)
            r if r > 63 => usize::MAX,
            r => 1usize << (r - 1),
        }
    }

    /// Upper bound on the item count this surface can show (`None` = no bound).
    pub fn item_capacity(&self) -> Option<usize> {
        let by_cols = self.columns.map(usize::from);
        let by_rows = self.rows.map(Self::max_items_for_rows);
        match (by_cols, by_rows) {
            (Some(c), Some(r)) => Some(c.min(r)),
            (c, r) => c.or(r),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ItemsConfig {
    #[serde(default = "ItemsConfig::default_count")]
    pub count: usize,
}

impl Default for ItemsConfig {
    fn default() -> Self {
        Self {
            count: Self::default_count(),
        }
    }
}

impl ItemsConfig {
    const fn default_count() -> usize {
        64
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ColorConfig {
    #[serde(default = "ColorConfig::default_hue")]
    pub hue: u16,
    #[serde(default = "ColorConfig::default_saturation")]
    pub saturation: u8,
    #[serde(default = "ColorConfig::default_min_lightness")]
    pub min_lightness: f64,
    #[serde(default = "ColorConfig::default_max_lightness")]
    pub max_lightness: f64,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            hue: Self::default_hue(),
            saturation: Self::default_saturation(),
            min_lightness: Self::default_min_lightness(),
            max_lightness: Self::default_max_lightness(),
        }
    }
}

impl ColorConfig {
    const fn default_hue() -> u16 {
        200
    }
    const fn default_saturation() -> u8 {
        70
    }
    const fn default_min_lightness() -> f64 {
        30.0
    }
    const fn default_max_lightness() -> f64 {
        90.0
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnimationConfig {
    #[serde(default = "AnimationConfig::default_frame_delay_ms")]
    pub frame_delay_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: Self::default_frame_delay_ms(),
        }
    }
}

impl AnimationConfig {
    const fn default_frame_delay_ms() -> u64 {
        30
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub items: ItemsConfig,
    #[serde(default)]
    pub color: ColorConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub file: ConfigFile,            // parsed (or default) data
    pub effective_item_count: usize, // clamped to surface geometry
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file(ConfigFile::default())
    }
}

/// Best-effort config path: working directory first, then the platform
/// config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("mergeviz").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => Ok(Config::from_file(file)),
        Err(e) => {
            // Parse errors fall back to defaults; the run still proceeds.
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    fn from_file(file: ConfigFile) -> Self {
        let effective_item_count = file.items.count.clamp(1, MAX_ITEM_COUNT);
        Self {
            file,
            effective_item_count,
        }
    }

    /// Override the configured item count (CLI flag). The effective value is
    /// recomputed on the next `apply_context`.
    pub fn set_item_count(&mut self, count: usize) {
        self.file.items.count = count;
        self.effective_item_count = count.clamp(1, MAX_ITEM_COUNT);
    }

    /// Apply surface geometry to compute the clamped item count.
    /// Returns the effective value, always in `1..=MAX_ITEM_COUNT`.
    pub fn apply_context(&mut self, ctx: ConfigContext) -> usize {
        let raw = self.file.items.count;
        let floor = raw.clamp(1, MAX_ITEM_COUNT);
        let (clamped, capacity) = match ctx.item_capacity() {
            Some(cap) => (floor.min(cap.max(1)), Some(cap)),
            None => (floor, None),
        };

        if clamped != raw {
            info!(
                target: "config",
                raw,
                clamped,
                capacity,
                columns = ctx.columns,
                rows = ctx.rows,
                "item_count_clamped"
            );
        }
        self.effective_item_count = clamped;
        clamped
    }
}
