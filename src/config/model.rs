// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [layout]
/// columns = 3
/// h_spacing = 300
/// v_spacing = 180
/// margin = 50
/// node_width = 250
/// node_height = 120
///
/// [refresh]
/// interval_secs = 5
///
/// [palette.task_types]
/// approval = "#8b5cf6"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    /// Grid geometry from `[layout]`.
    #[serde(default)]
    pub layout: LayoutSection,

    /// Host refresh loop settings from `[refresh]`.
    #[serde(default)]
    pub refresh: RefreshSection,

    /// Color overrides from `[palette]`.
    #[serde(default)]
    pub palette: PaletteSection,
}

/// Validated configuration.
///
/// Only constructed through `TryFrom<RawConfigFile>` (see `validate.rs`), so
/// holders can rely on the geometry being overlap-free.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub layout: LayoutSection,
    pub refresh: RefreshSection,
    pub palette: PaletteSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        layout: LayoutSection,
        refresh: RefreshSection,
        palette: PaletteSection,
    ) -> Self {
        Self {
            layout,
            refresh,
            palette,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(
            LayoutSection::default(),
            RefreshSection::default(),
            PaletteSection::default(),
        )
    }
}

/// `[layout]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LayoutSection {
    /// Row capacity: how many steps go on one row before wrapping.
    #[serde(default = "default_columns")]
    pub columns: u32,

    /// Horizontal distance between the left edges of adjacent columns.
    #[serde(default = "default_h_spacing")]
    pub h_spacing: u32,

    /// Vertical distance between the top edges of adjacent rows.
    #[serde(default = "default_v_spacing")]
    pub v_spacing: u32,

    /// Offset of the first row/column from the origin.
    #[serde(default = "default_margin")]
    pub margin: u32,

    /// Fixed width of a rendered node box.
    #[serde(default = "default_node_width")]
    pub node_width: u32,

    /// Fixed height of a rendered node box.
    #[serde(default = "default_node_height")]
    pub node_height: u32,
}

fn default_columns() -> u32 {
    3
}

fn default_h_spacing() -> u32 {
    300
}

fn default_v_spacing() -> u32 {
    180
}

fn default_margin() -> u32 {
    50
}

fn default_node_width() -> u32 {
    250
}

fn default_node_height() -> u32 {
    120
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            h_spacing: default_h_spacing(),
            v_spacing: default_v_spacing(),
            margin: default_margin(),
            node_width: default_node_width(),
            node_height: default_node_height(),
        }
    }
}

/// `[refresh]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RefreshSection {
    /// Seconds between two re-reads of the step source in `--watch` mode.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_interval_secs() -> u64 {
    5
}

impl Default for RefreshSection {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

/// `[palette]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PaletteSection {
    /// Extra or replacement colors keyed by task type, e.g.
    /// `approval = "#8b5cf6"`.
    #[serde(default)]
    pub task_types: BTreeMap<String, String>,
}
