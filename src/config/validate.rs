// src/config/validate.rs

use crate::config::model::{ConfigFile, LayoutSection, PaletteSection, RawConfigFile, RefreshSection};
use crate::errors::{Result, StepgraphError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::StepgraphError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.layout, raw.refresh, raw.palette))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_layout(&cfg.layout)?;
    validate_refresh(&cfg.refresh)?;
    validate_palette(&cfg.palette)?;
    Ok(())
}

fn validate_layout(layout: &LayoutSection) -> Result<()> {
    if layout.columns == 0 {
        return Err(StepgraphError::ConfigError(
            "[layout].columns must be >= 1 (got 0)".to_string(),
        ));
    }

    // Spacing is measured edge-to-edge, so it has to exceed the box size
    // or neighbouring nodes would touch.
    if layout.h_spacing <= layout.node_width {
        return Err(StepgraphError::ConfigError(format!(
            "[layout].h_spacing ({}) must be greater than node_width ({})",
            layout.h_spacing, layout.node_width
        )));
    }

    if layout.v_spacing <= layout.node_height {
        return Err(StepgraphError::ConfigError(format!(
            "[layout].v_spacing ({}) must be greater than node_height ({})",
            layout.v_spacing, layout.node_height
        )));
    }

    Ok(())
}

fn validate_refresh(refresh: &RefreshSection) -> Result<()> {
    if refresh.interval_secs == 0 {
        return Err(StepgraphError::ConfigError(
            "[refresh].interval_secs must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_palette(palette: &PaletteSection) -> Result<()> {
    for (task_type, color) in palette.task_types.iter() {
        if !is_hex_color(color) {
            return Err(StepgraphError::ConfigError(format!(
                "[palette.task_types].{task_type} has invalid color '{color}' (expected #rgb or #rrggbb)"
            )));
        }
    }
    Ok(())
}

/// `#rgb` or `#rrggbb`.
pub(crate) fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => {
            (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
