// src/input/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::input::model::StepSource;
use crate::types::ViewMode;

/// Parse a JSON array of steps in the shape selected by `mode`.
pub fn parse_steps(json: &str, mode: ViewMode) -> Result<StepSource> {
    let source = match mode {
        ViewMode::Template => StepSource::Template(serde_json::from_str(json)?),
        ViewMode::Execution => StepSource::Execution(serde_json::from_str(json)?),
    };
    debug!(mode = %mode, steps = source.len(), "parsed step list");
    Ok(source)
}

/// Read and parse a JSON step list from disk.
pub fn load_steps(path: impl AsRef<Path>, mode: ViewMode) -> Result<StepSource> {
    let contents = fs::read_to_string(path.as_ref())?;
    parse_steps(&contents, mode)
}
