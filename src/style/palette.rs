// src/style/palette.rs

use std::collections::BTreeMap;

use crate::config::PaletteSection;
use crate::style::classify::color_for_task_type;

/// Task type colors: config overrides first, built-in palette second.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    task_types: BTreeMap<String, String>,
}

impl Palette {
    pub fn from_config(section: &PaletteSection) -> Self {
        Self {
            task_types: section.task_types.clone(),
        }
    }

    pub fn task_type_color(&self, task_type: &str) -> &str {
        match self.task_types.get(task_type) {
            Some(color) => color.as_str(),
            None => color_for_task_type(task_type),
        }
    }
}
