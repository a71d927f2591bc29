// src/style/mod.rs

//! Visual state of nodes and edges.

pub mod classify;
pub mod palette;

pub use classify::{
    DEFAULT_TASK_TYPE_COLOR, EdgeStyle, GENERIC_STATUS_ICON, NEUTRAL_STATUS_STYLE, StatusStyle,
    color_for_task_type, icon_for_status, label_for_status, style_for_dependency_kind,
    style_for_dependency_type, style_for_status,
};
pub use palette::Palette;
