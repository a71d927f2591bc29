// src/style/classify.rs

//! Total lookups from status / task type / dependency kind to visuals.
//!
//! Every function here has a default branch: the inputs are backend-owned
//! strings and an unseen value must still render.

use serde::Serialize;

use crate::types::DependencyKind;

/// Fill, border and text colors of a node box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusStyle {
    pub fill: &'static str,
    pub border: &'static str,
    pub text_color: &'static str,
}

/// Neutral gray used for pending, template and unrecognized steps.
pub const NEUTRAL_STATUS_STYLE: StatusStyle = StatusStyle {
    fill: "#f9fafb",
    border: "#d1d5db",
    text_color: "#374151",
};

/// Stroke of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeStyle {
    pub stroke: &'static str,
    pub stroke_width: u32,
    /// SVG dash pattern, `None` for solid lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_dasharray: Option<&'static str>,
    pub animated: bool,
}

/// Color shared by every task type without a palette entry.
pub const DEFAULT_TASK_TYPE_COLOR: &str = "#6b7280";

/// Icon used when the status is absent or unknown.
pub const GENERIC_STATUS_ICON: &str = "circle";

pub fn style_for_status(status: Option<&str>) -> StatusStyle {
    match status {
        Some("completed") => StatusStyle {
            fill: "#dcfce7",
            border: "#16a34a",
            text_color: "#166534",
        },
        Some("in_progress") => StatusStyle {
            fill: "#fef3c7",
            border: "#d97706",
            text_color: "#92400e",
        },
        Some("ready") => StatusStyle {
            fill: "#dbeafe",
            border: "#2563eb",
            text_color: "#1e40af",
        },
        Some("failed") => StatusStyle {
            fill: "#fee2e2",
            border: "#dc2626",
            text_color: "#991b1b",
        },
        Some("cancelled") => StatusStyle {
            fill: "#f3f4f6",
            border: "#6b7280",
            text_color: "#4b5563",
        },
        _ => NEUTRAL_STATUS_STYLE,
    }
}

pub fn icon_for_status(status: Option<&str>) -> &'static str {
    match status {
        Some("completed") => "check-circle",
        Some("in_progress") => "loader",
        Some("ready") => "play-circle",
        Some("failed") => "x-circle",
        Some("cancelled") => "slash",
        Some("pending") => "clock",
        _ => GENERIC_STATUS_ICON,
    }
}

/// Human-readable text for the status pill; unknown values are shown as-is.
pub fn label_for_status(status: &str) -> String {
    match status {
        "pending" => "Pending".to_string(),
        "ready" => "Ready".to_string(),
        "in_progress" => "In progress".to_string(),
        "completed" => "Completed".to_string(),
        "failed" => "Failed".to_string(),
        "cancelled" => "Cancelled".to_string(),
        other => other.to_string(),
    }
}

/// Built-in accent color for a task type.
pub fn color_for_task_type(task_type: &str) -> &'static str {
    match task_type {
        "creation" => "#3b82f6",
        "validation" => "#8b5cf6",
        "approval" => "#f59e0b",
        "dispatch" => "#10b981",
        "preparation" => "#06b6d4",
        "loading" => "#f97316",
        "delivery" => "#14b8a6",
        "invoicing" => "#ec4899",
        "notification" => "#6366f1",
        _ => DEFAULT_TASK_TYPE_COLOR,
    }
}

pub fn style_for_dependency_kind(kind: DependencyKind) -> EdgeStyle {
    match kind {
        DependencyKind::Blocking => EdgeStyle {
            stroke: "#ef4444",
            stroke_width: 2,
            stroke_dasharray: None,
            animated: true,
        },
        DependencyKind::Soft => EdgeStyle {
            stroke: "#f59e0b",
            stroke_width: 2,
            stroke_dasharray: None,
            animated: false,
        },
        DependencyKind::Parallel => EdgeStyle {
            stroke: "#10b981",
            stroke_width: 2,
            stroke_dasharray: None,
            animated: false,
        },
        DependencyKind::Sequential => EdgeStyle {
            stroke: "#9ca3af",
            stroke_width: 1,
            stroke_dasharray: Some("5,5"),
            animated: false,
        },
    }
}

/// Style straight from a backend dependency type string.
pub fn style_for_dependency_type(raw: &str) -> EdgeStyle {
    style_for_dependency_kind(DependencyKind::from_declared(raw))
}
