use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which of the two step shapes the host view is currently showing.
///
/// - `Template`: design-time workflow templates (no status).
/// - `Execution`: run-time task instances carrying a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Template,
    Execution,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Template => "template",
            ViewMode::Execution => "execution",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "template" => Ok(ViewMode::Template),
            "execution" => Ok(ViewMode::Execution),
            other => Err(format!(
                "invalid mode: {other} (expected \"template\" or \"execution\")"
            )),
        }
    }
}

/// Kind of an edge in the rendered graph.
///
/// Declared dependency types arrive as open strings from the backend and are
/// folded into the first three variants by [`DependencyKind::from_declared`];
/// `Sequential` is only ever produced for synthetic fallback edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    Blocking,
    Soft,
    Parallel,
    Sequential,
}

impl DependencyKind {
    /// Map a backend-supplied dependency type to a kind.
    ///
    /// Unrecognized values become `Parallel`, the least alarming rendering.
    /// `"sequential"` is not a declarable type and is treated the same way.
    pub fn from_declared(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "blocking" => DependencyKind::Blocking,
            "soft" => DependencyKind::Soft,
            _ => DependencyKind::Parallel,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyKind::Blocking => "blocking",
            DependencyKind::Soft => "soft",
            DependencyKind::Parallel => "parallel",
            DependencyKind::Sequential => "sequential",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, DependencyKind::Sequential)
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
