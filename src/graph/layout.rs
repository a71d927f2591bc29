// src/graph/layout.rs

//! Wrapped-grid placement by sorted position.
//!
//! Placement ignores dependencies entirely: the k-th step lands in column
//! `k % columns` of row `k / columns`. Cyclic or disconnected declarations
//! therefore still produce a legible, overlap-free diagram.

use serde::Serialize;

use crate::config::LayoutSection;
use crate::graph::step::{Step, StepId};

/// Column/row of a step in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub column: u32,
    pub row: u32,
}

/// Top-left corner of a node box in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub step_id: StepId,
    pub cell: GridCell,
    pub position: Position,
}

/// Grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    columns: u32,
    h_spacing: u32,
    v_spacing: u32,
    margin: u32,
}

impl GridLayout {
    /// A zero column count is clamped to one.
    pub fn new(columns: u32, h_spacing: u32, v_spacing: u32, margin: u32) -> Self {
        Self {
            columns: columns.max(1),
            h_spacing,
            v_spacing,
            margin,
        }
    }

    pub fn from_config(layout: &LayoutSection) -> Self {
        Self::new(layout.columns, layout.h_spacing, layout.v_spacing, layout.margin)
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Cell for the step at sorted index `index`.
    pub fn cell(&self, index: usize) -> GridCell {
        let columns = self.columns as usize;
        GridCell {
            column: (index % columns) as u32,
            row: (index / columns) as u32,
        }
    }

    pub fn position_of(&self, cell: GridCell) -> Position {
        let x = u64::from(cell.column) * u64::from(self.h_spacing) + u64::from(self.margin);
        let y = u64::from(cell.row) * u64::from(self.v_spacing) + u64::from(self.margin);
        Position {
            x: x as f64,
            y: y as f64,
        }
    }

    /// Place every step of an already-sorted slice.
    pub fn allocate(&self, sorted: &[Step]) -> Vec<Placement> {
        sorted
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let cell = self.cell(index);
                Placement {
                    step_id: step.id,
                    cell,
                    position: self.position_of(cell),
                }
            })
            .collect()
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::from_config(&LayoutSection::default())
    }
}
