use thiserror::Error;

use crate::maze::{Action, Pos};

/// Errors raised while building a maze or one of its supporting schedules
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    /// The direction table has no rows, or its first row has no cells
    #[error("Maze must have at least one row and one column")]
    EmptyGrid,

    /// A row's length differs from the first row's length
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell lists a direction index outside `0..=3`
    #[error("Cell {pos:?} lists invalid direction {direction}")]
    InvalidDirection { pos: Pos, direction: usize },

    /// A cell allows a move that would leave the grid
    #[error("Cell {pos:?} allows {action} which leads off the grid")]
    LeavesGrid { pos: Pos, action: Action },

    /// A designated state lies outside the grid
    #[error("The {name} state {pos:?} is outside the grid")]
    OutOfBounds { name: &'static str, pos: Pos },

    /// Goal and end must be distinct terminal outcomes
    #[error("Goal and end states must differ, both are {0:?}")]
    GoalIsEnd(Pos),

    /// A decay schedule was given inconsistent parameters
    #[error("Invalid decay schedule: {0}")]
    InvalidDecay(&'static str),
}
