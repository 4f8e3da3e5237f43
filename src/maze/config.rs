use super::Pos;

/// Configuration for a [`MazeWorld`](super::MazeWorld)
///
/// `directions[row][col]` lists the action indices (`0` up, `1` down, `2` left, `3` right)
/// through which the agent can leave that cell. A wall sits between two neighbouring
/// cells when neither lists the direction pointing at the other.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    pub start: Pos,
    pub goal: Pos,
    pub end: Pos,
    pub directions: Vec<Vec<Vec<usize>>>,
}

impl Default for MazeConfig {
    /// A 4x4 maze with a single failure cell in the middle of the grid
    fn default() -> Self {
        Self {
            start: (0, 2),
            goal: (3, 3),
            end: (2, 1),
            directions: vec![
                vec![vec![1, 3], vec![2, 3], vec![1, 2, 3], vec![2]],
                vec![vec![0, 1], vec![3], vec![0, 2], vec![1]],
                vec![vec![0, 1, 3], vec![1, 2, 3], vec![1, 2, 3], vec![0, 1, 2]],
                vec![vec![0, 3], vec![0, 2, 3], vec![0, 2], vec![0]],
            ],
        }
    }
}
