use strum::{Display, FromRepr};

/// Position in the maze as `(row, col)`, 0-indexed from the top left cell
pub type Pos = (usize, usize);

/// The four moves available in every cell of the maze
///
/// The discriminant doubles as the action's index into probability and value arrays.
#[derive(FromRepr, Display, Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[strum(serialize_all = "UPPERCASE")]
#[repr(usize)]
pub enum Action {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Action {
    /// Number of actions
    pub const COUNT: usize = 4;

    /// Every action, in index order
    pub const ALL: [Action; Action::COUNT] =
        [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Index of the action in `0..Action::COUNT`
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row and column displacement of the move
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }

    /// Apply the move to `pos`, or `None` if it would leave the first quadrant
    pub fn apply(self, pos: Pos) -> Option<Pos> {
        let (dr, dc) = self.delta();
        Some((pos.0.checked_add_signed(dr)?, pos.1.checked_add_signed(dc)?))
    }
}
