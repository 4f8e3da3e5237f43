use crate::{
    env::{DiscreteActionSpace, DiscreteStateSpace, Environment, Report},
    error::MazeError,
};

use super::{Action, MazeConfig, Pos};

/// Reward for reaching the goal
pub const GOAL_REWARD: f64 = 10.0;
/// Reward for reaching the failure cell
pub const END_REWARD: f64 = -10.0;
/// Reward for every other move, including bouncing off a wall
pub const STEP_REWARD: f64 = -1.0;

/// A rectangular maze whose walls are encoded by a per-cell set of allowed moves
///
/// Requesting a move outside a cell's allowed set leaves the agent where it is.
/// An episode ends as soon as the agent enters the goal or the end (failure) cell.
#[derive(Debug, Clone)]
pub struct MazeWorld {
    height: usize,
    width: usize,
    /// Row-major, indexed by [`Action::index`]
    allowed: Vec<[bool; Action::COUNT]>,
    start: Pos,
    goal: Pos,
    end: Pos,
    current: Pos,
    pub report: Report,
}

impl MazeWorld {
    /// Build a maze from a validated configuration
    ///
    /// **Errors** if the direction table is empty or ragged, lists an unknown direction or
    /// a move that leaves the grid, or if a designated state is out of bounds or goal equals end.
    pub fn new(config: MazeConfig) -> Result<Self, MazeError> {
        let MazeConfig {
            start,
            goal,
            end,
            directions,
        } = config;

        let height = directions.len();
        let width = directions.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MazeError::EmptyGrid);
        }

        let mut allowed = Vec::with_capacity(height * width);
        for (row, cells) in directions.iter().enumerate() {
            if cells.len() != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }

            for (col, dirs) in cells.iter().enumerate() {
                let pos = (row, col);
                let mut mask = [false; Action::COUNT];
                for &direction in dirs {
                    let action = Action::from_repr(direction)
                        .ok_or(MazeError::InvalidDirection { pos, direction })?;
                    match action.apply(pos) {
                        Some((r, c)) if r < height && c < width => mask[direction] = true,
                        _ => return Err(MazeError::LeavesGrid { pos, action }),
                    }
                }
                allowed.push(mask);
            }
        }

        for (name, pos) in [("start", start), ("goal", goal), ("end", end)] {
            if pos.0 >= height || pos.1 >= width {
                return Err(MazeError::OutOfBounds { name, pos });
            }
        }
        if goal == end {
            return Err(MazeError::GoalIsEnd(goal));
        }

        Ok(Self {
            height,
            width,
            allowed,
            start,
            goal,
            end,
            current: start,
            report: Report::new(vec!["steps", "reward"]),
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub fn end(&self) -> Pos {
        self.end
    }

    /// The agent's current position
    pub fn current(&self) -> Pos {
        self.current
    }

    /// Whether `state` ends an episode
    pub fn is_terminal(&self, state: Pos) -> bool {
        state == self.goal || state == self.end
    }

    /// Whether `state` lies on the grid
    pub fn contains(&self, state: Pos) -> bool {
        state.0 < self.height && state.1 < self.width
    }

    /// Whether `action` physically moves the agent out of `state`
    ///
    /// Nothing is allowed from a state off the grid.
    pub fn is_allowed(&self, state: Pos, action: Action) -> bool {
        self.contains(state) && self.allowed[state.0 * self.width + state.1][action.index()]
    }

    /// The moves permitted from `state`, in index order
    pub fn allowed(&self, state: Pos) -> impl Iterator<Item = Action> + '_ {
        Action::ALL
            .into_iter()
            .filter(move |&a| self.is_allowed(state, a))
    }

    /// Deterministic transition function
    pub fn next_state(&self, state: Pos, action: Action) -> Pos {
        if self.is_allowed(state, action) {
            // construction rejects moves that leave the grid
            action.apply(state).unwrap_or(state)
        } else {
            state
        }
    }

    /// Reward for arriving in `next_state`
    pub fn reward(&self, next_state: Pos) -> f64 {
        if next_state == self.goal {
            GOAL_REWARD
        } else if next_state == self.end {
            END_REWARD
        } else {
            STEP_REWARD
        }
    }
}

impl Default for MazeWorld {
    fn default() -> Self {
        Self::new(MazeConfig::default()).expect("Default maze config is valid")
    }
}

impl Environment for MazeWorld {
    type State = Pos;
    type Action = Action;

    fn step(&mut self, action: Self::Action) -> (Self::State, f64, bool) {
        let next_state = self.next_state(self.current, action);
        if next_state == self.current {
            log::trace!("{action} from {:?} blocked", self.current);
        }

        let reward = self.reward(next_state);
        let done = self.is_terminal(next_state);
        self.current = next_state;

        self.report.entry("steps").and_modify(|x| *x += 1.0);
        self.report.entry("reward").and_modify(|x| *x += reward);

        (next_state, reward, done)
    }

    fn reset(&mut self) -> Self::State {
        self.current = self.start;
        self.current
    }
}

impl DiscreteActionSpace for MazeWorld {
    fn actions(&self) -> Vec<Self::Action> {
        Action::ALL.to_vec()
    }
}

impl DiscreteStateSpace for MazeWorld {
    fn states(&self) -> impl Iterator<Item = Self::State> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| (row, col)))
    }
}
