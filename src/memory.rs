use crate::maze::{Action, Pos};

/// A single step of an episode as seen by an agent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exp {
    /// The state the action was taken in
    pub state: Pos,
    /// The action taken
    pub action: Action,
    /// The reward received for arriving in the next state
    pub reward: f64,
}

/// The ordered trace of one episode, owned by the agent that produced it
#[derive(Debug, Clone, Default)]
pub struct EpisodeMemory {
    trace: Vec<Exp>,
}

impl EpisodeMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step to the end of the trace
    pub fn push(&mut self, state: Pos, action: Action, reward: f64) {
        self.trace.push(Exp {
            state,
            action,
            reward,
        });
    }

    /// Forget the trace, ready for a new episode
    pub fn clear(&mut self) {
        self.trace.clear();
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// The trace in chronological order
    pub fn view(&self) -> &[Exp] {
        &self.trace
    }

    /// Undiscounted sum of the rewards in the trace
    pub fn total_reward(&self) -> f64 {
        self.trace.iter().map(|e| e.reward).sum()
    }
}
