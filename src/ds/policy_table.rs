use std::collections::HashMap;

use crate::{
    maze::{Action, Pos},
    util::argmax,
};

/// A probability for each action, indexed by [`Action::index`]
pub type ActionProbs = [f64; Action::COUNT];

/// Equal probability for every action
pub const UNIFORM: ActionProbs = [1.0 / Action::COUNT as f64; Action::COUNT];

/// A stochastic policy mapping each state to a distribution over the four actions
///
/// States that were never assigned a distribution follow [`UNIFORM`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyTable {
    probs: HashMap<Pos, ActionProbs>,
}

impl PolicyTable {
    /// A policy that is uniformly random in every state
    pub fn new() -> Self {
        Self::default()
    }

    /// The distribution over actions at `state`
    pub fn get(&self, state: Pos) -> ActionProbs {
        self.probs.get(&state).copied().unwrap_or(UNIFORM)
    }

    /// Probability of taking `action` at `state`
    pub fn prob(&self, state: Pos, action: Action) -> f64 {
        self.get(state)[action.index()]
    }

    /// Replace the distribution at `state`
    ///
    /// **Panics** in debug builds if `probs` has a negative entry or does not sum to 1
    pub fn set(&mut self, state: Pos, probs: ActionProbs) {
        debug_assert!(
            probs.iter().all(|&p| p >= 0.0),
            "Negative probability in {probs:?}"
        );
        debug_assert!(
            (probs.iter().sum::<f64>() - 1.0).abs() < 1e-9,
            "Probabilities {probs:?} do not sum to 1"
        );
        self.probs.insert(state, probs);
    }

    /// Most probable action at `state`, preferring the lowest index on ties
    pub fn greedy_action(&self, state: Pos) -> Action {
        Action::ALL[argmax(&self.get(state))]
    }

    /// Iterate over the explicitly assigned states in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, ActionProbs)> + '_ {
        self.probs.iter().map(|(&s, &p)| (s, p))
    }
}
