use std::{
    collections::{btree_map::Entry, BTreeMap},
    ops::Index,
};

/// Represents a Markov decision process, defining the dynamics of an environment
/// in which an agent can operate.
///
/// This base trait represents the common case of a discrete-time, episodic MDP with one agent.
pub trait Environment {
    /// A representation of the state of the environment to be passed to an agent
    type State;

    /// A representation of an action that an agent can take to affect the environment
    type Action;

    /// Update the environment in response to an action taken by an agent
    ///
    /// **Returns** `(next_state, reward, done)`
    fn step(&mut self, action: Self::Action) -> (Self::State, f64, bool);

    /// Reset the environment to its initial state
    ///
    /// **Returns** the state
    fn reset(&mut self) -> Self::State;
}

/// An environment with a finite, fixed set of actions
pub trait DiscreteActionSpace: Environment {
    /// Get every action an agent may request
    fn actions(&self) -> Vec<Self::Action>;
}

/// An environment whose states can be enumerated
pub trait DiscreteStateSpace: Environment {
    /// Iterate over every state of the environment
    ///
    /// Each call yields a fresh iterator, so the enumeration can be restarted at will.
    fn states(&self) -> impl Iterator<Item = Self::State> + '_;
}

/// Named per-episode counters collected by an environment
#[derive(Debug, Clone, Default)]
pub struct Report {
    keys: Vec<&'static str>,
    values: BTreeMap<&'static str, f64>,
}

impl Report {
    /// Create a report with every key zeroed
    pub fn new(keys: Vec<&'static str>) -> Self {
        let values = keys.iter().map(|&k| (k, 0.0)).collect();
        Self { keys, values }
    }

    /// The keys in the order they were declared
    pub fn keys(&self) -> &[&'static str] {
        &self.keys
    }

    /// Access a counter for in-place modification
    pub fn entry(&mut self, key: &'static str) -> Entry<'_, &'static str, f64> {
        self.values.entry(key)
    }

    /// Drain the counters, leaving every key at zero
    pub fn take(&mut self) -> BTreeMap<&'static str, f64> {
        let fresh = self.keys.iter().map(|&k| (k, 0.0)).collect();
        std::mem::replace(&mut self.values, fresh)
    }

    /// Zero every counter
    pub fn clear(&mut self) {
        self.values.values_mut().for_each(|v| *v = 0.0);
    }
}

impl Index<&str> for Report {
    type Output = f64;

    fn index(&self, key: &str) -> &Self::Output {
        &self.values[key]
    }
}
