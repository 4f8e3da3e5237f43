use std::collections::HashMap;

use crate::{
    algo::tabular::Hashable,
    maze::{Action, Pos},
};

/// A table of real values which reads `0.0` for any key never written
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTable<K: Hashable> {
    values: HashMap<K, f64>,
}

/// Action values, keyed by state and action
pub type QTable = ValueTable<(Pos, Action)>;

/// State values
pub type VTable = ValueTable<Pos>;

impl<K: Hashable> ValueTable<K> {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Value stored for `key`, or `0.0` if it was never written
    pub fn get(&self, key: K) -> f64 {
        self.values.get(&key).copied().unwrap_or_default()
    }

    /// Overwrite the value for `key`
    pub fn set(&mut self, key: K, value: f64) {
        self.values.insert(key, value);
    }

    /// Move the value for `key` a fraction `alpha` of the way toward `target`
    ///
    /// **Returns** the updated value
    pub fn nudge(&mut self, key: K, target: f64, alpha: f64) -> f64 {
        let value = self.values.entry(key).or_default();
        *value += alpha * (target - *value);
        *value
    }

    /// Number of keys written so far
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the written entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.values.iter().map(|(&k, &v)| (k, v))
    }
}

impl QTable {
    /// Values of all four actions at `state`, indexed by [`Action::index`]
    pub fn action_values(&self, state: Pos) -> [f64; Action::COUNT] {
        Action::ALL.map(|a| self.get((state, a)))
    }

    /// Largest action value at `state`
    pub fn max_value(&self, state: Pos) -> f64 {
        self.action_values(state)
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

impl<K: Hashable> Default for ValueTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_table_defaults_to_zero() {
        let mut v = VTable::new();
        assert_eq!(v.get((3, 3)), 0.0, "Unseen state reads zero");
        assert!(v.is_empty(), "Reading does not insert");

        assert_eq!(v.nudge((3, 3), 10.0, 0.5), 5.0, "Nudge moves halfway");
        assert_eq!(v.nudge((3, 3), 10.0, 0.5), 7.5, "Nudge is incremental");
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn q_table_action_values() {
        let mut q = QTable::new();
        q.set(((0, 0), Action::Left), 2.0);
        q.set(((0, 0), Action::Up), -1.0);
        assert_eq!(
            q.action_values((0, 0)),
            [-1.0, 0.0, 2.0, 0.0],
            "Values in action order"
        );
        assert_eq!(q.max_value((0, 0)), 2.0);
        assert_eq!(q.max_value((1, 1)), 0.0, "Unseen state max is zero");
    }
}
