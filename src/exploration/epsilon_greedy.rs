use rand::Rng;

use crate::{
    assert_interval,
    decay::Decay,
    ds::{ActionProbs, QTable},
    maze::{Action, Pos},
    util::argmax,
};

use super::sample_action;

/// Derive an epsilon-greedy distribution at `state` from action values
///
/// The highest valued action (lowest index on ties) receives `1 - epsilon + epsilon / 4`
/// and every other action `epsilon / 4`. With `epsilon = 0` the result is fully greedy,
/// with `epsilon = 1` it is uniform.
///
/// **Panics** if `epsilon` is not in the interval `[0,1]`
pub fn epsilon_greedy_probs(q: &QTable, state: Pos, epsilon: f64) -> ActionProbs {
    assert_interval!(epsilon, 0.0, 1.0);
    let best = argmax(&q.action_values(state));
    let mut probs = [epsilon / Action::COUNT as f64; Action::COUNT];
    probs[best] += 1.0 - epsilon;
    probs
}

/// Epsilon greedy exploration policy with time-decaying epsilon threshold
#[derive(Debug, Clone)]
pub struct EpsilonGreedy<D: Decay> {
    epsilon: D,
}

impl<D: Decay> EpsilonGreedy<D> {
    /// Initialize epsilon greedy policy with a decay strategy
    pub fn new(decay: D) -> Self {
        Self { epsilon: decay }
    }

    /// Exploration rate for the given episode, clamped to `[0,1]`
    pub fn epsilon(&self, episode: u32) -> f64 {
        self.epsilon.evaluate(episode as f64).clamp(0.0, 1.0)
    }

    /// Distribution over actions at `state` for the given episode
    pub fn probs(&self, q: &QTable, state: Pos, episode: u32) -> ActionProbs {
        epsilon_greedy_probs(q, state, self.epsilon(episode))
    }

    /// Invoke epsilon greedy policy at `state` for the given episode
    pub fn choose<R: Rng + ?Sized>(
        &self,
        q: &QTable,
        state: Pos,
        episode: u32,
        rng: &mut R,
    ) -> Action {
        sample_action(&self.probs(q, state, episode), rng)
    }
}

#[cfg(test)]
mod tests {
    use crate::decay;

    use super::*;

    fn table() -> QTable {
        let mut q = QTable::new();
        q.set(((0, 0), Action::Down), 1.0);
        q.set(((0, 0), Action::Right), 1.0);
        q.set(((0, 0), Action::Left), -4.0);
        q
    }

    #[test]
    fn greedy_when_epsilon_zero() {
        let probs = epsilon_greedy_probs(&table(), (0, 0), 0.0);
        assert_eq!(probs, [0.0, 1.0, 0.0, 0.0], "Tie resolved to lowest index");

        let probs = epsilon_greedy_probs(&QTable::new(), (1, 1), 0.0);
        assert_eq!(probs, [1.0, 0.0, 0.0, 0.0], "Unseen state favours Up");
    }

    #[test]
    fn uniform_when_epsilon_one() {
        let probs = epsilon_greedy_probs(&table(), (0, 0), 1.0);
        assert_eq!(probs, [0.25; 4], "Exactly uniform");
    }

    #[test]
    fn probabilities_sum_to_one() {
        for i in 0..=20 {
            let epsilon = i as f64 / 20.0;
            let probs = epsilon_greedy_probs(&table(), (0, 0), epsilon);
            let sum: f64 = probs.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "Sum {sum} for epsilon {epsilon}");
            assert!(
                (probs[1] - (1.0 - epsilon + epsilon / 4.0)).abs() < 1e-12,
                "Greedy mass for epsilon {epsilon}"
            );
            assert!(probs.iter().all(|&p| p >= 0.0), "Non-negative");
        }
    }

    #[test]
    #[should_panic]
    fn epsilon_out_of_range() {
        epsilon_greedy_probs(&table(), (0, 0), 1.5);
    }

    #[test]
    fn scheduled_epsilon() {
        let policy = EpsilonGreedy::new(decay::Linear::new(0.5, 1.0, 0.0).unwrap());
        assert_eq!(policy.probs(&table(), (0, 0), 0), [0.25; 4], "Uniform at start");
        assert_eq!(
            policy.probs(&table(), (0, 0), 2),
            [0.0, 1.0, 0.0, 0.0],
            "Greedy once epsilon decays"
        );
    }

    #[test]
    fn exponential_schedule_settles() {
        // the schedule the Q-learning maze demo trains with
        let policy = EpsilonGreedy::new(decay::Exponential::new(5e-3, 1.0, 0.05).unwrap());
        assert_eq!(policy.epsilon(0), 1.0, "Fully exploratory at start");

        let schedule = (0..2000).map(|ep| policy.epsilon(ep)).collect::<Vec<_>>();
        assert!(schedule.windows(2).all(|w| w[1] <= w[0]), "Epsilon never increases");
        assert!(schedule.iter().all(|&e| e >= 0.05), "Floor respected");
        let expected = 0.05 + 0.95 * f64::exp(-5.0);
        assert!(
            (policy.epsilon(1000) - expected).abs() < 1e-12,
            "Epsilon at episode 1000 is {expected}"
        );
    }

    #[test]
    fn flat_schedules() {
        let constant = EpsilonGreedy::new(decay::Constant::new(0.1));
        assert_eq!(constant.epsilon(0), constant.epsilon(10_000), "Constant rate");

        let flat = EpsilonGreedy::new(decay::Exponential::new(5e-3, 0.2, 0.2).unwrap());
        assert_eq!(flat.epsilon(0), 0.2, "Equal endpoints accepted");
        assert_eq!(flat.epsilon(500), 0.2, "Equal endpoints never move");

        let overshoot = EpsilonGreedy::new(decay::Constant::new(1.5));
        assert_eq!(overshoot.epsilon(0), 1.0, "Clamped to a probability");
    }
}
