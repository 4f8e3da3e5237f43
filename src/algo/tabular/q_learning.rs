use rand::Rng;

use crate::{
    agent::Agent,
    assert_interval,
    decay::{self, Decay},
    ds::QTable,
    env::Environment,
    exploration::EpsilonGreedy,
    maze::{Action, Pos},
};

/// Configuration for the [`QLearningAgent`]
#[derive(Debug, Clone)]
pub struct QLearningAgentConfig<D: Decay> {
    pub exploration: EpsilonGreedy<D>,
    pub alpha: f64,
    pub gamma: f64,
}

impl Default for QLearningAgentConfig<decay::Constant> {
    fn default() -> Self {
        Self {
            exploration: EpsilonGreedy::new(decay::Constant::new(0.1)),
            alpha: 0.8,
            gamma: 0.9,
        }
    }
}

/// A simple Q-learning agent that utilizes a Q-table to learn its environment
///
/// Acts epsilon-greedily and updates toward the greedy one-step target after every step.
#[derive(Debug, Clone)]
pub struct QLearningAgent<D: Decay> {
    q_table: QTable,
    exploration: EpsilonGreedy<D>,
    alpha: f64,   // learning rate
    gamma: f64,   // discount factor
    episode: u32, // current episode
}

impl<D: Decay> QLearningAgent<D> {
    /// Initialize a new `QLearningAgent`
    ///
    /// **Panics** if `alpha` or `gamma` is not in the interval `[0,1]`
    pub fn new(config: QLearningAgentConfig<D>) -> Self {
        assert_interval!(config.alpha, 0.0, 1.0);
        assert_interval!(config.gamma, 0.0, 1.0);
        Self {
            q_table: QTable::new(),
            exploration: config.exploration,
            alpha: config.alpha,
            gamma: config.gamma,
            episode: 0,
        }
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Learn from a single transition
    pub fn learn(&mut self, state: Pos, action: Action, reward: f64, next_state: Pos, done: bool) {
        let max_next_q = if done {
            0.0
        } else {
            self.q_table.max_value(next_state)
        };
        let target = reward + self.gamma * max_next_q;
        self.q_table.nudge((state, action), target, self.alpha);
    }
}

impl<D: Decay> Agent for QLearningAgent<D> {
    fn act<R: Rng + ?Sized>(&self, state: Pos, rng: &mut R) -> Action {
        self.exploration.choose(&self.q_table, state, self.episode, rng)
    }

    fn reset(&mut self) {}

    fn go<E, R>(&mut self, env: &mut E, rng: &mut R)
    where
        E: Environment<State = Pos, Action = Action>,
        R: Rng + ?Sized,
    {
        let mut state = env.reset();
        let mut steps = 0;
        loop {
            let action = self.act(state, rng);
            let (next_state, reward, done) = env.step(action);
            self.learn(state, action, reward, next_state, done);
            steps += 1;
            if done {
                break;
            }
            state = next_state;
        }

        log::debug!("Episode {} finished after {steps} steps", self.episode);
        self.episode += 1;
    }
}
