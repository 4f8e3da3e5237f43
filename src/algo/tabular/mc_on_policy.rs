use rand::Rng;

use crate::{
    agent::Agent,
    assert_interval,
    decay::{self, Decay},
    ds::{PolicyTable, QTable},
    env::Environment,
    exploration::{sample_action, EpsilonGreedy},
    maze::{Action, Pos},
    memory::{EpisodeMemory, Exp},
};

/// Configuration for the [`McOnPolicyAgent`]
#[derive(Debug, Clone)]
pub struct McOnPolicyAgentConfig<D: Decay> {
    pub exploration: EpsilonGreedy<D>,
    pub alpha: f64,
    pub gamma: f64,
}

impl Default for McOnPolicyAgentConfig<decay::Constant> {
    fn default() -> Self {
        Self {
            exploration: EpsilonGreedy::new(decay::Constant::new(0.1)),
            alpha: 0.1,
            gamma: 0.9,
        }
    }
}

/// On-policy Monte Carlo control with an epsilon-greedy policy
///
/// The policy that acts is the policy being improved: after each episode the discounted returns
/// are replayed backwards into the action values, and the policy at every visited state is
/// re-derived epsilon-greedily.
#[derive(Debug, Clone)]
pub struct McOnPolicyAgent<D: Decay> {
    q_table: QTable,
    pi: PolicyTable,
    memory: EpisodeMemory,
    exploration: EpsilonGreedy<D>,
    alpha: f64,
    gamma: f64,
    episode: u32,
}

impl<D: Decay> McOnPolicyAgent<D> {
    /// Initialize a new `McOnPolicyAgent`
    ///
    /// **Panics** if `alpha` or `gamma` is not in the interval `[0,1]`
    pub fn new(config: McOnPolicyAgentConfig<D>) -> Self {
        assert_interval!(config.alpha, 0.0, 1.0);
        assert_interval!(config.gamma, 0.0, 1.0);
        Self {
            q_table: QTable::new(),
            pi: PolicyTable::new(),
            memory: EpisodeMemory::new(),
            exploration: config.exploration,
            alpha: config.alpha,
            gamma: config.gamma,
            episode: 0,
        }
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    pub fn policy(&self) -> &PolicyTable {
        &self.pi
    }

    /// Record a step of the current episode
    pub fn add(&mut self, state: Pos, action: Action, reward: f64) {
        self.memory.push(state, action, reward);
    }

    /// Replay the episode trace backwards and improve the policy at every visited state
    pub fn update(&mut self) {
        let mut g = 0.0;
        for &Exp {
            state,
            action,
            reward,
        } in self.memory.view().iter().rev()
        {
            g = self.gamma * g + reward;
            self.q_table.nudge((state, action), g, self.alpha);
            let probs = self.exploration.probs(&self.q_table, state, self.episode);
            self.pi.set(state, probs);
        }
    }
}

impl<D: Decay> Agent for McOnPolicyAgent<D> {
    fn act<R: Rng + ?Sized>(&self, state: Pos, rng: &mut R) -> Action {
        sample_action(&self.pi.get(state), rng)
    }

    fn reset(&mut self) {
        self.memory.clear();
    }

    fn go<E, R>(&mut self, env: &mut E, rng: &mut R)
    where
        E: Environment<State = Pos, Action = Action>,
        R: Rng + ?Sized,
    {
        self.reset();
        let mut state = env.reset();
        loop {
            let action = self.act(state, rng);
            let (next_state, reward, done) = env.step(action);
            self.add(state, action, reward);
            if done {
                break;
            }
            state = next_state;
        }

        self.update();
        log::debug!(
            "Episode {} finished after {} steps with reward {}",
            self.episode,
            self.memory.len(),
            self.memory.total_reward(),
        );
        self.episode += 1;
    }
}
