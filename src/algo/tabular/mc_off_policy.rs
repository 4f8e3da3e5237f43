use rand::Rng;

use crate::{
    agent::Agent,
    assert_interval,
    ds::{PolicyTable, QTable},
    env::Environment,
    exploration::{epsilon_greedy_probs, sample_action},
    maze::{Action, Pos},
    memory::{EpisodeMemory, Exp},
};

/// Configuration for the [`McOffPolicyAgent`]
#[derive(Debug, Clone)]
pub struct McOffPolicyAgentConfig {
    /// Discount factor
    pub gamma: f64,
    /// Exploration rate of the behavior policy
    pub epsilon: f64,
    /// Constant step size of the action value update
    pub alpha: f64,
    /// Cut an episode off after this many steps and learn from the partial trace
    ///
    /// The behavior policy can keep bouncing off a wall for millions of steps before
    /// exploration frees it, and the whole trace is held in memory until the episode ends.
    pub max_steps: Option<usize>,
}

impl Default for McOffPolicyAgentConfig {
    fn default() -> Self {
        Self {
            gamma: 0.9,
            epsilon: 0.05,
            alpha: 0.2,
            max_steps: None,
        }
    }
}

/// Off-policy Monte Carlo control with importance sampling
///
/// The agent acts under an epsilon-soft behavior policy `b` while learning the action values of
/// the greedy target policy `pi`. At the end of every episode the trace is replayed backwards;
/// the importance sampling ratio `rho` discounts the part of the return that the target policy
/// would not have produced, and both policies are re-derived from the freshly updated values.
#[derive(Debug, Clone)]
pub struct McOffPolicyAgent {
    q_table: QTable,
    pi: PolicyTable,
    b: PolicyTable,
    memory: EpisodeMemory,
    gamma: f64,
    epsilon: f64,
    alpha: f64,
    max_steps: Option<usize>,
    episode: u32,
}

impl McOffPolicyAgent {
    /// Initialize a new `McOffPolicyAgent`
    ///
    /// **Panics** if `gamma`, `epsilon` or `alpha` is not in the interval `[0,1]`
    pub fn new(config: McOffPolicyAgentConfig) -> Self {
        assert_interval!(config.gamma, 0.0, 1.0);
        assert_interval!(config.epsilon, 0.0, 1.0);
        assert_interval!(config.alpha, 0.0, 1.0);
        Self {
            q_table: QTable::new(),
            pi: PolicyTable::new(),
            b: PolicyTable::new(),
            memory: EpisodeMemory::new(),
            gamma: config.gamma,
            epsilon: config.epsilon,
            alpha: config.alpha,
            max_steps: config.max_steps,
            episode: 0,
        }
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// The greedy policy being learned
    pub fn target_policy(&self) -> &PolicyTable {
        &self.pi
    }

    /// The epsilon-soft policy used to act
    pub fn behavior_policy(&self) -> &PolicyTable {
        &self.b
    }

    /// The trace of the current episode
    pub fn memory(&self) -> &EpisodeMemory {
        &self.memory
    }

    /// Record a step of the current episode
    pub fn add(&mut self, state: Pos, action: Action, reward: f64) {
        self.memory.push(state, action, reward);
    }

    /// Replay the episode trace backwards, updating action values and both policies
    ///
    /// The ratio is a running product and can grow without bound on long traces. Once the
    /// weighted return overflows (or its distance to the stored value does), the remaining
    /// earlier steps are skipped so the table stays finite.
    ///
    /// **Returns** the importance sampling ratio after the trace was processed
    pub fn update(&mut self) -> f64 {
        let mut g = 0.0;
        let mut rho = 1.0;

        for (i, &Exp {
            state,
            action,
            reward,
        }) in self.memory.view().iter().enumerate().rev()
        {
            g = self.gamma * rho * g + reward;
            if !(g - self.q_table.get((state, action))).is_finite() {
                log::warn!(
                    "Return overflowed at step {i} of episode {}, skipping the rest of the trace",
                    self.episode
                );
                break;
            }
            let q = self.q_table.nudge((state, action), g, self.alpha);
            log::trace!("Q[{state:?}, {action}] <- {q:.4} (G = {g:.4}, rho = {rho:.4})");

            let pi = epsilon_greedy_probs(&self.q_table, state, 0.0);
            let b = epsilon_greedy_probs(&self.q_table, state, self.epsilon);
            rho *= importance_ratio(pi[action.index()], b[action.index()]);

            self.pi.set(state, pi);
            self.b.set(state, b);
        }

        rho
    }
}

/// Ratio of target to behavior probability for one step
///
/// A step the behavior policy could not have taken contributes nothing.
fn importance_ratio(target: f64, behavior: f64) -> f64 {
    if behavior > 0.0 {
        target / behavior
    } else {
        0.0
    }
}

impl Default for McOffPolicyAgent {
    fn default() -> Self {
        Self::new(McOffPolicyAgentConfig::default())
    }
}

impl Agent for McOffPolicyAgent {
    /// Sample from the behavior policy
    fn act<R: Rng + ?Sized>(&self, state: Pos, rng: &mut R) -> Action {
        sample_action(&self.b.get(state), rng)
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
            if self.max_steps.is_some_and(|n| self.memory.len() >= n) {
                log::warn!("Episode {} cut off after {} steps", self.episode, self.memory.len());
                break;
            }
            state = next_state;
        }

        let rho = self.update();
        log::debug!(
            "Episode {} finished after {} steps with reward {}, final rho {rho:.4}",
            self.episode,
            self.memory.len(),
            self.memory.total_reward(),
        );
        self.episode += 1;
    }
}
