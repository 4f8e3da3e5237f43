use rand::Rng;

use crate::{
    agent::Agent,
    assert_interval,
    ds::{PolicyTable, VTable},
    env::Environment,
    exploration::sample_action,
    maze::{Action, Pos},
};

/// Configuration for the [`TdLambdaAgent`]
#[derive(Debug, Clone)]
pub struct TdLambdaAgentConfig {
    /// Discount factor
    pub gamma: f64,
    /// Step size of the state value update
    pub alpha: f64,
    /// Weight decay between successive look-ahead horizons
    pub lambda: f64,
    /// The policy being evaluated, uniformly random unless specified
    pub policy: PolicyTable,
    /// Give the longest return the remaining weight on the final step of an episode
    pub truncate_at_end: bool,
}

impl Default for TdLambdaAgentConfig {
    fn default() -> Self {
        Self {
            gamma: 0.9,
            alpha: 0.01,
            lambda: 0.9,
            policy: PolicyTable::new(),
            truncate_at_end: false,
        }
    }
}

/// Online n-step / lambda temporal difference prediction of state values
///
/// Every transition appends its reward and recomputes the n-step return for the number of
/// steps taken so far, folding the rewards from newest to oldest onto a bootstrap from the
/// current value of the next state. The update target then blends every return computed this
/// episode, the shortest weighted by `1`, the next by `lambda` and so on, scaled by
/// `1 - lambda`. Values are updated at each step rather than at the end of the episode, so
/// earlier returns were bootstrapped from older estimates.
///
/// With `truncate_at_end` set, the step that ends the episode gives its longest (complete)
/// return the leftover weight `lambda^(n-1)` in place of `(1 - lambda) * lambda^(n-1)`,
/// which turns the target into the Monte Carlo return when `lambda = 1`.
#[derive(Debug, Clone)]
pub struct TdLambdaAgent {
    v_table: VTable,
    pi: PolicyTable,
    rewards: Vec<f64>,
    returns: Vec<f64>,
    gamma: f64,
    alpha: f64,
    lambda: f64,
    truncate_at_end: bool,
    episode: u32,
}

impl TdLambdaAgent {
    /// Initialize a new `TdLambdaAgent`
    ///
    /// **Panics** if `gamma`, `alpha` or `lambda` is not in the interval `[0,1]`
    pub fn new(config: TdLambdaAgentConfig) -> Self {
        assert_interval!(config.gamma, 0.0, 1.0);
        assert_interval!(config.alpha, 0.0, 1.0);
        assert_interval!(config.lambda, 0.0, 1.0);
        Self {
            v_table: VTable::new(),
            pi: config.policy,
            rewards: Vec::new(),
            returns: Vec::new(),
            gamma: config.gamma,
            alpha: config.alpha,
            lambda: config.lambda,
            truncate_at_end: config.truncate_at_end,
            episode: 0,
        }
    }

    pub fn v_table(&self) -> &VTable {
        &self.v_table
    }

    pub fn policy(&self) -> &PolicyTable {
        &self.pi
    }

    /// Rewards received so far this episode, oldest first
    pub fn rewards(&self) -> &[f64] {
        &self.rewards
    }

    /// The n-step return computed at each step of this episode, shortest horizon first
    pub fn returns(&self) -> &[f64] {
        &self.returns
    }

    /// Learn from one transition of the current episode
    ///
    /// **Returns** the blended target `V[state]` was moved toward
    pub fn eval(&mut self, state: Pos, reward: f64, next_state: Pos, done: bool) -> f64 {
        self.rewards.push(reward);

        let bootstrap = if done {
            0.0
        } else {
            self.v_table.get(next_state)
        };
        let n_step_return = self
            .rewards
            .iter()
            .rev()
            .fold(bootstrap, |g, &r| g * self.gamma + r);
        self.returns.push(n_step_return);

        let target = self.blend(done);
        let value = self.v_table.nudge(state, target, self.alpha);
        log::trace!(
            "V[{state:?}] <- {value:.4} (n = {}, target = {target:.4})",
            self.returns.len()
        );

        target
    }

    /// Lambda-weighted combination of this episode's n-step returns
    fn blend(&self, done: bool) -> f64 {
        let lambda = self.lambda;
        let fold = |returns: &[f64]| returns.iter().rev().fold(0.0, |acc, &g| acc * lambda + g);

        match self.returns.split_last() {
            Some((&longest, shorter)) if done && self.truncate_at_end => {
                (1.0 - lambda) * fold(shorter) + lambda.powi(shorter.len() as i32) * longest
            }
            _ => (1.0 - lambda) * fold(&self.returns),
        }
    }
}

impl Default for TdLambdaAgent {
    fn default() -> Self {
        Self::new(TdLambdaAgentConfig::default())
    }
}

impl Agent for TdLambdaAgent {
    /// Sample from the evaluated policy
    fn act<R: Rng + ?Sized>(&self, state: Pos, rng: &mut R) -> Action {
        sample_action(&self.pi.get(state), rng)
    }

    fn reset(&mut self) {
        self.rewards.clear();
        self.returns.clear();
    }

    fn go<E, R>(&mut self, env: &mut E, rng: &mut R)
    where
        E: Environment<State = Pos, Action = Action>,
        R: Rng + ?Sized,
    {
        self.reset();
        let start = env.reset();
        let mut state = start;
        loop {
            let action = self.act(state, rng);
            let (next_state, reward, done) = env.step(action);
            self.eval(state, reward, next_state, done);
            if done {
                break;
            }
            state = next_state;
        }

        log::debug!(
            "Episode {} finished after {} steps, V[{start:?}] = {:.4}",
            self.episode,
            self.rewards.len(),
            self.v_table.get(start),
        );
        self.episode += 1;
    }
}
