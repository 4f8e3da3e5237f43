use crate::{
    ds::QTable,
    maze::{Action, MazeWorld, Pos},
    util::argmax,
};

pub mod mc_off_policy;
pub mod mc_on_policy;
pub mod q_learning;
pub mod td_lambda;

pub use mc_off_policy::{McOffPolicyAgent, McOffPolicyAgentConfig};
pub use mc_on_policy::{McOnPolicyAgent, McOnPolicyAgentConfig};
pub use q_learning::{QLearningAgent, QLearningAgentConfig};
pub use td_lambda::{TdLambdaAgent, TdLambdaAgentConfig};

/// State and action types that can be used as keys in a [`HashMap`](std::collections::HashMap)
pub trait Hashable: Copy + Eq + std::hash::Hash {}

impl<T> Hashable for T where T: Copy + Eq + std::hash::Hash {}

/// The states visited by following a greedy policy from the start
#[derive(Debug, Clone, PartialEq)]
pub struct Rollout {
    /// Visited states, starting with the start state
    pub path: Vec<Pos>,
    /// Whether the walk ended in the goal
    pub reached_goal: bool,
}

/// Follow the fully greedy policy derived from `q` from the start of `env`
///
/// Stops at a terminal state or after `max_steps` moves, whichever comes first. The walk uses
/// the maze's transition function directly, so neither the agent position nor the episode
/// report of `env` is touched.
pub fn greedy_rollout(env: &MazeWorld, q: &QTable, max_steps: usize) -> Rollout {
    let mut state = env.start();
    let mut path = vec![state];

    for _ in 0..max_steps {
        if env.is_terminal(state) {
            break;
        }
        let action = Action::ALL[argmax(&q.action_values(state))];
        state = env.next_state(state, action);
        path.push(state);
    }

    Rollout {
        path,
        reached_goal: state == env.goal(),
    }
}
