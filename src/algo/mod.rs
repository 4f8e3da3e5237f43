pub mod tabular;

pub use tabular::{
    greedy_rollout, McOffPolicyAgent, McOnPolicyAgent, QLearningAgent, Rollout, TdLambdaAgent,
};
