use rand::{rngs::StdRng, SeedableRng};

use maze_rl::{
    agent::{train, Agent},
    algo::{
        greedy_rollout,
        tabular::{McOnPolicyAgentConfig, QLearningAgentConfig, TdLambdaAgentConfig},
        McOffPolicyAgent, McOnPolicyAgent, QLearningAgent, TdLambdaAgent,
    },
    decay::Constant,
    env::{DiscreteStateSpace, Environment},
    maze::{Action, MazeConfig, MazeWorld},
};

/// Two rows; the goal sits at the end of the top row and the failure cell below its middle
fn ledge() -> MazeWorld {
    MazeWorld::new(MazeConfig {
        start: (0, 0),
        goal: (0, 2),
        end: (1, 1),
        directions: vec![
            vec![vec![3], vec![1, 2, 3], vec![2]],
            vec![vec![3], vec![0, 2], vec![2]],
        ],
    })
    .unwrap()
}

#[test]
fn q_learning_solves_default_maze() {
    let mut env = MazeWorld::default();
    let mut agent = QLearningAgent::new(QLearningAgentConfig::<Constant>::default());
    let mut rng = StdRng::seed_from_u64(7);
    train(&mut agent, &mut env, 1000, &mut rng);

    let rollout = greedy_rollout(&env, agent.q_table(), 50);
    assert!(rollout.reached_goal, "Greedy path {:?} reaches the goal", rollout.path);
    assert!(!rollout.path.contains(&env.end()), "Greedy path avoids the failure cell");
    assert_eq!(rollout.path[0], env.start());
}

#[test]
fn mc_off_policy_solves_default_maze() {
    let mut env = MazeWorld::default();
    let mut agent = McOffPolicyAgent::default();
    // convergence on this maze depends on the seed
    let mut rng = StdRng::seed_from_u64(0);
    train(&mut agent, &mut env, 1000, &mut rng);

    let rollout = greedy_rollout(&env, agent.q_table(), 50);
    assert!(rollout.reached_goal, "Greedy path {:?} reaches the goal", rollout.path);
    assert!(!rollout.path.contains(&env.end()), "Greedy path avoids the failure cell");
    assert_eq!(
        rollout.path,
        [
            (0, 2),
            (0, 1),
            (0, 0),
            (1, 0),
            (2, 0),
            (3, 0),
            (3, 1),
            (3, 2),
            (2, 2),
            (2, 3),
            (3, 3),
        ],
        "Shortest path around the failure cell"
    );
    assert!(agent.q_table().iter().all(|(_, q)| q.is_finite()), "Action values stay finite");
}

#[test]
fn mc_off_policy_solves_ledge() {
    let mut env = ledge();
    let mut agent = McOffPolicyAgent::default();
    let mut rng = StdRng::seed_from_u64(11);
    train(&mut agent, &mut env, 1000, &mut rng);

    assert_eq!(
        agent.target_policy().greedy_action((0, 1)),
        Action::Right,
        "Next to the goal the target policy steps into it"
    );
    let rollout = greedy_rollout(&env, agent.q_table(), 20);
    assert_eq!(rollout.path, [(0, 0), (0, 1), (0, 2)], "Shortest path");
    assert!(rollout.reached_goal);
}

#[test]
fn mc_off_policy_tables_stay_well_formed() {
    let mut env = MazeWorld::default();
    let mut agent = McOffPolicyAgent::default();
    let mut rng = StdRng::seed_from_u64(0);
    train(&mut agent, &mut env, 10, &mut rng);

    for ((state, _), q) in agent.q_table().iter() {
        assert!(q.is_finite(), "Q at {state:?} is finite");
        assert!(!env.is_terminal(state), "Terminal states are never updated");
    }
    for (state, pi) in agent.target_policy().iter() {
        assert_eq!(pi.iter().filter(|&&p| p == 1.0).count(), 1, "Greedy at {state:?}");
        let b = agent.behavior_policy().get(state);
        assert!((b.iter().sum::<f64>() - 1.0).abs() < 1e-9, "Behavior sums to 1");
        assert!(b.iter().all(|&p| p >= 0.05 / 4.0 - 1e-12), "Behavior stays soft");
    }
}

#[test]
fn mc_on_policy_prefers_goal_from_neighbour() {
    let mut env = ledge();
    let mut agent = McOnPolicyAgent::new(McOnPolicyAgentConfig::<Constant>::default());
    let mut rng = StdRng::seed_from_u64(4);
    train(&mut agent, &mut env, 300, &mut rng);

    let q = agent.q_table();
    assert!(
        q.get(((0, 1), Action::Right)) > q.get(((0, 1), Action::Down)),
        "Goal beats the failure cell"
    );
    assert_eq!(agent.policy().greedy_action((0, 1)), Action::Right);
}

#[test]
fn td_lambda_values_track_rewards() {
    let mut env = ledge();
    let mut agent = TdLambdaAgent::new(TdLambdaAgentConfig {
        alpha: 0.1,
        lambda: 0.0,
        ..Default::default()
    });
    let mut rng = StdRng::seed_from_u64(9);
    train(&mut agent, &mut env, 200, &mut rng);

    let v = agent.v_table();
    for state in env.states().filter(|&s| env.is_terminal(s)) {
        assert_eq!(v.get(state), 0.0, "Terminal {state:?} never evaluated");
    }
    assert!(
        v.iter().all(|(_, value)| value.is_finite() && value.abs() <= 10.0),
        "One-step targets stay within the reward range"
    );
}

#[test]
fn reset_is_idempotent_for_every_agent() {
    let mut env = ledge();
    let mut rng = StdRng::seed_from_u64(1);

    let mut mc = McOffPolicyAgent::default();
    mc.go(&mut env, &mut rng);
    let q = mc.q_table().clone();
    mc.reset();
    mc.reset();
    assert!(mc.memory().is_empty());
    assert_eq!(mc.q_table(), &q);

    let mut td = TdLambdaAgent::default();
    td.go(&mut env, &mut rng);
    let v = td.v_table().clone();
    td.reset();
    td.reset();
    assert!(td.rewards().is_empty() && td.returns().is_empty());
    assert_eq!(td.v_table(), &v);

    assert_eq!(env.reset(), env.reset(), "Environment reset is idempotent");
}

#[test]
fn report_counts_every_step() {
    let mut env = ledge();
    let mut agent = McOffPolicyAgent::default();
    let mut rng = StdRng::seed_from_u64(6);
    env.report.clear();
    agent.go(&mut env, &mut rng);

    let report = env.report.take();
    assert_eq!(report["steps"], agent.memory().len() as f64);
    assert_eq!(report["reward"], agent.memory().total_reward());
    assert_eq!(env.report["steps"], 0.0, "Taken report starts over");
}
