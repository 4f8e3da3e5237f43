use std::{error::Error, fs, path::Path};

use maze_rl::{
    agent::Agent,
    algo::{greedy_rollout, tabular::QLearningAgentConfig, QLearningAgent},
    decay,
    exploration::EpsilonGreedy,
    maze::{MazeConfig, MazeWorld},
};

const NUM_EPISODES: u32 = 1000;

fn main() -> Result<(), Box<dyn Error>> {
    let path = Path::new("demos/q_learning_maze");

    let mut env = MazeWorld::new(MazeConfig::default())?;
    let config = QLearningAgentConfig {
        exploration: EpsilonGreedy::new(decay::Exponential::new(5e-3, 1.0, 0.05)?),
        alpha: 0.8,
        gamma: 0.9,
    };
    let mut agent = QLearningAgent::new(config);
    let mut rng = rand::thread_rng();

    fs::create_dir_all(path.join("out"))?;

    let mut wtr = csv::Writer::from_path(path.join("out/data.csv"))?;
    wtr.write_record(["episode", "steps", "reward"])?;

    for i in 0..NUM_EPISODES {
        agent.go(&mut env, &mut rng);
        let report = env.report.take();
        wtr.write_record(&[
            i.to_string(),
            report["steps"].to_string(),
            report["reward"].to_string(),
        ])?;
    }

    wtr.flush()?;

    let rollout = greedy_rollout(&env, agent.q_table(), 50);
    println!("Greedy path: {:?}", rollout.path);
    println!("Reached goal: {}", rollout.reached_goal);

    Ok(())
}
