use std::{error::Error, fs, path::Path};

use maze_rl::{
    agent::Agent,
    algo::{greedy_rollout, tabular::McOffPolicyAgentConfig, McOffPolicyAgent},
    env::DiscreteStateSpace,
    maze::{Action, MazeWorld},
};

const NUM_EPISODES: u32 = 1000;
const MAX_STEPS: usize = 1_000_000;

fn main() -> Result<(), Box<dyn Error>> {
    let path = Path::new("demos/mc_off_policy_maze");

    let mut env = MazeWorld::default();
    // a trace that keeps bouncing off a wall can otherwise grow to tens of millions of steps
    let mut agent = McOffPolicyAgent::new(McOffPolicyAgentConfig {
        max_steps: Some(MAX_STEPS),
        ..Default::default()
    });
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

    let q = agent.q_table();
    for state in env.states() {
        let values = Action::ALL
            .map(|a| format!("{a}: {:>8.3}", q.get((state, a))))
            .join("  ");
        println!("{state:?}  {values}");
    }

    let rollout = greedy_rollout(&env, q, 50);
    println!(
        "Greedy path {:?} {}",
        rollout.path,
        if rollout.reached_goal {
            "reaches the goal"
        } else {
            "does not reach the goal"
        }
    );

    Ok(())
}
