use std::{error::Error, fs, path::Path};

use maze_rl::{
    agent::Agent,
    algo::{tabular::TdLambdaAgentConfig, TdLambdaAgent},
    maze::MazeWorld,
};

const NUM_EPISODES: u32 = 5000;

fn main() -> Result<(), Box<dyn Error>> {
    let path = Path::new("demos/td_lambda_maze");

    let mut env = MazeWorld::default();
    let mut agent = TdLambdaAgent::new(TdLambdaAgentConfig::default());
    let mut rng = rand::thread_rng();

    fs::create_dir_all(path.join("out"))?;

    let mut wtr = csv::Writer::from_path(path.join("out/data.csv"))?;
    wtr.write_record(["episode", "steps", "start_value"])?;

    for i in 0..NUM_EPISODES {
        agent.go(&mut env, &mut rng);
        let report = env.report.take();
        wtr.write_record(&[
            i.to_string(),
            report["steps"].to_string(),
            agent.v_table().get(env.start()).to_string(),
        ])?;
    }

    wtr.flush()?;

    let v = agent.v_table();
    for row in 0..env.height() {
        let line = (0..env.width())
            .map(|col| format!("{:>8.3}", v.get((row, col))))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{line}");
    }

    Ok(())
}
