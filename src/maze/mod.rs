mod action;
mod config;
mod world;

pub use action::{Action, Pos};
pub use config::MazeConfig;
pub use world::{MazeWorld, END_REWARD, GOAL_REWARD, STEP_REWARD};
