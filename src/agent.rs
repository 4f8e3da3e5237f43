use rand::Rng;

use crate::{
    env::Environment,
    maze::{Action, Pos},
};

/// A tabular learner acting in a maze-like environment
pub trait Agent {
    /// Choose an action at `state`
    fn act<R: Rng + ?Sized>(&self, state: Pos, rng: &mut R) -> Action;

    /// Forget the current episode's memory, keeping everything learned
    fn reset(&mut self);

    /// Run one full episode in `env`, learning along the way
    fn go<E, R>(&mut self, env: &mut E, rng: &mut R)
    where
        E: Environment<State = Pos, Action = Action>,
        R: Rng + ?Sized;
}

/// Run `episodes` episodes of `agent` in `env`
pub fn train<A, E, R>(agent: &mut A, env: &mut E, episodes: u32, rng: &mut R)
where
    A: Agent,
    E: Environment<State = Pos, Action = Action>,
    R: Rng + ?Sized,
{
    for episode in 0..episodes {
        agent.go(env, rng);
        if (episode + 1) % 100 == 0 {
            log::info!("Finished {} of {episodes} episodes", episode + 1);
        }
    }
}
