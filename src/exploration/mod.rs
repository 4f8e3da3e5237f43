use rand::{
    distributions::{Distribution, WeightedIndex},
    Rng,
};

use crate::{ds::ActionProbs, maze::Action};

mod epsilon_greedy;

pub use epsilon_greedy::{epsilon_greedy_probs, EpsilonGreedy};

/// Draw one item from an ordered list of `(item, probability)` pairs
///
/// **Panics** if a weight is negative or every weight is zero
pub fn sample<T: Copy, R: Rng + ?Sized>(choices: &[(T, f64)], rng: &mut R) -> T {
    let dist = WeightedIndex::new(choices.iter().map(|&(_, p)| p))
        .expect("Distribution has non-negative weights with a positive sum");
    choices[dist.sample(rng)].0
}

/// Draw an action from a policy's distribution at some state
pub fn sample_action<R: Rng + ?Sized>(probs: &ActionProbs, rng: &mut R) -> Action {
    let choices = Action::ALL.map(|a| (a, probs[a.index()]));
    sample(&choices, rng)
}
