mod policy_table;
mod value_table;

pub use policy_table::{ActionProbs, PolicyTable, UNIFORM};
pub use value_table::{QTable, VTable, ValueTable};
