/// Agent interface and training loop
pub mod agent;

/// Implemented RL algorithms
pub mod algo;

/// Implementations of strategies for time-decaying hyperparameters
pub mod decay;

/// Data structures
pub mod ds;

/// Environment
pub mod env;

/// Error types
pub mod error;

/// Exploration policies
pub mod exploration;

/// The walled grid maze
pub mod maze;

/// Episode memory
pub mod memory;

mod util;

pub use error::MazeError;
