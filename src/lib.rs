// Least Metronomes - Library exports for the CLI, tests and consumers

pub mod rhythm;
pub mod solver;

// Re-export commonly used types for convenience
pub use rhythm::{Rhythm, RhythmError};
pub use solver::{Metronome, Solution, SolverError, mark_metronome_beats, metronome_works, solve};
