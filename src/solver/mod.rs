// Solver module - Metronome candidates and the greedy coverage search

pub mod cover;
pub mod metronome;

pub use cover::{Solution, solve};
pub use metronome::{Metronome, mark_metronome_beats, metronome_works};

use thiserror::Error;

/// Solver-internal errors
///
/// An invalid candidate is a programming defect in candidate generation,
/// not a property of the input rhythm: the search loop never produces
/// one, but the helper operations still enforce their preconditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolverError {
    #[error(
        "invalid metronome candidate: start beat {start_beat} with interval {interval} \
         (need 1 <= start beat <= interval)"
    )]
    InvalidCandidate { start_beat: usize, interval: usize },
}

pub type SolverResult<T> = Result<T, SolverError>;
