// Metronome - Periodic tick pattern candidate over a looping rhythm
// A metronome starting on beat S with interval I ticks on beats S, S+I, S+2I, ...

use super::{SolverError, SolverResult};
use serde::{Deserialize, Serialize};

/// A metronome candidate: starting beat and tick interval, both in beats
///
/// Beats are 1-based. A candidate is valid only when
/// `1 <= start_beat <= interval`; starting later than one full interval
/// would re-test a phase that an earlier start beat already covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metronome {
    pub start_beat: usize,
    pub interval: usize,
}

impl Metronome {
    /// Check the candidate preconditions shared by both operations below
    fn validate(self) -> SolverResult<()> {
        if self.interval == 0 || self.start_beat == 0 || self.start_beat > self.interval {
            return Err(SolverError::InvalidCandidate {
                start_beat: self.start_beat,
                interval: self.interval,
            });
        }
        Ok(())
    }

    /// Tick indices (0-based) of this metronome over `len` beats
    fn ticks(self, len: usize) -> impl Iterator<Item = usize> {
        (self.start_beat - 1..len).step_by(self.interval)
    }
}

/// Check whether a metronome works for the given beats
///
/// A metronome works when every beat it ticks on is a note. A single
/// rest under any tick disqualifies it.
pub fn metronome_works(notes: &[u8], metronome: Metronome) -> SolverResult<bool> {
    metronome.validate()?;

    for index in metronome.ticks(notes.len()) {
        if notes[index] == 0 {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Write `new_value` at every beat the metronome ticks on
///
/// Generic over the cell type: the solver zeroes its `u8` working copy
/// and stamps metronome ids into its `usize` assignment row with the
/// same operation.
pub fn mark_metronome_beats<T: Copy>(
    values: &mut [T],
    new_value: T,
    metronome: Metronome,
) -> SolverResult<()> {
    metronome.validate()?;

    for index in metronome.ticks(values.len()) {
        values[index] = new_value;
    }
    Ok(())
}
