// Cover - Greedy search for the least set of metronomes covering a rhythm
// Tries small intervals first: when a small interval works it covers more
// notes per metronome, so fewer metronomes are needed overall.

use super::metronome::{Metronome, mark_metronome_beats, metronome_works};
use super::SolverResult;
use crate::rhythm::Rhythm;
use serde::{Deserialize, Serialize};

/// Result of a coverage solve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// How many metronomes the greedy search used
    pub metronome_count: usize,

    /// One entry per beat: 0 for a rest, otherwise the 1-based id of the
    /// metronome covering that beat
    pub assignments: Vec<usize>,

    /// The metronomes in discovery order; `metronomes[id - 1]` is the
    /// metronome with that id
    pub metronomes: Vec<Metronome>,
}

impl Solution {
    /// The metronome assigned a given 1-based id, if any
    pub fn metronome(&self, id: usize) -> Option<Metronome> {
        if id == 0 {
            return None;
        }
        self.metronomes.get(id - 1).copied()
    }
}

/// Find a set of metronomes that jointly plays the rhythm on a loop
///
/// Deterministic greedy search, smallest interval first, then smallest
/// start beat. Only intervals that divide the rhythm length evenly are
/// tried, so every metronome repeats consistently across loop
/// iterations. Each note is claimed by the first metronome that works
/// for it and never reassigned: claimed notes are zeroed in the working
/// copy, so they neither require further coverage nor block later
/// candidates, while rests stay 0 and disqualify any candidate ticking
/// on them.
///
/// Always succeeds: at `interval == len` every still-unclaimed note is a
/// one-tick candidate that trivially works, so the count never exceeds
/// the number of notes. The only error is `InvalidCandidate` from the
/// helper operations, which the loop bounds never trigger.
pub fn solve(rhythm: &Rhythm) -> SolverResult<Solution> {
    let len = rhythm.len();
    let mut remaining = rhythm.beats().to_vec();
    let mut assignments = vec![0usize; len];
    let mut metronomes: Vec<Metronome> = Vec::new();

    for interval in 1..=len {
        if len % interval != 0 {
            // A metronome that doesn't divide the loop evenly drifts
            // against the rhythm on the next pass, so skip it.
            continue;
        }

        // Start beats past the interval repeat an already-tested phase
        for start_beat in 1..=interval {
            let candidate = Metronome {
                start_beat,
                interval,
            };

            if metronome_works(&remaining, candidate)? {
                metronomes.push(candidate);
                let id = metronomes.len();
                mark_metronome_beats(&mut remaining, 0, candidate)?;
                mark_metronome_beats(&mut assignments, id, candidate)?;
            }
        }
    }

    Ok(Solution {
        metronome_count: metronomes.len(),
        assignments,
        metronomes,
    })
}
