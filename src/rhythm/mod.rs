// Rhythm - Cyclic binary beat sequence used as solver input
// Each beat is either a note (1) or a rest (0); the sequence loops forever.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rhythm construction and parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RhythmError {
    #[error("rhythm is empty, need at least one beat")]
    Empty,

    #[error("beat {position} holds {value}, only 0 (rest) and 1 (note) are allowed")]
    NonBinaryValue { position: usize, value: u8 },

    #[error("unexpected character {character:?} in rhythm string")]
    UnexpectedCharacter { character: char },
}

/// A fixed-length cyclic rhythm
///
/// Beats are numbered 1..=len for callers (musicians count from 1) but
/// stored 0-indexed. The sequence is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rhythm {
    beats: Vec<u8>,
}

impl Rhythm {
    /// Create a rhythm from raw beat values
    ///
    /// Every value must be 0 or 1 and the sequence must be non-empty.
    pub fn new(beats: Vec<u8>) -> Result<Self, RhythmError> {
        if beats.is_empty() {
            return Err(RhythmError::Empty);
        }

        for (index, &value) in beats.iter().enumerate() {
            if value > 1 {
                return Err(RhythmError::NonBinaryValue {
                    position: index + 1,
                    value,
                });
            }
        }

        Ok(Self { beats })
    }

    /// Number of beats in one loop of the rhythm
    pub fn len(&self) -> usize {
        self.beats.len()
    }

    /// Always false: construction rejects empty sequences
    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }

    /// Beat values, 0-indexed
    pub fn beats(&self) -> &[u8] {
        &self.beats
    }

    /// Number of notes (beats with value 1)
    pub fn note_count(&self) -> usize {
        self.beats.iter().filter(|&&b| b == 1).count()
    }
}

impl FromStr for Rhythm {
    type Err = RhythmError;

    /// Parse a rhythm from a digit string like "1011" or "10|11"
    ///
    /// Spaces, commas, pipes and newlines are accepted as visual
    /// separators, so rhythms can be written one bar per line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut beats = Vec::with_capacity(s.len());

        for character in s.chars() {
            match character {
                '0' => beats.push(0),
                '1' => beats.push(1),
                ' ' | ',' | '|' | '\n' | '\r' | '\t' => continue,
                _ => return Err(RhythmError::UnexpectedCharacter { character }),
            }
        }

        Self::new(beats)
    }
}

impl fmt::Display for Rhythm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &beat in &self.beats {
            write!(f, "{}", beat)?;
        }
        Ok(())
    }
}
