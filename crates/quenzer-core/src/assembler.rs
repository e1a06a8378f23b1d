//! Score assembly: notation plus rhythm into a [`Cadence`].

use crate::cadence::{Cadence, Chord};
use crate::decodex::Decodex;
use crate::error::Result;
use crate::notation::{parse_notation, read_notation, Harmonies};
use crate::rhythm::Rhythm;
use std::path::Path;
use tracing::debug;

/// Zips decoded harmonies with rhythm durations.
///
/// Stateless; the same inputs always produce the same cadence.
#[derive(Debug, Clone, Copy)]
pub struct ScoreAssembler<'a> {
    decodex: &'a Decodex,
}

impl<'a> ScoreAssembler<'a> {
    pub fn new(decodex: &'a Decodex) -> Self {
        Self { decodex }
    }

    /// Assemble from notation text.
    pub fn assemble(&self, notation: &str, rhythm: &Rhythm) -> Result<Cadence> {
        let harmonies = parse_notation(notation, self.decodex)?;
        Self::zip(harmonies, rhythm)
    }

    /// Assemble from a notation file.
    pub fn assemble_file(&self, notation: impl AsRef<Path>, rhythm: &Rhythm) -> Result<Cadence> {
        let harmonies = read_notation(notation, self.decodex)?;
        Self::zip(harmonies, rhythm)
    }

    fn zip(harmonies: Harmonies, rhythm: &Rhythm) -> Result<Cadence> {
        let durations = rhythm.durations(harmonies.len())?;
        let cadence: Cadence = harmonies
            .into_iter()
            .zip(durations)
            .map(|(pitches, delay)| Chord::new(pitches, delay))
            .collect();

        debug!(
            "Assembled cadence: {} chords, {:.3} time units",
            cadence.len(),
            cadence.duration()
        );

        Ok(cadence)
    }
}
