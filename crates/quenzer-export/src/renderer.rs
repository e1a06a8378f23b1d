//! Event renderer
//!
//! Walks a [`Cadence`] and resolves every sounding pitch through the
//! [`SampleBank`], producing an [`InstructionList`].

use crate::error::Result;
use crate::instruction::{GlobalEffectInstruction, InstructionList, PlaybackInstruction};
use quenzer_core::{Cadence, SampleBank};
use tracing::debug;

/// Margin keeping the release strictly inside the note
pub const RELEASE_EPSILON: f64 = 0.0001;

/// Time the reverb keeps running after the last chord
pub const REVERB_TAIL: f64 = 5.0;

/// Per-note settings of the event renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventSettings {
    /// Added to every chord's delay for legato
    pub overlap: f64,
    pub volume: f64,
    /// Requested release time, clamped per note
    pub release: f64,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            overlap: 0.0,
            volume: 1.0,
            release: 0.1,
        }
    }
}

/// Stateless renderer from cadence to instructions
#[derive(Debug, Clone, Copy, Default)]
pub struct EventRenderer {
    settings: EventSettings,
}

impl EventRenderer {
    pub fn new(settings: EventSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EventSettings {
        &self.settings
    }

    /// Release actually used for a note of `duration`
    pub fn clamp_release(&self, duration: f64) -> f64 {
        self.settings
            .release
            .min(duration - RELEASE_EPSILON)
            .max(0.0)
    }

    /// Render `cadence`, rotating the bank's takes.
    ///
    /// A pitch without an eligible anchor aborts the whole render and
    /// leaves the bank's rotation untouched.
    pub fn render(&self, cadence: &Cadence, bank: &mut SampleBank) -> Result<InstructionList> {
        let mut scratch = bank.clone();
        let mut playback = Vec::new();

        for (chord, onset) in cadence.iter().zip(cadence.onsets()) {
            if chord.is_silent() {
                continue;
            }

            let duration = chord.delay + self.settings.overlap;
            let release = self.clamp_release(duration);

            for freq in chord.sounding() {
                let resolved = scratch.resolve(freq)?;
                playback.push(PlaybackInstruction {
                    onset,
                    duration,
                    sample: resolved.sample,
                    factor: resolved.factor,
                    volume: self.settings.volume,
                    release,
                });
            }
        }

        *bank = scratch;

        let global = GlobalEffectInstruction {
            start: 0.0,
            duration: cadence.duration() + REVERB_TAIL,
        };

        debug!(
            "Rendered {} playback instructions over {:.3} time units",
            playback.len(),
            global.duration
        );

        Ok(InstructionList { playback, global })
    }
}
