//! Instruction types for the score hand-off
//!
//! Timing is in the cadence's time units (seconds for csound).

use quenzer_core::SampleId;

/// One sample trigger
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackInstruction {
    /// Absolute onset
    pub onset: f64,
    /// Held duration, overlap included
    pub duration: f64,
    pub sample: SampleId,
    /// Playback-rate multiplier retuning the sample
    pub factor: f64,
    pub volume: f64,
    /// Fade-out time at the end of the note
    pub release: f64,
}

/// Reverb instrument running over the whole piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalEffectInstruction {
    pub start: f64,
    pub duration: f64,
}

/// Everything the score needs, in hand-off order
///
/// Playback instructions are ordered by onset; the global effect comes last.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionList {
    pub playback: Vec<PlaybackInstruction>,
    pub global: GlobalEffectInstruction,
}

impl InstructionList {
    /// True when no sample would be triggered
    pub fn is_silent(&self) -> bool {
        self.playback.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(onset: f64, duration: f64) -> PlaybackInstruction {
        PlaybackInstruction {
            onset,
            duration,
            sample: "a.wav".into(),
            factor: 1.0,
            volume: 1.0,
            release: 0.1,
        }
    }

    #[test]
    fn test_list_with_notes_is_not_silent() {
        let list = InstructionList {
            playback: vec![note(0.0, 3.0), note(1.0, 1.5), note(2.0, 0.5)],
            global: GlobalEffectInstruction {
                start: 0.0,
                duration: 8.0,
            },
        };
        assert!(!list.is_silent());
    }

    #[test]
    fn test_silent_list() {
        let list = InstructionList {
            playback: vec![],
            global: GlobalEffectInstruction {
                start: 0.0,
                duration: 5.0,
            },
        };
        assert!(list.is_silent());
    }
}
