//! Csound score lines
//!
//! ```text
//! i1 <onset> <duration> "<sample>" <factor> <volume> <release>
//! i2 0 <total duration + reverb tail>
//! ```

use crate::instruction::{GlobalEffectInstruction, InstructionList, PlaybackInstruction};

/// Instrument number of sample playback
pub const PLAYBACK_INSTR: u32 = 1;

/// Instrument number of the reverb
pub const GLOBAL_EFFECT_INSTR: u32 = 2;

pub fn playback_line(p: &PlaybackInstruction) -> String {
    format!(
        "i{} {} {} \"{}\" {} {} {}",
        PLAYBACK_INSTR, p.onset, p.duration, p.sample, p.factor, p.volume, p.release
    )
}

pub fn global_effect_line(g: &GlobalEffectInstruction) -> String {
    format!("i{} {} {}", GLOBAL_EFFECT_INSTR, g.start, g.duration)
}

/// Full score text: playback lines in onset order, then the global effect.
pub fn score_text(list: &InstructionList) -> String {
    let mut lines: Vec<String> = list.playback.iter().map(playback_line).collect();
    lines.push(global_effect_line(&list.global));
    lines.join("\n")
}
