//! Csound orchestra template
//!
//! Instrument 1 plays a sample through `diskin2` with a linear release
//! envelope and feeds a reverb send. Instrument 2 runs `freeverb` on the
//! send for the whole piece.

use crate::options::Channels;
use std::fmt;

/// Orchestra definition parameterized by channel layout and reverb level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orchestra {
    pub channels: Channels,
    /// Output level of the reverb instrument
    pub reverb_volume: f64,
}

impl Orchestra {
    pub fn new(channels: Channels, reverb_volume: f64) -> Self {
        Self {
            channels,
            reverb_volume,
        }
    }

    fn diskin_line(&self) -> &'static str {
        match self.channels {
            Channels::Mono => "asig diskin2 p4, p5, 0, 0, 6, 4",
            Channels::Stereo => "asig, asig1 diskin2 p4, p5, 0, 0, 6, 4",
        }
    }
}

impl fmt::Display for Orchestra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // p4 sample, p5 playback factor, p6 volume, p7 release
        let lines = [
            "0dbfs=1".to_string(),
            "gaSend init 0".to_string(),
            "instr 1".to_string(),
            self.diskin_line().to_string(),
            "kenv linseg 1, p3 - p7, 1, p7, 0".to_string(),
            "asig = asig * kenv * p6".to_string(),
            "out asig".to_string(),
            "gaSend = gaSend + (asig * 0.1)".to_string(),
            "endin".to_string(),
            "instr 2".to_string(),
            "kroomsize init 0.7".to_string(),
            "kHFDamp init 0.5".to_string(),
            "aRvbL, aRvbR freeverb gaSend, gaSend, kroomsize, kHFDamp".to_string(),
            format!("out (aRvbL + aRvbR) * {}", self.reverb_volume),
            "clear gaSend".to_string(),
            "endin".to_string(),
        ];
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_orchestra() {
        let orc = Orchestra::new(Channels::Mono, 0.4).to_string();
        let lines: Vec<&str> = orc.lines().collect();
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], "0dbfs=1");
        assert_eq!(lines[3], "asig diskin2 p4, p5, 0, 0, 6, 4");
        assert_eq!(lines[13], "out (aRvbL + aRvbR) * 0.4");
        assert_eq!(lines[15], "endin");
    }

    #[test]
    fn test_stereo_reads_two_channels() {
        let orc = Orchestra::new(Channels::Stereo, 1.0).to_string();
        assert!(orc.contains("\nasig, asig1 diskin2 p4, p5, 0, 0, 6, 4\n"));
        assert!(orc.contains("out (aRvbL + aRvbR) * 1\n"));
    }
}
