//! Instrument description files.
//!
//! ```json
//! {
//!   "concert_pitch": 260,
//!   "tuning": { "kind": "cents", "steps": [240, 480, 720, 960, 1200] },
//!   "samples": [
//!     { "frequency": 261.626, "samples": ["samples/c0.wav", "samples/c1.wav"] },
//!     { "frequency": 440, "samples": ["samples/a0.wav"] }
//!   ],
//!   "decode_codes": [1, 2, 3, 5, 6],
//!   "channels": 2,
//!   "overlap": 0.5,
//!   "volume": 1.2
//! }
//! ```
//!
//! Omitted fields take the defaults of [`InstrumentConfig::new`]. Relative
//! sample paths are resolved against the directory of the file.

use crate::error::{Error, Result};
use quenzer_core::{ScaleCode, Tuning};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One sample anchor: a reference frequency and its takes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleAnchorConfig {
    pub frequency: f64,
    pub samples: Vec<String>,
}

/// Everything needed to construct an [`Instrument`](crate::Instrument).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstrumentConfig {
    pub concert_pitch: f64,
    pub tuning: Tuning,
    #[serde(default)]
    pub samples: Vec<SampleAnchorConfig>,
    /// Codes for the scale steps after the unison; `1..len` when omitted.
    #[serde(default)]
    pub decode_codes: Option<Vec<ScaleCode>>,
    #[serde(default = "defaults::channels")]
    pub channels: u8,
    #[serde(default)]
    pub overlap: f64,
    #[serde(default = "defaults::volume")]
    pub volume: f64,
    #[serde(default = "defaults::release")]
    pub release: f64,
    #[serde(default = "defaults::reverb_volume")]
    pub reverb_volume: f64,
}

pub(crate) mod defaults {
    pub fn channels() -> u8 {
        1
    }

    pub fn volume() -> f64 {
        1.0
    }

    pub fn release() -> f64 {
        0.1
    }

    pub fn reverb_volume() -> f64 {
        0.4
    }
}

impl InstrumentConfig {
    /// Config with default channel, overlap, volume, release and reverb settings.
    pub fn new(concert_pitch: f64, tuning: Tuning) -> Self {
        Self {
            concert_pitch,
            tuning,
            samples: Vec::new(),
            decode_codes: None,
            channels: defaults::channels(),
            overlap: 0.0,
            volume: defaults::volume(),
            release: defaults::release(),
            reverb_volume: defaults::reverb_volume(),
        }
    }

    /// Parse a JSON description without touching sample paths.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load a JSON description, resolving sample paths against its directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let mut config = Self::from_json(&json).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = path.parent() {
            config.resolve_samples(base);
        }
        Ok(config)
    }

    /// Prefix relative sample paths with `base`.
    pub fn resolve_samples(&mut self, base: &Path) {
        for anchor in &mut self.samples {
            for sample in &mut anchor.samples {
                let resolved: PathBuf = base.join(&*sample);
                *sample = resolved.to_string_lossy().into_owned();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = InstrumentConfig::from_json(
            r#"{"concert_pitch": 440, "tuning": {"kind": "ratios", "steps": [1.5, 2]}}"#,
        )
        .unwrap();
        assert_eq!(config, InstrumentConfig::new(440.0, Tuning::Ratios(vec![1.5, 2.0])));
        assert_eq!(config.channels, 1);
        assert_eq!(config.release, 0.1);
        assert_eq!(config.reverb_volume, 0.4);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = InstrumentConfig::from_json(
            r#"{"concert_pitch": 440, "tuning": {"kind": "cents", "steps": []}, "nchannels": 2}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_resolves_relative_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("instrument.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{
                "concert_pitch": 260,
                "tuning": {{"kind": "frequencies", "steps": [240, 480]}},
                "samples": [{{"frequency": 200, "samples": ["samples/a.wav", "/abs/b.wav"]}}],
                "channels": 2
            }}"#
        )
        .unwrap();

        let config = InstrumentConfig::load(&path).unwrap();
        let samples = &config.samples[0].samples;
        assert_eq!(
            Path::new(&samples[0]),
            dir.path().join("samples/a.wav").as_path()
        );
        assert_eq!(samples[1], "/abs/b.wav");
        assert_eq!(config.channels, 2);
    }

    #[test]
    fn test_load_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = InstrumentConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("Invalid instrument file"));
    }
}
