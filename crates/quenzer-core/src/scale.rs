//! Tuned scales.
//!
//! A [`Scale`] is a list of absolute frequencies. Index 0 is the unison
//! (the concert pitch); every later entry is one step of the [`Tuning`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Step definition of a tuning, relative to a concert pitch.
///
/// The unison is implicit and never listed, matching how tuning tables
/// usually enumerate only the steps above the tonic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "steps", rename_all = "snake_case")]
pub enum Tuning {
    /// Absolute frequencies in Hz.
    Frequencies(Vec<f64>),
    /// Cents above the concert pitch.
    Cents(Vec<f64>),
    /// Frequency ratios against the concert pitch.
    Ratios(Vec<f64>),
}

impl Tuning {
    /// Equal division of the octave into `divisions` steps.
    ///
    /// The octave itself is the last step.
    pub fn equal_division(divisions: usize) -> Self {
        let step = 1200.0 / divisions as f64;
        Tuning::Cents((1..=divisions).map(|i| i as f64 * step).collect())
    }

    /// Number of steps above the unison.
    pub fn len(&self) -> usize {
        self.steps().len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps().is_empty()
    }

    fn steps(&self) -> &[f64] {
        match self {
            Tuning::Frequencies(s) | Tuning::Cents(s) | Tuning::Ratios(s) => s,
        }
    }

    fn frequency(&self, concert_pitch: f64, step: f64) -> f64 {
        match self {
            Tuning::Frequencies(_) => step,
            Tuning::Cents(_) => concert_pitch * 2f64.powf(step / 1200.0),
            Tuning::Ratios(_) => concert_pitch * step,
        }
    }
}

/// Ordered absolute frequencies of a tuning system.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    pitches: Vec<f64>,
}

impl Scale {
    /// Build a scale from absolute frequencies, unison first.
    pub fn new(pitches: Vec<f64>) -> Result<Self> {
        if pitches.is_empty() {
            return Err(Error::EmptyScale);
        }
        if let Some(&bad) = pitches.iter().find(|f| !is_valid_frequency(**f)) {
            return Err(Error::InvalidFrequency(bad));
        }
        Ok(Self { pitches })
    }

    /// Resolve `tuning` against `concert_pitch`.
    pub fn from_tuning(concert_pitch: f64, tuning: &Tuning) -> Result<Self> {
        if !is_valid_frequency(concert_pitch) {
            return Err(Error::InvalidFrequency(concert_pitch));
        }
        let mut pitches = Vec::with_capacity(tuning.len() + 1);
        pitches.push(concert_pitch);
        pitches.extend(
            tuning
                .steps()
                .iter()
                .map(|&step| tuning.frequency(concert_pitch, step)),
        );
        Self::new(pitches)
    }

    /// Frequency of the unison.
    pub fn unison(&self) -> f64 {
        self.pitches[0]
    }

    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    /// Always false; a scale holds at least its unison.
    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.pitches.get(index).copied()
    }

    pub fn pitches(&self) -> &[f64] {
        &self.pitches
    }

    /// Pitches after the unison.
    pub fn steps(&self) -> &[f64] {
        &self.pitches[1..]
    }
}

pub(crate) fn is_valid_frequency(freq: f64) -> bool {
    freq.is_finite() && freq > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frequencies_keep_concert_pitch_as_unison() {
        let tuning = Tuning::Frequencies(vec![240.0, 480.0, 720.0, 960.0, 1200.0]);
        let scale = Scale::from_tuning(260.0, &tuning).unwrap();
        assert_eq!(scale.len(), 6);
        assert_eq!(scale.unison(), 260.0);
        assert_eq!(scale.steps(), &[240.0, 480.0, 720.0, 960.0, 1200.0]);
    }

    #[test]
    fn test_cents() {
        let scale = Scale::from_tuning(440.0, &Tuning::Cents(vec![700.0, 1200.0])).unwrap();
        assert_relative_eq!(scale.get(1).unwrap(), 659.255, epsilon = 1e-3);
        assert_relative_eq!(scale.get(2).unwrap(), 880.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ratios() {
        let scale = Scale::from_tuning(200.0, &Tuning::Ratios(vec![1.5, 2.0])).unwrap();
        assert_eq!(scale.pitches(), &[200.0, 300.0, 400.0]);
    }

    #[test]
    fn test_equal_division_ends_on_octave() {
        let tuning = Tuning::equal_division(12);
        assert_eq!(tuning.len(), 12);
        let scale = Scale::from_tuning(261.626, &tuning).unwrap();
        assert_relative_eq!(scale.get(12).unwrap(), 523.252, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_invalid_frequencies() {
        assert!(matches!(Scale::new(vec![]), Err(Error::EmptyScale)));
        assert!(matches!(
            Scale::new(vec![100.0, -3.0]),
            Err(Error::InvalidFrequency(f)) if f == -3.0
        ));
        assert!(matches!(
            Scale::from_tuning(f64::NAN, &Tuning::Ratios(vec![])),
            Err(Error::InvalidFrequency(_))
        ));
    }

    #[test]
    fn test_tuning_json_shape() {
        let tuning: Tuning =
            serde_json::from_str(r#"{"kind": "cents", "steps": [240.0, 480.0]}"#).unwrap();
        assert_eq!(tuning, Tuning::Cents(vec![240.0, 480.0]));
    }
}
