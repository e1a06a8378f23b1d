//! Pitches, chords and cadences.

/// A sounding frequency, or silence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pitch {
    /// Rest voice; carries no sample.
    Empty,
    /// Absolute frequency in Hz.
    Freq(f64),
}

impl Pitch {
    pub fn is_empty(&self) -> bool {
        matches!(self, Pitch::Empty)
    }

    /// Frequency in Hz, `None` for [`Pitch::Empty`].
    pub fn freq(&self) -> Option<f64> {
        match self {
            Pitch::Empty => None,
            Pitch::Freq(f) => Some(*f),
        }
    }
}

impl From<f64> for Pitch {
    fn from(freq: f64) -> Self {
        Pitch::Freq(freq)
    }
}

/// Simultaneous pitches sharing one relative duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    pub pitches: Vec<Pitch>,
    /// Relative duration until the next chord starts.
    pub delay: f64,
}

impl Chord {
    pub fn new(pitches: Vec<Pitch>, delay: f64) -> Self {
        Self { pitches, delay }
    }

    /// A chord holding only the empty pitch.
    pub fn rest(delay: f64) -> Self {
        Self::new(vec![Pitch::Empty], delay)
    }

    /// True when no pitch in the chord sounds.
    pub fn is_silent(&self) -> bool {
        self.pitches.iter().all(Pitch::is_empty)
    }

    /// Frequencies of the sounding pitches, in chord order.
    pub fn sounding(&self) -> impl Iterator<Item = f64> + '_ {
        self.pitches.iter().filter_map(Pitch::freq)
    }
}

/// Ordered sequence of chords.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cadence {
    chords: Vec<Chord>,
}

impl Cadence {
    pub fn new(chords: Vec<Chord>) -> Self {
        Self { chords }
    }

    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chord> {
        self.chords.iter()
    }

    /// Relative delays, one per chord.
    pub fn delays(&self) -> impl Iterator<Item = f64> + '_ {
        self.chords.iter().map(|c| c.delay)
    }

    /// Absolute onset of every chord: running sum of the preceding delays.
    pub fn onsets(&self) -> Vec<f64> {
        self.delays()
            .scan(0.0, |elapsed, delay| {
                let onset = *elapsed;
                *elapsed += delay;
                Some(onset)
            })
            .collect()
    }

    /// Sum of all delays.
    pub fn duration(&self) -> f64 {
        self.delays().sum()
    }
}

impl FromIterator<Chord> for Cadence {
    fn from_iter<I: IntoIterator<Item = Chord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Cadence {
    type Item = &'a Chord;
    type IntoIter = std::slice::Iter<'a, Chord>;

    fn into_iter(self) -> Self::IntoIter {
        self.chords.iter()
    }
}

impl IntoIterator for Cadence {
    type Item = Chord;
    type IntoIter = std::vec::IntoIter<Chord>;

    fn into_iter(self) -> Self::IntoIter {
        self.chords.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onsets_are_cumulative() {
        let cadence: Cadence = [0.5, 1.0, 0.25, 2.0]
            .into_iter()
            .map(|d| Chord::new(vec![Pitch::Freq(440.0)], d))
            .collect();
        assert_eq!(cadence.onsets(), vec![0.0, 0.5, 1.5, 1.75]);
        assert_eq!(cadence.duration(), 3.75);
    }

    #[test]
    fn test_empty_cadence() {
        let cadence = Cadence::default();
        assert!(cadence.onsets().is_empty());
        assert_eq!(cadence.duration(), 0.0);
    }

    #[test]
    fn test_silence() {
        assert!(Chord::rest(1.0).is_silent());
        assert!(Chord::new(vec![], 1.0).is_silent());

        let partial = Chord::new(vec![Pitch::Empty, Pitch::Freq(300.0)], 1.0);
        assert!(!partial.is_silent());
        assert_eq!(partial.sounding().collect::<Vec<_>>(), vec![300.0]);
    }
}
