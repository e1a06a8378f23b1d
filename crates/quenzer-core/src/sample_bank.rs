//! Sample catalogue with per-anchor round-robin rotation.
//!
//! Every anchor is a reference frequency with one or more recorded takes.
//! A target frequency resolves to the greatest anchor at or below it; the
//! sample is retuned by `target / anchor`.

use crate::error::{Error, Result};
use crate::scale::is_valid_frequency;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Identifier of a recorded sample, usually a file path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SampleId(Arc<str>);

impl SampleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SampleId {
    fn from(s: &str) -> Self {
        SampleId(Arc::from(s))
    }
}

impl From<String> for SampleId {
    fn from(s: String) -> Self {
        SampleId(Arc::from(s))
    }
}

/// Result of resolving a target frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSample {
    pub sample: SampleId,
    /// Frequency of the matched anchor.
    pub anchor: f64,
    /// Playback-rate multiplier, `target / anchor`.
    pub factor: f64,
}

/// One reference frequency and its rotating takes.
#[derive(Debug, Clone)]
struct Anchor {
    frequency: f64,
    samples: Vec<SampleId>,
    cursor: usize,
}

impl Anchor {
    fn next_sample(&mut self) -> SampleId {
        let sample = self.samples[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.samples.len();
        sample
    }
}

/// Sample catalogue sorted by anchor frequency.
#[derive(Debug, Clone, Default)]
pub struct SampleBank {
    anchors: Vec<Anchor>,
}

impl SampleBank {
    /// Build a bank from `(anchor frequency, sample ids)` pairs.
    ///
    /// Anchors are sorted once here. Every anchor needs at least one sample.
    pub fn new<I, S>(catalogue: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, Vec<S>)>,
        S: Into<SampleId>,
    {
        let mut anchors = Vec::new();
        for (frequency, samples) in catalogue {
            if !is_valid_frequency(frequency) {
                return Err(Error::InvalidFrequency(frequency));
            }
            if samples.is_empty() {
                return Err(Error::EmptyAnchor(frequency));
            }
            anchors.push(Anchor {
                frequency,
                samples: samples.into_iter().map(Into::into).collect(),
                cursor: 0,
            });
        }

        anchors.sort_by(|a, b| a.frequency.total_cmp(&b.frequency));
        if let Some(pair) = anchors.windows(2).find(|w| w[0].frequency == w[1].frequency) {
            return Err(Error::DuplicateAnchor(pair[0].frequency));
        }

        debug!("Sample bank: {} anchors", anchors.len());
        Ok(Self { anchors })
    }

    /// Anchor frequencies, ascending.
    pub fn anchors(&self) -> impl Iterator<Item = f64> + '_ {
        self.anchors.iter().map(|a| a.frequency)
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Index of the greatest anchor `<= target`.
    fn floor_index(&self, target: f64) -> Option<usize> {
        self.anchors
            .partition_point(|a| a.frequency <= target)
            .checked_sub(1)
    }

    /// Anchor frequency that `target` would resolve to, without rotating.
    pub fn anchor_for(&self, target: f64) -> Option<f64> {
        self.floor_index(target).map(|i| self.anchors[i].frequency)
    }

    /// Resolve `target` and advance the matched anchor's rotation.
    pub fn resolve(&mut self, target: f64) -> Result<ResolvedSample> {
        let lowest = self.anchors.first().map(|a| a.frequency);
        let index = self
            .floor_index(target)
            .ok_or(Error::NoAnchorBelow { target, lowest })?;

        let anchor = &mut self.anchors[index];
        Ok(ResolvedSample {
            sample: anchor.next_sample(),
            anchor: anchor.frequency,
            factor: target / anchor.frequency,
        })
    }
}
