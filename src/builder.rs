//! Builder for configuring and constructing an `Instrument`.

use crate::config::{defaults, InstrumentConfig};
use crate::{Instrument, Result};
use quenzer_core::{SampleBank, SampleId, Scale, ScaleCode, ScaleDecoder, Tuning};
use quenzer_export::{
    Channels, CsoundBackend, EventRenderer, EventSettings, RenderOptions, RendererBackend,
};
use tracing::debug;

/// Renders through [`CsoundBackend`] with default [`RenderOptions`] unless a
/// backend is supplied.
///
/// # Example
///
/// ```ignore
/// use quenzer::prelude::*;
///
/// let mut instrument = Instrument::builder(260.0, Tuning::Cents(vec![240.0, 480.0, 720.0, 960.0, 1200.0]))
///     .sample(261.626, ["samples/c0.wav", "samples/c1.wav"])
///     .sample(440.0, ["samples/a0.wav", "samples/a1.wav"])
///     .decode_codes([1, 2, 3, 5, 6])
///     .channels(2)
///     .overlap(0.5)
///     .volume(1.2)
///     .build()?;
///
/// instrument.invoke("output/example", "pitches/example", Rhythm::Constant(0.25))?;
/// ```
pub struct InstrumentBuilder {
    concert_pitch: f64,
    tuning: Tuning,
    samples: Vec<(f64, Vec<SampleId>)>,
    decode_codes: Option<Vec<ScaleCode>>,
    channels: u8,
    overlap: f64,
    volume: f64,
    release: f64,
    reverb_volume: f64,
    backend: Option<Box<dyn RendererBackend>>,
}

impl InstrumentBuilder {
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
            backend: None,
        }
    }

    /// Builder pre-filled from a description file's contents.
    pub fn from_config(config: InstrumentConfig) -> Self {
        let mut builder = Self::new(config.concert_pitch, config.tuning)
            .channels(config.channels)
            .overlap(config.overlap)
            .volume(config.volume)
            .release(config.release)
            .reverb_volume(config.reverb_volume);
        if let Some(codes) = config.decode_codes {
            builder = builder.decode_codes(codes);
        }
        for anchor in config.samples {
            builder = builder.sample(anchor.frequency, anchor.samples);
        }
        builder
    }

    /// Add an anchor frequency with its takes, played in the given order.
    pub fn sample<I, S>(mut self, frequency: f64, samples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SampleId>,
    {
        self.samples
            .push((frequency, samples.into_iter().map(Into::into).collect()));
        self
    }

    /// Codes for the scale steps after the unison. Default: `1..len`
    pub fn decode_codes(mut self, codes: impl IntoIterator<Item = ScaleCode>) -> Self {
        self.decode_codes = Some(codes.into_iter().collect());
        self
    }

    /// 1 or 2. Default: 1
    pub fn channels(mut self, channels: u8) -> Self {
        self.channels = channels;
        self
    }

    /// Seconds every note is held past its slot. Default: 0
    pub fn overlap(mut self, overlap: f64) -> Self {
        self.overlap = overlap;
        self
    }

    /// Default: 1.0
    pub fn volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Default: 0.1
    pub fn release(mut self, release: f64) -> Self {
        self.release = release;
        self
    }

    /// Default: 0.4
    pub fn reverb_volume(mut self, reverb_volume: f64) -> Self {
        self.reverb_volume = reverb_volume;
        self
    }

    /// Render with csound using `options`.
    pub fn render_options(self, options: RenderOptions) -> Self {
        self.backend(CsoundBackend::new(options))
    }

    pub fn backend(mut self, backend: impl RendererBackend + 'static) -> Self {
        self.backend = Some(Box::new(backend));
        self
    }

    pub fn build(self) -> Result<Instrument> {
        let channels = Channels::try_from(self.channels)?;
        let scale = Scale::from_tuning(self.concert_pitch, &self.tuning)?;
        let decodex = ScaleDecoder::build(&scale, self.decode_codes.as_deref())?;
        let bank = SampleBank::new(self.samples)?;

        debug!(
            "Instrument: {} pitches, {} codes, {} sample anchors, {:?}",
            scale.len(),
            decodex.len(),
            bank.len(),
            channels
        );

        let renderer = EventRenderer::new(EventSettings {
            overlap: self.overlap,
            volume: self.volume,
            release: self.release,
        });
        let backend = self
            .backend
            .unwrap_or_else(|| Box::new(CsoundBackend::default()));

        Ok(Instrument::from_parts(
            self.concert_pitch,
            scale,
            decodex,
            bank,
            channels,
            renderer,
            self.reverb_volume,
            backend,
        ))
    }
}
