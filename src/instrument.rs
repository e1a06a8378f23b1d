//! Instrument that wires scale decoding, score assembly, sample resolution
//! and the renderer hand-off together.

use crate::builder::InstrumentBuilder;
use crate::config::InstrumentConfig;
use crate::Result;
use quenzer_core::{Cadence, Decodex, Rhythm, SampleBank, Scale, ScaleCode, ScoreAssembler, Tuning};
use quenzer_export::{
    hand_off, score_text, Channels, EventRenderer, InstructionList, Orchestra, RendererBackend,
};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::info;

/// A tuned, sample-based instrument.
///
/// Owns its scale, decodex and sample bank. Every render advances the
/// bank's round-robin rotation, so rendering takes `&mut self`.
///
/// # Example
///
/// ```ignore
/// use quenzer::prelude::*;
///
/// let mut instrument = Instrument::from_config(InstrumentConfig::load("instrument.json")?)?;
/// instrument.invoke("output/example0", "pitches/example0", Rhythm::from_source("rhythms/example0"))?;
/// instrument.invoke("output/example1", "pitches/example1", Rhythm::Constant(0.25))?;
/// ```
pub struct Instrument {
    concert_pitch: f64,
    scale: Scale,
    decodex: Decodex,
    bank: SampleBank,
    channels: Channels,
    renderer: EventRenderer,
    reverb_volume: f64,
    backend: Box<dyn RendererBackend>,
}

impl Instrument {
    /// Create a new instrument builder
    pub fn builder(concert_pitch: f64, tuning: Tuning) -> InstrumentBuilder {
        InstrumentBuilder::new(concert_pitch, tuning)
    }

    pub fn from_config(config: InstrumentConfig) -> Result<Self> {
        InstrumentBuilder::from_config(config).build()
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        concert_pitch: f64,
        scale: Scale,
        decodex: Decodex,
        bank: SampleBank,
        channels: Channels,
        renderer: EventRenderer,
        reverb_volume: f64,
        backend: Box<dyn RendererBackend>,
    ) -> Self {
        Self {
            concert_pitch,
            scale,
            decodex,
            bank,
            channels,
            renderer,
            reverb_volume,
            backend,
        }
    }

    pub fn concert_pitch(&self) -> f64 {
        self.concert_pitch
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn decodex(&self) -> &Decodex {
        &self.decodex
    }

    pub fn decode_codes(&self) -> &[ScaleCode] {
        self.decodex.codes()
    }

    pub fn samples(&self) -> &SampleBank {
        &self.bank
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    pub fn overlap(&self) -> f64 {
        self.renderer.settings().overlap
    }

    pub fn volume(&self) -> f64 {
        self.renderer.settings().volume
    }

    pub fn release(&self) -> f64 {
        self.renderer.settings().release
    }

    pub fn reverb_volume(&self) -> f64 {
        self.reverb_volume
    }

    pub fn backend(&self) -> &dyn RendererBackend {
        self.backend.as_ref()
    }

    /// Assemble a cadence from a notation file.
    pub fn make_cadence(&self, notation: impl AsRef<Path>, rhythm: &Rhythm) -> Result<Cadence> {
        Ok(ScoreAssembler::new(&self.decodex).assemble_file(notation, rhythm)?)
    }

    /// Assemble a cadence from notation text.
    pub fn make_cadence_from_str(&self, notation: &str, rhythm: &Rhythm) -> Result<Cadence> {
        Ok(ScoreAssembler::new(&self.decodex).assemble(notation, rhythm)?)
    }

    pub fn make_orchestra(&self) -> Orchestra {
        Orchestra::new(self.channels, self.reverb_volume)
    }

    /// Resolve every sounding pitch of `cadence`, advancing sample rotation.
    pub fn make_instructions(&mut self, cadence: &Cadence) -> Result<InstructionList> {
        Ok(self.renderer.render(cadence, &mut self.bank)?)
    }

    /// Score text for `cadence`, advancing sample rotation.
    pub fn make_score(&mut self, cadence: &Cadence) -> Result<String> {
        Ok(score_text(&self.make_instructions(cadence)?))
    }

    /// Render `notation` with `rhythm` into `<name>.wav`.
    ///
    /// Returns the written path, or `None` when the score has nothing to
    /// play. Decoding and sample lookup finish before anything is handed to
    /// the renderer.
    pub fn invoke(
        &mut self,
        name: impl AsRef<Path>,
        notation: impl AsRef<Path>,
        rhythm: Rhythm,
    ) -> Result<Option<PathBuf>> {
        let cadence = self.make_cadence(notation, &rhythm)?;
        self.render_cadence(name, &cadence)
    }

    /// Render an already assembled cadence into `<name>.wav`.
    pub fn render_cadence(
        &mut self,
        name: impl AsRef<Path>,
        cadence: &Cadence,
    ) -> Result<Option<PathBuf>> {
        let output = wav_path(name.as_ref());
        let list = self.make_instructions(cadence)?;
        let orchestra = self.make_orchestra();

        if !hand_off(self.backend.as_ref(), &orchestra, &list, &output)? {
            return Ok(None);
        }

        info!(
            "{}: {} sample triggers, {:.2}s",
            output.display(),
            list.playback.len(),
            list.global.duration
        );
        Ok(Some(output))
    }
}

/// `name` with `.wav` appended, keeping any dots already in the name.
pub fn wav_path(name: &Path) -> PathBuf {
    let mut path = OsString::from(name.as_os_str());
    path.push(".wav");
    PathBuf::from(path)
}
