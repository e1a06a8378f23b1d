//! # quenzer - Sample-based score sequencer
//!
//! Turns scale-function notation and a rhythm into a csound score that
//! plays retuned samples, then hands it to an external renderer.
//!
//! ## Architecture
//!
//! quenzer is an umbrella crate that coordinates:
//! - **quenzer-core** - Scales, decode tables, notation, rhythm, cadences, sample bank
//! - **quenzer-export** - Event rendering, csound orchestra/score text, renderer backends
//!
//! ## Quick Start
//!
//! ```ignore
//! use quenzer::prelude::*;
//!
//! let mut instrument = Instrument::builder(260.0, Tuning::Cents(vec![240.0, 480.0, 720.0, 960.0, 1200.0]))
//!     .sample(261.626, ["samples/c0.wav", "samples/c1.wav"])
//!     .sample(349.228, ["samples/f0.wav", "samples/f1.wav"])
//!     .sample(440.0, ["samples/a0.wav", "samples/a1.wav"])
//!     .decode_codes([1, 2, 3, 5, 6])
//!     .channels(2)
//!     .overlap(0.5)
//!     .volume(1.2)
//!     .build()?;
//!
//! // Writes output/example1.wav through csound
//! instrument.invoke("output/example1", "pitches/example1", Rhythm::Constant(0.25))?;
//! ```

/// Re-export of quenzer-core for direct access
pub use quenzer_core as core;

/// Re-export of quenzer-export for direct access
pub use quenzer_export as export;

pub use quenzer_core::{
    Cadence, Chord, Decodex, ErrorKind, Pitch, ResolvedSample, Rhythm, SampleBank, SampleId,
    Scale, ScaleCode, ScaleDecoder, ScoreAssembler, Tuning,
};

pub use quenzer_export::{
    Channels, CsoundBackend, EventRenderer, EventSettings, GlobalEffectInstruction,
    InstructionList, Orchestra, PlaybackInstruction, RenderOptions, RenderStatus,
    RendererBackend, SampleFormat, ScoreFilesBackend,
};

mod builder;
pub mod config;
mod error;
mod instrument;

pub use builder::InstrumentBuilder;
pub use config::{InstrumentConfig, SampleAnchorConfig};
pub use error::{Error, Result};
pub use instrument::{wav_path, Instrument};

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{Instrument, InstrumentBuilder, InstrumentConfig};

    pub use crate::core::{Cadence, Chord, Pitch, Rhythm, Tuning};

    pub use crate::export::{
        Channels, CsoundBackend, RenderOptions, RendererBackend, ScoreFilesBackend,
    };
}
