//! # quenzer-core
//!
//! Symbolic score handling for the quenzer sequencer.
//!
//! - **Scale / Tuning**: absolute frequencies from a tuning and a concert pitch
//! - **ScaleDecoder / Decodex**: scale codes to frequencies
//! - **ScoreAssembler**: scale-function notation plus a [`Rhythm`] into a [`Cadence`]
//! - **SampleBank**: floor lookup of sample anchors with round-robin takes
//!
//! ```ignore
//! use quenzer_core::{Rhythm, Scale, ScaleDecoder, ScoreAssembler, Tuning};
//!
//! let scale = Scale::from_tuning(260.0, &Tuning::Cents(vec![240.0, 480.0, 720.0, 960.0, 1200.0]))?;
//! let decodex = ScaleDecoder::build(&scale, Some(&[1, 2, 3, 5, 6]))?;
//! let cadence = ScoreAssembler::new(&decodex).assemble("6 5 (1 5) 2", &Rhythm::Constant(0.5))?;
//! ```

pub mod assembler;
pub mod cadence;
pub mod decodex;
pub mod error;
pub mod notation;
pub mod rhythm;
pub mod sample_bank;
pub mod scale;

pub use assembler::ScoreAssembler;
pub use cadence::{Cadence, Chord, Pitch};
pub use decodex::{default_codes, Decodex, ScaleCode, ScaleDecoder};
pub use error::{Error, ErrorKind, Result};
pub use notation::{parse_notation, read_notation, Harmonies, COMMENT_MARKER, REST_TOKEN};
pub use rhythm::{parse_rhythm, read_rhythm, Rhythm};
pub use sample_bank::{ResolvedSample, SampleBank, SampleId};
pub use scale::{Scale, Tuning};
