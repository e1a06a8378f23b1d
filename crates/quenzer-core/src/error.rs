//! Error types for quenzer-core.

use std::io;
use thiserror::Error;

/// Broad class of a failure, independent of the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid construction or assembly input.
    Configuration,
    /// Notation that cannot be decoded against the decodex.
    Decode,
    /// A pitch with no eligible sample anchor.
    Lookup,
    /// Reading a source or writing a hand-off file failed.
    Io,
    /// The external renderer process failed.
    ExternalProcess,
}

/// Error type for quenzer-core operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Scale is empty; at least the unison pitch is required")]
    EmptyScale,

    #[error(
        "Scale and decode table have to be equally long: scale has {scale_len} pitches \
         ({steps} after the unison) and the decode table has {codes_len} codes",
        steps = .scale_len.saturating_sub(1)
    )]
    ScaleLengthMismatch { scale_len: usize, codes_len: usize },

    #[error("Decode code {0} appears more than once in the decode table")]
    DuplicateCode(u32),

    #[error("Invalid frequency: {0} Hz. Must be finite and positive")]
    InvalidFrequency(f64),

    #[error("Sample anchor at {0} Hz has no samples")]
    EmptyAnchor(f64),

    #[error("Sample anchor at {0} Hz is listed twice")]
    DuplicateAnchor(f64),

    #[error("Unsupported rhythm type '{0}'; expected a number, a path or a list of numbers")]
    UnsupportedRhythm(String),

    #[error("Rhythm has {durations} durations but the score has {chords} chords")]
    RhythmLengthMismatch { chords: usize, durations: usize },

    #[error("Invalid duration: {0}. Must be finite and non-negative")]
    InvalidDuration(f64),

    #[error("Invalid rhythm token '{token}' on line {line}")]
    InvalidRhythmToken { token: String, line: usize },

    #[error("Unknown scale code {code} on line {line}")]
    UnknownCode { code: String, line: usize },

    #[error("Malformed notation on line {line}: {reason}")]
    MalformedNotation { line: usize, reason: String },

    #[error("No sample anchor at or below {target} Hz (lowest anchor: {})", lowest_anchor(.lowest))]
    NoAnchorBelow { target: f64, lowest: Option<f64> },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn lowest_anchor(lowest: &Option<f64>) -> String {
    match lowest {
        Some(freq) => format!("{} Hz", freq),
        None => "catalogue is empty".to_string(),
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownCode { .. } | Error::MalformedNotation { .. } => ErrorKind::Decode,
            Error::NoAnchorBelow { .. } => ErrorKind::Lookup,
            Error::Io(_) => ErrorKind::Io,
            _ => ErrorKind::Configuration,
        }
    }
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_names_both_lengths() {
        let err = Error::ScaleLengthMismatch {
            scale_len: 6,
            codes_len: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("6 pitches"));
        assert!(msg.contains("4 codes"));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_kinds() {
        let decode = Error::UnknownCode {
            code: "7".into(),
            line: 2,
        };
        assert_eq!(decode.kind(), ErrorKind::Decode);

        let lookup = Error::NoAnchorBelow {
            target: 100.0,
            lowest: None,
        };
        assert_eq!(lookup.kind(), ErrorKind::Lookup);
        assert!(lookup.to_string().contains("catalogue is empty"));
    }
}
