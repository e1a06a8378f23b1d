//! Scale-degree decoding.
//!
//! The decode table labels every scale step after the unison with an
//! integer code as written in scale-function notation. The unison itself is
//! never labelled.

use crate::error::{Error, Result};
use crate::scale::Scale;
use std::collections::BTreeMap;

/// Integer code used in scale-function notation.
pub type ScaleCode = u32;

/// Immutable mapping from scale code to absolute frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct Decodex {
    codes: Vec<ScaleCode>,
    frequencies: BTreeMap<ScaleCode, f64>,
}

/// Builds a [`Decodex`] from a scale and its decode table.
pub struct ScaleDecoder;

impl ScaleDecoder {
    /// Zip `codes` with the scale steps after the unison.
    ///
    /// With `codes == None` the table defaults to `1..scale.len()`.
    pub fn build(scale: &Scale, codes: Option<&[ScaleCode]>) -> Result<Decodex> {
        let codes: Vec<ScaleCode> = match codes {
            Some(codes) => codes.to_vec(),
            None => default_codes(scale.len()),
        };

        if codes.len() + 1 != scale.len() {
            return Err(Error::ScaleLengthMismatch {
                scale_len: scale.len(),
                codes_len: codes.len(),
            });
        }

        let mut frequencies = BTreeMap::new();
        for (&code, &freq) in codes.iter().zip(scale.steps()) {
            if frequencies.insert(code, freq).is_some() {
                return Err(Error::DuplicateCode(code));
            }
        }

        Ok(Decodex { codes, frequencies })
    }
}

/// `1..len`, one code per step after the unison.
pub fn default_codes(scale_len: usize) -> Vec<ScaleCode> {
    (1..scale_len as ScaleCode).collect()
}

impl Decodex {
    pub fn get(&self, code: ScaleCode) -> Option<f64> {
        self.frequencies.get(&code).copied()
    }

    pub fn contains(&self, code: ScaleCode) -> bool {
        self.frequencies.contains_key(&code)
    }

    /// Codes in decode-table order.
    pub fn codes(&self) -> &[ScaleCode] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// `(code, frequency)` pairs ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = (ScaleCode, f64)> + '_ {
        self.frequencies.iter().map(|(&c, &f)| (c, f))
    }
}
