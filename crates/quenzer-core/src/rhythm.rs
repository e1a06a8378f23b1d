//! Rhythm sources.

use crate::error::{Error, Result};
use crate::notation::content_lines;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Where the chord durations of a score come from.
#[derive(Debug, Clone, PartialEq)]
pub enum Rhythm {
    /// One duration for every chord.
    Constant(f64),
    /// Text file of whitespace separated durations.
    FromSource(PathBuf),
    /// One duration per chord, in order.
    Explicit(Vec<f64>),
}

impl Rhythm {
    pub fn from_source(path: impl AsRef<Path>) -> Self {
        Rhythm::FromSource(path.as_ref().to_path_buf())
    }

    /// Interpret a dynamically typed rhythm value.
    ///
    /// Numbers become [`Rhythm::Constant`], strings [`Rhythm::FromSource`] and
    /// arrays of numbers [`Rhythm::Explicit`].
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .map(Rhythm::Constant)
                .ok_or_else(|| Error::UnsupportedRhythm(format!("number {}", n))),
            Value::String(path) => Ok(Rhythm::FromSource(PathBuf::from(path))),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_f64()
                        .ok_or_else(|| Error::UnsupportedRhythm(format!("array of {}", json_type(item))))
                })
                .collect::<Result<Vec<_>>>()
                .map(Rhythm::Explicit),
            other => Err(Error::UnsupportedRhythm(json_type(other).to_string())),
        }
    }

    /// Durations for a score of `chords` chords.
    pub fn durations(&self, chords: usize) -> Result<Vec<f64>> {
        let durations = match self {
            Rhythm::Constant(value) => vec![*value; chords],
            Rhythm::FromSource(path) => read_rhythm(path)?,
            Rhythm::Explicit(values) => values.clone(),
        };

        if durations.len() != chords {
            return Err(Error::RhythmLengthMismatch {
                chords,
                durations: durations.len(),
            });
        }
        if let Some(&bad) = durations.iter().find(|d| !d.is_finite() || **d < 0.0) {
            return Err(Error::InvalidDuration(bad));
        }

        Ok(durations)
    }
}

impl From<f64> for Rhythm {
    fn from(value: f64) -> Self {
        Rhythm::Constant(value)
    }
}

impl From<Vec<f64>> for Rhythm {
    fn from(values: Vec<f64>) -> Self {
        Rhythm::Explicit(values)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse rhythm text: comment and blank lines skipped, all tokens joined.
pub fn parse_rhythm(source: &str) -> Result<Vec<f64>> {
    let mut durations = Vec::new();
    for (line_no, line) in content_lines(source) {
        for token in line.split_whitespace() {
            let value = token
                .parse::<f64>()
                .map_err(|_| Error::InvalidRhythmToken {
                    token: token.to_string(),
                    line: line_no,
                })?;
            durations.push(value);
        }
    }
    Ok(durations)
}

/// Read and parse a rhythm file.
pub fn read_rhythm(path: impl AsRef<Path>) -> Result<Vec<f64>> {
    let source = std::fs::read_to_string(path.as_ref())?;
    parse_rhythm(&source)
}
