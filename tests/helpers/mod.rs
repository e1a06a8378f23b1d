//! Test helpers and fixtures for quenzer integration tests
//!
//! The gamelan fixture is a five-step scale at concert pitch 260 Hz
//! decoded with codes 1, 2, 3, 5, 6.

#![allow(dead_code)]

pub mod tolerances;

use quenzer::prelude::*;
use quenzer::RenderStatus;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const CONCERT_PITCH: f64 = 260.0;

pub const GAMELAN_CODES: [u32; 5] = [1, 2, 3, 5, 6];

pub const MELODY: &str = "# simple melody\n6 5 3 2\n(1 5) 2 3 2\n";

/// Frequencies of [`MELODY`], one chord per entry.
pub const MELODY_FREQS: [&[f64]; 8] = [
    &[1200.0],
    &[960.0],
    &[720.0],
    &[480.0],
    &[240.0, 960.0],
    &[480.0],
    &[720.0],
    &[480.0],
];

pub fn gamelan_tuning() -> Tuning {
    Tuning::Frequencies(vec![240.0, 480.0, 720.0, 960.0, 1200.0])
}

/// Anchors below every gamelan pitch; two takes on the low and mid anchors.
pub fn gamelan_builder() -> InstrumentBuilder {
    Instrument::builder(CONCERT_PITCH, gamelan_tuning())
        .decode_codes(GAMELAN_CODES)
        .sample(200.0, ["low0.wav", "low1.wav"])
        .sample(700.0, ["mid0.wav", "mid1.wav"])
        .sample(1000.0, ["high0.wav"])
}

/// One request received by [`RecordingBackend`].
#[derive(Debug, Clone)]
pub struct RenderCall {
    pub orchestra: String,
    pub score: String,
    pub output: PathBuf,
}

/// Backend that records what it is asked to render and answers with a
/// fixed status. Clones share the same record.
#[derive(Clone)]
pub struct RecordingBackend {
    calls: Rc<RefCell<Vec<RenderCall>>>,
    status: RenderStatus,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::with_status(RenderStatus::SUCCESS)
    }

    pub fn with_status(status: RenderStatus) -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            status,
        }
    }

    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.borrow().clone()
    }
}

impl RendererBackend for RecordingBackend {
    fn name(&self) -> &str {
        "recording"
    }

    fn render(
        &self,
        orchestra: &str,
        score: &str,
        output: &Path,
    ) -> quenzer::export::Result<RenderStatus> {
        self.calls.borrow_mut().push(RenderCall {
            orchestra: orchestra.to_string(),
            score: score.to_string(),
            output: output.to_path_buf(),
        });
        Ok(self.status)
    }
}

/// Write `contents` to `name` inside `dir`.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture");
    path
}

/// Fields of an `i1` score line: number, onset, duration, sample, factor,
/// volume, release.
pub fn playback_fields(line: &str) -> (f64, f64, String, f64, f64, f64) {
    let (head, rest) = line.split_once('"').expect("No sample name");
    let (sample, tail) = rest.split_once('"').expect("Unterminated sample name");

    let head: Vec<f64> = head
        .split_whitespace()
        .skip(1)
        .map(|t| t.parse().expect("Bad timing field"))
        .collect();
    let tail: Vec<f64> = tail
        .split_whitespace()
        .map(|t| t.parse().expect("Bad numeric field"))
        .collect();

    (head[0], head[1], sample.to_string(), tail[0], tail[1], tail[2])
}
