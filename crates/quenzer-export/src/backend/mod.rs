//! Renderer backends
//!
//! A backend receives the orchestra and score texts and produces the audio
//! file. The core never spawns processes itself.

pub mod csound;
pub mod files;

pub use csound::CsoundBackend;
pub use files::ScoreFilesBackend;

use crate::error::Result;
use std::path::Path;
use std::process::ExitStatus;

/// Outcome reported by a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStatus {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
}

impl RenderStatus {
    pub const SUCCESS: RenderStatus = RenderStatus { code: Some(0) };

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for RenderStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// External renderer collaborator
pub trait RendererBackend {
    /// Short name used in logs and errors
    fn name(&self) -> &str;

    /// Render `orchestra` and `score` into `output`.
    ///
    /// I/O failures are errors; an unsuccessful render is reported through
    /// the returned status.
    fn render(&self, orchestra: &str, score: &str, output: &Path) -> Result<RenderStatus>;
}

impl<B: RendererBackend + ?Sized> RendererBackend for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn render(&self, orchestra: &str, score: &str, output: &Path) -> Result<RenderStatus> {
        (**self).render(orchestra, score, output)
    }
}
