//! Backend that keeps the hand-off texts instead of rendering them

use super::{RenderStatus, RendererBackend};
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes `<output>.orc` and `<output>.sco` next to the requested output
///
/// Useful for inspecting a score or rendering it later by hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreFilesBackend;

impl ScoreFilesBackend {
    /// Paths the texts for `output` are written to
    pub fn paths(output: &Path) -> (PathBuf, PathBuf) {
        (output.with_extension("orc"), output.with_extension("sco"))
    }
}

impl RendererBackend for ScoreFilesBackend {
    fn name(&self) -> &str {
        "score-files"
    }

    fn render(&self, orchestra: &str, score: &str, output: &Path) -> Result<RenderStatus> {
        let (orc, sco) = Self::paths(output);
        std::fs::write(&orc, orchestra)?;
        std::fs::write(&sco, score)?;
        info!("Wrote {} and {}", orc.display(), sco.display());
        Ok(RenderStatus::SUCCESS)
    }
}
