//! Csound process backend

use super::{RenderStatus, RendererBackend};
use crate::error::Result;
use crate::options::RenderOptions;
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Runs the `csound` command line on temporary orchestra and score files
///
/// The files are removed once the process has exited, whatever its outcome.
#[derive(Debug, Clone, Default)]
pub struct CsoundBackend {
    options: RenderOptions,
}

impl CsoundBackend {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Command line arguments after the program name
    pub fn arguments(&self, orchestra: &Path, score: &Path, output: &Path) -> Vec<OsString> {
        let o = &self.options;
        vec![
            format!("--format={}", o.sample_format.csound_name()).into(),
            "-k".into(),
            o.control_rate.to_string().into(),
            "-r".into(),
            o.sample_rate.to_string().into(),
            "-o".into(),
            output.into(),
            orchestra.into(),
            score.into(),
        ]
    }
}

fn write_handoff(text: &str, suffix: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("quenzer-")
        .suffix(suffix)
        .tempfile()?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    Ok(file)
}

impl RendererBackend for CsoundBackend {
    fn name(&self) -> &str {
        "csound"
    }

    fn render(&self, orchestra: &str, score: &str, output: &Path) -> Result<RenderStatus> {
        self.options.validate()?;

        let orc = write_handoff(orchestra, ".orc")?;
        let sco = write_handoff(score, ".sco")?;
        let args = self.arguments(orc.path(), sco.path(), output);

        debug!("Running {} {:?}", self.options.program.display(), args);
        let status = Command::new(&self.options.program).args(&args).status()?;
        let status = RenderStatus::from(status);

        if status.success() {
            info!("Rendered {}", output.display());
        } else {
            warn!("csound exited with {:?} rendering {}", status.code, output.display());
        }

        // orc and sco are deleted when dropped here
        Ok(status)
    }
}
