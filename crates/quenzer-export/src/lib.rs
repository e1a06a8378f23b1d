//! # quenzer Export
//!
//! Turns an assembled cadence into renderer instructions and hands them to
//! an external renderer.
//!
//! - **EventRenderer**: cadence + sample bank into an [`InstructionList`]
//! - **Formats**: csound orchestra template and score lines
//! - **Backends**: the csound process, or plain score files for inspection
//!
//! ```ignore
//! use quenzer_export::{hand_off, Channels, CsoundBackend, EventRenderer, Orchestra};
//!
//! let list = EventRenderer::default().render(&cadence, &mut bank)?;
//! let orchestra = Orchestra::new(Channels::Stereo, 0.4);
//! hand_off(&CsoundBackend::default(), &orchestra, &list, "output/piece.wav")?;
//! ```

pub mod backend;
pub mod error;
pub mod format;
pub mod instruction;
mod options;
pub mod renderer;

pub use backend::{CsoundBackend, RenderStatus, RendererBackend, ScoreFilesBackend};
pub use error::{ExportError, Result};
pub use format::{score_text, Orchestra};
pub use instruction::{GlobalEffectInstruction, InstructionList, PlaybackInstruction};
pub use options::{Channels, RenderOptions, SampleFormat};
pub use renderer::{EventRenderer, EventSettings, RELEASE_EPSILON, REVERB_TAIL};

use std::path::Path;
use tracing::debug;

/// Render `list` through `backend` into `output`.
///
/// A silent list writes nothing and returns `Ok(false)`. A backend that
/// reports failure becomes [`ExportError::RendererFailed`].
pub fn hand_off(
    backend: &dyn RendererBackend,
    orchestra: &Orchestra,
    list: &InstructionList,
    output: impl AsRef<Path>,
) -> Result<bool> {
    let output = output.as_ref();
    if list.is_silent() {
        debug!("Nothing to render for {}", output.display());
        return Ok(false);
    }

    let status = backend.render(&orchestra.to_string(), &score_text(list), output)?;
    if !status.success() {
        return Err(ExportError::RendererFailed {
            renderer: backend.name().to_string(),
            output: output.to_path_buf(),
            code: status.code,
        });
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Fixed {
        status: RenderStatus,
        calls: RefCell<Vec<String>>,
    }

    impl RendererBackend for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn render(&self, _orchestra: &str, score: &str, _output: &Path) -> Result<RenderStatus> {
            self.calls.borrow_mut().push(score.to_string());
            Ok(self.status)
        }
    }

    fn list(silent: bool) -> InstructionList {
        let playback = if silent {
            vec![]
        } else {
            vec![PlaybackInstruction {
                onset: 0.0,
                duration: 1.0,
                sample: "a.wav".into(),
                factor: 1.0,
                volume: 1.0,
                release: 0.1,
            }]
        };
        InstructionList {
            playback,
            global: GlobalEffectInstruction {
                start: 0.0,
                duration: 6.0,
            },
        }
    }

    #[test]
    fn test_silent_list_is_not_rendered() {
        let backend = Fixed {
            status: RenderStatus::SUCCESS,
            calls: RefCell::new(vec![]),
        };
        let orchestra = Orchestra::new(Channels::Mono, 0.4);
        assert!(!hand_off(&backend, &orchestra, &list(true), "x.wav").unwrap());
        assert!(backend.calls.borrow().is_empty());

        assert!(hand_off(&backend, &orchestra, &list(false), "x.wav").unwrap());
        assert_eq!(backend.calls.borrow().len(), 1);
    }

    #[test]
    fn test_failed_render_is_reported() {
        let backend = Fixed {
            status: RenderStatus { code: Some(1) },
            calls: RefCell::new(vec![]),
        };
        let orchestra = Orchestra::new(Channels::Mono, 0.4);
        let err = hand_off(&backend, &orchestra, &list(false), "x.wav").unwrap_err();
        assert!(matches!(
            err,
            ExportError::RendererFailed { code: Some(1), .. }
        ));
        assert_eq!(err.kind(), quenzer_core::ErrorKind::ExternalProcess);
        assert!(err.to_string().contains("exit code 1"));
    }
}
