//! Error types for quenzer-export

use quenzer_core::ErrorKind;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Export error type
#[derive(Error, Debug)]
pub enum ExportError {
    /// Sample resolution or other core failure during rendering
    #[error(transparent)]
    Core(#[from] quenzer_core::Error),

    /// I/O error while writing hand-off files or spawning the renderer
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Only mono and stereo are supported
    #[error("{0} channels requested. Only mono or stereo files are allowed (1 or 2 channels)")]
    InvalidChannelCount(u8),

    /// Invalid render options
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// The renderer process exited unsuccessfully
    #[error("Renderer '{renderer}' failed for {}: {}", .output.display(), exit_code(.code))]
    RendererFailed {
        renderer: String,
        output: PathBuf,
        code: Option<i32>,
    },
}

fn exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl ExportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExportError::Core(e) => e.kind(),
            ExportError::Io(_) => ErrorKind::Io,
            ExportError::InvalidChannelCount(_) | ExportError::InvalidOptions(_) => {
                ErrorKind::Configuration
            }
            ExportError::RendererFailed { .. } => ErrorKind::ExternalProcess,
        }
    }
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
