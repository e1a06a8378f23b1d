//! Centralized error type for the quenzer umbrella crate.
//!
//! Wraps the subsystem errors so `?` propagates across crate boundaries.

use quenzer_core::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] quenzer_core::Error),

    #[error("Export: {0}")]
    Export(#[from] quenzer_export::ExportError),

    #[error("Invalid instrument file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Failure class shared by all quenzer crates.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Core(e) => e.kind(),
            Error::Export(e) => e.kind(),
            Error::Config { .. } => ErrorKind::Configuration,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
