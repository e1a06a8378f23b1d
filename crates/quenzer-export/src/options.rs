//! Render options.

use crate::error::{ExportError, Result};
use std::path::PathBuf;

/// Output channel layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channels {
    #[default]
    Mono,
    Stereo,
}

impl Channels {
    pub fn count(&self) -> u8 {
        match self {
            Channels::Mono => 1,
            Channels::Stereo => 2,
        }
    }
}

impl TryFrom<u8> for Channels {
    type Error = ExportError;

    fn try_from(count: u8) -> Result<Self> {
        match count {
            1 => Ok(Channels::Mono),
            2 => Ok(Channels::Stereo),
            n => Err(ExportError::InvalidChannelCount(n)),
        }
    }
}

/// Sample format of the rendered file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleFormat {
    Short,
    Long,
    Float,
    #[default]
    Double,
}

impl SampleFormat {
    /// Value of csound's `--format=` flag.
    pub fn csound_name(&self) -> &'static str {
        match self {
            SampleFormat::Short => "short",
            SampleFormat::Long => "long",
            SampleFormat::Float => "float",
            SampleFormat::Double => "double",
        }
    }
}

/// Options for the csound renderer process.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Renderer executable, looked up on `PATH` when relative.
    pub program: PathBuf,
    pub sample_format: SampleFormat,
    /// Audio sample rate in Hz.
    pub sample_rate: u32,
    /// Control rate in Hz.
    pub control_rate: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            program: PathBuf::from("csound"),
            sample_format: SampleFormat::Double,
            sample_rate: 96000,
            control_rate: 96000,
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 || self.control_rate == 0 {
            return Err(ExportError::InvalidOptions(format!(
                "sample rate ({}) and control rate ({}) must be positive",
                self.sample_rate, self.control_rate
            )));
        }
        if self.sample_rate % self.control_rate != 0 {
            return Err(ExportError::InvalidOptions(format!(
                "sample rate {} is not a multiple of control rate {}",
                self.sample_rate, self.control_rate
            )));
        }
        Ok(())
    }
}
