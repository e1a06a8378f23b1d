//! Command line entry point.
//!
//! ```text
//! quenzer <instrument.json> <output-name> <pitches> <rhythm> [--score-only]
//! ```
//!
//! `<rhythm>` is a number (one duration for every chord), a JSON list of
//! durations such as `[0.5,0.25,1]`, or a rhythm file. With `--score-only`
//! the orchestra and score are written next to the output instead of running
//! csound.

use quenzer::prelude::*;
use std::process::ExitCode;

fn usage() -> ExitCode {
    eprintln!("usage: quenzer <instrument.json> <output-name> <pitches> <rhythm> [--score-only]");
    ExitCode::from(2)
}

fn rhythm_arg(arg: &str) -> quenzer::Result<Rhythm> {
    match serde_json::from_str::<serde_json::Value>(arg) {
        Ok(value) => Ok(Rhythm::from_json(&value)?),
        // not JSON: a rhythm file path
        Err(_) => Ok(Rhythm::from_source(arg)),
    }
}

fn run(
    config: &str,
    output: &str,
    pitches: &str,
    rhythm: &str,
    score_only: bool,
) -> quenzer::Result<()> {
    let rhythm = rhythm_arg(rhythm)?;
    let mut builder = InstrumentBuilder::from_config(InstrumentConfig::load(config)?);
    if score_only {
        builder = builder.backend(ScoreFilesBackend);
    }
    let mut instrument = builder.build()?;

    match instrument.invoke(output, pitches, rhythm)? {
        Some(path) => tracing::info!("Wrote {}", path.display()),
        None => tracing::warn!("Score for {} has no notes; nothing rendered", output),
    }
    Ok(())
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let score_only = match args.iter().position(|a| a == "--score-only") {
        Some(i) => {
            args.remove(i);
            true
        }
        None => false,
    };

    let [config, output, pitches, rhythm] = args.as_slice() else {
        return usage();
    };

    match run(config, output, pitches, rhythm, score_only) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
