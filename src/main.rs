//! Rebate command line calculator

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use rebate::{
    cli::{CalculatorArgs, TerminalBell, init_tracing, run_session},
    config::Config,
    feedback::{Feedback, NoopFeedback},
    state::AppState,
    summary::Summary,
};

fn main() -> Result<()> {
    let args = CalculatorArgs::parse();

    init_tracing(&args.log_level)?;

    let config = match &args.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };

    let feedback: Box<dyn Feedback> = if args.bell {
        Box::new(TerminalBell)
    } else {
        Box::new(NoopFeedback)
    };

    let state = args
        .events()
        .into_iter()
        .fold(AppState::from_config(&config), |state, event| {
            state.update(event, &feedback)
        });

    if args.interactive {
        run_session(io::stdin().lock(), io::stdout().lock(), state, &feedback)?;
    } else {
        Summary::from(&state.view()).write_to(io::stdout().lock())?;
    }

    Ok(())
}
