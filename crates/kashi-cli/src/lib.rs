//! Command implementations behind the `kashitool` binary.

pub mod commands;
pub mod ruby;
pub mod trace_init;

use std::io;

use kashi_core::segment::LexiconError;
use kashi_core::ProcessError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Input { path: String, source: io::Error },
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
    #[error(transparent)]
    Process(#[from] ProcessError),
}
