//! TuneGrab - download a track from a video URL, clean its title with a
//! local language model, enrich it from MusicBrainz, and write a tagged
//! audio file with embedded cover art.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod cover;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod normalizer;
pub mod pipeline;
pub mod sanitize;
pub mod tagger;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("tunegrab=info".parse().unwrap()))
        .init();

    cli::run_command(&args)
}
