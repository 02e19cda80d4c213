//! CLI command definitions and dispatch.
//!
//! Running with no command (or `grab` without a URL) prompts for a URL on
//! stdin and runs the full pipeline. The other subcommands exercise single
//! collaborators:
//! - `lookup`: MusicBrainz catalog search
//! - `write-tags`: tag an existing audio file
//! - `check-tools`: report yt-dlp and Ollama availability

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

use crate::domain::{CatalogRecord, TrackIdentity};
use crate::{catalog, config, fetcher, normalizer, pipeline, tagger};

/// TuneGrab CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Download a track, clean its title, enrich it, and tag it
    Grab {
        /// Source URL (prompted for interactively when omitted)
        url: Option<String>,
        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Ollama model for title cleanup (overrides config)
        #[arg(short, long, env = "TUNEGRAB_MODEL")]
        model: Option<String>,
    },
    /// Search the MusicBrainz catalog for album/year
    Lookup {
        /// Song title
        song: String,
        /// Artist name
        #[arg(default_value = "")]
        artist: String,
    },
    /// Write metadata to an audio file
    WriteTags {
        /// Path to the audio file
        path: PathBuf,
        /// Track title
        #[arg(long)]
        title: String,
        /// Artist name
        #[arg(long)]
        artist: String,
        /// Album name
        #[arg(long)]
        album: Option<String>,
        /// Release year
        #[arg(long)]
        year: Option<String>,
        /// Cover image to embed
        #[arg(long)]
        cover: Option<PathBuf>,
    },
    /// Check if external tools are installed and reachable
    CheckTools,
    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists yet
        #[arg(long)]
        init: bool,
    },
}

/// Run the specified CLI command. No command runs the interactive grab.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;

    match &cli.command {
        Some(Commands::Grab { url, output, model }) => {
            cmd_grab(&rt, url.as_deref(), output.as_deref(), model.as_deref())
        }
        Some(Commands::Lookup { song, artist }) => cmd_lookup(&rt, song, artist),
        Some(Commands::WriteTags {
            path,
            title,
            artist,
            album,
            year,
            cover,
        }) => cmd_write_tags(
            path,
            title,
            artist,
            album.as_deref(),
            year.as_deref(),
            cover.as_deref(),
        ),
        Some(Commands::CheckTools) => cmd_check_tools(&rt),
        Some(Commands::Config { init }) => cmd_config(*init),
        None => cmd_grab(&rt, None, None, None),
    }
}

/// Run the full pipeline for one URL
fn cmd_grab(
    rt: &Runtime,
    url: Option<&str>,
    output: Option<&Path>,
    model: Option<&str>,
) -> anyhow::Result<()> {
    let mut config = config::load();
    if let Some(dir) = output {
        config.output.directory = dir.to_path_buf();
    }
    if let Some(name) = model {
        config.model.name = name.to_string();
    }

    // Check yt-dlp is available before prompting
    if !fetcher::is_ytdlp_available() {
        print_ytdlp_install_instructions();
        std::process::exit(1);
    }

    let url = match url {
        Some(u) => u.trim().to_string(),
        None => prompt_for_url()?,
    };
    if url.is_empty() {
        anyhow::bail!("No URL given");
    }

    let pipeline = pipeline::Pipeline::new(&config);
    rt.block_on(pipeline.run(&url))?;
    Ok(())
}

/// Search the catalog and print the result
fn cmd_lookup(rt: &Runtime, song: &str, artist: &str) -> anyhow::Result<()> {
    rt.block_on(async {
        let client = catalog::CatalogClient::new();
        match client.search(song, artist).await {
            Ok(record) if record.is_empty() => {
                println!("✗ No catalog match for \"{} {}\"", song, artist);
            }
            Ok(record) => {
                println!("✓ Match found!");
                if !record.album.is_empty() {
                    println!("  Album: {}", record.album);
                }
                if !record.year.is_empty() {
                    println!("  Year:  {}", record.year);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    });
    Ok(())
}

/// Write metadata to an audio file
fn cmd_write_tags(
    path: &Path,
    title: &str,
    artist: &str,
    album: Option<&str>,
    year: Option<&str>,
    cover: Option<&Path>,
) -> anyhow::Result<()> {
    let identity = TrackIdentity::new(title, artist);
    let record = CatalogRecord {
        album: album.unwrap_or_default().to_string(),
        year: year.unwrap_or_default().to_string(),
    };

    match tagger::write_tags(path, &identity, &record, cover) {
        Ok(()) => {
            println!("✓ Tags written to {:?}", path);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error writing tags: {}", e);
            std::process::exit(1);
        }
    }
}

/// Check if external tools are installed
fn cmd_check_tools(rt: &Runtime) -> anyhow::Result<()> {
    println!("Checking external tools...\n");

    // Check yt-dlp
    if let Some(version) = fetcher::get_ytdlp_version() {
        println!("✓ yt-dlp: {}", version);
    } else {
        println!("✗ yt-dlp: NOT FOUND");
        print_ytdlp_install_instructions();
    }

    // Check Ollama
    let config = config::load();
    let reachable = rt.block_on(async {
        normalizer::OllamaClient::new(&config.model.endpoint, &config.model.name)
            .is_reachable()
            .await
    });
    if reachable {
        println!("✓ Ollama: reachable at {}", config.model.endpoint);
    } else {
        println!("✗ Ollama: not reachable at {}", config.model.endpoint);
        println!("  Title cleanup will fall back to raw titles.");
    }

    Ok(())
}

/// Show (and optionally initialize) the configuration
fn cmd_config(init: bool) -> anyhow::Result<()> {
    if init {
        match config::config_path() {
            Some(path) if path.exists() => {
                println!("Config file already exists at {:?}", path);
            }
            Some(path) => {
                config::save(&config::Config::default())?;
                println!("✓ Wrote default config to {:?}", path);
            }
            None => anyhow::bail!("Could not determine config directory"),
        }
    }

    let config = config::load();
    if let Some(path) = config::config_path() {
        println!("# {}", path.display());
    }
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Read one URL from stdin
fn prompt_for_url() -> anyhow::Result<String> {
    print!("Enter URL: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Print installation instructions for yt-dlp
fn print_ytdlp_install_instructions() {
    eprintln!("Error: yt-dlp not found.");
    eprintln!("Install yt-dlp:");
    eprintln!("  Windows: winget install yt-dlp.yt-dlp");
    eprintln!("  macOS:   brew install yt-dlp");
    eprintln!("  Linux:   apt install yt-dlp (or pip install yt-dlp)");
}
