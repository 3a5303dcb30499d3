//! # sitegen
//!
//! Builds the static homepage: loads the site config, renders the page with
//! `homepage-leptos` and writes `index.html` into the output directory.
//!
//! ## Usage
//!
//! ```bash
//! # siteConfig.toml -> build/index.html + build/en/index.html
//! sitegen
//!
//! # JSON config, custom output dir, no language copy
//! sitegen --config siteConfig.json --out-dir public --lang ""
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use homepage_leptos::{render_homepage, render_index, SiteConfig};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "sitegen")]
#[command(about = "Render the website homepage to static HTML")]
#[command(version)]
struct Args {
    /// Site configuration file (.toml or .json)
    #[arg(long, default_value = "siteConfig.toml")]
    config: PathBuf,

    /// Directory the rendered pages are written to
    #[arg(long, default_value = "build")]
    out_dir: PathBuf,

    /// Also write <out-dir>/<lang>/index.html (empty to skip)
    #[arg(long, default_value = "en")]
    lang: String,

    /// Write only the page body instead of a full HTML document
    #[arg(long)]
    fragment: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn write_page(dir: &Path, html: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = dir.join("index.html");
    std::fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

fn run(args: Args) -> Result<()> {
    let config = SiteConfig::load(&args.config)
        .with_context(|| format!("Failed to load site config from {}", args.config.display()))?;
    debug!(?config, "site config");

    let html = if args.fragment {
        render_index(&config)
    } else {
        render_homepage(&config)
    };

    let mut targets = vec![args.out_dir.clone()];
    if !args.lang.is_empty() {
        targets.push(args.out_dir.join(&args.lang));
    }

    for dir in targets {
        let path = write_page(&dir, &html)?;
        info!(path = %path.display(), bytes = html.len(), "wrote homepage");
    }

    info!(
        pinned = config.pinned_apps().count(),
        users = config.users.len(),
        "homepage build complete"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout stays clean for piping
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
