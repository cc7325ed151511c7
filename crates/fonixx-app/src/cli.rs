use std::path::PathBuf;

use clap::Parser;

/// Fonixx Consultancy site, rendered in a native window.
#[derive(Parser, Debug)]
#[command(name = "fonixx", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the site's HTML and CSS.
    #[arg(long)]
    pub site: Option<PathBuf>,

    /// Log filter directive override (e.g. `fonixx=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Page to open, relative to the site directory.
    #[arg(long)]
    pub page: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
