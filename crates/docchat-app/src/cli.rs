use std::path::PathBuf;

use clap::Parser;

/// docchat — chat with your documents from the terminal.
#[derive(Parser, Debug)]
#[command(name = "docchat", version, about)]
pub struct Args {
    /// Documents to load and process at startup (pdf, docx, txt).
    pub documents: Vec<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Model identifier override.
    #[arg(long)]
    pub model: Option<String>,

    /// Initial answer style (teacher, summary, examples, bullets).
    #[arg(long)]
    pub style: Option<String>,

    /// Log filter directive override (e.g. docchat=debug).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
