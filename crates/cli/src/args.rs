use std::path::PathBuf;

use clap::Parser;

use crate::options::OutputFormat;

/// Section-aware word counts and limit status for readme files.
#[derive(Debug, Parser)]
#[command(name = "readme_count", version = crate::VERSION)]
pub struct Args {
    /// Document to analyze.
    pub path: PathBuf,

    /// Selection fragment to aggregate into the selection count; repeatable.
    #[arg(long = "select", value_name = "TEXT")]
    pub select: Vec<String>,

    /// Override the content type derived from the file extension.
    #[arg(long, value_name = "KIND")]
    pub content_type: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Analyze even documents the eligibility gate would suppress.
    #[arg(long)]
    pub all: bool,
}
