use std::path::PathBuf;

use crate::args::Args;
use crate::options::OutputFormat;

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub path: PathBuf,
    pub selections: Vec<String>,
    pub content_type: Option<String>,
    pub format: OutputFormat,
    pub skip_gate: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            path: args.path,
            selections: args.select,
            content_type: args.content_type,
            format: args.format,
            skip_gate: args.all,
        }
    }
}
