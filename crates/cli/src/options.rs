use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Per-section lines followed by the status headline.
    Text,
    /// The full analysis result as JSON.
    Json,
}
