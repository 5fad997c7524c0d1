use std::process::ExitCode;

use clap::Parser;
use readme_count_cli::args::Args;
use readme_count_cli::config::Config;
use readme_count_cli::{filesystem, presentation};
use readme_count_domain::{analytics, policy};
use readme_count_shared_kernel::{ErrorContext, Result};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let content_type = config
        .content_type
        .clone()
        .unwrap_or_else(|| filesystem::content_type_of(&config.path));
    let filename = config.path.to_string_lossy();

    // Ineligible documents produce no output at all, mirroring a host that
    // hides its summary display.
    if !config.skip_gate && !policy::is_eligible(&content_type, &filename) {
        return Ok(());
    }

    let text = filesystem::read_document(&config.path)
        .with_context(|| format!("analyzing '{}'", config.path.display()))?;
    let result = analytics::analyze_text(&text, &config.selections);
    presentation::print_results(&result, config)
}
