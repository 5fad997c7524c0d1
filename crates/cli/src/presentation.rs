// crates/cli/src/presentation.rs
use std::fmt::Write;

use readme_count_domain::model::AnalysisResult;
use readme_count_shared_kernel::Result;

use crate::config::Config;
use crate::options::OutputFormat;

/// Render one `"<name>: <count> Words"` line per section, in document order.
pub fn render_sections(result: &AnalysisResult) -> String {
    let mut out = String::new();
    for (name, words) in result.section_counts.iter() {
        writeln!(out, "{name}: {words} Words").unwrap();
    }
    out
}

/// Render the one-line status summary.
pub fn render_status(result: &AnalysisResult) -> String {
    let mut status = String::from("Readme: ");
    status.push_str(if result.is_over_limit { "Overlimit" } else { "OK" });
    if result.has_selection {
        write!(status, " | Selected: {} Words", result.selection.words).unwrap();
    }
    status
}

pub fn print_results(result: &AnalysisResult, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Text => {
            print!("{}", render_sections(result));
            println!("{}", render_status(result));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result)?;
            println!("{json}");
        }
    }
    Ok(())
}
