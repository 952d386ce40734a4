//! Evaluate command handler
//!
//! Parses a transcript from a file or standard input, evaluates it and writes
//! the report.

use nu_transcript::config::Config;
use nu_transcript::core::{
    evaluate,
    report::{reporter_for, ReportContext, ReportFormat},
    transcript::parse_transcript,
};
use nu_transcript::{error, info, verbose};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

/// Run the evaluate command.
///
/// # Arguments
/// * `input_file` - Transcript path, or `None` for standard input
/// * `output_file` - Report path, or `None` for standard output. A path
///   without an extension gets the format's extension.
/// * `format` - Report format
/// * `config` - Configuration (reader line limit)
///
/// # Errors
/// Returns a printable message if reading, parsing or writing fails
pub fn run(
    input_file: Option<&Path>,
    output_file: Option<&Path>,
    format: ReportFormat,
    config: &Config,
) -> Result<(), String> {
    let source = input_file.map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
    let max_line_length = config.transcript.max_line_length;

    let parsed = match input_file {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                error!("Failed to open transcript {source}: {e}");
                format!("✗ Failed to open {source}: {e}")
            })?;
            parse_transcript(BufReader::new(file), max_line_length)
        }
        None => parse_transcript(io::stdin().lock(), max_line_length),
    };
    let transcript = parsed.map_err(|e| {
        error!("Failed to parse transcript {source}: {e}");
        format!("✗ Failed to parse {source}: {e}")
    })?;

    verbose!(
        "✓ Transcript loaded from {source}: {} records, {} courses",
        transcript.len(),
        transcript.course_count()
    );
    info!("Transcript loaded: {source}");

    let evaluation = evaluate(&transcript);
    let ctx = ReportContext::new(&transcript, &evaluation);
    let reporter = reporter_for(format);

    if let Some(path) = output_file {
        let path = if path.extension().is_none() {
            path.with_extension(format.extension())
        } else {
            path.to_path_buf()
        };
        reporter.generate(&ctx, &path).map_err(|e| {
            error!("Failed to write report {}: {e}", path.display());
            format!("✗ Failed to write report to {}: {e}", path.display())
        })?;
        verbose!("✓ {format} report written to: {}", path.display());
        info!("Report written: {}", path.display());
    } else {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(reporter.render(&ctx).as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| format!("✗ Failed to write report: {e}"))?;
    }

    Ok(())
}
