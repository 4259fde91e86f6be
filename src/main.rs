//! Entry point for the ARB to spreadsheet converter.

use std::process::ExitCode;

use arb_to_xlsx::{
    ConversionReport,
    ConvertError,
    config::ConvertSettings,
    convert_directory,
    input::DiscoveryError,
};

/// Exits with status 1 when the conversion fails.
fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    match run() {
        Ok(report) => {
            tracing::info!(
                output = %report.output_path.display(),
                files = report.file_count,
                locales = ?report.locales,
                keys = report.key_count,
                missing = report.missing_translations,
                "Wrote translation spreadsheet"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Converts the locale files of the current working directory.
fn run() -> Result<ConversionReport, ConvertError> {
    let working_dir = std::env::current_dir().map_err(|e| ConvertError::Discovery {
        path: ".".into(),
        source: DiscoveryError::Io(e),
    })?;

    convert_directory(&working_dir, &ConvertSettings::default())
}
