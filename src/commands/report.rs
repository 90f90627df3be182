use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::output::{
    ColorMode, JsonFormatter, OutputFormat, ReportFormatter, TextFormatter, write_report,
};
use crate::report::{FileProcessor, ScanReport, build_report};
use crate::scanner::{DirectoryScanner, ExtensionFilter};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

/// Effective settings for one run, after merging config and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub extensions: Vec<String>,
    pub exclude: Vec<String>,
    pub gitignore: bool,
    pub format: OutputFormat,
    pub color: ColorMode,
    pub quiet: bool,
}

impl ReportOptions {
    /// CLI flags take precedence over config values; exclude patterns are additive.
    #[must_use]
    pub fn resolve(cli: &Cli, config: Config) -> Self {
        let mut exclude = config.scanner.exclude;
        exclude.extend(cli.exclude.iter().cloned());

        Self {
            root: cli.root.clone(),
            output: cli.output.clone().unwrap_or(config.report.output),
            extensions: cli.ext.clone().unwrap_or(config.scanner.extensions),
            exclude,
            gitignore: cli.gitignore || config.scanner.gitignore,
            format: cli.format.unwrap_or(config.report.format),
            color: color_choice_to_mode(cli.color),
            quiet: cli.quiet,
        }
    }
}

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

#[must_use]
pub fn run_report(cli: &Cli) -> i32 {
    match run_report_impl(cli) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Load configuration, scan, print and write the report.
///
/// # Errors
/// Returns an error if the configuration is invalid, the root cannot be
/// scanned, or the report file cannot be written. Unreadable scanned files
/// are not errors.
pub fn run_report_impl(cli: &Cli) -> Result<ScanReport> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let options = ReportOptions::resolve(cli, config);
    execute(&options)
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Run the scan described by `options`.
///
/// # Errors
/// See [`run_report_impl`].
pub fn execute(options: &ReportOptions) -> Result<ScanReport> {
    let filter = ExtensionFilter::new(&options.extensions, &options.exclude)?;
    let scanner = DirectoryScanner::with_gitignore(filter, options.gitignore);
    let processor = FileProcessor::default();

    let report = build_report(&scanner, &processor, &options.root, options.quiet)?;

    if !options.quiet {
        print!("{}", render_terminal(&report, options)?);
    }

    let content = render_file(&report, options.format)?;
    write_report(&options.output, &content)?;
    info!(path = %options.output.display(), "report written");

    Ok(report)
}

fn render_terminal(report: &ScanReport, options: &ReportOptions) -> Result<String> {
    match options.format {
        OutputFormat::Text => TextFormatter::for_terminal(options.color).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn render_file(report: &ScanReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::plain().format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
