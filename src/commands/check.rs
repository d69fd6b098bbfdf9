use crate::audit::audit_files;
use crate::cli;
use crate::comparison::DiffReport;
use crate::config::{self, BindcheckConfig};
use crate::errors::Error;
use crate::extraction::HeaderOptions;
use crate::formatting::FormattingConfig;
use crate::io::output::{create_writer, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

pub struct CheckConfig {
    pub header: PathBuf,
    pub bindings: PathBuf,
    pub config: Option<PathBuf>,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub export_marker: Option<String>,
    pub ignore: Vec<String>,
    pub no_default_ignores: bool,
    pub plain: bool,
}

/// Run one check and write its report. The caller decides the exit status.
pub fn run_check(check: CheckConfig) -> Result<DiffReport> {
    let file_config = match &check.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config(),
    };

    let options = resolve_header_options(
        &file_config,
        check.export_marker.as_deref(),
        &check.ignore,
        check.no_default_ignores,
    );
    let format = resolve_format(check.format, &file_config)?;
    log::debug!(
        "Checking {} against {} (marker {}, {} ignored)",
        check.bindings.display(),
        check.header.display(),
        options.export_marker,
        options.ignored.len()
    );

    let report = audit_files(&check.header, &check.bindings, &options)?;

    let formatting = if check.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    let mut writer = create_writer(format, check.output.as_deref(), formatting)?;
    writer.write_report(&report)?;

    Ok(report)
}

/// Layer command-line overrides over the file configuration.
///
/// The marker replaces the configured one, `--no-default-ignores` empties
/// the deny-list and `--ignore` names are added afterwards.
pub fn resolve_header_options(
    file_config: &BindcheckConfig,
    export_marker: Option<&str>,
    ignore: &[String],
    no_default_ignores: bool,
) -> HeaderOptions {
    let mut options = file_config.header_options();
    if let Some(marker) = export_marker {
        options.export_marker = marker.to_string();
    }
    if no_default_ignores {
        options.ignored.clear();
    }
    options.with_ignored(ignore.iter().cloned())
}

pub fn resolve_format(
    requested: Option<cli::OutputFormat>,
    file_config: &BindcheckConfig,
) -> crate::errors::Result<OutputFormat> {
    if let Some(format) = requested {
        return Ok(format.into());
    }
    match file_config.default_format() {
        Some(name) => OutputFormat::parse(name).ok_or_else(|| {
            Error::InvalidOption(format!(
                "output.default_format must be \"terminal\" or \"json\", got {name:?}"
            ))
        }),
        None => Ok(OutputFormat::Terminal),
    }
}
