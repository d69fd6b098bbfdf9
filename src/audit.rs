//! End-to-end check of one header against one bindings source.

use std::path::Path;
use tracing::{debug, info, info_span};

use crate::comparison::{diff_signatures, DiffReport};
use crate::errors::Result;
use crate::extraction::{extract_c_signatures, extract_target_signatures, HeaderOptions};
use crate::io::read_source;

/// Collect both declaration sets independently, then diff them.
pub fn audit_sources(header: &str, bindings: &str, options: &HeaderOptions) -> Result<DiffReport> {
    let c_table = {
        let _span = info_span!("header_scan", marker = %options.export_marker).entered();
        let table = extract_c_signatures(header, options)?;
        debug!(exports = table.len(), ignored = options.ignored.len(), "Scanned header");
        table
    };

    let targets = {
        let _span = info_span!("bindings_scan").entered();
        let targets = extract_target_signatures(bindings);
        debug!(bindings = targets.len(), "Scanned bindings");
        targets
    };

    let _span = info_span!("diff").entered();
    let report = diff_signatures(&c_table, &targets);
    info!(
        checked = report.checked,
        mismatched = report.mismatched.len(),
        missing = report.missing.len(),
        extra = report.extra.len(),
        "Comparison finished"
    );
    Ok(report)
}

/// Read both files and audit them.
pub fn audit_files(
    header_path: &Path,
    bindings_path: &Path,
    options: &HeaderOptions,
) -> Result<DiffReport> {
    let header = read_source(header_path)?;
    let bindings = read_source(bindings_path)?;
    audit_sources(&header, &bindings, options)
}
