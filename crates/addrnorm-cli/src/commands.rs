use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{debug, info, info_span, trace};

use addrnorm_ingest::{ReadOptions, read_table};
use addrnorm_model::columns::{
    ADDRESS, CITY, IDENTIFIER, NAME, NAME_LINE_1, NAME_LINE_2, NAME_LINE_3, NAME_LINE_4,
    NAME_LINE_5, NAME_LINE_6, NAME_LINE_7, SORTING_ZIP, SOURCE_CUSIP, STATE, ZIP4, ZIP5,
};
use addrnorm_output::write_table;
use addrnorm_transform::normalize_table;

use crate::logging::{log_data_enabled, redact_value};
use crate::summary::apply_table_style;
use crate::types::{CleanRequest, RunReport};

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "cleaned_data.csv";

/// Rows echoed at trace level after normalization.
const PREVIEW_ROWS: usize = 5;

/// `cleaned_data.csv` in the input's directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    input
        .parent()
        .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE), |dir| dir.join(DEFAULT_OUTPUT_FILE))
}

/// Reads, normalizes and writes one file.
pub fn run_clean(request: &CleanRequest) -> Result<RunReport> {
    let span = info_span!("clean", input = %request.input.display());
    let _guard = span.enter();
    let start = Instant::now();
    let config = &request.config;
    let output_path = request
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&request.input));
    if !request.dry_run && same_file(&output_path, &request.input) {
        bail!(
            "output {} would overwrite the input; choose a different output path",
            output_path.display()
        );
    }

    let read_options = ReadOptions::default().with_encoding(config.encoding.as_str());
    let source = read_table(&request.input, &read_options)
        .with_context(|| format!("read {}", request.input.display()))?;
    info!(rows = source.height(), columns = source.width(), "source loaded");

    let outcome = normalize_table(source, &config.normalize)
        .with_context(|| format!("normalize {}", request.input.display()))?;
    log_preview(&outcome.table);

    let output = if request.dry_run {
        info!("dry run, nothing written");
        None
    } else {
        write_table(&outcome.table, &output_path)
            .with_context(|| format!("write {}", output_path.display()))?;
        info!(path = %output_path.display(), rows = outcome.table.height(), "output written");
        Some(output_path)
    };

    Ok(RunReport {
        input: request.input.clone(),
        output,
        encoding: config.encoding.clone(),
        options: config.normalize,
        stats: outcome.stats,
        output_columns: outcome.table.columns.clone(),
        duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        dry_run: request.dry_run,
    })
}

/// Compares resolved paths when both exist, otherwise the paths as given.
fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn log_preview(table: &addrnorm_model::Table) {
    if !tracing::enabled!(tracing::Level::TRACE) {
        return;
    }
    if !log_data_enabled() {
        debug!("row preview redacted; pass --log-data to include values");
    }
    for (row_idx, row) in table.iter_rows().take(PREVIEW_ROWS).enumerate() {
        let values: Vec<&str> = row
            .cells
            .iter()
            .map(|cell| redact_value(cell.as_text().unwrap_or_default()))
            .collect();
        trace!(row = row_idx, values = ?values, "normalized row");
    }
}

/// Saves `report` as pretty-printed JSON.
pub fn write_report(report: &RunReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize run report")?;
    std::fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    debug!(path = %path.display(), "run report written");
    Ok(())
}

/// Prints the expected source columns and the columns they produce.
pub fn run_columns() -> Result<()> {
    let rows: [(&str, &str); 9] = [
        (NAME_LINE_1, NAME),
        (NAME_LINE_2, ADDRESS),
        (NAME_LINE_3, ADDRESS),
        (NAME_LINE_4, ADDRESS),
        (NAME_LINE_5, CITY),
        (NAME_LINE_6, STATE),
        (NAME_LINE_7, "(dropped)"),
        (SORTING_ZIP, ZIP5),
        (SOURCE_CUSIP, IDENTIFIER),
    ];
    let mut table = Table::new();
    table.set_header(vec!["Source column", "Output column"]);
    apply_table_style(&mut table);
    for (source, target) in rows {
        table.add_row(vec![source, target]);
    }
    println!("{table}");
    println!("{ZIP4} is derived from {SORTING_ZIP} and kept only with --keep-zip4.");
    Ok(())
}
