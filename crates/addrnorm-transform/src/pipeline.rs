//! The five-stage normalization pipeline.
//!
//! Stages run strictly in order over one table:
//!
//! 1. field mapping
//! 2. city/state split
//! 3. ZIP normalization
//! 4. sentinel reconciliation
//! 5. column projection
//!
//! Rows are never added, removed or reordered; only cell values and columns
//! change.

use std::time::Instant;

use tracing::{debug, info, info_span, warn};

use addrnorm_model::{NormalizeOptions, Table};

use crate::error::Result;
use crate::mapper::map_fields;
use crate::normalization::{apply_city_state_split, apply_zip_normalization, reconcile_sentinels};
use crate::projector::project_output;
use crate::types::{NormalizeOutcome, NormalizeStats};

/// Runs every stage over `source` and returns the projected table.
///
/// The only failure is a source table lacking required columns (or a stage
/// invariant being broken, which indicates a bug).
pub fn normalize_table(source: Table, options: &NormalizeOptions) -> Result<NormalizeOutcome> {
    let rows = source.height();
    let span = info_span!("normalize", rows, zip_validation = ?options.zip_validation);
    let _guard = span.enter();
    let start = Instant::now();
    let mut stats = NormalizeStats {
        rows,
        ..NormalizeStats::default()
    };

    let mut table = info_span!("map_fields").in_scope(|| map_fields(source))?;
    debug!(columns = table.width(), "fields mapped");

    stats.states_split =
        info_span!("split_city_state").in_scope(|| apply_city_state_split(&mut table))?;
    debug!(states_split = stats.states_split, "city/state split");

    let zip_stats = info_span!("normalize_zip")
        .in_scope(|| apply_zip_normalization(&mut table, options.zip_validation))?;
    stats.zips_accepted = zip_stats.accepted;
    stats.zips_rejected = zip_stats.rejected;
    stats.zips_absent = zip_stats.absent;
    if zip_stats.rejected > 0 {
        warn!(
            rejected = zip_stats.rejected,
            "ZIP values failed screening and were set to missing"
        );
    }

    stats.sentinels_replaced =
        info_span!("reconcile_sentinels").in_scope(|| reconcile_sentinels(&mut table));
    debug!(replaced = stats.sentinels_replaced, "sentinels reconciled");

    let table = info_span!("project_output").in_scope(|| project_output(table, options))?;
    debug_assert_eq!(table.height(), rows, "row count changed during normalization");

    info!(
        rows,
        states_split = stats.states_split,
        zips_accepted = stats.zips_accepted,
        zips_rejected = stats.zips_rejected,
        sentinels_replaced = stats.sentinels_replaced,
        duration_ms = start.elapsed().as_millis(),
        "normalization complete"
    );
    Ok(NormalizeOutcome { table, stats })
}
