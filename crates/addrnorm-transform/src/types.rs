use serde::{Deserialize, Serialize};

use addrnorm_model::Table;

/// Counters collected while normalizing one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NormalizeStats {
    pub rows: usize,
    /// Rows whose state was recovered from the city line.
    pub states_split: usize,
    pub zips_accepted: usize,
    pub zips_rejected: usize,
    pub zips_absent: usize,
    /// Cells replaced by the sentinel reconciler.
    pub sentinels_replaced: usize,
}

/// A normalized table together with its run statistics.
#[derive(Debug, Clone)]
pub struct NormalizeOutcome {
    pub table: Table,
    pub stats: NormalizeStats,
}
