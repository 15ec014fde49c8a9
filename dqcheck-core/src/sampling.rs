//! Deterministic row sampling.
//!
//! Large tables are reduced to a fixed number of rows before profiling so
//! that statistics and prompt size stay bounded. The selection uses a seeded
//! generator, so the same input and seed always produce the same rows.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SamplingConfig;
use crate::models::Table;

/// A table ready for profiling, plus the row count it started with.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledTable {
    /// Table statistics are computed from (sampled or untouched)
    pub table: Table,
    /// Row count before sampling
    pub original_row_count: usize,
}

impl SampledTable {
    /// True if rows were dropped by sampling.
    pub fn was_sampled(&self) -> bool {
        self.table.row_count() < self.original_row_count
    }
}

/// Samples a table down to `config.max_rows` rows if it is larger.
///
/// Selection is without replacement. Selected rows keep all of their values
/// but appear in selection order, not in their original order. Tables at or
/// below the cap are returned unchanged.
pub fn sample_table(table: Table, config: &SamplingConfig) -> SampledTable {
    let original_row_count = table.row_count();

    if original_row_count <= config.max_rows {
        return SampledTable {
            table,
            original_row_count,
        };
    }

    let indices = sample_indices(original_row_count, config.max_rows, config.seed);
    tracing::info!(
        "Sampling {} of {} rows (seed {})",
        indices.len(),
        original_row_count,
        config.seed
    );

    SampledTable {
        table: table.select_rows(&indices),
        original_row_count,
    }
}

/// Picks `amount` distinct indices from `0..length` with a seeded generator.
fn sample_indices(length: usize, amount: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    rand::seq::index::sample(&mut rng, length, amount.min(length)).into_vec()
}
