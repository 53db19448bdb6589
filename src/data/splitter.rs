// ============================================================
// Layer 4 - Train/Test Splitter
// ============================================================
// Shuffles row indices with a seeded RNG and cuts them in two:
//
//   n_test  = ceil(N * test_size)
//   n_train = N - n_test
//
//   permuted rows: [ test … | train … ]
//
// The same table, seed and fraction always give the same split.
// The split is a plain random sample (no stratification by label).
//
// `test_size` must be finite and strictly between 0 and 1; it is
// checked before any shuffling happens.
//
// Uses Fisher-Yates via rand::seq::SliceRandom over a StdRng
// seeded from the configured seed.
//
// Reference: rand crate documentation

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::domain::error::{IngestError, IngestResult};
use crate::domain::table::Table;

/// Reject degenerate fractions before splitting.
pub fn validate_test_size(test_size: f64) -> IngestResult<()> {
    if test_size.is_finite() && test_size > 0.0 && test_size < 1.0 {
        Ok(())
    } else {
        Err(IngestError::InvalidTestSize(test_size))
    }
}

/// Number of rows the test partition receives out of `total`.
pub fn test_count(total: usize, test_size: f64) -> usize {
    ((total as f64) * test_size).ceil() as usize
}

/// Split `table` into (train, test).
///
/// # Arguments
/// * `test_size` - fraction of rows for the test partition, in (0, 1)
/// * `seed`      - RNG seed; fixed for reproducible partitions
pub fn split_train_test(table: &Table, test_size: f64, seed: u64) -> IngestResult<(Table, Table)> {
    validate_test_size(test_size)?;

    let total = table.len();
    let mut order: Vec<usize> = (0..total).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    let n_test = test_count(total, test_size).min(total);
    let (test_idx, train_idx) = order.split_at(n_test);

    let train = table.select_rows(train_idx);
    let test  = table.select_rows(test_idx);

    tracing::info!(
        "Dataset split: {} train, {} test (test_size={}, seed={})",
        train.len(),
        test.len(),
        test_size,
        seed
    );

    Ok((train, test))
}
