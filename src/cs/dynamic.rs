pub mod coin_change;
pub mod edit_distance;
pub mod grid_path;
pub mod knapsack;
pub mod longest_increasing_subsequence;

use crate::cs::error::{Error, Result};

// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::{coin_candidates, min_coins_exact, min_coins_seeded, CoinCandidate};
pub use edit_distance::{edit_distance, edit_script, EditCosts, EditOp, EditScript};
pub use grid_path::{max_path_value, max_value_path, GridPath, Move, Step};
pub use knapsack::{knapsack_exact, knapsack_seeded, KnapsackSelection};
pub use longest_increasing_subsequence::{
    longest_increasing_subsequence, longest_increasing_subsequence_length,
    seeded_increasing_subsequence,
};

/// Largest table, in cells, that a solver sized by a numeric bound will allocate.
pub const MAX_TABLE_CELLS: usize = 1 << 28;

/// Shape of a `(items + 1) x (bound + 1)` table, checked against [`MAX_TABLE_CELLS`].
pub(crate) fn table_shape(items: usize, bound: usize) -> Result<(usize, usize)> {
    let rows = items
        .checked_add(1)
        .ok_or_else(|| Error::overflow("table rows"))?;
    let cols = bound
        .checked_add(1)
        .ok_or_else(|| Error::overflow("table columns"))?;
    match rows.checked_mul(cols) {
        Some(cells) if cells <= MAX_TABLE_CELLS => Ok((rows, cols)),
        _ => Err(Error::invalid_input(format!(
            "a {}x{} table exceeds {} cells",
            rows, cols, MAX_TABLE_CELLS
        ))),
    }
}
