//! Knapsack item selection.
//!
//! [`knapsack_seeded`] builds one greedy selection per mandatory seed item and
//! keeps the most valuable one. [`knapsack_exact`] solves the 0/1 problem over
//! a prefix-by-capacity table and backtracks through it.

use crate::cs::dynamic::table_shape;
use crate::cs::error::{Error, Result};
use log::{debug, trace};
use ndarray::Array2;

/// Items picked by a knapsack solver.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KnapsackSelection {
    /// Selected item indices, ascending
    pub items: Vec<usize>,
    pub total_weight: usize,
    pub total_value: usize,
}

fn validate(weights: &[usize], values: &[usize], capacity: usize) -> Result<()> {
    if weights.is_empty() || values.is_empty() {
        return Err(Error::invalid_input("no items given"));
    }
    if weights.len() != values.len() {
        return Err(Error::invalid_input(format!(
            "{} weights but {} values",
            weights.len(),
            values.len()
        )));
    }
    if capacity == 0 {
        return Err(Error::invalid_input("capacity must be positive"));
    }
    Ok(())
}

fn total_value(items: &[usize], values: &[usize]) -> Result<usize> {
    items.iter().try_fold(0_usize, |acc, &i| {
        acc.checked_add(values[i])
            .ok_or_else(|| Error::overflow("total item value"))
    })
}

/// Selects items with the seeded greedy strategy.
///
/// `weights` must be sorted ascending. Every item `i` in turn is forced into
/// the knapsack, then items `i - 1` down to `0` are added whenever they still
/// fit. Of the selections that respect `capacity`, the most valuable wins and
/// equal values go to the lowest seed. If not even a single item fits the
/// result is empty.
///
/// # Examples
///
/// ```
/// use dynsolve::cs::dynamic::knapsack::knapsack_seeded;
///
/// let weights = [1, 3, 4, 5, 6];
/// let values = [15, 9, 5, 10, 20];
/// let picked = knapsack_seeded(&weights, &values, 15).unwrap();
/// assert_eq!(picked.items, vec![0, 1, 2, 3]);
/// assert_eq!(picked.total_value, 39);
/// ```
pub fn knapsack_seeded(
    weights: &[usize],
    values: &[usize],
    capacity: usize,
) -> Result<KnapsackSelection> {
    validate(weights, values, capacity)?;
    if let Some(pos) = weights.windows(2).position(|w| w[0] > w[1]) {
        return Err(Error::invalid_input(format!(
            "weights must be ascending, {} > {} at index {}",
            weights[pos],
            weights[pos + 1],
            pos
        )));
    }

    let mut best: Option<(usize, KnapsackSelection)> = None;
    for seed in 0..weights.len() {
        let mut items = vec![seed];
        let mut weight = weights[seed];
        for j in (0..seed).rev() {
            let next = weight.saturating_add(weights[j]);
            if next <= capacity {
                weight = next;
                items.push(j);
            }
        }

        if weight > capacity {
            trace!("knapsack seed {} alone exceeds capacity", seed);
            continue;
        }

        let value = total_value(&items, values)?;
        trace!(
            "knapsack seed {}: weight {}, value {}",
            seed,
            weight,
            value
        );
        if best
            .as_ref()
            .map_or(true, |(_, b)| value > b.total_value)
        {
            items.sort_unstable();
            best = Some((
                seed,
                KnapsackSelection {
                    items,
                    total_weight: weight,
                    total_value: value,
                },
            ));
        }
    }

    match best {
        Some((seed, selection)) => {
            debug!(
                "seeded knapsack picked seed {} with value {}",
                seed, selection.total_value
            );
            Ok(selection)
        }
        None => Ok(KnapsackSelection::default()),
    }
}

/// Selects the most valuable subset of items that fits in `capacity`.
///
/// `best[[i, w]]` is the largest value reachable with the first `i` items and
/// capacity `w`. Walking back from `(n, capacity)`, item `i - 1` was taken
/// exactly when `best[[i, w]]` differs from `best[[i - 1, w]]`. Weights need
/// not be sorted. Capacities whose table would exceed
/// [`MAX_TABLE_CELLS`](crate::cs::dynamic::MAX_TABLE_CELLS) are rejected as
/// invalid input.
///
/// # Examples
///
/// ```
/// use dynsolve::cs::dynamic::knapsack::knapsack_exact;
///
/// let weights = [1, 3, 4, 5, 6];
/// let values = [15, 9, 5, 10, 20];
/// let picked = knapsack_exact(&weights, &values, 15).unwrap();
/// assert_eq!(picked.items, vec![0, 1, 3, 4]);
/// assert_eq!(picked.total_value, 54);
/// ```
pub fn knapsack_exact(
    weights: &[usize],
    values: &[usize],
    capacity: usize,
) -> Result<KnapsackSelection> {
    validate(weights, values, capacity)?;
    let shape = table_shape(weights.len(), capacity)?;

    let n = weights.len();
    let mut best = Array2::<usize>::zeros(shape);

    for i in 1..=n {
        let (wi, vi) = (weights[i - 1], values[i - 1]);
        for w in 0..=capacity {
            let skip = best[[i - 1, w]];
            best[[i, w]] = if wi <= w {
                let take = best[[i - 1, w - wi]]
                    .checked_add(vi)
                    .ok_or_else(|| Error::overflow("total item value"))?;
                skip.max(take)
            } else {
                skip
            };
        }
    }

    let mut items = Vec::new();
    let mut w = capacity;
    for i in (1..=n).rev() {
        if best[[i, w]] != best[[i - 1, w]] {
            items.push(i - 1);
            w -= weights[i - 1];
        }
    }
    items.reverse();

    let selection = KnapsackSelection {
        total_weight: items.iter().map(|&i| weights[i]).sum(),
        total_value: best[[n, capacity]],
        items,
    };
    debug!(
        "exact knapsack: {} items, value {}",
        selection.items.len(),
        selection.total_value
    );
    Ok(selection)
}
