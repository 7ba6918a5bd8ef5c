//! Minimum coin change.
//!
//! Two solvers live here. [`min_coins_seeded`] seeds one greedy pass per
//! denomination and keeps the best exact candidate, which is fast but not
//! globally optimal for non-canonical coin systems. [`min_coins_exact`] runs
//! the unbounded coin-change DP and backtracks through it to recover the coins.

use crate::cs::dynamic::table_shape;
use crate::cs::error::{Error, Result};
use log::{debug, trace};

/// One seeded greedy attempt at making change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinCandidate {
    /// Index of the denomination the greedy pass started from
    pub seed: usize,
    /// Coins taken, in the order the pass took them
    pub coins: Vec<usize>,
    /// Amount left over once every denomination was tried
    pub remainder: usize,
}

impl CoinCandidate {
    /// True when the coins sum to the target exactly.
    pub fn is_exact(&self) -> bool {
        self.remainder == 0
    }
}

fn validate(denominations: &[usize], target: usize) -> Result<()> {
    if denominations.is_empty() {
        return Err(Error::invalid_input("no coin denominations given"));
    }
    if denominations.contains(&0) {
        return Err(Error::invalid_input("coin denominations must be positive"));
    }
    if target == 0 {
        return Err(Error::invalid_input("target change must be positive"));
    }
    Ok(())
}

/// Builds one greedy candidate per starting denomination.
///
/// Candidate `i` takes as many `denominations[i]` as fit into `target`, then
/// continues greedily with `denominations[i + 1..]` in input order. A seed
/// larger than `target` yields an empty candidate whose remainder is the
/// whole target.
///
/// # Examples
///
/// ```
/// use dynsolve::cs::dynamic::coin_change::coin_candidates;
///
/// let candidates = coin_candidates(&[5, 3], 11).unwrap();
/// assert_eq!(candidates[0].coins, vec![5, 5]);
/// assert_eq!(candidates[0].remainder, 1);
/// ```
pub fn coin_candidates(denominations: &[usize], target: usize) -> Result<Vec<CoinCandidate>> {
    validate(denominations, target)?;

    let candidates = (0..denominations.len())
        .map(|seed| {
            let mut coins = Vec::new();
            let mut remainder = target;
            if target / denominations[seed] > 0 {
                for &coin in &denominations[seed..] {
                    let count = remainder / coin;
                    coins.extend(std::iter::repeat(coin).take(count));
                    remainder -= count * coin;
                }
            }
            trace!(
                "coin seed {} -> {} coins, remainder {}",
                seed,
                coins.len(),
                remainder
            );
            CoinCandidate {
                seed,
                coins,
                remainder,
            }
        })
        .collect();

    Ok(candidates)
}

/// Makes change for `target` with the fewest coins among the seeded greedy candidates.
///
/// Only candidates that reach the target exactly are eligible. Among those the
/// fewest coins wins, and equal counts go to the lowest seed index. When no
/// candidate is exact the smallest leftover is reported through
/// [`Error::UnsatisfiableRemainder`].
///
/// # Examples
///
/// ```
/// use dynsolve::cs::dynamic::coin_change::min_coins_seeded;
///
/// let coins = min_coins_seeded(&[25, 10, 5, 1], 63).unwrap();
/// assert_eq!(coins, vec![25, 25, 10, 1, 1, 1]);
/// ```
pub fn min_coins_seeded(denominations: &[usize], target: usize) -> Result<Vec<usize>> {
    let candidates = coin_candidates(denominations, target)?;

    let mut best: Option<&CoinCandidate> = None;
    for candidate in candidates.iter().filter(|c| c.is_exact()) {
        if best.map_or(true, |b| candidate.coins.len() < b.coins.len()) {
            best = Some(candidate);
        }
    }

    match best {
        Some(candidate) => {
            debug!(
                "seeded change for {}: seed {} with {} coins",
                target,
                candidate.seed,
                candidate.coins.len()
            );
            Ok(candidate.coins.clone())
        }
        None => {
            // validate() guarantees at least one candidate
            let remainder = candidates
                .iter()
                .map(|c| c.remainder)
                .min()
                .unwrap_or(target);
            Err(Error::UnsatisfiableRemainder { target, remainder })
        }
    }
}

/// Makes change for `target` with the globally fewest coins.
///
/// Fills `fewest[a]` for every amount `a` up to `target` together with the
/// coin that last improved it, then walks that table down from `target`.
/// Coins are returned largest first. Targets whose table would exceed
/// [`MAX_TABLE_CELLS`](crate::cs::dynamic::MAX_TABLE_CELLS) are rejected as
/// invalid input.
///
/// # Examples
///
/// ```
/// use dynsolve::cs::dynamic::coin_change::min_coins_exact;
///
/// // 5 + 3 + 3, which no single greedy pass over [5, 3] finds
/// assert_eq!(min_coins_exact(&[5, 3], 11).unwrap(), vec![5, 3, 3]);
/// ```
pub fn min_coins_exact(denominations: &[usize], target: usize) -> Result<Vec<usize>> {
    validate(denominations, target)?;
    let (_, amounts) = table_shape(0, target)?;

    let mut fewest = vec![usize::MAX; amounts];
    let mut last_coin: Vec<Option<usize>> = vec![None; amounts];
    fewest[0] = 0;

    for &coin in denominations {
        for amount in coin..=target {
            let prior = fewest[amount - coin];
            if prior != usize::MAX && prior + 1 < fewest[amount] {
                fewest[amount] = prior + 1;
                last_coin[amount] = Some(coin);
            }
        }
    }

    if fewest[target] == usize::MAX {
        return Err(Error::NoSolution(format!(
            "{} cannot be formed from {:?}",
            target, denominations
        )));
    }

    let mut coins = Vec::with_capacity(fewest[target]);
    let mut amount = target;
    while amount > 0 {
        match last_coin[amount] {
            Some(coin) => {
                coins.push(coin);
                amount -= coin;
            }
            None => {
                return Err(Error::NoSolution(format!(
                    "broken coin table at amount {}",
                    amount
                )))
            }
        }
    }
    coins.sort_unstable_by(|a, b| b.cmp(a));

    debug!("exact change for {}: {} coins", target, coins.len());
    Ok(coins)
}
