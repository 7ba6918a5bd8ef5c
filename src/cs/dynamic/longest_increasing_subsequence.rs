//! Longest strictly increasing subsequence.

use log::{debug, trace};

/// Returns the length of the Longest Increasing Subsequence (LIS) in `numbers`.
///
/// # Examples
///
/// ```
/// use dynsolve::cs::dynamic::longest_increasing_subsequence::longest_increasing_subsequence_length;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// assert_eq!(longest_increasing_subsequence_length(&arr), 4);
/// ```
pub fn longest_increasing_subsequence_length<T: PartialOrd>(numbers: &[T]) -> usize {
    let mut tails: Vec<&T> = Vec::with_capacity(numbers.len());

    for num in numbers {
        // First tail that is not strictly less than `num`
        let pos = tails.partition_point(|&tail| tail < num);
        if pos == tails.len() {
            tails.push(num);
        } else {
            tails[pos] = num;
        }
    }
    tails.len()
}

/// Returns one Longest Increasing Subsequence (LIS) in `numbers`.
///
/// `len[i]` holds the longest strictly increasing subsequence ending at `i`
/// and `prev[i]` the index it extends. The first index with the maximal
/// length is the terminal cell, and among equally long predecessors the
/// earliest one is kept.
///
/// # Examples
///
/// ```
/// use dynsolve::cs::dynamic::longest_increasing_subsequence::longest_increasing_subsequence;
///
/// let arr = vec![7, 2, 3, 1, 5, 8, 9, 6, 10, 11, 4, 12];
/// assert_eq!(longest_increasing_subsequence(&arr), vec![2, 3, 5, 8, 9, 10, 11, 12]);
/// ```
pub fn longest_increasing_subsequence<T: PartialOrd + Clone>(numbers: &[T]) -> Vec<T> {
    if numbers.is_empty() {
        return Vec::new();
    }

    let n = numbers.len();
    let mut len = vec![1_usize; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];

    for i in 1..n {
        for j in 0..i {
            if numbers[j] < numbers[i] && len[j] + 1 > len[i] {
                len[i] = len[j] + 1;
                prev[i] = Some(j);
            }
        }
    }

    let mut end = 0;
    for i in 1..n {
        if len[i] > len[end] {
            end = i;
        }
    }

    let mut lis = Vec::with_capacity(len[end]);
    let mut curr = Some(end);
    while let Some(i) = curr {
        lis.push(numbers[i].clone());
        curr = prev[i];
    }
    lis.reverse();

    debug!("increasing subsequence of length {} ends at {}", lis.len(), end);
    lis
}

/// Returns the longest of the subsequences grown greedily from every start.
///
/// Each element is appended to every earlier-started subsequence whose last
/// value is strictly smaller, and then starts a subsequence of its own. The
/// first longest subsequence wins. A greedy append can block a better
/// continuation (`[1, 5, 2, 3]` yields `[1, 5]`), so use
/// [`longest_increasing_subsequence`] when a maximal length is required.
///
/// # Examples
///
/// ```
/// use dynsolve::cs::dynamic::longest_increasing_subsequence::seeded_increasing_subsequence;
///
/// let arr = vec![7, 2, 3, 1, 5, 8, 9, 6, 10, 11, 4, 12];
/// assert_eq!(seeded_increasing_subsequence(&arr), vec![2, 3, 5, 8, 9, 10, 11, 12]);
/// ```
pub fn seeded_increasing_subsequence<T: PartialOrd + Clone>(numbers: &[T]) -> Vec<T> {
    let mut candidates: Vec<Vec<T>> = Vec::with_capacity(numbers.len());

    for num in numbers {
        for candidate in candidates.iter_mut() {
            if candidate.last().map_or(false, |last| last < num) {
                candidate.push(num.clone());
            }
        }
        candidates.push(vec![num.clone()]);
    }

    let mut best: Option<(usize, Vec<T>)> = None;
    for (seed, candidate) in candidates.into_iter().enumerate() {
        trace!("seed {} grew to length {}", seed, candidate.len());
        if best
            .as_ref()
            .map_or(true, |(_, b)| candidate.len() > b.len())
        {
            best = Some((seed, candidate));
        }
    }

    match best {
        Some((seed, candidate)) => {
            debug!("seeded subsequence of length {} from seed {}", candidate.len(), seed);
            candidate
        }
        None => Vec::new(),
    }
}
