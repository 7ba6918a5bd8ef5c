//! Edit distance with per-operation costs.
//!
//! The table is indexed by destination prefix length (rows) and source prefix
//! length (columns). [`edit_distance`] returns the optimal cost only;
//! [`edit_script`] additionally records which transition produced each cell
//! and walks those tags back into the list of operations.

use log::debug;
use ndarray::Array2;

/// Cost of each edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditCosts {
    /// Cost of inserting one destination character
    pub insertion: usize,
    /// Cost of deleting one source character
    pub deletion: usize,
    /// Cost of replacing one source character with a destination character
    pub replacement: usize,
}

impl EditCosts {
    pub fn new(insertion: usize, deletion: usize, replacement: usize) -> Self {
        Self {
            insertion,
            deletion,
            replacement,
        }
    }
}

impl Default for EditCosts {
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}

/// One step of an edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Source and destination agree on this character
    Keep(char),
    Insert(char),
    Delete(char),
    Replace { from: char, to: char },
}

impl EditOp {
    /// Price of this operation under `costs`.
    pub fn cost(&self, costs: &EditCosts) -> usize {
        match self {
            EditOp::Keep(_) => 0,
            EditOp::Insert(_) => costs.insertion,
            EditOp::Delete(_) => costs.deletion,
            EditOp::Replace { .. } => costs.replacement,
        }
    }
}

/// A cheapest sequence of operations turning the source into the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScript {
    pub cost: usize,
    /// Operations in source order
    pub ops: Vec<EditOp>,
}

impl EditScript {
    /// Replays the script over `source`.
    pub fn apply(&self, source: &str) -> String {
        let mut chars = source.chars();
        let mut out = String::new();
        for op in &self.ops {
            match *op {
                EditOp::Keep(c) => {
                    chars.next();
                    out.push(c);
                }
                EditOp::Replace { to, .. } => {
                    chars.next();
                    out.push(to);
                }
                EditOp::Insert(c) => out.push(c),
                EditOp::Delete(_) => {
                    chars.next();
                }
            }
        }
        out.extend(chars);
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Keep,
    Insert,
    Replace,
    Delete,
}

fn fill(src: &[char], dst: &[char], costs: &EditCosts) -> (Array2<usize>, Array2<Option<Tag>>) {
    let (n, m) = (dst.len(), src.len());
    let mut cost = Array2::<usize>::zeros((n + 1, m + 1));
    let mut tags: Array2<Option<Tag>> = Array2::from_elem((n + 1, m + 1), None);

    for i in 1..=n {
        cost[[i, 0]] = i.saturating_mul(costs.insertion);
        tags[[i, 0]] = Some(Tag::Insert);
    }
    for j in 1..=m {
        cost[[0, j]] = j.saturating_mul(costs.deletion);
        tags[[0, j]] = Some(Tag::Delete);
    }

    for i in 1..=n {
        for j in 1..=m {
            if dst[i - 1] == src[j - 1] {
                cost[[i, j]] = cost[[i - 1, j - 1]];
                tags[[i, j]] = Some(Tag::Keep);
                continue;
            }
            // First minimum wins: insertion, then replacement, then deletion.
            let options = [
                (cost[[i - 1, j]].saturating_add(costs.insertion), Tag::Insert),
                (
                    cost[[i - 1, j - 1]].saturating_add(costs.replacement),
                    Tag::Replace,
                ),
                (cost[[i, j - 1]].saturating_add(costs.deletion), Tag::Delete),
            ];
            let mut best = options[0];
            for option in &options[1..] {
                if option.0 < best.0 {
                    best = *option;
                }
            }
            cost[[i, j]] = best.0;
            tags[[i, j]] = Some(best.1);
        }
    }

    (cost, tags)
}

/// Minimum total cost to turn `source` into `destination`.
///
/// # Examples
///
/// ```
/// use dynsolve::cs::dynamic::edit_distance::{edit_distance, EditCosts};
///
/// assert_eq!(edit_distance("saturday", "sunday", &EditCosts::default()), 3);
/// assert_eq!(edit_distance("", "abc", &EditCosts::new(2, 1, 1)), 6);
/// ```
pub fn edit_distance(source: &str, destination: &str, costs: &EditCosts) -> usize {
    let src: Vec<char> = source.chars().collect();
    let dst: Vec<char> = destination.chars().collect();
    let (cost, _) = fill(&src, &dst, costs);
    cost[[dst.len(), src.len()]]
}

/// Cheapest edit script turning `source` into `destination`.
///
/// # Examples
///
/// ```
/// use dynsolve::cs::dynamic::edit_distance::{edit_script, EditCosts, EditOp};
///
/// let script = edit_script("cat", "cut", &EditCosts::default());
/// assert_eq!(script.cost, 1);
/// assert_eq!(
///     script.ops,
///     vec![EditOp::Keep('c'), EditOp::Replace { from: 'a', to: 'u' }, EditOp::Keep('t')]
/// );
/// assert_eq!(script.apply("cat"), "cut");
/// ```
pub fn edit_script(source: &str, destination: &str, costs: &EditCosts) -> EditScript {
    let src: Vec<char> = source.chars().collect();
    let dst: Vec<char> = destination.chars().collect();
    let (cost, tags) = fill(&src, &dst, costs);

    let (mut i, mut j) = (dst.len(), src.len());
    let mut ops = Vec::with_capacity(i.max(j));
    while let Some(tag) = tags[[i, j]] {
        match tag {
            Tag::Keep => {
                ops.push(EditOp::Keep(src[j - 1]));
                i -= 1;
                j -= 1;
            }
            Tag::Replace => {
                ops.push(EditOp::Replace {
                    from: src[j - 1],
                    to: dst[i - 1],
                });
                i -= 1;
                j -= 1;
            }
            Tag::Insert => {
                ops.push(EditOp::Insert(dst[i - 1]));
                i -= 1;
            }
            Tag::Delete => {
                ops.push(EditOp::Delete(src[j - 1]));
                j -= 1;
            }
        }
    }
    ops.reverse();

    let total = cost[[dst.len(), src.len()]];
    debug!("edit script with {} ops, cost {}", ops.len(), total);
    EditScript { cost: total, ops }
}
