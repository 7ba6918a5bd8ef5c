//! Maximum-value monotone path through a grid.
//!
//! A walker starts at the top-left cell, moves only right or down, and
//! collects every cell it visits. The solver finds the path with the largest
//! total and returns the visited cells, not just the total.

use crate::cs::error::{Error, Result};
use log::debug;
use ndarray::Array2;
use num_traits::{PrimInt, Unsigned};

/// Predecessor of a cell on its best path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    FromAbove,
    FromLeft,
}

/// A single move of the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Down,
    Right,
}

/// The best path found through a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPath<T> {
    /// Sum of all collected values
    pub total: T,
    /// Visited `(row, column)` cells from top-left to bottom-right
    pub cells: Vec<(usize, usize)>,
    /// Values collected along `cells`
    pub values: Vec<T>,
}

impl<T> GridPath<T> {
    /// Moves taken between consecutive cells.
    pub fn moves(&self) -> Vec<Move> {
        self.cells
            .windows(2)
            .map(|w| if w[1].0 > w[0].0 { Move::Down } else { Move::Right })
            .collect()
    }
}

fn validate<T>(grid: &[Vec<T>]) -> Result<(usize, usize)> {
    let rows = grid.len();
    if rows == 0 {
        return Err(Error::invalid_input("grid has no rows"));
    }
    let cols = grid[0].len();
    if cols == 0 {
        return Err(Error::invalid_input("grid has no columns"));
    }
    if let Some(row) = grid.iter().position(|r| r.len() != cols) {
        return Err(Error::invalid_input(format!(
            "row {} has {} cells, expected {}",
            row,
            grid[row].len(),
            cols
        )));
    }
    Ok((rows, cols))
}

fn add<T: PrimInt>(a: T, b: T, at: (usize, usize)) -> Result<T> {
    a.checked_add(&b)
        .ok_or_else(|| Error::overflow(format!("path sum at cell {:?}", at)))
}

/// Fills the best-sum table and the predecessor tags.
fn fill<T>(grid: &[Vec<T>]) -> Result<(Array2<T>, Array2<Option<Step>>)>
where
    T: PrimInt + Unsigned,
{
    let (rows, cols) = validate(grid)?;
    let mut best = Array2::from_elem((rows, cols), T::zero());
    let mut steps: Array2<Option<Step>> = Array2::from_elem((rows, cols), None);

    best[[0, 0]] = grid[0][0];
    for i in 1..rows {
        best[[i, 0]] = add(best[[i - 1, 0]], grid[i][0], (i, 0))?;
        steps[[i, 0]] = Some(Step::FromAbove);
    }
    for j in 1..cols {
        best[[0, j]] = add(best[[0, j - 1]], grid[0][j], (0, j))?;
        steps[[0, j]] = Some(Step::FromLeft);
    }

    for i in 1..rows {
        for j in 1..cols {
            let above = best[[i - 1, j]];
            let left = best[[i, j - 1]];
            // Ties go to the cell above.
            let (prior, step) = if above >= left {
                (above, Step::FromAbove)
            } else {
                (left, Step::FromLeft)
            };
            best[[i, j]] = add(prior, grid[i][j], (i, j))?;
            steps[[i, j]] = Some(step);
        }
    }

    Ok((best, steps))
}

/// Finds the right/down path from the top-left to the bottom-right cell with
/// the largest total.
///
/// # Examples
///
/// ```
/// use dynsolve::cs::dynamic::grid_path::{max_value_path, Move};
///
/// let grid = vec![vec![1_u32, 3], vec![2, 1]];
/// let path = max_value_path(&grid).unwrap();
/// assert_eq!(path.total, 5);
/// assert_eq!(path.values, vec![1, 3, 1]);
/// assert_eq!(path.moves(), vec![Move::Right, Move::Down]);
/// ```
pub fn max_value_path<T>(grid: &[Vec<T>]) -> Result<GridPath<T>>
where
    T: PrimInt + Unsigned,
{
    let (best, steps) = fill(grid)?;
    let (rows, cols) = best.dim();

    let mut cells = Vec::with_capacity(rows + cols - 1);
    let (mut i, mut j) = (rows - 1, cols - 1);
    cells.push((i, j));
    while let Some(step) = steps[[i, j]] {
        match step {
            Step::FromAbove => i -= 1,
            Step::FromLeft => j -= 1,
        }
        cells.push((i, j));
    }
    cells.reverse();

    let values = cells.iter().map(|&(r, c)| grid[r][c]).collect();
    let total = best[[rows - 1, cols - 1]];
    debug!(
        "grid path over {}x{} collects {} cells",
        rows,
        cols,
        cells.len()
    );

    Ok(GridPath {
        total,
        cells,
        values,
    })
}

/// Returns only the largest collectable total.
pub fn max_path_value<T>(grid: &[Vec<T>]) -> Result<T>
where
    T: PrimInt + Unsigned,
{
    let (best, _) = fill(grid)?;
    let (rows, cols) = best.dim();
    Ok(best[[rows - 1, cols - 1]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn gifts() -> Vec<Vec<u32>> {
        vec![
            vec![1, 10, 3, 8],
            vec![12, 2, 9, 6],
            vec![5, 7, 4, 11],
            vec![3, 7, 16, 5],
        ]
    }

    /// Tries every right/down path.
    fn brute_force(grid: &[Vec<u64>], i: usize, j: usize) -> u64 {
        let here = grid[i][j];
        let down = (i + 1 < grid.len()).then(|| brute_force(grid, i + 1, j));
        let right = (j + 1 < grid[0].len()).then(|| brute_force(grid, i, j + 1));
        here + down.into_iter().chain(right).max().unwrap_or(0)
    }

    #[test]
    fn test_reference_board() {
        let path = max_value_path(&gifts()).unwrap();
        assert_eq!(path.total, 53);
        assert_eq!(path.values.iter().sum::<u32>(), 53);
        assert_eq!(
            path.cells,
            vec![(0, 0), (1, 0), (2, 0), (2, 1), (3, 1), (3, 2), (3, 3)]
        );
        assert_eq!(path.values, vec![1, 12, 5, 7, 7, 16, 5]);
        assert_eq!(
            path.moves(),
            vec![
                Move::Down,
                Move::Down,
                Move::Right,
                Move::Down,
                Move::Right,
                Move::Right
            ]
        );
        assert_eq!(max_path_value(&gifts()).unwrap(), 53);
    }

    #[test]
    fn test_tie_prefers_above() {
        let grid = vec![vec![1_u8, 1], vec![1, 1]];
        let path = max_value_path(&grid).unwrap();
        assert_eq!(path.cells, vec![(0, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_single_cell_row_and_column() {
        let path = max_value_path(&[vec![9_u16]]).unwrap();
        assert_eq!(path.total, 9);
        assert_eq!(path.cells, vec![(0, 0)]);
        assert!(path.moves().is_empty());

        let row = max_value_path(&[vec![1_u16, 2, 3]]).unwrap();
        assert_eq!(row.values, vec![1, 2, 3]);
        assert_eq!(row.moves(), vec![Move::Right, Move::Right]);

        let col = max_value_path(&[vec![4_u16], vec![5], vec![6]]).unwrap();
        assert_eq!(col.total, 15);
        assert_eq!(col.moves(), vec![Move::Down, Move::Down]);
    }

    #[test]
    fn test_invalid_grids() {
        let empty: Vec<Vec<u32>> = Vec::new();
        assert!(matches!(max_value_path(&empty), Err(Error::InvalidInput(_))));

        let no_cols: Vec<Vec<u32>> = vec![vec![]];
        assert!(matches!(max_value_path(&no_cols), Err(Error::InvalidInput(_))));

        let ragged = vec![vec![1_u32, 2], vec![3]];
        assert!(matches!(max_value_path(&ragged), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_overflow() {
        let grid = vec![vec![u8::MAX, 1]];
        assert!(matches!(max_value_path(&grid), Err(Error::Overflow(_))));
    }

    #[test]
    fn test_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let rows = rng.gen_range(1..6);
            let cols = rng.gen_range(1..6);
            let grid: Vec<Vec<u64>> = (0..rows)
                .map(|_| (0..cols).map(|_| rng.gen_range(0..50)).collect())
                .collect();

            let path = max_value_path(&grid).unwrap();
            assert_eq!(path.total, brute_force(&grid, 0, 0));
            assert_eq!(path.values.iter().sum::<u64>(), path.total);
            assert_eq!(path.cells.len(), rows + cols - 1);
            assert_eq!(path.cells.first(), Some(&(0, 0)));
            assert_eq!(path.cells.last(), Some(&(rows - 1, cols - 1)));
        }
    }
}
