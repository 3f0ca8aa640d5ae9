//! autocorrelation::search — first-crossing search over flag columns.
//!
//! Used by the IAT estimator to locate, per dimension, the first lag at which
//! the ACF turns negative.

use ndarray::{Array1, ArrayBase, Axis, Data, Ix2};

/// Index of the first `true` entry in each column of an `(n, d)` flag matrix.
///
/// Parameters
/// ----------
/// - `flags`: `&ArrayBase<S, Ix2>`
///   Boolean matrix with rows indexing position and columns indexing
///   independent dimensions.
///
/// Returns
/// -------
/// `Array1<usize>` of length `d`
///   For column `j`, the smallest row index `i` with `flags[[i, j]]`, or `n`
///   when the column contains no `true` entry. Every value lies in `[0, n]`.
///
/// Examples
/// --------
/// ```rust
/// use ndarray::array;
/// use rust_autocorr::autocorrelation::find_first;
///
/// let flags = array![[false, false], [false, true], [true, false]];
/// assert_eq!(find_first(&flags).to_vec(), vec![2, 1]);
/// ```
pub fn find_first<S>(flags: &ArrayBase<S, Ix2>) -> Array1<usize>
where
    S: Data<Elem = bool>,
{
    let n = flags.nrows();
    flags
        .axis_iter(Axis(1))
        .map(|column| column.iter().position(|&flag| flag).unwrap_or(n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - First-hit detection per column, including hits at row 0.
    // - The "no hit" convention (returns n).
    // - Degenerate shapes with zero rows or zero columns.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify column-wise first-hit indices on a mixed pattern.
    //
    // Given
    // -----
    // - A 4×3 flag matrix with hits at rows 0, 2 and none.
    //
    // Expect
    // ------
    // - [0, 2, 4].
    fn find_first_returns_first_true_row_per_column() {
        // Arrange
        let flags = array![
            [true, false, false],
            [false, false, false],
            [true, true, false],
            [false, true, false]
        ];

        // Act
        let idx = find_first(&flags);

        // Assert
        assert_eq!(idx.to_vec(), vec![0, 2, 4]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure degenerate shapes behave per the contract.
    //
    // Given
    // -----
    // - A 0×2 matrix and a 3×0 matrix.
    //
    // Expect
    // ------
    // - [0, 0] for the former (no rows ⇒ n = 0) and an empty result for
    //   the latter.
    fn find_first_handles_empty_shapes() {
        // Arrange
        let no_rows = Array2::<bool>::from_elem((0, 2), false);
        let no_cols = Array2::<bool>::from_elem((3, 0), true);

        // Act
        let a = find_first(&no_rows);
        let b = find_first(&no_cols);

        // Assert
        assert_eq!(a.to_vec(), vec![0, 0]);
        assert!(b.is_empty());
    }
}
