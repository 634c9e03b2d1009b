//! Diagonal cross pattern used by the demo program

use infmat_core::{Coord, Matrix, Result};

/// Build a `size` x `size` cross: `m[i][i] = i` on the main diagonal and
/// `m[size-1-i][i] = size-1-i` on the antidiagonal
///
/// Cells whose value equals `default` are never stored, so with the usual
/// default of 0 the two zero-valued corners stay empty.
pub fn diagonal_cross(size: Coord, default: Coord) -> Result<Matrix<Coord>> {
    let mut matrix = Matrix::new(default);
    for i in 0..size {
        matrix.access(i, i).assign(i)?;
        let mirrored = size - 1 - i;
        matrix.access(mirrored, i).assign(mirrored)?;
    }
    Ok(matrix)
}
