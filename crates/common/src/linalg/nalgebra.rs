pub type Vector<T = f64> = na::DVector<T>;
pub type Matrix<T = f64> = na::DMatrix<T>;
pub type CooMatrix<T = f64> = nas::CooMatrix<T>;
pub type CsrMatrix<T = f64> = nas::CsrMatrix<T>;

pub trait DMatrixExt {
  fn is_symmetric(&self, eps: f64) -> bool;
  fn is_spd(&self) -> bool;
  /// All entries off the three central diagonals are exactly zero.
  fn is_tridiagonal(&self) -> bool;
}
impl DMatrixExt for Matrix {
  fn is_symmetric(&self, eps: f64) -> bool {
    self.is_square() && (self - self.transpose()).amax() <= eps
  }
  fn is_spd(&self) -> bool {
    self.is_symmetric(0.0) && na::Cholesky::new(self.clone()).is_some()
  }
  fn is_tridiagonal(&self) -> bool {
    self.is_square()
      && (0..self.nrows())
        .all(|r| (0..self.ncols()).all(|c| r.abs_diff(c) <= 1 || self[(r, c)] == 0.0))
  }
}

pub trait CooMatrixExt {
  /// Duplicate triplets are summed.
  fn to_dense(&self) -> Matrix;
  fn to_csr(&self) -> CsrMatrix;
}
impl CooMatrixExt for CooMatrix {
  fn to_dense(&self) -> Matrix {
    Matrix::from(self)
  }
  fn to_csr(&self) -> CsrMatrix {
    CsrMatrix::from(self)
  }
}

/// Band matrix with constant `values` placed on the diagonals at `offsets`.
///
/// Positive offsets are above the main diagonal.
pub fn matrix_from_const_diagonals<T>(
  values: &[T],
  offsets: &[isize],
  nrows: usize,
  ncols: usize,
) -> Matrix<T>
where
  T: num_traits::Zero + na::Scalar + Copy,
{
  assert_eq!(values.len(), offsets.len());

  let mut matrix = Matrix::from_element(nrows, ncols, T::zero());
  for (&value, &offset) in values.iter().zip(offsets) {
    let (row0, col0) = if offset >= 0 {
      (0, offset.unsigned_abs())
    } else {
      (offset.unsigned_abs(), 0)
    };
    for (r, c) in (row0..nrows).zip(col0..ncols) {
      matrix[(r, c)] = value;
    }
  }
  matrix
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn const_diagonals_tridiagonal() {
    #[rustfmt::skip]
    let expected = Matrix::<i32>::from_row_slice(4, 4, &[
       2,-1, 0, 0,
      -1, 2,-1, 0,
       0,-1, 2,-1,
       0, 0,-1, 2,
    ]);
    let computed = matrix_from_const_diagonals(&[-1, 2, -1], &[-1, 0, 1], 4, 4);
    assert_eq!(computed, expected);
  }

  #[test]
  fn laplacian_is_spd_and_tridiagonal() {
    let laplacian = matrix_from_const_diagonals(&[-1.0, 2.0, -1.0], &[-1, 0, 1], 5, 5);
    assert!(laplacian.is_spd());
    assert!(laplacian.is_tridiagonal());

    let indefinite = matrix_from_const_diagonals(&[-1.0, 1.0, -1.0], &[-1, 0, 1], 3, 3);
    assert!(indefinite.is_symmetric(0.0));
    assert!(!indefinite.is_spd());

    let full = Matrix::from_element(3, 3, 1.0);
    assert!(!full.is_tridiagonal());
  }

  #[test]
  fn coo_duplicates_are_summed() {
    let mut coo = CooMatrix::new(2, 2);
    coo.push(0, 0, 1.0);
    coo.push(0, 0, 2.5);
    coo.push(1, 0, -1.0);
    let dense = coo.to_dense();
    assert_eq!(dense, Matrix::from_row_slice(2, 2, &[3.5, 0.0, -1.0, 0.0]));
    assert_eq!(Matrix::from(&coo.to_csr()), dense);
  }
}
