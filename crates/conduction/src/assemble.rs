use crate::{
  mesh::{DofIdx, UniformMesh},
  operators::{DofCoeff, ElMatProvider, ElVecProvider},
};

use common::{
  linalg::nalgebra::{CooMatrixExt, Vector},
  util,
};
use itertools::Itertools;

pub type GalMat = nas::CooMatrix<f64>;
pub type GalVec = na::DVector<f64>;

/// Assembly algorithm for the Galerkin Matrix.
///
/// Element contributions are accumulated cell by cell in mesh order.
pub fn assemble_galmat(mesh: &UniformMesh, elmat: impl ElMatProvider) -> GalMat {
  let ndofs = mesh.nnodes();
  let mut galmat = GalMat::new(ndofs, ndofs);

  for (icell, cell) in mesh.cells().enumerate() {
    let elmat = elmat.eval(&mesh.cell_geometry(icell));

    for ((ilocal, &iglobal), (jlocal, &jglobal)) in cell
      .iter()
      .enumerate()
      .cartesian_product(cell.iter().enumerate())
    {
      let val = elmat[(ilocal, jlocal)];
      if val != 0.0 {
        galmat.push(iglobal, jglobal, val);
      }
    }
  }

  galmat
}

/// Assembly algorithm for the Galerkin Vector.
pub fn assemble_galvec(mesh: &UniformMesh, elvec: impl ElVecProvider) -> GalVec {
  let mut galvec = GalVec::zeros(mesh.nnodes());

  for (icell, cell) in mesh.cells().enumerate() {
    let elvec = elvec.eval(&mesh.cell_geometry(icell));
    for (ilocal, &iglobal) in cell.iter().enumerate() {
      galvec[iglobal] += elvec[ilocal];
    }
  }

  galvec
}

/// Restrict the Galerkin system to the free DOFs by prescribing the fixed ones.
///
/// $A_(f f) mu_f = phi_f - A_(f c) gamma$
///
/// Returns the reduced matrix and vector, indexed by the free DOFs in their original order.
pub fn eliminate_fixed_dofs(
  dof_coeffs: &[(DofIdx, DofCoeff)],
  galmat: &GalMat,
  galvec: &GalVec,
) -> (GalMat, GalVec) {
  assert!(galmat.nrows() == galmat.ncols());
  assert!(galmat.nrows() == galvec.nrows());
  let ndofs = galvec.nrows();

  let dof_coeffs_opt = util::sparse_to_dense_data(dof_coeffs.to_vec(), ndofs);
  let dof_coeffs_zeroed =
    Vector::from_iterator(ndofs, dof_coeffs_opt.iter().map(|v| v.unwrap_or(0.0)));

  // Move the prescribed contributions to the right-hand side.
  let mut reduced_galvec = galvec - galmat.to_csr() * dof_coeffs_zeroed;

  let fixed_dofs = dof_coeffs.iter().map(|&(idof, _)| idof).collect_vec();
  let reduced_galmat = drop_dofs_galmat(&fixed_dofs, galmat);
  drop_dofs_galvec(&fixed_dofs, &mut reduced_galvec);

  (reduced_galmat, reduced_galvec)
}

/// Remove the rows and columns of `dofs`, renumbering the remaining ones consecutively.
pub fn drop_dofs_galmat(dofs: &[DofIdx], galmat: &GalMat) -> GalMat {
  assert!(galmat.nrows() == galmat.ncols());
  let ndofs = galmat.ncols();

  let kept = util::complement_indicies(dofs, ndofs);
  let mut renumbering = vec![None; ndofs];
  for (inew, &iold) in kept.iter().enumerate() {
    renumbering[iold] = Some(inew);
  }

  let mut reduced = GalMat::new(kept.len(), kept.len());
  for (r, c, &v) in galmat.triplet_iter() {
    if let (Some(r), Some(c)) = (renumbering[r], renumbering[c]) {
      reduced.push(r, c, v);
    }
  }
  reduced
}

pub fn drop_dofs_galvec(dofs: &[DofIdx], galvec: &mut GalVec) {
  let mut dofs = dofs.to_vec();
  dofs.sort_unstable();
  dofs.dedup();
  *galvec = std::mem::replace(galvec, GalVec::zeros(0)).remove_rows_at(&dofs);
}

/// Insert the prescribed coefficients back into a solution over the free DOFs.
pub fn reintroduce_fixed_dofs(dof_coeffs: &[(DofIdx, DofCoeff)], galsol: GalVec) -> GalVec {
  let dof_coeffs = dof_coeffs
    .iter()
    .copied()
    .sorted_unstable_by_key(|&(idof, _)| idof)
    .dedup_by(|a, b| a.0 == b.0)
    .collect_vec();

  let mut galsol = galsol;
  for (idof, coeff) in dof_coeffs {
    galsol = galsol.insert_row(idof, coeff);
  }
  galsol
}

#[cfg(test)]
mod test {
  use super::*;

  use crate::operators::{ConductionElmat, SourceElvec};
  use common::linalg::nalgebra::{matrix_from_const_diagonals, Matrix};

  #[test]
  fn galmat_is_scaled_laplacian() {
    let mesh = UniformMesh::new(0.0, 0.5, 5);
    let galmat = assemble_galmat(&mesh, ConductionElmat::new(1.0)).to_dense();

    let mut expected = matrix_from_const_diagonals(&[-2.0, 4.0, -2.0], &[-1, 0, 1], 5, 5);
    expected[(0, 0)] = 2.0;
    expected[(4, 4)] = 2.0;
    assert_eq!(galmat, expected);
  }

  #[test]
  fn galvec_interior_gets_two_contributions() {
    let mesh = UniformMesh::new(0.0, 1.0, 4);
    let galvec = assemble_galvec(&mesh, SourceElvec::new(2.0));
    assert_eq!(galvec, na::dvector![1.0, 2.0, 2.0, 1.0]);
  }

  #[test]
  fn drop_dofs_renumbers() {
    #[rustfmt::skip]
    let dense = Matrix::from_row_slice(3, 3, &[
      1.0, 2.0, 3.0,
      4.0, 5.0, 6.0,
      7.0, 8.0, 9.0,
    ]);
    let mut coo = GalMat::new(3, 3);
    for (r, c) in (0..3).cartesian_product(0..3) {
      coo.push(r, c, dense[(r, c)]);
    }

    let reduced = drop_dofs_galmat(&[1], &coo).to_dense();
    assert_eq!(reduced, Matrix::from_row_slice(2, 2, &[1.0, 3.0, 7.0, 9.0]));

    let mut galvec = na::dvector![1.0, 2.0, 3.0];
    drop_dofs_galvec(&[0, 2], &mut galvec);
    assert_eq!(galvec, na::dvector![2.0]);
  }

  #[test]
  fn elimination_moves_boundary_to_rhs() {
    let mesh = UniformMesh::new(0.0, 1.0, 3);
    let galmat = assemble_galmat(&mesh, ConductionElmat::new(2.0));
    let galvec = assemble_galvec(&mesh, SourceElvec::new(1000.0));

    let (reduced_galmat, reduced_galvec) =
      eliminate_fixed_dofs(&[(0, 700.0), (2, 300.0)], &galmat, &galvec);
    assert_eq!(reduced_galmat.to_dense(), na::dmatrix![4.0]);
    assert_eq!(reduced_galvec, na::dvector![3000.0]);
  }

  #[test]
  fn reintroduce_in_node_order() {
    let galsol = reintroduce_fixed_dofs(&[(3, 9.0), (0, 1.0)], na::dvector![5.0, 6.0]);
    assert_eq!(galsol, na::dvector![1.0, 5.0, 6.0, 9.0]);

    let empty = reintroduce_fixed_dofs(&[(0, 1.0), (1, 2.0)], GalVec::zeros(0));
    assert_eq!(empty, na::dvector![1.0, 2.0]);
  }
}
