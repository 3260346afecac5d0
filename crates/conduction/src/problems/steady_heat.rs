//! Module for the steady Heat Equation with a constant source.
//!
//! $-(k u')' = q$ on $[a, b]$ with $u(a) = T_a$ and $u(b) = T_b$,
//! discretized by piecewise-linear Lagrange elements on a uniform mesh.

use crate::{
  assemble::{self, GalMat, GalVec},
  error::{SolveError, SolveResult},
  mesh::UniformMesh,
  operators::{SourceElvec, StiffnessElmat},
  params::{CoordModel, ModelParameters, NumericParameters},
};

use common::linalg::nalgebra::{CooMatrixExt, Matrix, Vector};

/// Nodal result of a single solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
  positions: Vector,
  temperatures: Vector,
  reactions: Vector,
}

impl Solution {
  pub fn nnodes(&self) -> usize {
    self.positions.len()
  }

  /// $x_i = a + i dif x$
  pub fn positions(&self) -> &Vector {
    &self.positions
  }
  pub fn temperatures(&self) -> &Vector {
    &self.temperatures
  }
  /// $K T - F$ over all nodes.
  pub fn reactions(&self) -> &Vector {
    &self.reactions
  }

  /// Temperatures of all nodes except the two boundary nodes.
  pub fn interior_temperatures(&self) -> na::DVectorView<'_, f64> {
    let n = self.nnodes();
    self.temperatures.rows(1, n - 2)
  }

  /// Reaction flux needed to hold the prescribed temperatures at `a` and `b`.
  pub fn boundary_reactions(&self) -> [f64; 2] {
    [self.reactions[0], self.reactions[self.nnodes() - 1]]
  }

  /// Largest reaction magnitude on an interior node, zero up to rounding.
  pub fn max_interior_residual(&self) -> f64 {
    let n = self.nnodes();
    self.reactions.as_slice()[1..n - 1]
      .iter()
      .fold(0.0, |max, r| r.abs().max(max))
  }
}

fn validate(params: &NumericParameters) -> SolveResult<()> {
  let NumericParameters {
    a, b, dx, k, nnodes, ..
  } = *params;

  if nnodes < 2 {
    return Err(SolveError::InvalidNodeCount { nnodes });
  }
  if a == b || !dx.is_finite() || dx <= 0.0 {
    return Err(SolveError::DegenerateMesh { a, b, dx });
  }
  if !k.is_finite() || k <= 0.0 {
    return Err(SolveError::NonPositiveConductivity { k });
  }
  Ok(())
}

/// Validates the parameters and assembles the unreduced Galerkin system.
pub fn assemble_system(params: &ModelParameters) -> SolveResult<(UniformMesh, GalMat, GalVec)> {
  let params = params.numeric();
  validate(&params)?;

  let mesh = UniformMesh::from_params(&params);
  if params.coord_model == CoordModel::Cylindrical {
    tracing::warn!("applying the unverified cylindrical stiffness correction.");
  }

  let elmat = StiffnessElmat::new(params.k, params.coord_model);
  let galmat = assemble::assemble_galmat(&mesh, elmat);

  let elvec = SourceElvec::new(params.q);
  let galvec = assemble::assemble_galvec(&mesh, elvec);

  tracing::debug!(
    nnodes = mesh.nnodes(),
    ntriplets = galmat.nnz(),
    "assembled steady heat system"
  );
  Ok((mesh, galmat, galvec))
}

/// Solves for the nodal temperatures and boundary reactions.
pub fn solve(params: &ModelParameters) -> SolveResult<Solution> {
  let (mesh, galmat, galvec) = assemble_system(params)?;
  let NumericParameters { bc_a, bc_b, .. } = params.numeric();

  let [first, last] = mesh.boundary_nodes();
  let dof_coeffs = [(first, bc_a), (last, bc_b)];

  let (reduced_galmat, reduced_galvec) =
    assemble::eliminate_fixed_dofs(&dof_coeffs, &galmat, &galvec);

  let interior = if reduced_galvec.is_empty() {
    tracing::debug!("no interior nodes, skipping reduced solve");
    Vector::zeros(0)
  } else {
    solve_dense(reduced_galmat.to_dense(), &reduced_galvec)?
  };

  let temperatures = assemble::reintroduce_fixed_dofs(&dof_coeffs, interior);
  let reactions = galmat.to_dense() * &temperatures - &galvec;

  let solution = Solution {
    positions: mesh.coords(),
    temperatures,
    reactions,
  };
  tracing::trace!(
    residual = solution.max_interior_residual(),
    "interior residual of steady heat solution"
  );
  Ok(solution)
}

/// Pivoted dense direct solve, rejecting singular and non-finite outcomes.
fn solve_dense(galmat: Matrix, galvec: &Vector) -> SolveResult<Vector> {
  let size = galvec.len();
  galmat
    .full_piv_lu()
    .solve(galvec)
    .filter(|galsol| galsol.iter().all(|v| v.is_finite()))
    .ok_or(SolveError::SingularSystem { size })
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn singular_reduced_system_is_reported() {
    let galmat = Matrix::zeros(2, 2);
    let galvec = na::dvector![1.0, 1.0];
    assert_eq!(
      solve_dense(galmat, &galvec),
      Err(SolveError::SingularSystem { size: 2 })
    );
  }

  #[test]
  fn two_nodes_skip_the_reduced_solve() {
    let params = ModelParameters::new(0.0, 1.0, 10.0, 20.0, 1.0, 0.0, 2);
    let solution = solve(&params).unwrap();
    assert_eq!(solution.temperatures(), &na::dvector![10.0, 20.0]);
    assert!(solution.interior_temperatures().is_empty());
    assert_eq!(solution.interior_temperatures().nrows(), 0);
    assert_eq!(solution.max_interior_residual(), 0.0);
    // Exact linear profile: flux k (T_b - T_a) / L leaves through both ends.
    assert_eq!(solution.boundary_reactions(), [-10.0, 10.0]);
  }
}
