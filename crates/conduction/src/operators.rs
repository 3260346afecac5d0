//! Element matrix and element vector providers for linear two-node elements.

use common::linalg::nalgebra::{Matrix, Vector};

use crate::{mesh::CellGeometry, params::CoordModel};

pub type DofCoeff = f64;

pub type ElMat = Matrix;
pub trait ElMatProvider {
  fn eval(&self, cell: &CellGeometry) -> ElMat;
}
impl<F> ElMatProvider for F
where
  F: Fn(&CellGeometry) -> ElMat,
{
  fn eval(&self, cell: &CellGeometry) -> ElMat {
    self(cell)
  }
}

pub type ElVec = Vector;
pub trait ElVecProvider {
  fn eval(&self, cell: &CellGeometry) -> ElVec;
}
impl<F> ElVecProvider for F
where
  F: Fn(&CellGeometry) -> ElVec,
{
  fn eval(&self, cell: &CellGeometry) -> ElVec {
    self(cell)
  }
}

/// $[(lambda_j', lambda_i')]$ on a unit length cell.
fn ref_difbarys_gramian() -> ElMat {
  na::dmatrix![
     1.0, -1.0;
    -1.0,  1.0;
  ]
}

/// Exact Element Matrix Provider for the conduction bilinear form $(k u', v')$.
pub struct ConductionElmat {
  conductivity: f64,
}
impl ConductionElmat {
  pub fn new(conductivity: f64) -> Self {
    Self { conductivity }
  }
}
impl ElMatProvider for ConductionElmat {
  fn eval(&self, cell: &CellGeometry) -> ElMat {
    (self.conductivity / cell.vol()) * ref_difbarys_gramian()
  }
}

/// Geometry correction added to the stiffness in the cylindrical model.
///
/// $(k/2) mat(1, -1; -1, 1)$, independent of the cell length and radius.
// WARN: Unverified physics. This is not the element matrix of the axisymmetric
// operator $1/r (r k u')'$, which would depend on the cell radii.
// Kept as is until someone derives the proper term.
pub struct CylindricalCorrectionElmat {
  conductivity: f64,
}
impl CylindricalCorrectionElmat {
  pub fn new(conductivity: f64) -> Self {
    Self { conductivity }
  }
}
impl ElMatProvider for CylindricalCorrectionElmat {
  fn eval(&self, _cell: &CellGeometry) -> ElMat {
    (self.conductivity / 2.0) * ref_difbarys_gramian()
  }
}

/// Full element stiffness of the chosen coordinate model.
pub struct StiffnessElmat {
  conduction: ConductionElmat,
  correction: Option<CylindricalCorrectionElmat>,
}
impl StiffnessElmat {
  pub fn new(conductivity: f64, coord_model: CoordModel) -> Self {
    let correction = match coord_model {
      CoordModel::Planar => None,
      CoordModel::Cylindrical => Some(CylindricalCorrectionElmat::new(conductivity)),
    };
    Self {
      conduction: ConductionElmat::new(conductivity),
      correction,
    }
  }
}
impl ElMatProvider for StiffnessElmat {
  fn eval(&self, cell: &CellGeometry) -> ElMat {
    let elmat = self.conduction.eval(cell);
    match &self.correction {
      Some(correction) => elmat + correction.eval(cell),
      None => elmat,
    }
  }
}

/// Element Vector Provider for a constant volumetric source.
///
/// Computed using trapezoidal quadrature rule.
/// Exact for constant source.
pub struct SourceElvec {
  source: f64,
}
impl SourceElvec {
  pub fn new(source: f64) -> Self {
    Self { source }
  }
}
impl ElVecProvider for SourceElvec {
  fn eval(&self, cell: &CellGeometry) -> ElVec {
    let nverts = cell.nvertices();
    cell.vol() / nverts as f64 * Vector::from_element(nverts, self.source)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  use approx::assert_relative_eq;

  #[test]
  fn conduction_scales_inversely_with_length() {
    let elmat = ConductionElmat::new(3.0).eval(&CellGeometry::new(0.5));
    assert_relative_eq!(elmat, na::dmatrix![6.0, -6.0; -6.0, 6.0]);
  }

  #[test]
  fn planar_stiffness_has_no_correction() {
    let cell = CellGeometry::new(0.25);
    let planar = StiffnessElmat::new(2.0, CoordModel::Planar).eval(&cell);
    assert_eq!(planar, ConductionElmat::new(2.0).eval(&cell));
  }

  #[test]
  fn cylindrical_stiffness_adds_half_conductivity() {
    let cell = CellGeometry::new(0.25);
    let cylindrical = StiffnessElmat::new(2.0, CoordModel::Cylindrical).eval(&cell);
    assert_relative_eq!(cylindrical, na::dmatrix![9.0, -9.0; -9.0, 9.0]);
  }

  #[test]
  fn source_is_split_evenly() {
    let elvec = SourceElvec::new(1000.0).eval(&CellGeometry::new(1.0));
    assert_eq!(elvec, na::dvector![500.0, 500.0]);
  }

  #[test]
  fn closures_are_providers() {
    let elmat = |cell: &CellGeometry| Matrix::identity(2, 2) * cell.vol();
    assert_eq!(ElMatProvider::eval(&elmat, &CellGeometry::new(2.0))[(1, 1)], 2.0);
  }
}
