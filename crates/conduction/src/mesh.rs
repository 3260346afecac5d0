//! Uniform mesh of two-node elements on an interval.

use common::linalg::nalgebra::Vector;

use crate::params::NumericParameters;

pub type DofIdx = usize;
pub type CellIdx = usize;

/// Nodes $x_i = x_0 + i h$ for $i = 0, ..., n-1$.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformMesh {
  start: f64,
  step: f64,
  nnodes: usize,
}

impl UniformMesh {
  pub fn new(start: f64, step: f64, nnodes: usize) -> Self {
    assert!(nnodes >= 2, "mesh needs at least one cell");
    Self {
      start,
      step,
      nnodes,
    }
  }

  pub fn from_params(params: &NumericParameters) -> Self {
    Self::new(params.a, params.dx, params.nnodes)
  }

  pub fn nnodes(&self) -> usize {
    self.nnodes
  }
  pub fn ncells(&self) -> usize {
    self.nnodes - 1
  }
  pub fn step(&self) -> f64 {
    self.step
  }

  pub fn coord(&self, inode: DofIdx) -> f64 {
    self.start + inode as f64 * self.step
  }
  pub fn coords(&self) -> Vector {
    Vector::from_iterator(self.nnodes, (0..self.nnodes).map(|i| self.coord(i)))
  }

  /// Cell `i` connects the nodes `i` and `i+1`.
  pub fn cells(&self) -> impl Iterator<Item = [DofIdx; 2]> {
    (0..self.ncells()).map(|icell| [icell, icell + 1])
  }

  pub fn cell_geometry(&self, _icell: CellIdx) -> CellGeometry {
    CellGeometry { length: self.step }
  }

  pub fn boundary_nodes(&self) -> [DofIdx; 2] {
    [0, self.nnodes - 1]
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
  length: f64,
}
impl CellGeometry {
  pub fn new(length: f64) -> Self {
    Self { length }
  }
  pub fn nvertices(&self) -> usize {
    2
  }
  pub fn vol(&self) -> f64 {
    self.length
  }
}
