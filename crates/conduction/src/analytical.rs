//! Closed-form steady temperature profile for a constant heat source.
//!
//! Independent of any mesh, used to validate the Galerkin solution.

use crate::{
  error::{SolveError, SolveResult},
  params::{CoordModel, ModelParameters, NumericParameters},
  problems::steady_heat::Solution,
};

use common::linalg::nalgebra::Vector;

use std::ops::Range;

/// Margin beyond the interval used by the plot overlay.
pub const DEFAULT_MARGIN: f64 = 0.05;
pub const DEFAULT_STEP: f64 = 0.01;

/// Absorbs rounding in the sample count, so that `x_max` itself is sampled
/// whenever the interval is a multiple of the step.
const SAMPLE_COUNT_TOL: f64 = 1e-9;

/// Upper bound on the number of samples of a single curve.
pub const MAX_SAMPLES: usize = u32::MAX as usize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticalProfile {
  coord_model: CoordModel,
  /// $q/(2k)$ planar, $q/(4k)$ cylindrical.
  source_coeff: f64,
  c1: f64,
  c2: f64,
}

impl AnalyticalProfile {
  pub fn new(params: &ModelParameters) -> SolveResult<Self> {
    let NumericParameters {
      a,
      b,
      bc_a,
      bc_b,
      k,
      q,
      dx,
      coord_model,
      ..
    } = params.numeric();

    if k == 0.0 || !k.is_finite() {
      return Err(SolveError::NonPositiveConductivity { k });
    }

    let profile = match coord_model {
      CoordModel::Planar => {
        if a == b {
          return Err(SolveError::DegenerateMesh { a, b, dx });
        }
        let source_coeff = q / (2.0 * k);
        let c1 = ((bc_b - bc_a) - source_coeff * (a * a - b * b)) / (b - a);
        let c2 = bc_a + source_coeff * a * a - c1 * a;
        Self {
          coord_model,
          source_coeff,
          c1,
          c2,
        }
      }
      // WARN: Questionable physics. Only the condition at `b` is imposed,
      // and `c1` enters `eval` as a constant instead of as a coefficient.
      CoordModel::Cylindrical => {
        let source_coeff = q / (4.0 * k);
        let c1 = 0.0;
        let c2 = bc_b + source_coeff * b * b;
        Self {
          coord_model,
          source_coeff,
          c1,
          c2,
        }
      }
    };
    Ok(profile)
  }

  pub fn coord_model(&self) -> CoordModel {
    self.coord_model
  }
  pub fn c1(&self) -> f64 {
    self.c1
  }
  pub fn c2(&self) -> f64 {
    self.c2
  }

  pub fn eval(&self, x: f64) -> f64 {
    let quadratic = -self.source_coeff * x * x;
    match self.coord_model {
      CoordModel::Planar => quadratic + self.c1 * x + self.c2,
      CoordModel::Cylindrical => quadratic + self.c1 + self.c2,
    }
  }

  /// Galerkin minus closed-form temperature at every node.
  pub fn nodal_errors(&self, solution: &Solution) -> Vector {
    solution
      .temperatures()
      .zip_map(solution.positions(), |t, x| t - self.eval(x))
  }
}

/// Evenly spaced samples $(x_i, T(x_i))$ with $x_i = x_min + i h$.
///
/// Finite and restartable: every call to [`AnalyticalCurve::iter`] starts over.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticalCurve {
  profile: AnalyticalProfile,
  x_min: f64,
  step: f64,
  nsamples: usize,
}

impl AnalyticalCurve {
  pub fn sample(profile: AnalyticalProfile, x_min: f64, x_max: f64, step: f64) -> SolveResult<Self> {
    let valid = x_min.is_finite() && x_max.is_finite() && step.is_finite();
    if !valid || step <= 0.0 || x_max < x_min {
      return Err(SolveError::InvalidSampling { x_min, x_max, step });
    }
    let invalid = SolveError::InvalidSampling { x_min, x_max, step };

    let nsteps = ((x_max - x_min) / step + SAMPLE_COUNT_TOL).floor();
    if !nsteps.is_finite() || nsteps >= MAX_SAMPLES as f64 {
      return Err(invalid);
    }
    let nsamples = (nsteps as usize).checked_add(1).ok_or(invalid)?;
    Ok(Self {
      profile,
      x_min,
      step,
      nsamples,
    })
  }

  pub fn profile(&self) -> &AnalyticalProfile {
    &self.profile
  }

  pub fn len(&self) -> usize {
    self.nsamples
  }
  pub fn is_empty(&self) -> bool {
    self.nsamples == 0
  }

  pub fn iter(&self) -> CurveIter<'_> {
    CurveIter {
      curve: self,
      range: 0..self.nsamples,
    }
  }

  fn sample_at(&self, isample: usize) -> (f64, f64) {
    let x = self.x_min + isample as f64 * self.step;
    (x, self.profile.eval(x))
  }
}

impl<'a> IntoIterator for &'a AnalyticalCurve {
  type Item = (f64, f64);
  type IntoIter = CurveIter<'a>;
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

#[derive(Debug, Clone)]
pub struct CurveIter<'a> {
  curve: &'a AnalyticalCurve,
  range: Range<usize>,
}
impl Iterator for CurveIter<'_> {
  type Item = (f64, f64);
  fn next(&mut self) -> Option<Self::Item> {
    self.range.next().map(|i| self.curve.sample_at(i))
  }
  fn size_hint(&self) -> (usize, Option<usize>) {
    self.range.size_hint()
  }
}
impl DoubleEndedIterator for CurveIter<'_> {
  fn next_back(&mut self) -> Option<Self::Item> {
    self.range.next_back().map(|i| self.curve.sample_at(i))
  }
}
impl ExactSizeIterator for CurveIter<'_> {}

/// Closed-form profile sampled over $[x_min, x_max]$.
pub fn curve(
  params: &ModelParameters,
  x_min: f64,
  x_max: f64,
  step: f64,
) -> SolveResult<AnalyticalCurve> {
  let profile = AnalyticalProfile::new(params)?;
  AnalyticalCurve::sample(profile, x_min, x_max, step)
}

/// Closed-form profile sampled over the interval widened by `margin` on both sides.
pub fn curve_with_margin(
  params: &ModelParameters,
  margin: f64,
  step: f64,
) -> SolveResult<AnalyticalCurve> {
  let NumericParameters { a, b, .. } = params.numeric();
  curve(params, a - margin, b + margin, step)
}
