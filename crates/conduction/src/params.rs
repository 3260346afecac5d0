//! Physical description of the conduction problem.

use quantity::{Dimension, Quantity, UnitSystem};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordModel {
  #[default]
  Planar,
  Cylindrical,
}

/// Interval, boundary temperatures, material and mesh resolution.
///
/// The step size `dx` is derived from `a`, `b` and `n` and is kept
/// up to date by every setter touching one of them.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParameters {
  a: Quantity,
  b: Quantity,
  bc_a: Quantity,
  bc_b: Quantity,
  k: Quantity,
  q: Quantity,
  n: usize,
  dx: Quantity,
  coord_model: CoordModel,
  unit_system: UnitSystem,
}

impl Default for ModelParameters {
  fn default() -> Self {
    Self::new(0.0, 2.0, 700.0, 300.0, 2.0, 1000.0, 6)
  }
}

impl ModelParameters {
  /// Planar model with all magnitudes given in metric units.
  pub fn new(a: f64, b: f64, bc_a: f64, bc_b: f64, k: f64, q: f64, n: usize) -> Self {
    let metric = |value, dim| Quantity::from_unit(value, UnitSystem::Metric.unit(dim));
    let mut params = Self {
      a: metric(a, Dimension::Length),
      b: metric(b, Dimension::Length),
      bc_a: metric(bc_a, Dimension::Temperature),
      bc_b: metric(bc_b, Dimension::Temperature),
      k: metric(k, Dimension::ThermalConductivity),
      q: metric(q, Dimension::VolumetricHeatGeneration),
      n,
      dx: metric(f64::NAN, Dimension::Length),
      coord_model: CoordModel::Planar,
      unit_system: UnitSystem::Metric,
    };
    params.update_dx();
    params
  }

  pub fn with_coord_model(mut self, coord_model: CoordModel) -> Self {
    self.set_coord_model(coord_model);
    self
  }

  pub fn with_unit_system(mut self, unit_system: UnitSystem) -> Self {
    self.set_unit_system(unit_system);
    self
  }

  fn active(&self, value: f64, dim: Dimension) -> Quantity {
    Quantity::from_unit(value, self.unit_system.unit(dim))
  }

  /// Recompute `dx` in the unit it currently carries.
  fn update_dx(&mut self) {
    let system = self.dx.unit().system();
    let a = self.a.to_system(system).value();
    let b = self.b.to_system(system).value();
    let nelements = self.n.saturating_sub(1) as f64;
    self.dx = Quantity::from_unit((b - a) / nelements, self.dx.unit());
  }

  pub fn set_a(&mut self, a: f64) {
    self.a = self.active(a, Dimension::Length);
    self.update_dx();
  }
  pub fn set_b(&mut self, b: f64) {
    self.b = self.active(b, Dimension::Length);
    self.update_dx();
  }
  pub fn set_n(&mut self, n: usize) {
    self.n = n;
    self.update_dx();
  }
  pub fn set_bc_a(&mut self, bc_a: f64) {
    self.bc_a = self.active(bc_a, Dimension::Temperature);
  }
  pub fn set_bc_b(&mut self, bc_b: f64) {
    self.bc_b = self.active(bc_b, Dimension::Temperature);
  }
  pub fn set_k(&mut self, k: f64) {
    self.k = self.active(k, Dimension::ThermalConductivity);
  }
  pub fn set_q(&mut self, q: f64) {
    self.q = self.active(q, Dimension::VolumetricHeatGeneration);
  }
  pub fn set_coord_model(&mut self, coord_model: CoordModel) {
    self.coord_model = coord_model;
  }

  /// Expresses every stored quantity in the units of `unit_system`.
  pub fn set_unit_system(&mut self, unit_system: UnitSystem) {
    self.unit_system = unit_system;
    for quantity in [
      &mut self.a,
      &mut self.b,
      &mut self.bc_a,
      &mut self.bc_b,
      &mut self.k,
      &mut self.q,
      &mut self.dx,
    ] {
      *quantity = quantity.to_system(unit_system);
    }
  }

  pub fn a(&self) -> Quantity {
    self.a
  }
  pub fn b(&self) -> Quantity {
    self.b
  }
  pub fn bc_a(&self) -> Quantity {
    self.bc_a
  }
  pub fn bc_b(&self) -> Quantity {
    self.bc_b
  }
  pub fn k(&self) -> Quantity {
    self.k
  }
  pub fn q(&self) -> Quantity {
    self.q
  }
  pub fn n(&self) -> usize {
    self.n
  }
  pub fn dx(&self) -> Quantity {
    self.dx
  }
  pub fn coord_model(&self) -> CoordModel {
    self.coord_model
  }
  pub fn unit_system(&self) -> UnitSystem {
    self.unit_system
  }

  /// Plain magnitudes, all in the active unit system.
  pub fn numeric(&self) -> NumericParameters {
    let system = self.unit_system;
    NumericParameters {
      a: self.a.to_system(system).value(),
      b: self.b.to_system(system).value(),
      bc_a: self.bc_a.to_system(system).value(),
      bc_b: self.bc_b.to_system(system).value(),
      k: self.k.to_system(system).value(),
      q: self.q.to_system(system).value(),
      dx: self.dx.to_system(system).value(),
      nnodes: self.n,
      coord_model: self.coord_model,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericParameters {
  pub a: f64,
  pub b: f64,
  pub bc_a: f64,
  pub bc_b: f64,
  pub k: f64,
  pub q: f64,
  pub dx: f64,
  pub nnodes: usize,
  pub coord_model: CoordModel,
}

#[cfg(test)]
mod test {
  use super::*;

  use approx::assert_relative_eq;
  use quantity::Unit;

  #[test]
  fn default_model() {
    let params = ModelParameters::default();
    assert_eq!(params.n(), 6);
    assert_eq!(params.a().symbol(), "m");
    assert_eq!(params.bc_a().symbol(), "K");
    assert_eq!(params.k().symbol(), "W/mK");
    assert_eq!(params.q().symbol(), "W/m^3");
    assert_eq!(params.coord_model(), CoordModel::Planar);
    assert_eq!(params.unit_system(), UnitSystem::Metric);
    assert_relative_eq!(params.dx().value(), 0.4);
  }

  #[test]
  fn dx_follows_interval_and_nodes() {
    let mut params = ModelParameters::default();
    params.set_n(3);
    assert_eq!(params.dx().value(), 1.0);
    params.set_b(4.0);
    assert_eq!(params.dx().value(), 2.0);
    params.set_a(1.0);
    assert_eq!(params.dx().value(), 1.5);
    assert_eq!(params.dx().unit(), Unit::Meter);
  }

  #[test]
  fn unit_switch_converts_everything() {
    let metric = ModelParameters::default();
    let imperial = metric.clone().with_unit_system(UnitSystem::Imperial);
    assert_eq!(imperial.b().unit(), Unit::Foot);
    assert_eq!(imperial.dx().unit(), Unit::Foot);
    assert_eq!(imperial.bc_b().unit(), Unit::DegreeFahrenheit);
    assert_eq!(imperial.k().unit(), Unit::BtuPerFootHourFahrenheit);
    assert_eq!(imperial.q().unit(), Unit::BtuPerHourCubicFoot);
    assert_relative_eq!(imperial.b().value(), 2.0 / 0.3048, max_relative = 1e-12);

    let back = imperial.with_unit_system(UnitSystem::Metric);
    let pairs = [
      (back.a(), metric.a()),
      (back.b(), metric.b()),
      (back.bc_a(), metric.bc_a()),
      (back.bc_b(), metric.bc_b()),
      (back.k(), metric.k()),
      (back.q(), metric.q()),
      (back.dx(), metric.dx()),
    ];
    for (back, original) in pairs {
      assert_eq!(back.unit(), original.unit());
      assert_relative_eq!(back.value(), original.value(), epsilon = 1e-9, max_relative = 1e-12);
    }
  }

  #[test]
  fn setters_use_active_units() {
    let mut params = ModelParameters::default().with_unit_system(UnitSystem::Imperial);
    params.set_b(10.0);
    assert_eq!(params.b().unit(), Unit::Foot);
    assert_eq!(params.b().value(), 10.0);
    assert_eq!(params.dx().unit(), Unit::Foot);
    assert_relative_eq!(params.dx().value(), (10.0 - params.a().value()) / 5.0);
  }

  #[test]
  fn too_few_nodes_leave_dx_unusable() {
    let mut params = ModelParameters::default();
    params.set_n(1);
    assert!(!params.dx().value().is_finite());
    params.set_n(0);
    assert!(!params.dx().value().is_finite());
  }
}
