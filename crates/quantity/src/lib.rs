//! Physical quantities as a magnitude tagged with a unit symbol.
//!
//! Only the units appearing in the conduction model are known.
//! All conversion factors are taken from `uom`.

use uom::si::{
  energy::{btu_it, joule},
  f64::{Energy, Length, TemperatureInterval, ThermodynamicTemperature, Time},
  length::{foot, meter},
  temperature_interval, thermodynamic_temperature,
  time::{hour, second},
};

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
  #[error("unknown unit symbol `{0}`")]
  UnknownSymbol(String),
  #[error("cannot convert `{from}` ({from_dim:?}) to `{to}` ({to_dim:?})")]
  IncompatibleUnits {
    from: &'static str,
    from_dim: Dimension,
    to: &'static str,
    to_dim: Dimension,
  },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
  Length,
  Temperature,
  ThermalConductivity,
  VolumetricHeatGeneration,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitSystem {
  #[default]
  Metric,
  Imperial,
}

impl UnitSystem {
  pub fn unit(self, dim: Dimension) -> Unit {
    use Dimension as D;
    match (self, dim) {
      (Self::Metric, D::Length) => Unit::Meter,
      (Self::Metric, D::Temperature) => Unit::Kelvin,
      (Self::Metric, D::ThermalConductivity) => Unit::WattPerMeterKelvin,
      (Self::Metric, D::VolumetricHeatGeneration) => Unit::WattPerCubicMeter,
      (Self::Imperial, D::Length) => Unit::Foot,
      (Self::Imperial, D::Temperature) => Unit::DegreeFahrenheit,
      (Self::Imperial, D::ThermalConductivity) => Unit::BtuPerFootHourFahrenheit,
      (Self::Imperial, D::VolumetricHeatGeneration) => Unit::BtuPerHourCubicFoot,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
  Meter,
  Foot,
  Kelvin,
  DegreeFahrenheit,
  WattPerMeterKelvin,
  BtuPerFootHourFahrenheit,
  WattPerCubicMeter,
  BtuPerHourCubicFoot,
}

impl Unit {
  pub const ALL: [Unit; 8] = [
    Unit::Meter,
    Unit::Foot,
    Unit::Kelvin,
    Unit::DegreeFahrenheit,
    Unit::WattPerMeterKelvin,
    Unit::BtuPerFootHourFahrenheit,
    Unit::WattPerCubicMeter,
    Unit::BtuPerHourCubicFoot,
  ];

  pub fn from_symbol(symbol: &str) -> Result<Self, UnitError> {
    Self::ALL
      .into_iter()
      .find(|unit| unit.symbol() == symbol)
      .ok_or_else(|| UnitError::UnknownSymbol(symbol.to_owned()))
  }

  pub fn symbol(self) -> &'static str {
    match self {
      Self::Meter => "m",
      Self::Foot => "ft",
      Self::Kelvin => "K",
      Self::DegreeFahrenheit => "F",
      Self::WattPerMeterKelvin => "W/mK",
      Self::BtuPerFootHourFahrenheit => "Btu/ft-hr-F",
      Self::WattPerCubicMeter => "W/m^3",
      Self::BtuPerHourCubicFoot => "Btu/hr/ft^3",
    }
  }

  pub fn dimension(self) -> Dimension {
    match self {
      Self::Meter | Self::Foot => Dimension::Length,
      Self::Kelvin | Self::DegreeFahrenheit => Dimension::Temperature,
      Self::WattPerMeterKelvin | Self::BtuPerFootHourFahrenheit => Dimension::ThermalConductivity,
      Self::WattPerCubicMeter | Self::BtuPerHourCubicFoot => Dimension::VolumetricHeatGeneration,
    }
  }

  pub fn system(self) -> UnitSystem {
    match self {
      Self::Meter | Self::Kelvin | Self::WattPerMeterKelvin | Self::WattPerCubicMeter => {
        UnitSystem::Metric
      }
      Self::Foot
      | Self::DegreeFahrenheit
      | Self::BtuPerFootHourFahrenheit
      | Self::BtuPerHourCubicFoot => UnitSystem::Imperial,
    }
  }

  /// Magnitude in the metric unit of the same dimension.
  fn metric_value(self, value: f64) -> f64 {
    match self {
      Self::Meter | Self::Kelvin | Self::WattPerMeterKelvin | Self::WattPerCubicMeter => value,
      Self::Foot => Length::new::<foot>(value).get::<meter>(),
      Self::DegreeFahrenheit => {
        ThermodynamicTemperature::new::<thermodynamic_temperature::degree_fahrenheit>(value)
          .get::<thermodynamic_temperature::kelvin>()
      }
      Self::BtuPerFootHourFahrenheit => value / imperial_conductivity_per_metric(),
      Self::BtuPerHourCubicFoot => value / imperial_generation_per_metric(),
    }
  }

  /// Magnitude in this unit of a value given in the metric unit of the same dimension.
  fn value_from_metric(self, value: f64) -> f64 {
    match self {
      Self::Meter | Self::Kelvin | Self::WattPerMeterKelvin | Self::WattPerCubicMeter => value,
      Self::Foot => Length::new::<meter>(value).get::<foot>(),
      Self::DegreeFahrenheit => {
        ThermodynamicTemperature::new::<thermodynamic_temperature::kelvin>(value)
          .get::<thermodynamic_temperature::degree_fahrenheit>()
      }
      Self::BtuPerFootHourFahrenheit => value * imperial_conductivity_per_metric(),
      Self::BtuPerHourCubicFoot => value * imperial_generation_per_metric(),
    }
  }
}

impl fmt::Display for Unit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.symbol())
  }
}

impl std::str::FromStr for Unit {
  type Err = UnitError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_symbol(s)
  }
}

fn btu_per_joule() -> f64 {
  Energy::new::<joule>(1.0).get::<btu_it>()
}
fn hours_per_second() -> f64 {
  Time::new::<second>(1.0).get::<hour>()
}
fn feet_per_meter() -> f64 {
  Length::new::<meter>(1.0).get::<foot>()
}
fn fahrenheit_per_kelvin() -> f64 {
  TemperatureInterval::new::<temperature_interval::kelvin>(1.0)
    .get::<temperature_interval::degree_fahrenheit>()
}

/// $1 "W/(m K)"$ expressed in $"Btu"/("ft" "hr" degree"F")$.
fn imperial_conductivity_per_metric() -> f64 {
  btu_per_joule() / (hours_per_second() * feet_per_meter() * fahrenheit_per_kelvin())
}

/// $1 "W/m"^3$ expressed in $"Btu"/("hr" "ft"^3)$.
fn imperial_generation_per_metric() -> f64 {
  btu_per_joule() / (hours_per_second() * feet_per_meter().powi(3))
}

/// A magnitude together with the unit it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
  value: f64,
  unit: Unit,
}

impl Quantity {
  pub fn new(value: f64, symbol: &str) -> Result<Self, UnitError> {
    Ok(Self::from_unit(value, Unit::from_symbol(symbol)?))
  }

  pub fn from_unit(value: f64, unit: Unit) -> Self {
    Self { value, unit }
  }

  pub fn value(&self) -> f64 {
    self.value
  }
  pub fn unit(&self) -> Unit {
    self.unit
  }
  pub fn symbol(&self) -> &'static str {
    self.unit.symbol()
  }
  pub fn dimension(&self) -> Dimension {
    self.unit.dimension()
  }

  pub fn convert_to(&self, symbol: &str) -> Result<Self, UnitError> {
    self.convert_to_unit(Unit::from_symbol(symbol)?)
  }

  pub fn convert_to_unit(&self, unit: Unit) -> Result<Self, UnitError> {
    if unit.dimension() != self.dimension() {
      return Err(UnitError::IncompatibleUnits {
        from: self.symbol(),
        from_dim: self.dimension(),
        to: unit.symbol(),
        to_dim: unit.dimension(),
      });
    }
    Ok(self.convert_unchecked(unit))
  }

  /// Same physical value expressed in the unit of `system`.
  pub fn to_system(&self, system: UnitSystem) -> Self {
    self.convert_unchecked(system.unit(self.dimension()))
  }

  fn convert_unchecked(&self, unit: Unit) -> Self {
    if unit == self.unit {
      return *self;
    }
    let value = unit.value_from_metric(self.unit.metric_value(self.value));
    Self { value, unit }
  }
}

impl fmt::Display for Quantity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.value, self.unit)
  }
}
