//! Solves the default conduction model in both coordinate models
//! and compares the nodal temperatures with the closed-form profile.

use conduction::{
  analytical::{self, AnalyticalProfile},
  solve, CoordModel, ModelParameters, SolveResult,
};
use quantity::UnitSystem;

fn main() -> SolveResult<()> {
  tracing_subscriber::fmt::init();

  for unit_system in [UnitSystem::Metric, UnitSystem::Imperial] {
    for coord_model in [CoordModel::Planar, CoordModel::Cylindrical] {
      let mut params = ModelParameters::default()
        .with_coord_model(coord_model)
        .with_unit_system(unit_system);
      params.set_n(11);
      report(&params)?;
    }
  }
  Ok(())
}

fn print_seperator() {
  let nchar = 50;
  println!("{}", "-".repeat(nchar));
}

fn report(params: &ModelParameters) -> SolveResult<()> {
  let solution = solve(params)?;
  let profile = AnalyticalProfile::new(params)?;
  let errors = profile.nodal_errors(&solution);

  let length_unit = params.a().symbol();
  let temp_unit = params.bc_a().symbol();
  println!(
    "{:?} model, {:?} units, n={}, dx={:.4} {length_unit}",
    params.coord_model(),
    params.unit_system(),
    params.n(),
    params.dx().value()
  );

  print_seperator();
  println!(
    "| {:>3} | {:>9} | {:>12} | {:>15} |",
    "i",
    format!("x [{length_unit}]"),
    format!("T [{temp_unit}]"),
    "T - T_exact"
  );
  print_seperator();
  for (i, ((x, t), err)) in solution
    .positions()
    .iter()
    .zip(solution.temperatures().iter())
    .zip(errors.iter())
    .enumerate()
  {
    println!("| {i:>3} | {x:>9.4} | {t:>12.4} | {err:>15.3e} |");
  }
  print_seperator();

  let [flux_a, flux_b] = solution.boundary_reactions();
  println!("boundary reactions: {flux_a:.4e} at a, {flux_b:.4e} at b");

  let overlay = analytical::curve_with_margin(
    params,
    analytical::DEFAULT_MARGIN,
    analytical::DEFAULT_STEP,
  )?;
  let peak = overlay
    .iter()
    .map(|(_, t)| t)
    .fold(f64::NEG_INFINITY, f64::max);
  println!(
    "closed form: {} samples, peak {peak:.4} {temp_unit}\n",
    overlay.len()
  );
  Ok(())
}
