extern crate nalgebra as na;
extern crate nalgebra_sparse as nas;

pub mod analytical;
pub mod assemble;
pub mod error;
pub mod mesh;
pub mod operators;
pub mod params;
pub mod problems;

pub use analytical::{curve, AnalyticalCurve, AnalyticalProfile};
pub use error::{SolveError, SolveResult};
pub use params::{CoordModel, ModelParameters};
pub use problems::steady_heat::{solve, Solution};
