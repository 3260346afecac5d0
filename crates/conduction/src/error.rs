pub type SolveResult<T> = Result<T, SolveError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolveError {
  #[error("mesh needs at least 2 nodes, got {nnodes}")]
  InvalidNodeCount { nnodes: usize },
  #[error("degenerate mesh on [{a}, {b}] with step {dx}")]
  DegenerateMesh { a: f64, b: f64, dx: f64 },
  #[error("unusable thermal conductivity {k}")]
  NonPositiveConductivity { k: f64 },
  #[error("reduced system of size {size} is singular")]
  SingularSystem { size: usize },
  #[error("cannot sample [{x_min}, {x_max}] with step {step}")]
  InvalidSampling { x_min: f64, x_max: f64, step: f64 },
}
