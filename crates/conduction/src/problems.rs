pub mod steady_heat;
