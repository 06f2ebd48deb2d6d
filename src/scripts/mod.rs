pub mod convergence;
pub mod shock_tube;
