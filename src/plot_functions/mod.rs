// src/plot_functions/mod.rs

pub mod plot_force_displacement;
pub mod plot_residuals;

// src/plot_functions/mod.rs
