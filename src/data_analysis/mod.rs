// src/data_analysis/mod.rs

pub mod displacement;
pub mod error_propagation;
pub mod spring_analysis;
pub mod statistics;
pub mod weighted_fit;

// src/data_analysis/mod.rs
