// src/report/mod.rs

pub mod latex_table;

// src/report/mod.rs
