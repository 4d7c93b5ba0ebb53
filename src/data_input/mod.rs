// src/data_input/mod.rs

pub mod displacement_prompt;
pub mod measurement_table;
pub mod table_parser;

// src/data_input/mod.rs
