// src/models/mod.rs
pub mod estimate;
pub mod gbm;
