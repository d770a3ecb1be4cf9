// src/mc/mod.rs
pub mod engine;
