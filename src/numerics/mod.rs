// src/numerics/mod.rs
// Top-level numerics module: the matrix type, its errors and comparison settings.

pub mod config;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod error;
    pub mod matrix;
}
