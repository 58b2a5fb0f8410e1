//! Benchpress Core - Foundational types for the benchpress importer
//!
//! This crate provides the types every other benchpress crate depends on:
//! - `Vec3` - Spatial type used for positions, dimensions, and Euler angles
//! - Error types and Result alias

mod error;
mod types;

pub use error::{BenchError, Result};
pub use types::Vec3;
