//! Advent of Code puzzle solutions with automatic registration
//!
//! This crate contains actual puzzle solutions organized by year.
//! Each solution uses the `AutoRegisterSolver` derive macro for automatic
//! plugin registration with the solver framework. Geometry shared between
//! days lives in [`utils`].

#[cfg(feature = "my-solutions")]
pub mod my_solutions;

pub mod utils;
