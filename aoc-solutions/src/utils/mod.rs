//! Reusable helpers shared across solutions

pub mod polygon;
