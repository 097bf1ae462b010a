//! Shared generators for property-based tests.

pub mod generator;
