//! Rectree Benchmark Library
//!
//! Provides data generation for exercising the rectangle index against a
//! brute-force linear-scan baseline.

pub mod data_gen;
