/// Graph construction tools
///
/// This module provides utilities for building test and benchmark graphs,
/// reproducible from a seed.

pub mod generator;

pub use generator::GraphGenerator;
