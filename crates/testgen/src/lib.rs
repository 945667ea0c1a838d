//! Random relation schemas for tests, benchmarks and the `generate` command.

pub mod generator;
