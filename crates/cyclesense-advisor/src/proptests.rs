//! Property-based tests for the advisor pipeline.
