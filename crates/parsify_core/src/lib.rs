//! Declarative, extensible validation and extraction over decoded JSON trees.

/// Tree accessors, step engine, built-in steps, decoding, and step plans.
pub mod json;
