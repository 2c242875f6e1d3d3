mod builtin;
mod compression;
mod decode;
mod engine;
mod error;
mod kind;
mod path;
mod plan;
mod property;
mod registry;
mod step;
mod tree;
mod value;

/// Built-in step names.
pub use builtin::{ENTER_KEY, STORE_NUMBER, VERIFY_NUMBER_PROPERTY, VERIFY_STRING_PROPERTY};
/// Compression detection result.
pub use compression::{Compression, ZSTD_MAGIC};
/// Decoder boundary entry points and options.
pub use decode::{DecodeOptions, Decoded, decode_bytes, decode_reader};
/// Step execution context.
pub use engine::StepEngine;
/// Error and result aliases.
pub use error::{ParsifyError, Result};
/// Node type tags.
pub use kind::Kind;
/// Tree path expressions.
pub use path::{PathStep, PathStop, TreePath};
/// Serialized step sequences and their output slots.
pub use plan::{PlanOutputs, PlannedStep, StepPlan};
/// Integer literal parsing used for numeric-string properties.
pub use property::parse_unsigned_literal;
/// Step function registration.
pub use registry::{SharedStepFunction, StepFunction, StepRegistry};
/// Step instructions, literals, and output slots.
pub use step::{Literal, Step, Store};
/// Tree node reference.
pub use tree::TreeValue;
/// Decoded node variants.
pub use value::Value;
