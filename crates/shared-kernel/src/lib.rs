// crates/shared-kernel/src/lib.rs
pub use error::{ErrorContext, InfraResult, InfrastructureError, ReadmeCountError, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::{CharCount, LineCount, WordCount};
