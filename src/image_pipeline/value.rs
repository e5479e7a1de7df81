//! Dynamic value module
//!
//! This module models the runtime-typed values returned by the vision
//! service. The extractor only talks to the [`DynamicValue`] trait; [`Value`]
//! is the concrete tagged-variant implementation.

mod dynamic;
mod error;
pub mod types;

pub use dynamic::DynamicValue;
pub use error::ValueError;
pub use types::{Value, ValueKind};
