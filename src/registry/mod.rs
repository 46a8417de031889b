//! Method registry module
//!
//! - pattern: exact / prefix-wildcard method patterns and suffix capture
//! - descriptors: static capability description tables (pure data)
//! - table: the built-once pattern -> (description, handler) registry

pub mod descriptors;
pub mod pattern;
pub mod table;

pub use descriptors::{internal_method_description, MethodDescriptor, INTERNAL_METHOD_DESCRIPTIONS};
pub use pattern::{MethodPattern, PatternError};
pub use table::{HandlerEntry, MethodRegistry, RegistryError};
