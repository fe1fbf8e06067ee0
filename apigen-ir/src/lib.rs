//! API model descriptors for the apigen SDK generator.
//!
//! This crate defines the read-only description of an HTTP API that the
//! rendering engine walks: methods with their parameters, data-transfer
//! schemas, and enumerations.
//!
//! # Architecture
//!
//! ```text
//! api.json (JSON/TOML) → apigen-manifest (loading) → apigen-ir (descriptors) → codegen
//! ```
//!
//! The descriptors are:
//! - Language-agnostic (type names are abstract, e.g. `list<Item>`)
//! - Immutable once constructed (the engine never mutates them)
//! - Ordered (declared order drives output order)

mod model;
mod types;

pub use model::{
    ApiModel, EnumDescriptor, EnumValue, MethodDescriptor, ParameterDescriptor,
    PropertyDescriptor, SchemaDescriptor,
};
pub use types::{HttpVerb, ParameterLocation};
