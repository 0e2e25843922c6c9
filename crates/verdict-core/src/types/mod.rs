//! Type definitions shared by the core and its collaborators

pub mod value;

pub use value::Value;
