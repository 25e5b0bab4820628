//! Prelude module for common reflection imports.
//!
//! ```rust
//! use struct_reflection::prelude::*;
//! ```

pub use crate::reflection::{Introspect, count_members, get_names, type_name};

// Re-export the derive macro; proc macros must be re-exported with `pub use`.
pub use struct_reflection_derive::Introspect;
