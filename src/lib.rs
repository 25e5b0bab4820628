#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! Compile-time field reflection for plain data records.
//!
//! For any record type with only public data fields and no hand-written
//! construction logic, `#[derive(Introspect)]` bakes the record's shape into
//! the binary at compile time: how many direct fields it declares and each
//! field's declared name, in declaration order, as `&'static str` values.
//! Consumers build serializers, loggers, and generic tooling from these
//! facts without per-type descriptors.
//!
//! ```rust
//! use struct_reflection::prelude::*;
//!
//! #[derive(Introspect)]
//! struct User {
//!     pub id: i64,
//!     pub name: String,
//! }
//!
//! const N: usize = count_members::<User>();
//! assert_eq!(N, 2);
//! assert_eq!(get_names::<User>(), &["id", "name"]);
//! ```
//!
//! The shape table is regenerated on every compilation, so editing a record
//! definition can never leave a stale descriptor behind. There is no runtime
//! cost and no runtime failure mode: anything the engine cannot reflect is a
//! compile error at the deriving type.

pub mod prelude;
pub mod reflection;

pub use reflection::{Introspect, count_members, get_names, type_name};
// The derive macro shares the trait's name, serde-style.
pub use struct_reflection_derive::Introspect;
