//! The reflection facade: compile-time record shape queries.
//!
//! `Introspect` carries a record's shape as associated consts; the free
//! functions are thin const entry points so shape facts can size arrays and
//! feed const assertions. Both are pure functions of the type: the same
//! record yields bit-identical results at every call site.

/// Compile-time shape facts for a plain data record.
///
/// Implement this with `#[derive(Introspect)]` only. A hand-written impl is
/// exactly the per-type descriptor this crate exists to eliminate, and it
/// goes stale silently when the record changes.
///
/// ## Notes
/// - Nested record-typed fields are opaque: they contribute one entry, under
///   their own declared name, and are never flattened.
/// - All three consts are usable in const contexts.
pub trait Introspect {
    /// The record's own declared identifier, without generic arguments.
    const TYPE_NAME: &'static str;

    /// The number of direct fields the record declares.
    const MEMBER_COUNT: usize;

    /// The declared field names, in declaration order.
    ///
    /// Always `MEMBER_COUNT` entries long; entry `i` names field `i`.
    const MEMBER_NAMES: &'static [&'static str];
}

/// Return the number of direct fields of `T`.
pub const fn count_members<T: Introspect>() -> usize {
    T::MEMBER_COUNT
}

/// Return the declared field names of `T`, in declaration order.
pub const fn get_names<T: Introspect>() -> &'static [&'static str] {
    T::MEMBER_NAMES
}

/// Return the declared identifier of `T` itself.
pub const fn type_name<T: Introspect>() -> &'static str {
    T::TYPE_NAME
}

#[cfg(test)]
mod tests {
    use super::*;

    // Hand-rolled impl: inside this crate the derive cannot name the facade
    // by its crate path, and the entry points deserve coverage on their own.
    struct Sample;

    impl Introspect for Sample {
        const TYPE_NAME: &'static str = "Sample";
        const MEMBER_COUNT: usize = 2;
        const MEMBER_NAMES: &'static [&'static str] = &["first", "second"];
    }

    #[test]
    fn entry_points_read_the_shape_table() {
        assert_eq!(count_members::<Sample>(), 2);
        assert_eq!(get_names::<Sample>(), &["first", "second"]);
        assert_eq!(type_name::<Sample>(), "Sample");
    }

    #[test]
    fn entry_points_are_const_evaluable() {
        const COUNT: usize = count_members::<Sample>();
        const NAMES: &[&str] = get_names::<Sample>();
        let slots = [0u8; COUNT];
        assert_eq!(slots.len(), NAMES.len());
    }
}
