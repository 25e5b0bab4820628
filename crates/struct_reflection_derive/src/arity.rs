//! Arity probing: eligibility checks and the direct-field count.
//!
//! The prober reads the record declaration itself, so arity never depends on
//! what an initializer list would accept. A field with a defaulted value (via
//! `Default`) is an ordinary declared field and counts like any other.

use syn::{Data, DeriveInput, Fields, Visibility};

/// Upper bound on the number of direct fields a record may declare.
///
/// Chosen comfortably above realistic record widths. A record wider than
/// this is rejected with a diagnostic, never truncated.
pub const MAX_MEMBERS: usize = 64;

/// A validated plain data record: its direct fields, in declaration order.
pub struct Arity<'a> {
    fields: Vec<&'a syn::Field>,
}

impl<'a> Arity<'a> {
    /// The number of direct fields.
    pub fn count(&self) -> usize {
        self.fields.len()
    }

    /// The fields, in declaration order.
    pub fn fields(&self) -> &[&'a syn::Field] {
        &self.fields
    }
}

/// Validate `input` as a plain data record and count its direct fields.
///
/// Eligible inputs are structs with named fields, plus unit and empty braced
/// structs (arity 0). Enums, unions, and tuple structs are not records with
/// declared field names; structs with non-`pub` fields are not *plain data*
/// records. Both are rejected here so the failure is a compile error at the
/// deriving type, never a silent zero.
pub fn probe(input: &DeriveInput) -> syn::Result<Arity<'_>> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(_) => {
            return Err(not_a_record(input, "enums do not declare a field list"));
        }
        Data::Union(_) => {
            return Err(not_a_record(input, "union members overlap and cannot be decomposed"));
        }
    };

    let fields: Vec<&syn::Field> = match &data.fields {
        Fields::Named(named) => named.named.iter().collect(),
        // A unit struct is an empty record, not an error.
        Fields::Unit => Vec::new(),
        Fields::Unnamed(_) => {
            return Err(not_a_record(input, "tuple struct fields have no declared names"));
        }
    };

    for field in &fields {
        if !matches!(field.vis, Visibility::Public(_)) {
            return Err(syn::Error::new_spanned(
                field,
                "plain data records must declare every field `pub`",
            ));
        }
    }

    if fields.len() > MAX_MEMBERS {
        return Err(syn::Error::new_spanned(
            &input.ident,
            format!(
                "`{}` declares {} fields, more than the {} supported for introspection",
                input.ident,
                fields.len(),
                MAX_MEMBERS
            ),
        ));
    }

    Ok(Arity { fields })
}

fn not_a_record(input: &DeriveInput, reason: &str) -> syn::Error {
    syn::Error::new_spanned(
        &input.ident,
        format!("`{}` is not a plain data record: {reason}", input.ident),
    )
}
