//! Field decomposition: ordered, type-erased handles over a validated record.

use syn::Ident;

use crate::arity::Arity;

/// A position-tagged handle to one direct field of a record.
///
/// Carries the 0-based declaration index and the declared identifier token,
/// nothing else: the engine never inspects field types or values.
pub struct FieldHandle {
    pub position: usize,
    pub ident: Ident,
}

/// Produce one handle per field, in declaration order.
///
/// Handle `i` refers to declared field `i`. This is a thin adapter between
/// the arity and the name extractor; it performs no renaming, filtering, or
/// reordering.
pub fn decompose(arity: &Arity<'_>) -> syn::Result<Vec<FieldHandle>> {
    arity
        .fields()
        .iter()
        .enumerate()
        .map(|(position, field)| {
            // The prober only admits named fields, so a missing ident is a
            // malformed input and must surface as a diagnostic.
            let ident = field
                .ident
                .clone()
                .ok_or_else(|| syn::Error::new_spanned(field, "field has no declared identifier"))?;
            Ok(FieldHandle { position, ident })
        })
        .collect()
}
