//! Name extraction: recover a field's declared identifier as a string.
//!
//! Rendering an identifier token is the one place the engine depends on a
//! textual format: a raw identifier renders with a fixed `r#` qualifier in
//! front of the source name. The trim below checks for that exact prefix and
//! nothing else, and anything that still is not a bare identifier afterwards
//! is rejected with a diagnostic rather than emitted as a garbled name.

use crate::fields::FieldHandle;

/// The fixed qualifier a raw identifier carries when rendered.
const RAW_QUALIFIER: &str = "r#";

/// Recover the bare declared identifier for one field handle.
///
/// Returns exactly one identifier per call; nested record-typed fields are a
/// single name here, never expanded.
///
/// A `syn::Ident` always renders as a valid identifier, optionally behind
/// the `r#` qualifier, so the mismatch branch below cannot fire for handles
/// built by the decomposer today. It stays anyway: the contract is to fail
/// loudly if the rendered format ever deviates, not to emit whatever the
/// trim left over.
pub fn extract(handle: &FieldHandle) -> syn::Result<String> {
    let rendered = handle.ident.to_string();
    let bare = rendered.strip_prefix(RAW_QUALIFIER).unwrap_or(&rendered);

    if bare.is_empty() || !is_bare_identifier(bare) {
        return Err(syn::Error::new(
            handle.ident.span(),
            format!("cannot recover a bare identifier from `{rendered}`"),
        ));
    }

    Ok(bare.to_owned())
}

fn is_bare_identifier(text: &str) -> bool {
    text.chars().all(|c| c.is_alphanumeric() || c == '_')
}
