//! Derive macro backing the `struct_reflection` reflection facade.
//!
//! `#[derive(Introspect)]` reads a plain data record's declaration and emits
//! a static table of its shape: the record's own name, its direct-field
//! count, and the declared field names in declaration order. The table is
//! regenerated on every compilation, so reordering, renaming, adding, or
//! removing a field can never leave a stale descriptor behind.

mod arity;
mod fields;
mod names;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Generates the `Introspect` impl for a plain data record.
///
/// # Example
/// ```ignore
/// #[derive(Introspect)]
/// struct User {
///     pub id: i64,
///     pub name: String,
/// }
///
/// // Generates:
/// impl ::struct_reflection::Introspect for User {
///     const TYPE_NAME: &'static str = "User";
///     const MEMBER_COUNT: usize = 2;
///     const MEMBER_NAMES: &'static [&'static str] = &["id", "name"];
/// }
/// ```
///
/// Enums, unions, tuple structs, records with non-`pub` fields, and records
/// wider than 64 fields are rejected with a compile error at the deriving
/// type.
#[proc_macro_derive(Introspect)]
pub fn derive_introspect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Compose the engine stages: probe the arity, decompose into ordered field
/// handles, extract each declared name, then emit the shape table.
fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let arity = arity::probe(input)?;
    let handles = fields::decompose(&arity)?;

    let mut member_names = vec![String::new(); handles.len()];
    for handle in &handles {
        member_names[handle.position] = names::extract(handle)?;
    }

    let name = &input.ident;
    let type_name = name.to_string();
    let member_count = proc_macro2::Literal::usize_unsuffixed(arity.count());
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::struct_reflection::Introspect for #name #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;
            const MEMBER_COUNT: usize = #member_count;
            const MEMBER_NAMES: &'static [&'static str] = &[#(#member_names),*];
        }
    })
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn pretty(input: &DeriveInput) -> String {
        let tokens = expand(input).unwrap();
        let file: syn::File = syn::parse2(tokens).unwrap();
        prettyplease::unparse(&file)
    }

    #[test]
    fn simple_record_expansion() {
        let input: DeriveInput = parse_quote! {
            struct SimpleRecord {
                pub id: i64,
                pub name: String,
                pub value: f64,
            }
        };
        insta::assert_snapshot!(pretty(&input), @r#"
        impl ::struct_reflection::Introspect for SimpleRecord {
            const TYPE_NAME: &'static str = "SimpleRecord";
            const MEMBER_COUNT: usize = 3;
            const MEMBER_NAMES: &'static [&'static str] = &["id", "name", "value"];
        }
        "#);
    }

    #[test]
    fn empty_record_expansion() {
        let input: DeriveInput = parse_quote! {
            struct EmptyRecord {}
        };
        insta::assert_snapshot!(pretty(&input), @r#"
        impl ::struct_reflection::Introspect for EmptyRecord {
            const TYPE_NAME: &'static str = "EmptyRecord";
            const MEMBER_COUNT: usize = 0;
            const MEMBER_NAMES: &'static [&'static str] = &[];
        }
        "#);
    }

    #[test]
    fn generic_record_expansion() {
        let input: DeriveInput = parse_quote! {
            struct Pair<T> {
                pub left: T,
                pub right: T,
            }
        };
        insta::assert_snapshot!(pretty(&input), @r#"
        impl<T> ::struct_reflection::Introspect for Pair<T> {
            const TYPE_NAME: &'static str = "Pair";
            const MEMBER_COUNT: usize = 2;
            const MEMBER_NAMES: &'static [&'static str] = &["left", "right"];
        }
        "#);
    }

    #[test]
    fn names_follow_declaration_order() {
        let input: DeriveInput = parse_quote! {
            struct MixedTypes {
                pub flag: bool,
                pub letter: char,
                pub small_num: i16,
                pub number: i32,
                pub big_num: i64,
                pub decimal: f32,
                pub precise: f64,
                pub text: String,
            }
        };
        let arity = arity::probe(&input).unwrap();
        let handles = fields::decompose(&arity).unwrap();
        let extracted: Vec<String> = handles
            .iter()
            .map(|h| names::extract(h).unwrap())
            .collect();
        assert_eq!(
            extracted,
            ["flag", "letter", "small_num", "number", "big_num", "decimal", "precise", "text"]
        );
    }

    #[test]
    fn ineligible_input_fails_the_whole_expansion() {
        let input: DeriveInput = parse_quote! {
            enum Kind {
                Left,
                Right,
            }
        };
        let err = expand(&input).unwrap_err();
        assert!(err.to_string().contains("not a plain data record"));
    }
}
