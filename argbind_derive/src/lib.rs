extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveSchema;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// The attribute name shared by struct and field level configuration.
pub(crate) const ATTRIBUTE: &str = "argbind";

/// Implement `argbind::ArgumentSchema` for a struct with named fields.
///
/// Only the fields carrying `#[argbind(..)]` are bound.
#[proc_macro_derive(ArgumentSchema, attributes(argbind))]
pub fn argument_schema(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    let schema = match DeriveSchema::try_from(derive_input) {
        Ok(schema) => schema,
        Err(error) => return error.to_compile_error().into(),
    };

    TokenStream2::from(schema).into()
}
