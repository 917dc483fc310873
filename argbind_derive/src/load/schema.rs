use crate::load::find_attributes;
use crate::model::{DeriveField, DeriveSchema};

const DESCRIPTION: &str = "description";

impl TryFrom<syn::DeriveInput> for DeriveSchema {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let struct_name = value.ident;
        let span = struct_name.span();

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new(
                span,
                "Invalid - an argument schema cannot be generic.",
            ));
        }

        let description = match find_attributes(&value.attrs, span)? {
            Some(attributes) => {
                attributes.check(span, &[], &[DESCRIPTION])?;
                attributes.pair(DESCRIPTION)
            }
            None => None,
        };

        let fields = match value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields
                .named
                .iter()
                .map(DeriveField::load)
                .filter_map(Result::transpose)
                .collect::<Result<Vec<_>, _>>()?,
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => Vec::default(),
            syn::Data::Struct(_) => {
                return Err(syn::Error::new(
                    span,
                    "Invalid - an argument schema must have named fields.",
                ));
            }
            syn::Data::Enum(_) | syn::Data::Union(_) => {
                return Err(syn::Error::new(
                    span,
                    "Invalid - an argument schema must be a struct.",
                ));
            }
        };

        Ok(DeriveSchema {
            struct_name,
            description,
            fields,
        })
    }
}
