use crate::model::DeriveSchema;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl From<DeriveSchema> for TokenStream2 {
    fn from(value: DeriveSchema) -> Self {
        let DeriveSchema {
            struct_name,
            description,
            fields,
        } = value;
        let mut declaration = quote! {
            ::argbind::Declaration::new()
        };

        if let Some(description) = description {
            let description = description.tokens;
            declaration = quote! { #declaration.describe(#description) };
        }

        for field in fields {
            let field = field.generate();
            declaration = quote! { #declaration.field(#field) };
        }

        quote! {
            impl ::argbind::ArgumentSchema for #struct_name {
                fn declaration() -> ::argbind::Declaration<Self> {
                    #declaration
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeriveField, DeriveValue};
    use proc_macro2::{Literal, Span};
    use quote::ToTokens;

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    #[test]
    fn generate_schema_empty() {
        // Setup
        let schema = DeriveSchema {
            struct_name: ident("Parameters"),
            description: None,
            fields: vec![],
        };

        // Execute
        let token_stream = TokenStream2::from(schema);

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                impl ::argbind::ArgumentSchema for Parameters {
                    fn declaration() -> ::argbind::Declaration<Self> {
                        ::argbind::Declaration::new()
                    }
                }
            }
            .to_string()
        );
    }

    #[test]
    fn generate_schema() {
        // Setup
        let schema = DeriveSchema {
            struct_name: ident("Parameters"),
            description: Some(DeriveValue {
                tokens: Literal::string("Process a path.").into_token_stream(),
            }),
            fields: vec![
                DeriveField {
                    field_name: ident("path"),
                    tag: None,
                    help: None,
                    optional: false,
                    help_flag: false,
                },
                DeriveField {
                    field_name: ident("quiet"),
                    tag: None,
                    help: None,
                    optional: true,
                    help_flag: false,
                },
            ],
        };

        // Execute
        let token_stream = TokenStream2::from(schema);

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                impl ::argbind::ArgumentSchema for Parameters {
                    fn declaration() -> ::argbind::Declaration<Self> {
                        ::argbind::Declaration::new()
                            .describe("Process a path.")
                            .field(::argbind::Field::new("path", |target: &mut Self| &mut target.path))
                            .field(::argbind::Field::new("quiet", |target: &mut Self| &mut target.quiet).optional())
                    }
                }
            }
            .to_string()
        );
    }
}
