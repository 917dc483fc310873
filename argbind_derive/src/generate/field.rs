use crate::model::DeriveField;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl DeriveField {
    /// Generate the `::argbind::Field` expression for this field.
    pub(crate) fn generate(self) -> TokenStream2 {
        let DeriveField {
            field_name,
            tag,
            help,
            optional,
            help_flag,
        } = self;
        let field_name_str = format!("{field_name}");
        let mut field = quote! {
            ::argbind::Field::new(#field_name_str, |target: &mut Self| &mut target.#field_name)
        };

        if let Some(tag) = tag {
            let tag = tag.tokens;
            field = quote! { #field.tag(#tag) };
        }

        if optional {
            field = quote! { #field.optional() };
        }

        if help_flag {
            field = quote! { #field.help_flag() };
        }

        if let Some(help) = help {
            let help = help.tokens;
            field = quote! { #field.help(#help) };
        }

        field
    }
}
