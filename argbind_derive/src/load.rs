mod attribute;
mod field;
mod schema;

use crate::model::{DeriveValue, IntermediateAttributes};
use crate::ATTRIBUTE;

/// Gather the `#[argbind(..)]` attribute, if any, from a list of attributes.
pub(self) fn find_attributes(
    attrs: &[syn::Attribute],
    span: proc_macro2::Span,
) -> Result<Option<IntermediateAttributes>, syn::Error> {
    let mut found = None;

    for attribute in attrs {
        if attribute.path().is_ident(ATTRIBUTE) {
            if found.is_some() {
                return Err(syn::Error::new(
                    span,
                    format!("Invalid - cannot repeat the #[{ATTRIBUTE}(..)] attribute."),
                ));
            }

            found.replace(IntermediateAttributes::try_from(attribute)?);
        }
    }

    Ok(found)
}

impl IntermediateAttributes {
    /// Reject any singleton/pair not amongst the allowed names, as well as repeated pairs.
    pub(self) fn check(
        &self,
        span: proc_macro2::Span,
        allowed_singletons: &[&str],
        allowed_pairs: &[&str],
    ) -> Result<(), syn::Error> {
        let mut singletons: Vec<&String> = self.singletons.iter().collect();
        singletons.sort();

        for singleton in singletons {
            if !allowed_singletons.contains(&singleton.as_str()) {
                return Err(unknown_error(span, singleton));
            }
        }

        let mut pairs: Vec<(&String, &Vec<DeriveValue>)> = self.pairs.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));

        for (key, values) in pairs {
            if !allowed_pairs.contains(&key.as_str()) {
                return Err(unknown_error(span, key));
            }

            if values.len() > 1 {
                return Err(syn::Error::new(
                    span,
                    format!("Invalid - cannot repeat `{key} = ..`."),
                ));
            }
        }

        Ok(())
    }

    pub(self) fn pair(&self, key: &str) -> Option<DeriveValue> {
        self.pairs
            .get(key)
            .and_then(|values| values.first())
            .cloned()
    }
}

fn unknown_error(span: proc_macro2::Span, name: &str) -> syn::Error {
    syn::Error::new(
        span,
        format!("Invalid - unknown #[{ATTRIBUTE}(..)] key `{name}`."),
    )
}
