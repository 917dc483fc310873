use crate::load::find_attributes;
use crate::model::DeriveField;
use syn::spanned::Spanned;

const OPTIONAL: &str = "optional";
const HELP_FLAG: &str = "help_flag";
const TAG: &str = "tag";
const HELP: &str = "help";

impl DeriveField {
    /// Load a field, or `None` when it carries no `#[argbind(..)]` attribute.
    pub(crate) fn load(value: &syn::Field) -> Result<Option<Self>, syn::Error> {
        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new(
                    value.span(),
                    "Invalid - only named fields may be bound.",
                ))
            }
        };

        let attributes = match find_attributes(&value.attrs, field_name.span())? {
            Some(attributes) => attributes,
            None => return Ok(None),
        };
        attributes.check(field_name.span(), &[OPTIONAL, HELP_FLAG], &[TAG, HELP])?;

        Ok(Some(DeriveField {
            tag: attributes.pair(TAG),
            help: attributes.pair(HELP),
            optional: attributes.singletons.contains(OPTIONAL),
            help_flag: attributes.singletons.contains(HELP_FLAG),
            field_name,
        }))
    }
}
