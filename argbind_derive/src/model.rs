use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        let st = &self.tokens.to_string();
        let ot = &other.tokens.to_string();
        st == ot
    }
}

impl Eq for DeriveValue {}

/// The `#[argbind(..)]` contents, prior to interpretation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveField {
    pub field_name: syn::Ident,
    pub tag: Option<DeriveValue>,
    pub help: Option<DeriveValue>,
    pub optional: bool,
    pub help_flag: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveSchema {
    pub struct_name: syn::Ident,
    pub description: Option<DeriveValue>,
    pub fields: Vec<DeriveField>,
}
