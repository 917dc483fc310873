use thiserror::Error;

use crate::constant::*;

/// The resolved short/long tags of a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Tags {
    short: Option<String>,
    long: Option<String>,
}

impl Tags {
    pub(crate) fn short(&self) -> Option<&str> {
        self.short.as_deref()
    }

    pub(crate) fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// The tag used to name this field in errors: long if present, else short.
    pub(crate) fn preferred(&self) -> &str {
        self.long
            .as_deref()
            .or(self.short.as_deref())
            .expect("internal error - tags must contain at least one of short/long")
    }

    pub(crate) fn matches(&self, normalized: &str) -> Option<&str> {
        self.long
            .as_deref()
            .filter(|long| *long == normalized)
            .or_else(|| self.short.as_deref().filter(|short| *short == normalized))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum TagError {
    #[error("expected at most 2 tags, found {0}.")]
    TooManyParts(usize),
    #[error("'{0}' must start with '-' or '--', followed by a name.")]
    Malformed(String),
    #[error("'{0}' repeats a {1} tag.")]
    Repeated(String, &'static str),
}

/// The default spec for a field without a declared one: `--{field_name}`.
pub(crate) fn default_spec(field_name: &str) -> String {
    format!("{LONG_PREFIX}{field_name}")
}

/// Parse a tag spec such as `--path|-p` into its short and long forms.
pub(crate) fn parse_tags(spec: &str) -> Result<Tags, TagError> {
    let parts: Vec<&str> = spec.split(TAG_SEPARATOR).collect();

    if parts.len() > 2 {
        return Err(TagError::TooManyParts(parts.len()));
    }

    let mut tags = Tags::default();

    for part in parts {
        let tag = normalize(part);

        if let Some(name) = tag.strip_prefix(LONG_PREFIX) {
            if name.is_empty() {
                return Err(TagError::Malformed(part.to_string()));
            }

            if tags.long.replace(tag.clone()).is_some() {
                return Err(TagError::Repeated(spec.to_string(), "long"));
            }
        } else if let Some(name) = tag.strip_prefix(SHORT_PREFIX) {
            if name.is_empty() {
                return Err(TagError::Malformed(part.to_string()));
            }

            if tags.short.replace(tag.clone()).is_some() {
                return Err(TagError::Repeated(spec.to_string(), "short"));
            }
        } else {
            return Err(TagError::Malformed(part.to_string()));
        }
    }

    Ok(tags)
}

/// Tags and tokens compare trimmed and case-insensitively.
pub(crate) fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}
