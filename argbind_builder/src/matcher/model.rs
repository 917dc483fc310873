use crate::api::{Declaration, Field};
use crate::matcher::tag::{default_spec, parse_tags, Tags};
use crate::parser::BindError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A declared field together with its resolved tags.
#[derive(Debug)]
pub(crate) struct Definition<S> {
    tags: Tags,
    field: Field<S>,
}

impl<S> Definition<S> {
    pub(crate) fn tags(&self) -> &Tags {
        &self.tags
    }

    pub(crate) fn field(&self) -> &Field<S> {
        &self.field
    }

    pub(crate) fn is_optional(&self) -> bool {
        self.field.is_optional()
    }

    pub(crate) fn is_help_flag(&self) -> bool {
        self.field.is_help_flag()
    }

    fn collides(&self, other: &Tags) -> Option<&str> {
        match (self.tags.short(), other.short()) {
            (Some(a), Some(b)) if a == b => return Some(a),
            _ => {}
        };

        match (self.tags.long(), other.long()) {
            (Some(a), Some(b)) if a == b => Some(a),
            _ => None,
        }
    }
}

/// The resolved definitions of a schema, in declaration order.
#[derive(Debug)]
pub(crate) struct Definitions<S> {
    description: Option<String>,
    definitions: Vec<Definition<S>>,
}

impl<S> Definitions<S> {
    pub(crate) fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Definition<S>> {
        self.definitions.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.definitions.len()
    }
}

impl<S> TryFrom<Declaration<S>> for Definitions<S> {
    type Error = BindError;

    fn try_from(value: Declaration<S>) -> Result<Self, Self::Error> {
        let (description, fields) = value.consume();
        let mut definitions: Vec<Definition<S>> = Vec::with_capacity(fields.len());

        for field in fields {
            let spec = match field.spec() {
                Some(spec) => spec.to_string(),
                None => default_spec(field.name()),
            };
            let tags = parse_tags(&spec).map_err(|error| BindError::InvalidTagFormat {
                field: field.name().to_string(),
                spec: spec.clone(),
                reason: error.to_string(),
            })?;

            for existing in &definitions {
                if let Some(tag) = existing.collides(&tags) {
                    return Err(BindError::DuplicateDefinition {
                        field: field.name().to_string(),
                        tag: tag.to_string(),
                    });
                }
            }

            definitions.push(Definition { tags, field });
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Built {} argument definitions.", definitions.len());
        }

        Ok(Self {
            description,
            definitions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Default)]
    struct Target {
        apple: u32,
        banana: bool,
        carrot: Option<String>,
    }

    fn declaration(apple: &str, banana: &str, carrot: &str) -> Declaration<Target> {
        Declaration::new()
            .field(Field::new("apple", |t: &mut Target| &mut t.apple).tag(apple))
            .field(Field::new("banana", |t: &mut Target| &mut t.banana).tag(banana))
            .field(Field::new("carrot", |t: &mut Target| &mut t.carrot).tag(carrot))
    }

    #[test]
    fn definitions_empty() {
        let definitions = Definitions::try_from(Declaration::<Target>::new()).unwrap();
        assert_eq!(definitions.len(), 0);
        assert_eq!(definitions.description(), None);
    }

    #[test]
    fn definitions_ordered() {
        let definitions =
            Definitions::try_from(declaration("-a", "--BANANA|-b", "").describe("abc")).unwrap();
        let resolved: Vec<(Option<&str>, Option<&str>)> = definitions
            .iter()
            .map(|d| (d.tags().short(), d.tags().long()))
            .collect();
        assert_eq!(
            resolved,
            vec![
                (Some("-a"), None),
                (Some("-b"), Some("--banana")),
                (None, Some("--carrot")),
            ]
        );
        assert_eq!(definitions.description(), Some("abc"));
    }

    #[rstest]
    #[case("path", "-b", "-c", "apple", "path")]
    #[case("-a", "--b|-b|-x", "-c", "banana", "--b|-b|-x")]
    #[case("-a", "-b", "--c|--d", "carrot", "--c|--d")]
    fn definitions_invalid_tag(
        #[case] apple: &str,
        #[case] banana: &str,
        #[case] carrot: &str,
        #[case] expected_field: &str,
        #[case] expected_spec: &str,
    ) {
        let error = Definitions::try_from(declaration(apple, banana, carrot)).unwrap_err();
        assert_matches!(
            error,
            BindError::InvalidTagFormat { field, spec, .. } if field == expected_field && spec == expected_spec
        );
    }

    #[rstest]
    #[case("-a", "-A", "-c", "banana", "-a")]
    #[case("--same|-a", "-b", "--SAME", "carrot", "--same")]
    #[case("--apple", "-b", "--apple|-c", "carrot", "--apple")]
    #[case("--carrot", "-b", "", "carrot", "--carrot")]
    fn definitions_duplicate(
        #[case] apple: &str,
        #[case] banana: &str,
        #[case] carrot: &str,
        #[case] expected_field: &str,
        #[case] expected_tag: &str,
    ) {
        let error = Definitions::try_from(declaration(apple, banana, carrot)).unwrap_err();
        assert_eq!(
            error,
            BindError::DuplicateDefinition {
                field: expected_field.to_string(),
                tag: expected_tag.to_string(),
            }
        );
    }

    #[test]
    fn definitions_short_never_collides_with_long() {
        let definitions = Definitions::try_from(declaration("-x", "--x", "")).unwrap();
        assert_eq!(definitions.len(), 3);
    }
}
