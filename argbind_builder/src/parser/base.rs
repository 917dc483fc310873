use thiserror::Error;

use crate::api::{ArgumentSchema, InvalidConversion};
use crate::matcher::{Definitions, Matched, Scanner, UnknownTokens};
use crate::model::ValueKind;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The reasons a schema may fail to bind.
///
/// The first two variants arise from a malformed schema, the remainder from the input tokens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BindError {
    /// A tag spec has more than 2 parts, or a part lacks a leading `-`/`--`.
    #[error("Invalid tag '{spec}' on field '{field}': {reason}")]
    InvalidTagFormat {
        /// The declaring field.
        field: String,
        /// The tag spec, as declared.
        spec: String,
        /// Why the spec was rejected.
        reason: String,
    },

    /// Two fields share a tag.
    #[error("Cannot duplicate the tag '{tag}' (on field '{field}').")]
    DuplicateDefinition {
        /// The later of the two fields.
        field: String,
        /// The shared tag.
        tag: String,
    },

    /// A tag appears more than once in the tokens.
    #[error("Argument '{tag}' was specified more than once.")]
    DuplicateArgument {
        #[allow(missing_docs)]
        tag: String,
    },

    /// A value taking tag is the final token.
    #[error("Argument '{tag}' requires a value.")]
    MissingArgumentValue {
        #[allow(missing_docs)]
        tag: String,
    },

    /// A value token cannot convert to the field's kind.
    #[error("Argument '{tag}' cannot convert '{token}' to {target}.")]
    Conversion {
        /// The tag preceding the value.
        tag: String,
        /// The offending value token.
        token: String,
        /// The field's kind.
        target: ValueKind,
    },

    /// A required field was not specified (and no help flag was).
    #[error("Missing required argument '{tag}'.")]
    MissingRequiredArgument {
        /// The long tag of the field, or its short tag when it has no long tag.
        tag: String,
    },

    /// A token matches no tag (only raised by [`Binder::reject_unknown`](./struct.Binder.html#method.reject_unknown)).
    #[error("Unknown argument '{token}'.")]
    UnknownArgument {
        #[allow(missing_docs)]
        token: String,
    },
}

impl BindError {
    pub(crate) fn conversion(tag: &str, error: InvalidConversion) -> Self {
        let InvalidConversion { token, target } = error;
        BindError::Conversion {
            tag: tag.to_string(),
            token,
            target,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Complete,
    HelpRequested,
}

/// Check the scan outcome: a set help flag skips the required checks entirely.
pub(crate) fn validate<S>(
    definitions: &Definitions<S>,
    matched: &Matched,
) -> Result<Action, BindError> {
    let help_requested = definitions
        .iter()
        .enumerate()
        .any(|(index, definition)| definition.is_help_flag() && matched.is_set(index));

    if help_requested {
        return Ok(Action::HelpRequested);
    }

    for (index, definition) in definitions.iter().enumerate() {
        if !definition.is_optional() && !matched.is_set(index) {
            return Err(BindError::MissingRequiredArgument {
                tag: definition.tags().preferred().to_string(),
            });
        }
    }

    Ok(Action::Complete)
}

pub(crate) struct Parser<S> {
    definitions: Definitions<S>,
    unknown: UnknownTokens,
}

impl<S: ArgumentSchema> Parser<S> {
    pub(crate) fn new(unknown: UnknownTokens) -> Result<Self, BindError> {
        Ok(Self {
            definitions: Definitions::try_from(S::declaration())?,
            unknown,
        })
    }
}

impl<S> Parser<S> {
    pub(crate) fn definitions(&self) -> &Definitions<S> {
        &self.definitions
    }

    pub(crate) fn consume<T: AsRef<str>>(
        &self,
        tokens: &[T],
        target: &mut S,
    ) -> Result<Action, BindError> {
        let matched = Scanner::new(&self.definitions, self.unknown).scan(tokens, target)?;
        let action = validate(&self.definitions, &matched)?;

        #[cfg(feature = "tracing_debug")]
        {
            if action == Action::HelpRequested {
                debug!("Help requested; skipping required argument checks.");
            }
        }

        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Declaration, Field};
    use rstest::rstest;

    #[derive(Debug, Default, PartialEq)]
    struct Target {
        path: String,
        enable: Option<bool>,
        index: i32,
        help: bool,
    }

    impl ArgumentSchema for Target {
        fn declaration() -> Declaration<Self> {
            Declaration::new()
                .field(Field::new("path", |t: &mut Self| &mut t.path).tag("--path|-p"))
                .field(
                    Field::new("enable", |t: &mut Self| &mut t.enable)
                        .tag("--enable")
                        .optional(),
                )
                .field(Field::new("index", |t: &mut Self| &mut t.index).tag("-i|--index"))
                .field(
                    Field::new("help", |t: &mut Self| &mut t.help)
                        .tag("--help|-h")
                        .optional()
                        .help_flag(),
                )
        }
    }

    #[derive(Debug, Default)]
    struct ShortOnly {
        value: u8,
    }

    impl ArgumentSchema for ShortOnly {
        fn declaration() -> Declaration<Self> {
            Declaration::new().field(Field::new("value", |t: &mut Self| &mut t.value).tag("-v"))
        }
    }

    fn consume(tokens: &[&str]) -> (Result<Action, BindError>, Target) {
        let parser = Parser::<Target>::new(UnknownTokens::Ignore).unwrap();
        let mut target = Target::default();
        let result = parser.consume(tokens, &mut target);
        (result, target)
    }

    #[test]
    fn parser_complete() {
        let (result, target) = consume(&["-p", r"C:\Windows", "--enable", "--index", "5"]);
        assert_eq!(result.unwrap(), Action::Complete);
        assert_eq!(
            target,
            Target {
                path: r"C:\Windows".to_string(),
                enable: Some(true),
                index: 5,
                help: false,
            }
        );
    }

    #[rstest]
    #[case(vec!["-p", r"C:\Windows"], "--index")]
    #[case(vec!["--index", "5"], "--path")]
    #[case(vec![], "--path")]
    fn parser_missing_required(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        let (result, _) = consume(&tokens);
        assert_eq!(
            result.unwrap_err(),
            BindError::MissingRequiredArgument {
                tag: expected.to_string(),
            }
        );
    }

    #[test]
    fn parser_missing_required_short() {
        let parser = Parser::<ShortOnly>::new(UnknownTokens::Ignore).unwrap();
        let mut target = ShortOnly::default();
        assert_eq!(
            parser.consume::<&str>(&[], &mut target).unwrap_err(),
            BindError::MissingRequiredArgument {
                tag: "-v".to_string(),
            }
        );
    }

    #[rstest]
    #[case(vec!["--help"])]
    #[case(vec!["-h"])]
    #[case(vec!["-H", "-p", "abc"])]
    fn parser_help(#[case] tokens: Vec<&str>) {
        let (result, target) = consume(&tokens);
        assert_eq!(result.unwrap(), Action::HelpRequested);
        assert!(target.help);
    }

    #[test]
    fn parser_help_does_not_mask_scan_errors() {
        let (result, _) = consume(&["--help", "--index", "abc"]);
        assert_matches!(result, Err(BindError::Conversion { .. }));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            BindError::conversion(
                "--index",
                InvalidConversion {
                    token: "abc".to_string(),
                    target: ValueKind::I32,
                }
            )
            .to_string(),
            "Argument '--index' cannot convert 'abc' to i32."
        );
        assert_eq!(
            BindError::MissingRequiredArgument {
                tag: "--index".to_string()
            }
            .to_string(),
            "Missing required argument '--index'."
        );
    }
}
