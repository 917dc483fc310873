use crate::matcher::model::{Definition, Definitions};
use crate::matcher::tag::normalize;
use crate::parser::BindError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// How to treat a token that matches no definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum UnknownTokens {
    #[default]
    Ignore,
    Reject,
}

/// Which definitions were matched during a single scan, indexed in parallel with the definitions.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Matched(Vec<bool>);

impl Matched {
    pub(crate) fn is_set(&self, index: usize) -> bool {
        self.0[index]
    }
}

pub(crate) struct Scanner<'d, S> {
    definitions: &'d Definitions<S>,
    unknown: UnknownTokens,
}

impl<'d, S> Scanner<'d, S> {
    pub(crate) fn new(definitions: &'d Definitions<S>, unknown: UnknownTokens) -> Self {
        Self {
            definitions,
            unknown,
        }
    }

    fn find(&self, normalized: &str) -> Option<(usize, &'d Definition<S>, &'d str)> {
        self.definitions
            .iter()
            .enumerate()
            .find_map(|(index, definition)| {
                definition
                    .tags()
                    .matches(normalized)
                    .map(|tag| (index, definition, tag))
            })
    }

    /// Walk the tokens, writing each matched value into `target`.
    ///
    /// Fields written before a failing token remain written.
    pub(crate) fn scan<T: AsRef<str>>(
        &self,
        tokens: &[T],
        target: &mut S,
    ) -> Result<Matched, BindError> {
        let mut matched = vec![false; self.definitions.len()];
        let mut cursor = 0;

        while cursor < tokens.len() {
            let token = tokens[cursor].as_ref();
            let normalized = normalize(token);

            let (index, definition, tag) = match self.find(&normalized) {
                Some(found) => found,
                None => {
                    if self.unknown == UnknownTokens::Reject {
                        return Err(BindError::UnknownArgument {
                            token: token.to_string(),
                        });
                    }

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Ignoring unmatched token '{token}' at {cursor}.");
                    }

                    cursor += 1;
                    continue;
                }
            };

            if matched[index] {
                return Err(BindError::DuplicateArgument {
                    tag: tag.to_string(),
                });
            }

            let field = definition.field();

            if field.kind().is_switch() {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Matched switch '{tag}' at {cursor}.");
                }

                field
                    .switch(target)
                    .map_err(|error| BindError::conversion(tag, error))?;
                cursor += 1;
            } else {
                let value = match tokens.get(cursor + 1) {
                    Some(value) => value.as_ref(),
                    None => {
                        return Err(BindError::MissingArgumentValue {
                            tag: tag.to_string(),
                        });
                    }
                };

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Matched '{tag}' at {cursor} with value '{value}'.");
                }

                field
                    .capture(target, value)
                    .map_err(|error| BindError::conversion(tag, error))?;
                cursor += 2;
            }

            matched[index] = true;
        }

        Ok(Matched(matched))
    }
}
