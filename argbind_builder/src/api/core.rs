use crate::api::ArgumentSchema;
use crate::constant::*;
use crate::matcher::UnknownTokens;
use crate::parser::{BindError, Parser, Printer};

/// The configurable binder.
/// The free functions [`parse`], [`parse_into`] and [`help_text`] use the default configuration.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::{ArgumentSchema, Binder, BindError, Declaration, Field};
///
/// #[derive(Debug, Default)]
/// struct Parameters {
///     count: u32,
/// }
///
/// impl ArgumentSchema for Parameters {
///     fn declaration() -> Declaration<Self> {
///         Declaration::new().field(Field::new("count", |p: &mut Self| &mut p.count).tag("--count|-c"))
///     }
/// }
///
/// let binder = Binder::new().reject_unknown();
/// let error = binder.parse::<Parameters, _>(&["-c", "1", "extra"]).unwrap_err();
/// assert_eq!(error, BindError::UnknownArgument { token: "extra".to_string() });
/// ```
#[derive(Debug, Clone)]
pub struct Binder {
    unknown: UnknownTokens,
    optional_prefix: String,
    default_description: String,
}

impl Default for Binder {
    fn default() -> Self {
        Self {
            unknown: UnknownTokens::default(),
            optional_prefix: OPTIONAL_PREFIX.to_string(),
            default_description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl Binder {
    /// Create a binder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with [`BindError::UnknownArgument`] on tokens which match no tag.
    /// By default, such tokens are ignored.
    pub fn reject_unknown(mut self) -> Self {
        self.unknown = UnknownTokens::Reject;
        self
    }

    /// The prefix folded into the help text of optional fields (default `(Optional)`).
    pub fn optional_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.optional_prefix = prefix.into();
        self
    }

    /// The first line of the help text, for schemas without a description (default `Available arguments:`).
    pub fn default_description(mut self, description: impl Into<String>) -> Self {
        self.default_description = description.into();
        self
    }

    /// Bind the tokens onto a fresh `S::default()`.
    ///
    /// On error, the partially bound instance is discarded.
    pub fn parse<S, T>(&self, tokens: &[T]) -> Result<S, BindError>
    where
        S: ArgumentSchema + Default,
        T: AsRef<str>,
    {
        let mut target = S::default();
        self.parse_into(tokens, &mut target)?;
        Ok(target)
    }

    /// Bind the tokens onto an existing instance, keeping any fields the tokens do not mention.
    ///
    /// Binding is best-effort: on error, fields bound before the failing token remain bound.
    pub fn parse_into<S, T>(&self, tokens: &[T], target: &mut S) -> Result<(), BindError>
    where
        S: ArgumentSchema,
        T: AsRef<str>,
    {
        let parser = Parser::<S>::new(self.unknown)?;
        parser.consume(tokens, target).map(|_| ())
    }

    /// Render the help text for `S`.
    /// Fails only when the schema's own declaration is malformed.
    pub fn help_text<S: ArgumentSchema>(&self) -> Result<String, BindError> {
        let parser = Parser::<S>::new(self.unknown)?;
        let printer = Printer::new(&self.optional_prefix, &self.default_description);
        Ok(printer.render(parser.definitions()))
    }
}

/// Bind the tokens onto a fresh `S::default()`, with the default [`Binder`].
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::{ArgumentSchema, Declaration, Field};
///
/// #[derive(Default)]
/// struct Parameters {
///     name: String,
///     quiet: bool,
/// }
///
/// impl ArgumentSchema for Parameters {
///     fn declaration() -> Declaration<Self> {
///         Declaration::new()
///             .field(Field::new("name", |p: &mut Self| &mut p.name))
///             .field(Field::new("quiet", |p: &mut Self| &mut p.quiet).tag("-q").optional())
///     }
/// }
///
/// let parameters: Parameters = argbind::parse(&["--name", "abc", "-q"]).unwrap();
/// assert_eq!(parameters.name, "abc");
/// assert!(parameters.quiet);
/// ```
pub fn parse<S, T>(tokens: &[T]) -> Result<S, BindError>
where
    S: ArgumentSchema + Default,
    T: AsRef<str>,
{
    Binder::default().parse(tokens)
}

/// Bind the tokens onto an existing instance, with the default [`Binder`].
/// See [`Binder::parse_into`].
pub fn parse_into<S, T>(tokens: &[T], target: &mut S) -> Result<(), BindError>
where
    S: ArgumentSchema,
    T: AsRef<str>,
{
    Binder::default().parse_into(tokens, target)
}

/// Render the help text for `S`, with the default [`Binder`].
pub fn help_text<S: ArgumentSchema>() -> Result<String, BindError> {
    Binder::default().help_text::<S>()
}
