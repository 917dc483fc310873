use crate::api::capture::{convert, InvalidConversion};
use crate::model::{Value, ValueKind};
use crate::prelude::Bindable;

// We need a (dyn .. [ignoring T] ..) here in order to put all the fields of varying types T under one collection.
// The bottom of the object graph keeps each field's type T, while the scanner works across all T.
type Assign<S> = Box<dyn Fn(&mut S, Value) -> Result<(), Value> + Send + Sync>;

/// A schema: a type whose fields may be bound from command line tokens.
///
/// Typically implemented via `#[derive(ArgumentSchema)]`, although it may be implemented by hand.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::{ArgumentSchema, Declaration, Field};
///
/// #[derive(Default)]
/// struct Parameters {
///     verbose: bool,
///     depth: u8,
/// }
///
/// impl ArgumentSchema for Parameters {
///     fn declaration() -> Declaration<Self> {
///         Declaration::new()
///             .field(Field::new("verbose", |p: &mut Self| &mut p.verbose).tag("--verbose|-v").optional())
///             .field(Field::new("depth", |p: &mut Self| &mut p.depth).help("How deep to go."))
///     }
/// }
///
/// let parameters: Parameters = argbind::parse(&["-v", "--depth", "3"]).unwrap();
/// assert!(parameters.verbose);
/// assert_eq!(parameters.depth, 3);
/// ```
pub trait ArgumentSchema: Sized {
    /// The ordered field declarations of this schema.
    fn declaration() -> Declaration<Self>;
}

/// The ordered list of bindable fields for a schema `S`.
pub struct Declaration<S> {
    description: Option<String>,
    fields: Vec<Field<S>>,
}

impl<S> Default for Declaration<S> {
    fn default() -> Self {
        Self {
            description: None,
            fields: Vec::default(),
        }
    }
}

impl<S> Declaration<S> {
    /// Create an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Document the schema; shown as the first line of the help text.
    /// If repeated, only the final description will apply.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Declare a field.
    /// The declaration order determines the help text order, as well as which missing field is reported first.
    pub fn field(mut self, field: Field<S>) -> Self {
        self.fields.push(field);
        self
    }

    pub(crate) fn consume(self) -> (Option<String>, Vec<Field<S>>) {
        (self.description, self.fields)
    }
}

/// A single bindable field of the schema `S`.
pub struct Field<S> {
    name: String,
    tag: Option<String>,
    optional: bool,
    help_flag: bool,
    help: String,
    kind: ValueKind,
    assign: Assign<S>,
}

impl<S> std::fmt::Debug for Field<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("optional", &self.optional)
            .field("help_flag", &self.help_flag)
            .field("kind", &self.kind)
            .finish()
    }
}

impl<S> Field<S> {
    /// Create a field, binding to the target of `accessor`.
    ///
    /// Without an explicit [`Field::tag`], the field binds to `--{name}`.
    pub fn new<T>(name: impl Into<String>, accessor: fn(&mut S) -> &mut T) -> Self
    where
        T: Bindable + 'static,
        S: 'static,
    {
        Self {
            name: name.into(),
            tag: None,
            optional: false,
            help_flag: false,
            help: String::default(),
            kind: T::kind(),
            assign: Box::new(move |target: &mut S, value: Value| {
                *accessor(target) = T::from_value(value)?;
                Ok(())
            }),
        }
    }

    /// Set the tag spec, ex: `--path|-p`.
    /// An empty spec is treated as unspecified.
    pub fn tag(mut self, spec: impl Into<String>) -> Self {
        let spec = spec.into();
        self.tag = if spec.trim().is_empty() {
            None
        } else {
            Some(spec)
        };
        self
    }

    /// Mark the field as optional: it need not appear in the tokens.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark the field as a help request.
    /// When set during a parse, required fields are not enforced.
    pub fn help_flag(mut self) -> Self {
        self.help_flag = true;
        self
    }

    /// Document the field; multiple lines are allowed.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help = description.into();
        self
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn spec(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub(crate) fn is_optional(&self) -> bool {
        self.optional
    }

    pub(crate) fn is_help_flag(&self) -> bool {
        self.help_flag
    }

    pub(crate) fn description(&self) -> &str {
        &self.help
    }

    pub(crate) fn kind(&self) -> &ValueKind {
        &self.kind
    }

    /// Declare that the field has been matched without a value.
    pub(crate) fn switch(&self, target: &mut S) -> Result<(), InvalidConversion> {
        self.write(target, "", Value::Bool(true))
    }

    /// Convert `token` and write it into the field.
    pub(crate) fn capture(&self, target: &mut S, token: &str) -> Result<(), InvalidConversion> {
        let value = convert(token, &self.kind)?;
        self.write(target, token, value)
    }

    fn write(&self, target: &mut S, token: &str, value: Value) -> Result<(), InvalidConversion> {
        (self.assign)(target, value).map_err(|_| InvalidConversion {
            token: token.to_string(),
            target: self.kind.clone(),
        })
    }
}
