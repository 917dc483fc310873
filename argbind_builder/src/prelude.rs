//! Traits which, typically, may be imported without concern: `use argbind::prelude::*`.

use crate::model::{Value, ValueKind};

/// Behaviour for a type that may be the target of a bound field.
// Needs to be imported in order to bind a custom type.
pub trait Bindable: Sized {
    /// The kind the raw token is converted into before reaching [`Bindable::from_value`].
    fn kind() -> ValueKind;

    /// Take ownership of a converted value.
    /// The value is handed back when it does not match this type.
    fn from_value(value: Value) -> Result<Self, Value>;
}
