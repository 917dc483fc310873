use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// The semantic type a field binds to.
///
/// This is a closed set: each [`Bindable`](./prelude/trait.Bindable.html) type maps onto exactly one kind.
/// Types outside the set use [`ValueKind::Raw`], which hands the token through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `bool`: set by presence of the tag alone.
    Bool,
    /// `i8`.
    I8,
    /// `i16`.
    I16,
    /// `i32`.
    I32,
    /// `i64`.
    I64,
    /// `u8`.
    U8,
    /// `u16`.
    U16,
    /// `u32`.
    U32,
    /// `u64`.
    U64,
    /// `f32`.
    F32,
    /// `f64`.
    F64,
    /// [`rust_decimal::Decimal`].
    Decimal,
    /// `String`.
    String,
    /// `char`.
    Char,
    /// [`chrono::NaiveDateTime`].
    DateTime,
    /// Any other type; the token is passed through as-is.
    Raw,
    /// `Option<T>` around another kind.
    Nullable(Box<ValueKind>),
}

impl ValueKind {
    /// The kind with any `Nullable` wrappers removed.
    pub fn underlying(&self) -> &ValueKind {
        match self {
            ValueKind::Nullable(inner) => inner.underlying(),
            other => other,
        }
    }

    /// Whether this kind is bound by presence alone (`bool` or `Option<bool>`).
    pub fn is_switch(&self) -> bool {
        self.underlying() == &ValueKind::Bool
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::I8 => write!(f, "i8"),
            ValueKind::I16 => write!(f, "i16"),
            ValueKind::I32 => write!(f, "i32"),
            ValueKind::I64 => write!(f, "i64"),
            ValueKind::U8 => write!(f, "u8"),
            ValueKind::U16 => write!(f, "u16"),
            ValueKind::U32 => write!(f, "u32"),
            ValueKind::U64 => write!(f, "u64"),
            ValueKind::F32 => write!(f, "f32"),
            ValueKind::F64 => write!(f, "f64"),
            ValueKind::Decimal => write!(f, "decimal"),
            ValueKind::String => write!(f, "string"),
            ValueKind::Char => write!(f, "char"),
            ValueKind::DateTime => write!(f, "date-time"),
            ValueKind::Raw => write!(f, "raw"),
            ValueKind::Nullable(inner) => write!(f, "Option<{inner}>"),
        }
    }
}

/// A converted value, ready to be written into a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    #[allow(missing_docs)]
    Bool(bool),
    #[allow(missing_docs)]
    I8(i8),
    #[allow(missing_docs)]
    I16(i16),
    #[allow(missing_docs)]
    I32(i32),
    #[allow(missing_docs)]
    I64(i64),
    #[allow(missing_docs)]
    U8(u8),
    #[allow(missing_docs)]
    U16(u16),
    #[allow(missing_docs)]
    U32(u32),
    #[allow(missing_docs)]
    U64(u64),
    #[allow(missing_docs)]
    F32(f32),
    #[allow(missing_docs)]
    F64(f64),
    #[allow(missing_docs)]
    Decimal(Decimal),
    #[allow(missing_docs)]
    String(String),
    #[allow(missing_docs)]
    Char(char),
    #[allow(missing_docs)]
    DateTime(NaiveDateTime),
    /// The untouched token, for [`ValueKind::Raw`].
    Raw(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ValueKind::Bool, ValueKind::Bool)]
    #[case(ValueKind::Nullable(Box::new(ValueKind::I32)), ValueKind::I32)]
    #[case(
        ValueKind::Nullable(Box::new(ValueKind::Nullable(Box::new(ValueKind::Char)))),
        ValueKind::Char
    )]
    fn underlying(#[case] kind: ValueKind, #[case] expected: ValueKind) {
        assert_eq!(kind.underlying(), &expected);
    }

    #[rstest]
    #[case(ValueKind::Bool, true)]
    #[case(ValueKind::Nullable(Box::new(ValueKind::Bool)), true)]
    #[case(ValueKind::String, false)]
    #[case(ValueKind::Nullable(Box::new(ValueKind::U8)), false)]
    fn is_switch(#[case] kind: ValueKind, #[case] expected: bool) {
        assert_eq!(kind.is_switch(), expected);
    }

    #[test]
    fn display() {
        assert_eq!(ValueKind::DateTime.to_string(), "date-time");
        assert_eq!(
            ValueKind::Nullable(Box::new(ValueKind::U16)).to_string(),
            "Option<u16>"
        );
    }
}
