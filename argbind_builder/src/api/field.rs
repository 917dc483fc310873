use std::path::PathBuf;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::model::{Value, ValueKind};
use crate::prelude::Bindable;

macro_rules! bindable {
    ($type:ty, $variant:ident) => {
        impl Bindable for $type {
            fn kind() -> ValueKind {
                ValueKind::$variant
            }

            fn from_value(value: Value) -> Result<Self, Value> {
                match value {
                    Value::$variant(inner) => Ok(inner),
                    other => Err(other),
                }
            }
        }
    };
}

bindable!(bool, Bool);
bindable!(i8, I8);
bindable!(i16, I16);
bindable!(i32, I32);
bindable!(i64, I64);
bindable!(u8, U8);
bindable!(u16, U16);
bindable!(u32, U32);
bindable!(u64, U64);
bindable!(f32, F32);
bindable!(f64, F64);
bindable!(Decimal, Decimal);
bindable!(String, String);
bindable!(char, Char);
bindable!(NaiveDateTime, DateTime);

impl Bindable for PathBuf {
    fn kind() -> ValueKind {
        ValueKind::Raw
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Raw(inner) => Ok(PathBuf::from(inner)),
            other => Err(other),
        }
    }
}

impl<T: Bindable> Bindable for Option<T> {
    fn kind() -> ValueKind {
        ValueKind::Nullable(Box::new(T::kind()))
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        T::from_value(value).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_kinds() {
        assert_eq!(bool::kind(), ValueKind::Bool);
        assert_eq!(i64::kind(), ValueKind::I64);
        assert_eq!(u8::kind(), ValueKind::U8);
        assert_eq!(f32::kind(), ValueKind::F32);
        assert_eq!(Decimal::kind(), ValueKind::Decimal);
        assert_eq!(char::kind(), ValueKind::Char);
        assert_eq!(NaiveDateTime::kind(), ValueKind::DateTime);
        assert_eq!(PathBuf::kind(), ValueKind::Raw);
    }

    #[test]
    fn optional_kind() {
        assert_eq!(
            Option::<String>::kind(),
            ValueKind::Nullable(Box::new(ValueKind::String))
        );
    }

    #[test]
    fn from_value() {
        assert_eq!(u32::from_value(Value::U32(7)), Ok(7));
        assert_eq!(
            String::from_value(Value::String("abc".to_string())),
            Ok("abc".to_string())
        );
        assert_eq!(
            PathBuf::from_value(Value::Raw("/tmp".to_string())),
            Ok(PathBuf::from("/tmp"))
        );
        assert_eq!(Option::<bool>::from_value(Value::Bool(true)), Ok(Some(true)));
    }

    #[test]
    fn from_value_mismatch() {
        assert_eq!(u32::from_value(Value::I32(7)), Err(Value::I32(7)));
        assert_eq!(
            Option::<char>::from_value(Value::Bool(false)),
            Err(Value::Bool(false))
        );
    }
}
