use std::fmt;

use thiserror::Error;

use crate::time::UaDateTime;
use crate::traits::{HasDataKind, UaValue};
use crate::variant::{Array, DataKind, Scalar, Variant};

/// Whether a variant holds one value or a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Scalar,
    Array,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar => f.write_str("scalar"),
            Shape::Array => f.write_str("array"),
        }
    }
}

/// Decode-time codec failures.
///
/// Distinguishable from protocol status errors on purpose: a codec failure
/// means the caller asked for the wrong accessor for a node's actual type.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    /// The variant's runtime tag did not match the requested kind.
    #[error("variant kind mismatch: expected {expected:?}, found {actual:?}")]
    TypeMismatch { expected: DataKind, actual: DataKind },
    /// A scalar accessor met an array variant, or the other way round.
    #[error("variant shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: Shape, found: Shape },
}

macro_rules! impl_ua_value {
    ($ty:ty, $kind:ident) => {
        impl HasDataKind for $ty {
            fn data_kind() -> DataKind {
                DataKind::$kind
            }
        }

        impl From<$ty> for Scalar {
            fn from(value: $ty) -> Self {
                Scalar::$kind(value)
            }
        }

        impl From<$ty> for Variant {
            fn from(value: $ty) -> Self {
                Variant::Scalar(Scalar::$kind(value))
            }
        }

        impl TryFrom<Variant> for $ty {
            type Error = ValueError;
            fn try_from(variant: Variant) -> Result<Self, Self::Error> {
                match variant {
                    Variant::Scalar(Scalar::$kind(value)) => Ok(value),
                    Variant::Scalar(other) => Err(ValueError::TypeMismatch {
                        expected: DataKind::$kind,
                        actual: other.kind(),
                    }),
                    Variant::Array(_) => Err(ValueError::ShapeMismatch {
                        expected: Shape::Scalar,
                        found: Shape::Array,
                    }),
                }
            }
        }

        impl HasDataKind for Vec<$ty> {
            fn data_kind() -> DataKind {
                DataKind::$kind
            }
        }

        impl From<Vec<$ty>> for Variant {
            fn from(values: Vec<$ty>) -> Self {
                Variant::Array(Array::$kind(values))
            }
        }

        impl TryFrom<Variant> for Vec<$ty> {
            type Error = ValueError;
            fn try_from(variant: Variant) -> Result<Self, Self::Error> {
                match variant {
                    Variant::Array(Array::$kind(values)) => Ok(values),
                    Variant::Array(other) => Err(ValueError::TypeMismatch {
                        expected: DataKind::$kind,
                        actual: other.kind(),
                    }),
                    Variant::Scalar(_) => Err(ValueError::ShapeMismatch {
                        expected: Shape::Array,
                        found: Shape::Scalar,
                    }),
                }
            }
        }

        impl UaValue for $ty {}
        impl UaValue for Vec<$ty> {}
    };
}

impl_ua_value!(u8, Byte);
impl_ua_value!(i8, SByte);
impl_ua_value!(i16, Int16);
impl_ua_value!(u16, UInt16);
impl_ua_value!(i32, Int32);
impl_ua_value!(u32, UInt32);
impl_ua_value!(i64, Int64);
impl_ua_value!(u64, UInt64);
impl_ua_value!(f32, Float);
impl_ua_value!(f64, Double);
impl_ua_value!(bool, Boolean);
impl_ua_value!(String, String);
impl_ua_value!(UaDateTime, DateTime);
