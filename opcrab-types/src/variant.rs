use crate::time::UaDateTime;

/// The closed set of primitive wire kinds a [Variant] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    Byte,
    SByte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float,
    Double,
    Boolean,
    String,
    DateTime,
}

/// A single value tagged with its wire kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Byte(u8),
    SByte(i8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    String(String),
    DateTime(UaDateTime),
}

impl Scalar {
    pub fn kind(&self) -> DataKind {
        match self {
            Scalar::Byte(_) => DataKind::Byte,
            Scalar::SByte(_) => DataKind::SByte,
            Scalar::Int16(_) => DataKind::Int16,
            Scalar::UInt16(_) => DataKind::UInt16,
            Scalar::Int32(_) => DataKind::Int32,
            Scalar::UInt32(_) => DataKind::UInt32,
            Scalar::Int64(_) => DataKind::Int64,
            Scalar::UInt64(_) => DataKind::UInt64,
            Scalar::Float(_) => DataKind::Float,
            Scalar::Double(_) => DataKind::Double,
            Scalar::Boolean(_) => DataKind::Boolean,
            Scalar::String(_) => DataKind::String,
            Scalar::DateTime(_) => DataKind::DateTime,
        }
    }
}

/// A homogeneous sequence of one wire kind.
///
/// Element uniformity is carried by the enum itself, and an empty array keeps
/// its kind tag. Servers distinguish a zero length array from an absent
/// value, so the empty case stays representable.
#[derive(Debug, Clone, PartialEq)]
pub enum Array {
    Byte(Vec<u8>),
    SByte(Vec<i8>),
    Int16(Vec<i16>),
    UInt16(Vec<u16>),
    Int32(Vec<i32>),
    UInt32(Vec<u32>),
    Int64(Vec<i64>),
    UInt64(Vec<u64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    Boolean(Vec<bool>),
    String(Vec<String>),
    DateTime(Vec<UaDateTime>),
}

impl Array {
    pub fn kind(&self) -> DataKind {
        match self {
            Array::Byte(_) => DataKind::Byte,
            Array::SByte(_) => DataKind::SByte,
            Array::Int16(_) => DataKind::Int16,
            Array::UInt16(_) => DataKind::UInt16,
            Array::Int32(_) => DataKind::Int32,
            Array::UInt32(_) => DataKind::UInt32,
            Array::Int64(_) => DataKind::Int64,
            Array::UInt64(_) => DataKind::UInt64,
            Array::Float(_) => DataKind::Float,
            Array::Double(_) => DataKind::Double,
            Array::Boolean(_) => DataKind::Boolean,
            Array::String(_) => DataKind::String,
            Array::DateTime(_) => DataKind::DateTime,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Array::Byte(v) => v.len(),
            Array::SByte(v) => v.len(),
            Array::Int16(v) => v.len(),
            Array::UInt16(v) => v.len(),
            Array::Int32(v) => v.len(),
            Array::UInt32(v) => v.len(),
            Array::Int64(v) => v.len(),
            Array::UInt64(v) => v.len(),
            Array::Float(v) => v.len(),
            Array::Double(v) => v.len(),
            Array::Boolean(v) => v.len(),
            Array::String(v) => v.len(),
            Array::DateTime(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tagged wire container: one scalar value or one homogeneous array.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Scalar(Scalar),
    Array(Array),
}

impl Variant {
    pub fn kind(&self) -> DataKind {
        match self {
            Variant::Scalar(scalar) => scalar.kind(),
            Variant::Array(array) => array.kind(),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Variant::Scalar(_))
    }

    /// Best-effort decode used on the data-change notification path.
    ///
    /// Only scalar DateTime, Int32, Int16, Boolean and Float values decode;
    /// every other kind and any array yields `None`, so a notification can
    /// still be delivered with its remaining fields. The narrow set is a
    /// known limitation of the notification path; the typed read surface
    /// covers all kinds.
    pub fn notification_value(&self) -> Option<Scalar> {
        match self {
            Variant::Scalar(
                scalar @ (Scalar::DateTime(_)
                | Scalar::Int32(_)
                | Scalar::Int16(_)
                | Scalar::Boolean(_)
                | Scalar::Float(_)),
            ) => Some(scalar.clone()),
            _ => None,
        }
    }

    /// Best-effort decode used for batched reads.
    ///
    /// Scalar Int16, UInt16, Int32, UInt32, Boolean and Float values decode;
    /// everything else yields `None`. Like the notification set, this is a
    /// documented limitation rather than an error.
    pub fn batch_value(&self) -> Option<Scalar> {
        match self {
            Variant::Scalar(
                scalar @ (Scalar::Int16(_)
                | Scalar::UInt16(_)
                | Scalar::Int32(_)
                | Scalar::UInt32(_)
                | Scalar::Boolean(_)
                | Scalar::Float(_)),
            ) => Some(scalar.clone()),
            _ => None,
        }
    }
}
