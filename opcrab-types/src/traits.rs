use crate::{value::ValueError, variant::DataKind, Variant};

/// Trait used to query the wire [DataKind] an implementing type maps to.
pub trait HasDataKind {
    fn data_kind() -> DataKind;
}

/// A host type that converts losslessly to and from a [Variant].
///
/// Implemented for the Rust counterpart of every wire kind and for `Vec`s of
/// them. The `TryFrom` direction checks the variant's runtime tag and shape;
/// it never coerces between kinds.
pub trait UaValue: HasDataKind + Into<Variant> + TryFrom<Variant, Error = ValueError> {}
