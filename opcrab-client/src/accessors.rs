use opcrab_types::{traits::UaValue, NodeId, Scalar, StatusCode, Variant};
use paste::paste;

use crate::{error::StatusError, Client, ClientError};

impl Client {
    /// Read one node's value as `T`.
    ///
    /// Fails with a codec error when the node's actual kind or shape differs
    /// from `T`; the value is never coerced.
    pub fn read<T: UaValue>(&mut self, ns: u16, name: &str) -> Result<T, ClientError> {
        let node = NodeId::new(ns, name);
        let result = self.stack.read_value(&node);
        StatusError::check(result.status)?;
        let variant = result.value.ok_or(StatusError {
            code: StatusCode::BAD_UNEXPECTED_ERROR,
        })?;
        Ok(T::try_from(variant)?)
    }

    /// Write `value` to one node.
    pub fn write<T: UaValue>(&mut self, ns: u16, name: &str, value: T) -> Result<(), ClientError> {
        let node = NodeId::new(ns, name);
        let status = self.stack.write_value(&node, value.into());
        StatusError::check(status)?;
        Ok(())
    }

    /// Batched read of `names`, all under namespace `ns`.
    ///
    /// All or nothing: the call succeeds only when the service result is
    /// good, every per-item status is good and the response covers every
    /// request. The first discovered error status fails the whole call, so
    /// callers never receive an array with missing or stale entries.
    ///
    /// Values decode best-effort, see
    /// [batch_value](opcrab_types::Variant::batch_value); kinds outside that
    /// set come back as `None` placeholders in request order.
    pub fn multi_read(
        &mut self,
        ns: u16,
        names: &[&str],
    ) -> Result<Vec<Option<Scalar>>, ClientError> {
        let nodes: Vec<NodeId> = names.iter().map(|name| NodeId::new(ns, *name)).collect();
        let response = self.stack.read_service(&nodes);
        StatusError::check(response.service_result)?;
        if response.results.len() != nodes.len() {
            return Err(StatusError {
                code: StatusCode::BAD_UNEXPECTED_ERROR,
            }
            .into());
        }
        for result in &response.results {
            StatusError::check(result.status)?;
            if result.value.is_none() {
                return Err(StatusError {
                    code: StatusCode::BAD_UNEXPECTED_ERROR,
                }
                .into());
            }
        }
        Ok(response
            .results
            .into_iter()
            .map(|result| result.value.and_then(|value| value.batch_value()))
            .collect())
    }

    /// Batched write of `values` to `names`, all under namespace `ns`.
    ///
    /// `names` and `values` must have equal length; violations are rejected
    /// before any network call. Same all-or-nothing policy as
    /// [multi_read](Client::multi_read): the first non-good per-item status
    /// fails the call.
    pub fn multi_write<T: UaValue>(
        &mut self,
        ns: u16,
        names: &[&str],
        values: Vec<T>,
    ) -> Result<(), ClientError> {
        if names.len() != values.len() {
            return Err(ClientError::InvalidArgument(
                "names and values must have the same length",
            ));
        }
        let writes: Vec<(NodeId, Variant)> = names
            .iter()
            .zip(values)
            .map(|(name, value)| (NodeId::new(ns, *name), value.into()))
            .collect();
        let count = writes.len();
        let response = self.stack.write_service(writes);
        StatusError::check(response.service_result)?;
        if response.results.len() != count {
            return Err(StatusError {
                code: StatusCode::BAD_UNEXPECTED_ERROR,
            }
            .into());
        }
        for status in response.results {
            StatusError::check(status)?;
        }
        Ok(())
    }
}

/* Flat per-kind surface, thin wrappers over the generic operations */
macro_rules! typed_accessors {
    ($(($kind:ident, $ty:ty)),* $(,)?) => {
        paste! {
            impl Client {
                $(
                    #[doc = concat!("Read a scalar ", stringify!($kind), " value.")]
                    pub fn [<read_ $kind>](&mut self, ns: u16, name: &str) -> Result<$ty, ClientError> {
                        self.read(ns, name)
                    }

                    #[doc = concat!("Read a ", stringify!($kind), " array.")]
                    pub fn [<read_ $kind _array>](&mut self, ns: u16, name: &str) -> Result<Vec<$ty>, ClientError> {
                        self.read(ns, name)
                    }

                    #[doc = concat!("Write a scalar ", stringify!($kind), " value.")]
                    pub fn [<write_ $kind>](&mut self, ns: u16, name: &str, value: $ty) -> Result<(), ClientError> {
                        self.write(ns, name, value)
                    }

                    #[doc = concat!("Write a ", stringify!($kind), " array.")]
                    pub fn [<write_ $kind _array>](&mut self, ns: u16, name: &str, values: Vec<$ty>) -> Result<(), ClientError> {
                        self.write(ns, name, values)
                    }
                )*
            }
        }
    };
}

macro_rules! typed_multi_writers {
    ($(($kind:ident, $ty:ty)),* $(,)?) => {
        paste! {
            impl Client {
                $(
                    #[doc = concat!("Batched write of scalar ", stringify!($kind), " values, see [multi_write](Client::multi_write).")]
                    pub fn [<multi_write_ $kind>](&mut self, ns: u16, names: &[&str], values: Vec<$ty>) -> Result<(), ClientError> {
                        self.multi_write(ns, names, values)
                    }
                )*
            }
        }
    };
}

typed_accessors!(
    (byte, u8),
    (sbyte, i8),
    (int16, i16),
    (uint16, u16),
    (int32, i32),
    (uint32, u32),
    (int64, i64),
    (uint64, u64),
    (float, f32),
    (double, f64),
    (boolean, bool),
    (string, String),
);

/* batched writes cover the fixed-width kinds and booleans */
typed_multi_writers!(
    (byte, u8),
    (sbyte, i8),
    (int16, i16),
    (uint16, u16),
    (int32, i32),
    (uint32, u32),
    (int64, i64),
    (uint64, u64),
    (float, f32),
    (double, f64),
    (boolean, bool),
);
