use std::fmt;

/// A protocol status code.
///
/// The protocol defines a single success sentinel, [StatusCode::GOOD]; every
/// other value is an error carrying a machine name resolvable through
/// [StatusCode::name].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(pub u32);

macro_rules! status_codes {
    ($(($konst:ident, $value:expr, $name:literal)),* $(,)?) => {
        impl StatusCode {
            $(pub const $konst: StatusCode = StatusCode($value);)*

            /// Human readable protocol name for the code. Pure; codes outside
            /// the known table resolve to `"Unknown StatusCode"`.
            pub fn name(self) -> &'static str {
                match self.0 {
                    $($value => $name,)*
                    _ => "Unknown StatusCode",
                }
            }
        }
    };
}

status_codes!(
    (GOOD, 0x0000_0000, "Good"),
    (BAD_UNEXPECTED_ERROR, 0x8001_0000, "BadUnexpectedError"),
    (BAD_INTERNAL_ERROR, 0x8002_0000, "BadInternalError"),
    (BAD_OUT_OF_MEMORY, 0x8003_0000, "BadOutOfMemory"),
    (BAD_RESOURCE_UNAVAILABLE, 0x8004_0000, "BadResourceUnavailable"),
    (BAD_COMMUNICATION_ERROR, 0x8005_0000, "BadCommunicationError"),
    (BAD_ENCODING_ERROR, 0x8006_0000, "BadEncodingError"),
    (BAD_DECODING_ERROR, 0x8007_0000, "BadDecodingError"),
    (BAD_ENCODING_LIMITS_EXCEEDED, 0x8008_0000, "BadEncodingLimitsExceeded"),
    (BAD_UNKNOWN_RESPONSE, 0x8009_0000, "BadUnknownResponse"),
    (BAD_TIMEOUT, 0x800A_0000, "BadTimeout"),
    (BAD_SERVICE_UNSUPPORTED, 0x800B_0000, "BadServiceUnsupported"),
    (BAD_SHUTDOWN, 0x800C_0000, "BadShutdown"),
    (BAD_SERVER_NOT_CONNECTED, 0x800D_0000, "BadServerNotConnected"),
    (BAD_SERVER_HALTED, 0x800E_0000, "BadServerHalted"),
    (BAD_NOTHING_TO_DO, 0x800F_0000, "BadNothingToDo"),
    (BAD_TOO_MANY_OPERATIONS, 0x8010_0000, "BadTooManyOperations"),
    (BAD_DATA_TYPE_ID_UNKNOWN, 0x8011_0000, "BadDataTypeIdUnknown"),
    (BAD_USER_ACCESS_DENIED, 0x801F_0000, "BadUserAccessDenied"),
    (BAD_SESSION_ID_INVALID, 0x8025_0000, "BadSessionIdInvalid"),
    (BAD_SESSION_CLOSED, 0x8026_0000, "BadSessionClosed"),
    (BAD_SESSION_NOT_ACTIVATED, 0x8027_0000, "BadSessionNotActivated"),
    (BAD_SUBSCRIPTION_ID_INVALID, 0x8028_0000, "BadSubscriptionIdInvalid"),
    (BAD_NODE_ID_INVALID, 0x8033_0000, "BadNodeIdInvalid"),
    (BAD_NODE_ID_UNKNOWN, 0x8034_0000, "BadNodeIdUnknown"),
    (BAD_ATTRIBUTE_ID_INVALID, 0x8035_0000, "BadAttributeIdInvalid"),
    (BAD_INDEX_RANGE_INVALID, 0x8036_0000, "BadIndexRangeInvalid"),
    (BAD_INDEX_RANGE_NO_DATA, 0x8037_0000, "BadIndexRangeNoData"),
    (BAD_DATA_ENCODING_INVALID, 0x8038_0000, "BadDataEncodingInvalid"),
    (BAD_DATA_ENCODING_UNSUPPORTED, 0x8039_0000, "BadDataEncodingUnsupported"),
    (BAD_NOT_READABLE, 0x803A_0000, "BadNotReadable"),
    (BAD_NOT_WRITABLE, 0x803B_0000, "BadNotWritable"),
    (BAD_OUT_OF_RANGE, 0x803C_0000, "BadOutOfRange"),
    (BAD_NOT_SUPPORTED, 0x803D_0000, "BadNotSupported"),
    (BAD_NOT_FOUND, 0x803E_0000, "BadNotFound"),
    (BAD_MONITORED_ITEM_ID_INVALID, 0x8042_0000, "BadMonitoredItemIdInvalid"),
    (BAD_MONITORED_ITEM_FILTER_INVALID, 0x8043_0000, "BadMonitoredItemFilterInvalid"),
    (BAD_TYPE_MISMATCH, 0x8074_0000, "BadTypeMismatch"),
    (BAD_NO_SUBSCRIPTION, 0x8079_0000, "BadNoSubscription"),
    (BAD_INVALID_ARGUMENT, 0x80AB_0000, "BadInvalidArgument"),
    (BAD_CONNECTION_REJECTED, 0x80AC_0000, "BadConnectionRejected"),
    (BAD_DISCONNECT, 0x80AD_0000, "BadDisconnect"),
    (BAD_CONNECTION_CLOSED, 0x80AE_0000, "BadConnectionClosed"),
    (BAD_INVALID_STATE, 0x80AF_0000, "BadInvalidState"),
);

impl StatusCode {
    pub fn is_good(self) -> bool {
        self == Self::GOOD
    }

    pub fn is_bad(self) -> bool {
        !self.is_good()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Human readable name for a raw protocol status code.
pub fn status_name(code: u32) -> &'static str {
    StatusCode(code).name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn good_is_the_only_success_value() {
        assert!(StatusCode::GOOD.is_good());
        assert!(StatusCode::BAD_TIMEOUT.is_bad());
        assert!(StatusCode(1).is_bad());
    }

    #[test]
    fn known_codes_resolve_to_names() {
        assert_eq!(StatusCode::GOOD.name(), "Good");
        assert_eq!(StatusCode::BAD_NODE_ID_UNKNOWN.name(), "BadNodeIdUnknown");
        assert_eq!(status_name(0x8074_0000), "BadTypeMismatch");
    }

    #[test]
    fn unknown_codes_have_a_fixed_name() {
        assert_eq!(StatusCode(0xDEAD_BEEF).name(), "Unknown StatusCode");
    }
}
