use chrono::{DateTime, Utc};

/* Seconds between the protocol epoch (1601-01-01) and the unix epoch */
const UNIX_EPOCH_OFFSET_SECS: i64 = 11_644_473_600;
const TICKS_PER_SEC: i64 = 10_000_000;
const NANOS_PER_TICK: i64 = 100;

/// Wire representation of an OPC UA DateTime: a count of 100 nanosecond
/// ticks since 1601-01-01 00:00:00 UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UaDateTime(pub i64);

impl UaDateTime {
    pub fn new(ticks: i64) -> Self {
        Self(ticks)
    }

    pub fn ticks(self) -> i64 {
        self.0
    }

    /// Current wall clock time.
    pub fn now() -> Self {
        Utc::now().into()
    }

    /// Convert to calendar time.
    ///
    /// Returns `None` when the tick count falls outside chrono's
    /// representable range.
    pub fn to_utc(self) -> Option<DateTime<Utc>> {
        let secs = self.0.div_euclid(TICKS_PER_SEC) - UNIX_EPOCH_OFFSET_SECS;
        let nanos = (self.0.rem_euclid(TICKS_PER_SEC) * NANOS_PER_TICK) as u32;
        DateTime::from_timestamp(secs, nanos)
    }
}

impl From<DateTime<Utc>> for UaDateTime {
    fn from(value: DateTime<Utc>) -> Self {
        let secs = value.timestamp() + UNIX_EPOCH_OFFSET_SECS;
        let sub_ticks = value.timestamp_subsec_nanos() as i64 / NANOS_PER_TICK;
        UaDateTime(secs * TICKS_PER_SEC + sub_ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch_maps_to_the_offset() {
        let epoch = DateTime::from_timestamp(0, 0).unwrap();
        assert_eq!(
            UaDateTime::from(epoch).ticks(),
            UNIX_EPOCH_OFFSET_SECS * TICKS_PER_SEC
        );
    }

    #[test]
    fn calendar_round_trip_preserves_sub_second_ticks() {
        let time = DateTime::from_timestamp(1_700_000_000, 123_456_700).unwrap();
        let ticks = UaDateTime::from(time);
        assert_eq!(ticks.to_utc().unwrap(), time);
    }

    #[test]
    fn protocol_epoch_is_year_1601() {
        let start = UaDateTime::new(0).to_utc().unwrap();
        assert_eq!(start.to_rfc3339(), "1601-01-01T00:00:00+00:00");
    }
}
