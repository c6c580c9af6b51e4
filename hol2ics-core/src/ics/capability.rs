//! UID and clock sources used when writing events.

use chrono::{DateTime, FixedOffset, Local};
use uuid::Uuid;

/// Produces a fresh UID for each written event.
pub trait UidGenerator {
    fn next_uid(&mut self) -> String;
}

/// Reports the current wall-clock time, including its UTC offset.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Random version 4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomUids;

impl UidGenerator for RandomUids {
    fn next_uid(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// The local system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// UUID-shaped UIDs counting up from 1: `00000000-0000-0000-0000-000000000001`, ...
#[derive(Debug, Default, Clone)]
pub struct SequentialUids {
    issued: u128,
}

impl UidGenerator for SequentialUids {
    fn next_uid(&mut self) -> String {
        self.issued += 1;
        Uuid::from_u128(self.issued).to_string()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_uids_are_distinct_v4() {
        let mut uids = RandomUids;
        let first = uids.next_uid();
        let second = uids.next_uid();

        assert_ne!(first, second);
        assert_eq!(Uuid::parse_str(&first).unwrap().get_version_num(), 4);
    }

    #[test]
    fn test_sequential_uids() {
        let mut uids = SequentialUids::default();
        assert_eq!(uids.next_uid(), "00000000-0000-0000-0000-000000000001");
        assert_eq!(uids.next_uid(), "00000000-0000-0000-0000-000000000002");
    }

    #[test]
    fn test_fixed_clock() {
        let instant = DateTime::parse_from_rfc3339("2024-10-19T14:30:05+02:00").unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }
}
