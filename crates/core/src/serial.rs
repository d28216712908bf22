//! Serial-date timestamps
//!
//! The host encodes timestamps as fractional days since 1899-12-31 ("serial
//! dates"), and inherits the historical bug that treats 1900 as a leap year:
//! every serial above 59 must be shifted back one day before conversion. The
//! fractional part carries time of day, decoded at millisecond resolution.
//!
//! Serials are also local-time relative. [`SerialCalendar`] holds the fixed
//! bias (in fractional days) that moves a host serial onto UTC. The bias is
//! computed once at initialization (from the local time zone if the caller
//! asks for that) and passed explicitly into coercion; it is never read from
//! ambient process state per call.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Serials above this do not name a representable date (9999-12-31)
pub const MAX_SERIAL: f64 = 2_958_465.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

fn serial_epoch() -> NaiveDateTime {
    // 1899-12-31T00:00:00; constant, known valid
    NaiveDate::from_ymd_opt(1899, 12, 31)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("serial epoch is a valid date")
}

/// Convert a UTC-biased serial date to a UTC timestamp
///
/// Returns `None` for serials that name no representable instant: negative,
/// non-finite, or beyond [`MAX_SERIAL`].
///
/// Serials above 59 are shifted back one day to undo the phantom 1900-02-29.
pub fn serial_to_datetime(serial: f64) -> Option<DateTime<Utc>> {
    if !serial.is_finite() || serial < 0.0 || serial > MAX_SERIAL {
        return None;
    }
    let serial = if serial > 59.0 { serial - 1.0 } else { serial };
    let days = serial.trunc() as i64;
    let millis = (serial.fract() * SECONDS_PER_DAY * 1_000.0).round() as i64;
    let naive = serial_epoch() + Duration::days(days) + Duration::milliseconds(millis);
    Some(Utc.from_utc_datetime(&naive))
}

/// Fixed serial-to-UTC bias, computed once at initialization
///
/// `utc_offset_days` is ADDED to a host serial to reach UTC: a host running
/// five hours behind UTC uses a bias of `5/24`. The default is a UTC host
/// (zero bias).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SerialCalendar {
    /// Fractional days added to a host serial to reach UTC
    pub utc_offset_days: f64,
}

impl SerialCalendar {
    /// Calendar for a host whose serials are already UTC
    pub fn utc() -> Self {
        SerialCalendar { utc_offset_days: 0.0 }
    }

    /// Calendar with an explicit bias in fractional days
    pub fn with_offset_days(utc_offset_days: f64) -> Self {
        SerialCalendar { utc_offset_days }
    }

    /// Calendar derived from a UTC offset in seconds east of UTC
    ///
    /// A negative offset (host behind UTC) produces a positive bias.
    pub fn from_offset_seconds(local_minus_utc: i32) -> Self {
        SerialCalendar { utc_offset_days: -f64::from(local_minus_utc) / SECONDS_PER_DAY }
    }

    /// Calendar derived from the process-local time zone, sampled now
    ///
    /// Call once at startup and keep the result; the bias is deliberately not
    /// re-evaluated per write.
    pub fn from_local_offset() -> Self {
        Self::from_offset_seconds(chrono::Local::now().offset().local_minus_utc())
    }

    /// Bias a host serial onto UTC and convert it
    pub fn to_utc(&self, serial: f64) -> Option<DateTime<Utc>> {
        serial_to_datetime(serial + self.utc_offset_days)
    }
}
