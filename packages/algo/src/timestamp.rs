//! Timestamp Resolution
//!
//! Picks the authoritative practice timestamp for an attempt. The learner's
//! own clock wins when it can be read, so streaks follow the device's date
//! even across time zones or manual clock changes. Anything unreadable falls
//! back to the server clock; resolution never fails.
//!
//! All results are expressed in the canonical zone, a fixed UTC offset.

use std::ops::RangeInclusive;

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};

use crate::types::{ResolvedTimestamp, TimestampSource};

/// Asia/Bangkok, which observes no daylight saving
pub const DEFAULT_ZONE_OFFSET_SECONDS: i32 = 7 * 3600;

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Four-digit years only, so a stored timestamp always starts with its date
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

pub fn default_zone() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_ZONE_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

/// Parse `+07:00`, `-0530`, `+7` or `Z` into a fixed offset.
pub fn parse_utc_offset(raw: &str) -> Option<FixedOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return Some(Utc.fix());
    }

    let (sign, rest) = match raw.as_bytes().first()? {
        b'+' => (1, &raw[1..]),
        b'-' => (-1, &raw[1..]),
        _ => (1, raw),
    };

    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 => (rest.get(..2)?, rest.get(2..)?),
        None => (rest, "0"),
    };

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// A client-supplied time, before zone handling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientTime {
    WithOffset(DateTime<FixedOffset>),
    Local(NaiveDateTime),
}

impl ClientTime {
    /// Calendar date as written by the client, without any conversion.
    pub fn own_date(&self) -> NaiveDate {
        match self {
            ClientTime::WithOffset(dt) => dt.date_naive(),
            ClientTime::Local(naive) => naive.date(),
        }
    }
}

/// Lenient ISO-8601 reader: `T` or space separator, optional seconds and
/// fraction, `Z`/`±HH:MM`/`±HHMM` offsets, or a bare date (local midnight).
/// Years outside [`SUPPORTED_YEARS`] are rejected.
pub fn parse_client_time(raw: &str) -> Option<ClientTime> {
    parse_any_client_time(raw)
        .filter(|client| SUPPORTED_YEARS.contains(&client.own_date().year()))
}

fn parse_any_client_time(raw: &str) -> Option<ClientTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(ClientTime::WithOffset(dt));
    }

    let zulu;
    let candidate = match raw.strip_suffix(['Z', 'z']) {
        Some(stripped) => {
            zulu = format!("{stripped}+00:00");
            zulu.as_str()
        }
        None => raw,
    };

    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(candidate, fmt).ok())
    {
        return Some(ClientTime::WithOffset(dt));
    }

    if let Some(naive) = LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(ClientTime::Local(naive));
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .map(|date| ClientTime::Local(date.and_time(NaiveTime::MIN)))
}

pub type Strategy = fn(Option<&str>, FixedOffset, DateTime<Utc>) -> Option<ResolvedTimestamp>;

/// Candidate sources in priority order; the first one that yields a value wins.
pub const RESOLUTION_ORDER: &[(TimestampSource, Strategy)] = &[
    (TimestampSource::ClientOffset, from_client_offset as Strategy),
    (TimestampSource::ClientLocal, from_client_local as Strategy),
    (TimestampSource::Server, from_server_clock as Strategy),
];

fn from_client_offset(
    client_iso: Option<&str>,
    zone: FixedOffset,
    _now: DateTime<Utc>,
) -> Option<ResolvedTimestamp> {
    match parse_client_time(client_iso?)? {
        ClientTime::WithOffset(dt) => Some(dt.with_timezone(&zone))
            .filter(|at| SUPPORTED_YEARS.contains(&at.year()))
            .map(|at| ResolvedTimestamp {
                at,
                source: TimestampSource::ClientOffset,
            }),
        ClientTime::Local(_) => None,
    }
}

fn from_client_local(
    client_iso: Option<&str>,
    zone: FixedOffset,
    _now: DateTime<Utc>,
) -> Option<ResolvedTimestamp> {
    match parse_client_time(client_iso?)? {
        ClientTime::Local(naive) => zone
            .from_local_datetime(&naive)
            .single()
            .map(|at| ResolvedTimestamp {
                at,
                source: TimestampSource::ClientLocal,
            }),
        ClientTime::WithOffset(_) => None,
    }
}

fn from_server_clock(
    _client_iso: Option<&str>,
    zone: FixedOffset,
    now: DateTime<Utc>,
) -> Option<ResolvedTimestamp> {
    Some(server_timestamp(zone, now))
}

fn server_timestamp(zone: FixedOffset, now: DateTime<Utc>) -> ResolvedTimestamp {
    ResolvedTimestamp {
        at: now.with_timezone(&zone),
        source: TimestampSource::Server,
    }
}

/// Resolve the practice timestamp for an attempt submitted at server time `now`.
pub fn resolve_practiced_at(
    client_iso: Option<&str>,
    zone: FixedOffset,
    now: DateTime<Utc>,
) -> ResolvedTimestamp {
    RESOLUTION_ORDER
        .iter()
        .find_map(|(_, strategy)| strategy(client_iso, zone, now))
        .unwrap_or_else(|| server_timestamp(zone, now))
}

/// Reference "today" for streaks: the client's date if readable, else the
/// canonical-zone date of `now`.
pub fn resolve_today(client_date: Option<&str>, zone: FixedOffset, now: DateTime<Utc>) -> NaiveDate {
    client_date
        .and_then(parse_client_time)
        .map(|client| client.own_date())
        .unwrap_or_else(|| now.with_timezone(&zone).date_naive())
}
