use std::sync::LazyLock;

use hifitime::{Epoch, Unit};
use regex::Regex;

use crate::{
    constants::OBSERVING_NIGHT_OFFSET_HOURS, conversion::split_range, query_errors::QueryError,
};

static NIGHT_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("night date pattern is valid")
});

/// UTC time window covering one or more observing nights.
///
/// The window is half-open: `start` belongs to it, `end` does not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NightWindow {
    pub start: Epoch,
    pub end: Epoch,
}

/// Parse a calendar date in the format YYYY-MM-DD to the UTC epoch of its midnight
///
/// Argument
/// --------
/// * `date`: the date string, already trimmed
///
/// Return
/// ------
/// * the epoch at 00:00:00 UTC of that date, or an error if the string is not a
///   valid calendar date
fn parse_night_date(date: &str) -> Result<Epoch, QueryError> {
    let invalid = || QueryError::InvalidObservationNight(date.to_string());

    let caps = NIGHT_DATE.captures(date).ok_or_else(invalid)?;
    let year: i32 = caps[1].parse().map_err(|_| invalid())?;
    let month: u8 = caps[2].parse().map_err(|_| invalid())?;
    let day: u8 = caps[3].parse().map_err(|_| invalid())?;

    Epoch::maybe_from_gregorian_utc(year, month, day, 0, 0, 0, 0).map_err(|_| invalid())
}

/// Transformation from an observing night to the UTC window it covers
///
/// A night is identified by the date it starts on. Its window opens
/// [`OBSERVING_NIGHT_OFFSET_HOURS`] after 00:00 UTC of that date and lasts one day.
/// A range of nights `first .. last` (same separator as coordinate ranges) covers
/// every night from `first` to `last` inclusive, in either order.
///
/// Argument
/// --------
/// * `night`: a string of the form `YYYY-MM-DD` or `YYYY-MM-DD .. YYYY-MM-DD`
///
/// Return
/// ------
/// * the half-open UTC window covering the night(s)
pub fn observing_night_window(night: &str) -> Result<NightWindow, QueryError> {
    let night = night.trim();
    let dates = match split_range(night)[..] {
        [single] => (parse_night_date(single)?, parse_night_date(single)?),
        [first, last] => {
            let (first, last) = (parse_night_date(first)?, parse_night_date(last)?);
            if first <= last {
                (first, last)
            } else {
                (last, first)
            }
        }
        _ => return Err(QueryError::InvalidObservationNight(night.to_string())),
    };

    let offset = Unit::Hour * OBSERVING_NIGHT_OFFSET_HOURS;
    Ok(NightWindow {
        start: dates.0 + offset,
        end: dates.1 + offset + Unit::Day * 1,
    })
}
