//! Client-side reservation slot validation.
//!
//! These checks run before the availability endpoint is ever asked, so an
//! obviously bad slot never costs a network round trip. They are pure
//! functions; "today" is injected rather than read from a clock.

use thiserror::Error;

/// Booking starts run 15:00 through 22:00.
const OPEN_HOUR: u32 = 15;
const LAST_BOOKING_HOUR: u32 = 22;

/// A slot the user picked that cannot be booked. The messages are the
/// user-facing prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("Please choose a time.")]
    MissingTime,
    #[error("Invalid time format.")]
    BadTimeFormat,
    #[error("Please choose an hour between 15:00 and 22:00.")]
    OutsideHours,
    #[error("Please choose minutes in 15-minute increments (00, 15, 30, 45).")]
    OffGridMinutes,
    #[error("Please choose a date.")]
    MissingDate,
    #[error("Invalid date format.")]
    BadDateFormat,
    #[error("Please select today or a future date.")]
    DateInPast,
}

/// Validate an `HH:MM` time against business hours and the 15-minute grid.
pub fn validate_time(time: &str) -> Result<(), SlotError> {
    if time.is_empty() {
        return Err(SlotError::MissingTime);
    }
    let mut parts = time.split(':');
    let (Some(hh), Some(mm)) = (parts.next(), parts.next()) else {
        return Err(SlotError::BadTimeFormat);
    };
    let hour: u32 = hh.parse().map_err(|_| SlotError::BadTimeFormat)?;
    let minute: u32 = mm.parse().map_err(|_| SlotError::BadTimeFormat)?;
    if !(OPEN_HOUR..=LAST_BOOKING_HOUR).contains(&hour) {
        return Err(SlotError::OutsideHours);
    }
    if minute % 15 != 0 || minute > 45 {
        return Err(SlotError::OffGridMinutes);
    }
    Ok(())
}

/// Validate a `YYYY-MM-DD` date: well-formed and not before `today`.
/// ISO-8601 dates compare correctly as strings, so no calendar math needed.
pub fn validate_date(date: &str, today: &str) -> Result<(), SlotError> {
    if date.is_empty() {
        return Err(SlotError::MissingDate);
    }
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_digit())) {
        return Err(SlotError::BadDateFormat);
    }
    if date < today {
        return Err(SlotError::DateInPast);
    }
    Ok(())
}

/// Seat count a party is steered to: couples get 2-seat tables, larger
/// groups get 4-seat tables. `None` means no restriction.
pub fn allowed_seats(party_size: u32) -> Option<u32> {
    match party_size {
        1..=2 => Some(2),
        3.. => Some(4),
        0 => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_on_the_grid_inside_hours_pass() {
        for time in ["15:00", "18:45", "22:00", "20:15"] {
            assert_eq!(validate_time(time), Ok(()), "{} should be valid", time);
        }
    }

    #[test]
    fn times_outside_hours_or_off_grid_fail() {
        assert_eq!(validate_time("14:45"), Err(SlotError::OutsideHours));
        assert_eq!(validate_time("23:00"), Err(SlotError::OutsideHours));
        assert_eq!(validate_time("19:10"), Err(SlotError::OffGridMinutes));
        assert_eq!(validate_time(""), Err(SlotError::MissingTime));
        assert_eq!(validate_time("19"), Err(SlotError::BadTimeFormat));
        assert_eq!(validate_time("aa:bb"), Err(SlotError::BadTimeFormat));
    }

    #[test]
    fn dates_compare_against_injected_today() {
        let today = "2026-08-31";
        assert_eq!(validate_date("2026-08-31", today), Ok(()));
        assert_eq!(validate_date("2026-09-01", today), Ok(()));
        assert_eq!(validate_date("2026-08-30", today), Err(SlotError::DateInPast));
        assert_eq!(validate_date("", today), Err(SlotError::MissingDate));
        assert_eq!(validate_date("31/08/2026", today), Err(SlotError::BadDateFormat));
    }

    #[test]
    fn party_size_maps_to_table_seats() {
        assert_eq!(allowed_seats(1), Some(2));
        assert_eq!(allowed_seats(2), Some(2));
        assert_eq!(allowed_seats(3), Some(4));
        assert_eq!(allowed_seats(12), Some(4));
        assert_eq!(allowed_seats(0), None);
    }
}
