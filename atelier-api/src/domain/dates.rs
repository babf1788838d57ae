//! Calendar arithmetic shared by the dashboard filters and the calendar grid.

use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, Duration, Month,
    OffsetDateTime, PrimitiveDateTime,
};

/// Parse a calendar date. Accepts `YYYY-MM-DD`, RFC 3339 timestamps and
/// zone-less `YYYY-MM-DDTHH:MM:SS` values; only the date part is kept.
pub fn parse_date(s: &str) -> Option<Date> {
    let s = s.trim();

    if let Ok(date) = Date::parse(s, format_description!("[year]-[month]-[day]")) {
        return Some(date);
    }
    if let Ok(datetime) = OffsetDateTime::parse(s, &Rfc3339) {
        return Some(datetime.date());
    }
    if let Ok(datetime) = PrimitiveDateTime::parse(
        s,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    ) {
        return Some(datetime.date());
    }

    None
}

/// Today's date in the server's local offset, falling back to UTC when the
/// offset cannot be determined.
pub fn today_local() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Monday of the week containing `day`.
pub fn week_start(day: Date) -> Date {
    let back = i64::from(day.weekday().number_days_from_monday());
    day.checked_sub(Duration::days(back)).unwrap_or(day)
}

/// Sunday of the week containing `day`.
pub fn week_end(day: Date) -> Date {
    let start = week_start(day);
    start.checked_add(Duration::days(6)).unwrap_or(start)
}

pub fn first_of_month(year: i32, month: Month) -> Option<Date> {
    Date::from_calendar_date(year, month, 1).ok()
}

/// Last day of the month: the day before the first of the following month.
pub fn last_of_month(year: i32, month: Month) -> Option<Date> {
    let following = shift_month(year, month, 1).and_then(|(y, m)| first_of_month(y, m));
    match following {
        Some(first) => first.previous_day(),
        // December of the last representable year
        None if month == Month::December => Date::from_calendar_date(year, month, 31).ok(),
        None => None,
    }
}

pub fn days_in_month(year: i32, month: Month) -> u8 {
    last_of_month(year, month).map(|d| d.day()).unwrap_or(0)
}

/// Move `delta` months forwards (or backwards when negative). `None` when
/// the result does not fit an `i32` year.
pub fn shift_month(year: i32, month: Month, delta: i32) -> Option<(i32, Month)> {
    let index = year
        .checked_mul(12)?
        .checked_add(i32::from(u8::from(month)) - 1)?
        .checked_add(delta)?;
    let new_year = index.div_euclid(12);
    // rem_euclid keeps the month within 1..=12
    let new_month = Month::try_from((index.rem_euclid(12) + 1) as u8).ok()?;
    Some((new_year, new_month))
}
