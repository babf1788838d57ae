use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::Date;

use super::dates;

/// Named date range the dashboard filters projects by, anchored at "today".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TimeWindow {
    /// Monday to Sunday of the current week.
    Week,
    /// The current calendar month.
    #[default]
    Month,
    /// The current calendar year.
    Year,
    /// No date restriction.
    All,
}

impl TimeWindow {
    /// Inclusive `(first, last)` bounds of the window, or `None` for `All`.
    pub fn bounds(&self, today: Date) -> Option<(Date, Date)> {
        match self {
            TimeWindow::Week => Some((dates::week_start(today), dates::week_end(today))),
            TimeWindow::Month => Some((
                dates::first_of_month(today.year(), today.month())?,
                dates::last_of_month(today.year(), today.month())?,
            )),
            TimeWindow::Year => Some((
                Date::from_ordinal_date(today.year(), 1).ok()?,
                dates::last_of_month(today.year(), time::Month::December)?,
            )),
            TimeWindow::All => None,
        }
    }

    pub fn contains(&self, today: Date, day: Date) -> bool {
        match self.bounds(today) {
            Some((first, last)) => day >= first && day <= last,
            None => true,
        }
    }
}
