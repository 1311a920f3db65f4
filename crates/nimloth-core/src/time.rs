//! Calendar differences ("time since birth" on the person card).

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Elapsed {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl Elapsed {
    /// Whole years, months and days from `from` to `to`.
    ///
    /// Month arithmetic clamps to the end of shorter months (Jan 31 + 1 month = Feb 28/29).
    /// Returns `None` when `to` is before `from`.
    pub fn between(from: NaiveDate, to: NaiveDate) -> Option<Self> {
        if to < from {
            return None;
        }

        let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
        let mut anchor = from.checked_add_months(Months::new(months.max(0) as u32))?;
        if anchor > to {
            months -= 1;
            anchor = from.checked_add_months(Months::new(months.max(0) as u32))?;
        }
        let days = (to - anchor).num_days();

        let months = months.max(0) as u32;
        Some(Self {
            years: months / 12,
            months: months % 12,
            days: days.max(0) as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_is_zero() {
        let d = date(2000, 5, 17);
        assert_eq!(Elapsed::between(d, d), Some(Elapsed::default()));
    }

    #[test]
    fn counts_years_months_days() {
        assert_eq!(
            Elapsed::between(date(2020, 1, 1), date(2023, 7, 16)),
            Some(Elapsed {
                years: 3,
                months: 6,
                days: 15
            })
        );
    }

    #[test]
    fn day_before_anniversary_borrows_a_month() {
        assert_eq!(
            Elapsed::between(date(1990, 3, 20), date(2000, 3, 19)),
            Some(Elapsed {
                years: 9,
                months: 11,
                days: 28
            })
        );
    }

    #[test]
    fn future_dates_are_rejected() {
        assert_eq!(Elapsed::between(date(2030, 1, 1), date(2020, 1, 1)), None);
    }
}
