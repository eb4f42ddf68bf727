use chrono::{
  Months,
  NaiveDate
};

use crate::calendar::first_day_of_month;

pub fn month_start(
  date: NaiveDate
) -> NaiveDate {
  first_day_of_month(date)
}

/// First day of the month before the one containing `viewed`.
pub fn prev_month(
  viewed: NaiveDate
) -> NaiveDate {
  let first = month_start(viewed);
  first
    .checked_sub_months(Months::new(1))
    .unwrap_or(first)
}

/// First day of the month after the one containing `viewed`.
pub fn next_month(
  viewed: NaiveDate
) -> NaiveDate {
  let first = month_start(viewed);
  first
    .checked_add_months(Months::new(1))
    .unwrap_or(first)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(
    year: i32,
    month: u32,
    day: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(
      year, month, day
    )
    .expect("valid date")
  }

  #[test]
  fn steps_land_on_the_first() {
    assert_eq!(
      next_month(date(2024, 1, 31)),
      date(2024, 2, 1)
    );
    assert_eq!(
      prev_month(date(2024, 3, 31)),
      date(2024, 2, 1)
    );
  }

  #[test]
  fn steps_wrap_the_year() {
    assert_eq!(
      next_month(date(2024, 12, 10)),
      date(2025, 1, 1)
    );
    assert_eq!(
      prev_month(date(2024, 1, 10)),
      date(2023, 12, 1)
    );
  }
}
