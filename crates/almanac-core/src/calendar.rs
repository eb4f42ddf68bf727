use chrono::{
  Datelike,
  Months,
  NaiveDate,
  Weekday
};

use crate::book::EventBook;
use crate::event::{
  CalendarEvent,
  DayKey
};

const MONTH_NAMES: [&str; 12] = [
  "January",
  "February",
  "March",
  "April",
  "May",
  "June",
  "July",
  "August",
  "September",
  "October",
  "November",
  "December"
];

/// One rendered event inside a day cell. `index` is the event's position
/// in the stored bucket, which differs from its display position once the
/// bucket is sorted by time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPill {
  pub index: usize,
  pub title: String,
  pub time:  String
}

impl EventPill {
  fn from_event(
    index: usize,
    event: &CalendarEvent
  ) -> Self {
    Self {
      index,
      title: event.title.clone(),
      time: event.time.clone()
    }
  }

  pub fn tooltip(&self) -> String {
    if self.time.is_empty() {
      self.title.clone()
    } else {
      format!(
        "{} - {}",
        self.time, self.title
      )
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
  pub date:   NaiveDate,
  pub key:    DayKey,
  pub day:    u32,
  pub events: Vec<EventPill>
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
  pub first:          NaiveDate,
  pub week_start:     Weekday,
  pub leading_blanks: u32,
  pub days:           Vec<DayCell>
}

impl MonthGrid {
  pub fn label(&self) -> String {
    month_label(self.first)
  }

  pub fn weekday_labels(
    &self
  ) -> [&'static str; 7] {
    weekday_labels(self.week_start)
  }

  pub fn cell(
    &self,
    day: u32
  ) -> Option<&DayCell> {
    self
      .days
      .get(day.checked_sub(1)? as usize)
  }
}

/// Lays out the month containing `viewed`: blank cells up to the weekday of
/// the 1st, then one cell per day with that day's events sorted by time.
pub fn build_month_grid(
  viewed: NaiveDate,
  week_start: Weekday,
  book: &EventBook
) -> MonthGrid {
  let first = first_day_of_month(viewed);
  let total = days_in_month(first);

  let days = first
    .iter_days()
    .take(total as usize)
    .map(|date| {
      let key = DayKey::from_date(date);
      let events = book
        .sorted_day(&key)
        .into_iter()
        .map(|(index, event)| {
          EventPill::from_event(
            index, event
          )
        })
        .collect();
      DayCell {
        date,
        key,
        day: date.day(),
        events
      }
    })
    .collect();

  MonthGrid {
    first,
    week_start,
    leading_blanks: weekday_offset(
      first, week_start
    ),
    days
  }
}

pub fn month_label(
  date: NaiveDate
) -> String {
  let name = MONTH_NAMES
    .get(date.month0() as usize)
    .copied()
    .unwrap_or_default();
  format!("{name} {}", date.year())
}

pub fn weekday_labels(
  week_start: Weekday
) -> [&'static str; 7] {
  match week_start {
    | Weekday::Mon => {
      [
        "Mon", "Tue", "Wed", "Thu",
        "Fri", "Sat", "Sun"
      ]
    }
    | _ => {
      [
        "Sun", "Mon", "Tue", "Wed",
        "Thu", "Fri", "Sat"
      ]
    }
  }
}

/// Days between `week_start` and the weekday of `day`, 0..=6.
pub fn weekday_offset(
  day: NaiveDate,
  week_start: Weekday
) -> u32 {
  let day_idx = day
    .weekday()
    .num_days_from_sunday();
  let start_idx =
    week_start.num_days_from_sunday();
  (7 + day_idx - start_idx) % 7
}

pub fn first_day_of_month(
  date: NaiveDate
) -> NaiveDate {
  date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(
  date: NaiveDate
) -> u32 {
  first_day_of_month(date)
    .checked_add_months(Months::new(1))
    .and_then(|next| next.pred_opt())
    .unwrap_or(NaiveDate::MAX)
    .day()
}
