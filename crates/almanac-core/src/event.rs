use std::fmt;
use std::str::FromStr;

use chrono::{
  Datelike,
  NaiveDate
};
use serde::{
  Deserialize,
  Deserializer,
  Serialize,
  Serializer
};

const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// A single-day entry. `time` is empty or an `HH:MM` string as produced by
/// an `<input type="time">`.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct CalendarEvent {
  pub title: String,
  #[serde(
    default,
    deserialize_with = "string_or_null"
  )]
  pub time:  String
}

fn string_or_null<'de, D>(
  deserializer: D
) -> Result<String, D::Error>
where
  D: Deserializer<'de>
{
  Ok(
    Option::<String>::deserialize(
      deserializer
    )?
    .unwrap_or_default()
  )
}

impl CalendarEvent {
  pub fn new(
    title: impl AsRef<str>,
    time: impl AsRef<str>
  ) -> Self {
    Self {
      title: title
        .as_ref()
        .trim()
        .to_string(),
      time:  time
        .as_ref()
        .trim()
        .to_string()
    }
  }

  pub fn has_time(&self) -> bool {
    !self.time.is_empty()
  }
}

/// Canonical `YYYY-MM-DD` identifier of a local calendar date.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
pub struct DayKey(NaiveDate);

impl DayKey {
  pub fn from_date(
    date: NaiveDate
  ) -> Self {
    Self(date)
  }

  pub fn from_ymd(
    year: i32,
    month: u32,
    day: u32
  ) -> Option<Self> {
    NaiveDate::from_ymd_opt(
      year, month, day
    )
    .map(Self)
  }

  pub fn date(self) -> NaiveDate {
    self.0
  }

  pub fn day(self) -> u32 {
    self.0.day()
  }
}

impl From<NaiveDate> for DayKey {
  fn from(date: NaiveDate) -> Self {
    Self(date)
  }
}

impl fmt::Display for DayKey {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(
      f,
      "{}",
      self.0.format(DAY_KEY_FORMAT)
    )
  }
}

impl FromStr for DayKey {
  type Err = chrono::ParseError;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    NaiveDate::parse_from_str(
      raw.trim(),
      DAY_KEY_FORMAT
    )
    .map(Self)
  }
}

impl Serialize for DayKey {
  fn serialize<S>(
    &self,
    serializer: S
  ) -> Result<S::Ok, S::Error>
  where
    S: Serializer
  {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for DayKey {
  fn deserialize<D>(
    deserializer: D
  ) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>
  {
    let raw =
      String::deserialize(deserializer)?;
    raw
      .parse()
      .map_err(serde::de::Error::custom)
  }
}
