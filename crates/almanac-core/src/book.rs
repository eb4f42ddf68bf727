use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{
  Deserialize,
  Deserializer,
  Serialize
};
use serde_json::Value;
use tracing::warn;

use crate::event::{
  CalendarEvent,
  DayKey
};

/// Every event the user has stored, bucketed by day.
///
/// A bucket that is present is never empty: removing the last event of a
/// day drops its key, and empty buckets found in a decoded blob are
/// discarded.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Serialize,
)]
#[serde(transparent)]
pub struct EventBook {
  days: BTreeMap<DayKey, Vec<CalendarEvent>>
}

impl EventBook {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_empty(&self) -> bool {
    self.days.is_empty()
  }

  /// Number of days holding at least one event.
  pub fn len(&self) -> usize {
    self.days.len()
  }

  pub fn event_count(&self) -> usize {
    self.days.values().map(Vec::len).sum()
  }

  pub fn contains_day(
    &self,
    day: &DayKey
  ) -> bool {
    self.days.contains_key(day)
  }

  /// Events of one day in insertion order.
  pub fn day(
    &self,
    day: &DayKey
  ) -> &[CalendarEvent] {
    self
      .days
      .get(day)
      .map(Vec::as_slice)
      .unwrap_or_default()
  }

  pub fn get(
    &self,
    day: &DayKey,
    index: usize
  ) -> Option<&CalendarEvent> {
    self.days.get(day)?.get(index)
  }

  pub fn push(
    &mut self,
    day: DayKey,
    event: CalendarEvent
  ) {
    self
      .days
      .entry(day)
      .or_default()
      .push(event);
  }

  /// Overwrites the event at `index`. Returns `false` when that slot does
  /// not exist.
  pub fn replace(
    &mut self,
    day: &DayKey,
    index: usize,
    event: CalendarEvent
  ) -> bool {
    match self
      .days
      .get_mut(day)
      .and_then(|bucket| {
        bucket.get_mut(index)
      }) {
      | Some(slot) => {
        *slot = event;
        true
      }
      | None => false
    }
  }

  pub fn remove(
    &mut self,
    day: &DayKey,
    index: usize
  ) -> Option<CalendarEvent> {
    let bucket =
      self.days.get_mut(day)?;
    if index >= bucket.len() {
      return None;
    }

    let removed = bucket.remove(index);
    if bucket.is_empty() {
      self.days.remove(day);
    }
    Some(removed)
  }

  /// Events of one day ordered by time, untimed events last. The sort is
  /// stable, so equal times and untimed events keep insertion order. Each
  /// entry carries its position in the stored bucket.
  pub fn sorted_day(
    &self,
    day: &DayKey
  ) -> Vec<(usize, &CalendarEvent)> {
    let mut entries = self
      .day(day)
      .iter()
      .enumerate()
      .collect::<Vec<_>>();
    entries.sort_by(|(_, a), (_, b)| {
      compare_by_time(a, b)
    });
    entries
  }
}

fn compare_by_time(
  a: &CalendarEvent,
  b: &CalendarEvent
) -> Ordering {
  match (a.has_time(), b.has_time()) {
    | (false, false) => Ordering::Equal,
    | (false, true) => Ordering::Greater,
    | (true, false) => Ordering::Less,
    | (true, true) => a.time.cmp(&b.time)
  }
}

/// Decodes each stored event on its own so one malformed entry costs only
/// itself. Events without a title and buckets left empty are dropped.
/// Unpadded keys such as `2024-3-5` merge into the canonical day.
impl<'de> Deserialize<'de> for EventBook {
  fn deserialize<D>(
    deserializer: D
  ) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>
  {
    let raw =
      BTreeMap::<String, Value>::deserialize(
        deserializer
      )?;

    let mut days =
      BTreeMap::<DayKey, Vec<CalendarEvent>>::new();
    for (key, value) in raw {
      let Ok(day) = key.parse::<DayKey>()
      else {
        warn!(
          key = %key,
          "skipping stored bucket with \
           unparseable day key"
        );
        continue;
      };
      if day.to_string() != key {
        warn!(
          key = %key,
          day = %day,
          "merging bucket stored under \
           non-canonical day key"
        );
      }

      let bucket = decode_bucket(&key, value);
      if bucket.is_empty() {
        continue;
      }
      days
        .entry(day)
        .or_default()
        .extend(bucket);
    }

    Ok(Self { days })
  }
}

fn decode_bucket(
  key: &str,
  value: Value
) -> Vec<CalendarEvent> {
  let Value::Array(items) = value else {
    warn!(
      key = %key,
      "skipping stored bucket that is \
       not a list"
    );
    return Vec::new();
  };

  let mut events = items
    .into_iter()
    .enumerate()
    .filter_map(|(position, item)| {
      match serde_json::from_value::<
        CalendarEvent
      >(item)
      {
        | Ok(event) => Some(event),
        | Err(err) => {
          warn!(
            key = %key,
            position,
            error = %err,
            "skipping malformed stored \
             event"
          );
          None
        }
      }
    })
    .collect::<Vec<_>>();

  events.retain(|event| {
    !event.title.trim().is_empty()
  });
  events
}
