use chrono::{
  NaiveDate,
  Weekday
};
use tracing::debug;

use crate::book::EventBook;
use crate::calendar::{
  MonthGrid,
  build_month_grid
};
use crate::event::DayKey;
use crate::form::{
  EventForm,
  FormError,
  FormOutcome
};
use crate::navigation;
use crate::store::{
  EventStore,
  KeyValueBackend
};

/// Everything the widget tracks between interactions: the month on
/// screen, the highlighted day cell and the modal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
  pub viewed_month: NaiveDate,
  pub selection:    Option<DayKey>,
  pub form:         EventForm
}

impl CalendarState {
  pub fn new(today: NaiveDate) -> Self {
    Self {
      viewed_month: navigation::month_start(
        today
      ),
      selection:    None,
      form:         EventForm::new()
    }
  }

  pub fn prev(&mut self) {
    self.viewed_month =
      navigation::prev_month(
        self.viewed_month
      );
    debug!(viewed = %self.viewed_month, "moved to previous month");
  }

  pub fn next(&mut self) {
    self.viewed_month =
      navigation::next_month(
        self.viewed_month
      );
    debug!(viewed = %self.viewed_month, "moved to next month");
  }

  pub fn grid(
    &self,
    book: &EventBook,
    week_start: Weekday
  ) -> MonthGrid {
    build_month_grid(
      self.viewed_month,
      week_start,
      book
    )
  }

  /// A click on a day cell: highlight it and start a new event there.
  pub fn select_day(
    &mut self,
    day: DayKey
  ) {
    self.selection = Some(day);
    self.form.open_add(day);
  }

  /// A click on an event pill. Returns `false` if the event is gone.
  pub fn open_event(
    &mut self,
    book: &EventBook,
    day: DayKey,
    index: usize
  ) -> bool {
    self.form.open_edit(book, day, index)
  }

  /// Cancel button, close icon or backdrop click: drop the draft and the
  /// highlight without writing anything.
  pub fn cancel(&mut self) {
    self.form.cancel();
    self.selection = None;
  }

  pub fn submit<B: KeyValueBackend>(
    &mut self,
    store: &mut EventStore<B>
  ) -> Result<FormOutcome, FormError> {
    let outcome = self.form.submit(store)?;
    self.selection = None;
    Ok(outcome)
  }

  pub fn delete<B, F>(
    &mut self,
    store: &mut EventStore<B>,
    confirm: F
  ) -> Result<FormOutcome, FormError>
  where
    B: KeyValueBackend,
    F: FnOnce() -> bool
  {
    let outcome =
      self.form.delete(store, confirm)?;
    if !self.form.is_open() {
      self.selection = None;
    }
    Ok(outcome)
  }
}
