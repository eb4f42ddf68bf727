use thiserror::Error;
use tracing::{
  debug,
  warn
};

use crate::book::EventBook;
use crate::event::{
  CalendarEvent,
  DayKey
};
use crate::store::{
  EventStore,
  KeyValueBackend,
  StoreError
};

#[derive(Debug, Error)]
pub enum FormError {
  #[error("Please enter an event title")]
  EmptyTitle,
  #[error("the event form is not open")]
  Closed,
  #[error("no event is being edited")]
  NotEditing,
  #[error(transparent)]
  Store(#[from] StoreError)
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum FormMode {
  #[default]
  Closed,
  Add {
    day: DayKey
  },
  Edit {
    day:   DayKey,
    index: usize
  }
}

/// What a form action did to the stored events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
  Saved,
  Deleted,
  /// The bound event vanished before the action ran; the form closed and
  /// nothing was written.
  Stale,
  /// The user declined to confirm a delete; the form stays open.
  Declined
}

/// Add/edit modal state plus the draft field values.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct EventForm {
  mode:      FormMode,
  pub title: String,
  pub time:  String
}

impl EventForm {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn mode(&self) -> FormMode {
    self.mode
  }

  pub fn is_open(&self) -> bool {
    self.mode != FormMode::Closed
  }

  pub fn day(&self) -> Option<DayKey> {
    match self.mode {
      | FormMode::Closed => None,
      | FormMode::Add { day }
      | FormMode::Edit { day, .. } => {
        Some(day)
      }
    }
  }

  pub fn modal_title(
    &self
  ) -> &'static str {
    match self.mode {
      | FormMode::Edit { .. } => {
        "Edit event"
      }
      | _ => "Add event"
    }
  }

  pub fn shows_delete(&self) -> bool {
    matches!(
      self.mode,
      FormMode::Edit { .. }
    )
  }

  pub fn open_add(
    &mut self,
    day: DayKey
  ) {
    debug!(day = %day, "opening add form");
    self.mode = FormMode::Add { day };
    self.title.clear();
    self.time.clear();
  }

  /// Opens the form on an existing event. Leaves the form untouched and
  /// returns `false` when no event sits at `day`/`index`.
  pub fn open_edit(
    &mut self,
    book: &EventBook,
    day: DayKey,
    index: usize
  ) -> bool {
    let Some(event) = book.get(&day, index)
    else {
      debug!(
        day = %day,
        index,
        "edit target missing; ignoring"
      );
      return false;
    };

    debug!(day = %day, index, "opening edit form");
    self.title = event.title.clone();
    self.time = event.time.clone();
    self.mode =
      FormMode::Edit { day, index };
    true
  }

  pub fn cancel(&mut self) {
    if self.is_open() {
      debug!("closing event form");
    }
    *self = Self::default();
  }

  /// Validates the draft and writes it back: appended in add mode,
  /// overwritten in edit mode. Closes the form once the store accepts the
  /// write. A blank title is rejected without touching anything.
  pub fn submit<B: KeyValueBackend>(
    &mut self,
    store: &mut EventStore<B>
  ) -> Result<FormOutcome, FormError> {
    if self.mode == FormMode::Closed {
      return Err(FormError::Closed);
    }

    let event = CalendarEvent::new(
      &self.title,
      &self.time
    );
    if event.title.is_empty() {
      return Err(FormError::EmptyTitle);
    }

    let mut book = store.load();
    match self.mode {
      | FormMode::Add { day } => {
        book.push(day, event);
      }
      | FormMode::Edit { day, index } => {
        if !book.replace(&day, index, event)
        {
          warn!(
            day = %day,
            index,
            "edited event no longer \
             stored; discarding edit"
          );
          self.cancel();
          return Ok(FormOutcome::Stale);
        }
      }
      | FormMode::Closed => {
        return Err(FormError::Closed);
      }
    }

    store.save(&book)?;
    self.cancel();
    Ok(FormOutcome::Saved)
  }

  /// Removes the bound event after `confirm` approves. Only valid while
  /// editing.
  pub fn delete<B, F>(
    &mut self,
    store: &mut EventStore<B>,
    confirm: F
  ) -> Result<FormOutcome, FormError>
  where
    B: KeyValueBackend,
    F: FnOnce() -> bool
  {
    let FormMode::Edit { day, index } =
      self.mode
    else {
      return Err(FormError::NotEditing);
    };

    if !confirm() {
      return Ok(FormOutcome::Declined);
    }

    let mut book = store.load();
    if book.remove(&day, index).is_none() {
      warn!(
        day = %day,
        index,
        "deleted event no longer stored"
      );
      self.cancel();
      return Ok(FormOutcome::Stale);
    }

    store.save(&book)?;
    self.cancel();
    Ok(FormOutcome::Deleted)
  }
}
