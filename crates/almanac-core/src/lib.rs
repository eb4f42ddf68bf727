//! Month-view calendar logic shared by the Almanac front end.
//!
//! Nothing in here touches the DOM. Persistence goes through the
//! [`store::KeyValueBackend`] trait so the whole flow runs natively in
//! tests and against `localStorage` in the browser.

pub mod book;
pub mod calendar;
pub mod config;
pub mod event;
pub mod form;
pub mod navigation;
pub mod state;
pub mod store;

pub use book::EventBook;
pub use calendar::{
  DayCell,
  EventPill,
  MonthGrid,
  build_month_grid
};
pub use config::CalendarConfig;
pub use event::{
  CalendarEvent,
  DayKey
};
pub use form::{
  EventForm,
  FormError,
  FormMode,
  FormOutcome
};
pub use state::CalendarState;
pub use store::{
  EventStore,
  KeyValueBackend,
  MemoryBackend,
  StoreError
};
