use std::collections::HashMap;

use thiserror::Error;
use tracing::{
  debug,
  error,
  info
};

use crate::book::EventBook;

pub const DEFAULT_STORAGE_KEY: &str =
  "internship_calendar_events_v1";

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("storage backend is unavailable")]
  Unavailable,
  #[error("failed to read {key}: {reason}")]
  Read { key: String, reason: String },
  #[error("failed to write {key}: {reason}")]
  Write { key: String, reason: String },
  #[error("failed to encode events: {0}")]
  Encode(#[from] serde_json::Error)
}

/// String key-value storage, the shape of the browser's `localStorage`.
pub trait KeyValueBackend {
  fn get_item(
    &self,
    key: &str
  ) -> Result<Option<String>, StoreError>;

  fn set_item(
    &mut self,
    key: &str,
    value: &str
  ) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
  items: HashMap<String, String>
}

impl MemoryBackend {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_item(
    key: &str,
    value: &str
  ) -> Self {
    let mut backend = Self::new();
    backend.items.insert(
      key.to_string(),
      value.to_string()
    );
    backend
  }

  pub fn raw(
    &self,
    key: &str
  ) -> Option<&str> {
    self
      .items
      .get(key)
      .map(String::as_str)
  }
}

impl KeyValueBackend for MemoryBackend {
  fn get_item(
    &self,
    key: &str
  ) -> Result<Option<String>, StoreError> {
    Ok(self.items.get(key).cloned())
  }

  fn set_item(
    &mut self,
    key: &str,
    value: &str
  ) -> Result<(), StoreError> {
    self.items.insert(
      key.to_string(),
      value.to_string()
    );
    Ok(())
  }
}

/// The whole event book persisted as one JSON blob under a fixed key.
///
/// Every write replaces the blob. Nothing coordinates writers across
/// tabs, so the last save wins.
#[derive(Debug, Clone)]
pub struct EventStore<B> {
  backend: B,
  key:     String
}

impl<B: KeyValueBackend> EventStore<B> {
  pub fn new(backend: B) -> Self {
    Self::with_key(
      backend,
      DEFAULT_STORAGE_KEY
    )
  }

  pub fn with_key(
    backend: B,
    key: impl Into<String>
  ) -> Self {
    Self {
      backend,
      key: key.into()
    }
  }

  pub fn backend(&self) -> &B {
    &self.backend
  }

  pub fn into_backend(self) -> B {
    self.backend
  }

  /// Reads the stored book. An absent, unreadable or corrupt blob yields
  /// an empty book; the failure is logged and never surfaced.
  #[tracing::instrument(skip(self), fields(key = %self.key))]
  pub fn load(&self) -> EventBook {
    let raw = match self
      .backend
      .get_item(&self.key)
    {
      | Ok(Some(raw)) => raw,
      | Ok(None) => {
        debug!(
          "no stored events; starting \
           empty"
        );
        return EventBook::new();
      }
      | Err(err) => {
        error!(
          error = %err,
          "failed reading stored events"
        );
        return EventBook::new();
      }
    };

    match serde_json::from_str::<EventBook>(
      &raw
    ) {
      | Ok(book) => {
        debug!(
          days = book.len(),
          events = book.event_count(),
          "loaded events"
        );
        book
      }
      | Err(err) => {
        error!(
          error = %err,
          "failed to parse events"
        );
        EventBook::new()
      }
    }
  }

  #[tracing::instrument(skip(self, book), fields(key = %self.key))]
  pub fn save(
    &mut self,
    book: &EventBook
  ) -> Result<(), StoreError> {
    let json = serde_json::to_string(book)?;
    self
      .backend
      .set_item(&self.key, &json)?;
    info!(
      days = book.len(),
      events = book.event_count(),
      "saved events"
    );
    Ok(())
  }
}
