use almanac_core::{
  EventStore,
  KeyValueBackend,
  StoreError
};

/// `window.localStorage` as a [`KeyValueBackend`].
#[derive(
  Clone, Copy, Debug, Default, PartialEq,
)]
pub struct LocalStorageBackend;

fn local_storage()
-> Result<web_sys::Storage, StoreError> {
  web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .ok_or(StoreError::Unavailable)
}

impl KeyValueBackend
  for LocalStorageBackend
{
  fn get_item(
    &self,
    key: &str
  ) -> Result<Option<String>, StoreError>
  {
    local_storage()?
      .get_item(key)
      .map_err(|err| StoreError::Read {
        key:    key.to_string(),
        reason: format!("{err:?}")
      })
  }

  fn set_item(
    &mut self,
    key: &str,
    value: &str
  ) -> Result<(), StoreError> {
    local_storage()?
      .set_item(key, value)
      .map_err(|err| StoreError::Write {
        key:    key.to_string(),
        reason: format!("{err:?}")
      })
  }
}

pub fn open_event_store(
  key: &str
) -> EventStore<LocalStorageBackend> {
  EventStore::with_key(
    LocalStorageBackend,
    key
  )
}
