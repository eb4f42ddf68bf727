use anyhow::Context;
use chrono::Weekday;
use serde::Deserialize;

use crate::store::DEFAULT_STORAGE_KEY;

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
pub struct CalendarConfig {
  #[serde(default = "calendar_default_version")]
  pub version:  u32,
  #[serde(default)]
  pub storage:  StorageConfig,
  #[serde(default)]
  pub policies: CalendarPolicies
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
pub struct StorageConfig {
  #[serde(
    default = "calendar_default_storage_key"
  )]
  pub key: String
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
pub struct CalendarPolicies {
  #[serde(
    default = "calendar_default_week_start"
  )]
  pub week_start: String
}

fn calendar_default_version() -> u32 {
  1
}

fn calendar_default_storage_key()
-> String {
  DEFAULT_STORAGE_KEY.to_string()
}

fn calendar_default_week_start()
-> String {
  "sunday".to_string()
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      key: calendar_default_storage_key()
    }
  }
}

impl Default for CalendarPolicies {
  fn default() -> Self {
    Self {
      week_start:
        calendar_default_week_start()
    }
  }
}

impl Default for CalendarConfig {
  fn default() -> Self {
    Self {
      version:  calendar_default_version(),
      storage:  StorageConfig::default(),
      policies: CalendarPolicies::default()
    }
  }
}

impl CalendarConfig {
  pub fn from_toml(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut config =
      toml::from_str::<CalendarConfig>(raw)
        .context(
          "failed to parse calendar \
           config"
        )?;
    config.sanitize();
    Ok(config)
  }

  /// Replaces blank values with their defaults.
  pub fn sanitize(&mut self) {
    if self.storage.key.trim().is_empty() {
      self.storage.key =
        calendar_default_storage_key();
    }
    if self
      .policies
      .week_start
      .trim()
      .is_empty()
    {
      self.policies.week_start =
        calendar_default_week_start();
    }
  }

  pub fn storage_key(&self) -> &str {
    self.storage.key.trim()
  }

  pub fn week_start(&self) -> Weekday {
    if self
      .policies
      .week_start
      .trim()
      .eq_ignore_ascii_case("monday")
    {
      Weekday::Mon
    } else {
      Weekday::Sun
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_document_uses_defaults() {
    let config = CalendarConfig::from_toml("")
      .expect("parse empty config");
    assert_eq!(
      config,
      CalendarConfig::default()
    );
    assert_eq!(
      config.storage_key(),
      "internship_calendar_events_v1"
    );
    assert_eq!(
      config.week_start(),
      Weekday::Sun
    );
  }

  #[test]
  fn reads_week_start_and_repairs_blank_key(
  ) {
    let config = CalendarConfig::from_toml(
      r#"
version = 2

[storage]
key = "  "

[policies]
week_start = "Monday"
"#
    )
    .expect("parse config");

    assert_eq!(config.version, 2);
    assert_eq!(
      config.storage_key(),
      DEFAULT_STORAGE_KEY
    );
    assert_eq!(
      config.week_start(),
      Weekday::Mon
    );
  }

  #[test]
  fn malformed_toml_reports_context() {
    let err = CalendarConfig::from_toml(
      "[policies\nweek_start = 1"
    )
    .expect_err("bad toml");
    assert!(
      err
        .to_string()
        .contains("calendar config")
    );
  }
}
