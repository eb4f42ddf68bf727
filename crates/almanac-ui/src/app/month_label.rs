use almanac_core::calendar::month_label;
use chrono::{
  Datelike,
  NaiveDate
};
use wasm_bindgen::JsValue;

const FALLBACK_LOCALE: &str = "en-US";

/// Long month name and numeric year in the browser's locale, e.g.
/// "März 2024". Falls back to the English label when `Intl` is unusable.
pub fn localized_month_label(
  first: NaiveDate
) -> String {
  let locale = web_sys::window()
    .and_then(|window| {
      window.navigator().language()
    })
    .unwrap_or_else(|| {
      FALLBACK_LOCALE.to_string()
    });

  let options = js_sys::Object::new();
  let configured = [
    ("month", "long"),
    ("year", "numeric")
  ]
  .into_iter()
  .all(|(field, value)| {
    js_sys::Reflect::set(
      &options,
      &JsValue::from_str(field),
      &JsValue::from_str(value)
    )
    .is_ok()
  });
  if !configured {
    return month_label(first);
  }

  let date =
    js_sys::Date::new_with_year_month_day(
      first.year().max(0) as u32,
      first.month0() as i32,
      1
    );
  let label = String::from(
    date.to_locale_date_string(
      &locale, &options
    )
  );

  if label.trim().is_empty() {
    month_label(first)
  } else {
    label
  }
}
