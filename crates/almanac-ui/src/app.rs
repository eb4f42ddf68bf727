mod calendar_nav_actions;
mod event_modal;
mod month_grid;
mod month_label;
mod storage;

use almanac_core::{
  CalendarConfig,
  CalendarState,
  DayKey,
  FormError,
  FormOutcome
};
use chrono::Local;
use gloo::dialogs::{
  alert,
  confirm
};
use yew::{
  Callback,
  Html,
  InputEvent,
  MouseEvent,
  SubmitEvent,
  TargetCast,
  function_component,
  html,
  use_state
};

use self::calendar_nav_actions::CalendarNavActions;
use self::event_modal::EventModal;
use self::month_grid::MonthGridView;
use self::month_label::localized_month_label;
use self::storage::open_event_store;

const CALENDAR_CONFIG_TOML: &str =
  include_str!("../assets/calendar.toml");
const DELETE_CONFIRMATION: &str =
  "Delete this event?";

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(load_calendar_config);
  let state = use_state(|| {
    CalendarState::new(
      Local::now().date_naive()
    )
  });

  let storage_key =
    config.storage_key().to_string();
  let week_start = config.week_start();

  // The grid is rebuilt from storage on every render so out-of-band
  // writes (other tabs) show up on the next interaction.
  let book =
    open_event_store(&storage_key).load();
  let grid = state.grid(&book, week_start);
  let label =
    localized_month_label(grid.first);

  let on_prev = {
    let state = state.clone();
    Callback::from(move |_: MouseEvent| {
      let mut next = (*state).clone();
      next.prev();
      state.set(next);
    })
  };

  let on_next = {
    let state = state.clone();
    Callback::from(move |_: MouseEvent| {
      let mut next = (*state).clone();
      next.next();
      state.set(next);
    })
  };

  let on_day_click = {
    let state = state.clone();
    Callback::from(move |day: DayKey| {
      let mut next = (*state).clone();
      next.select_day(day);
      state.set(next);
    })
  };

  let on_event_click = {
    let state = state.clone();
    let storage_key = storage_key.clone();
    Callback::from(
      move |(day, index): (DayKey, usize)| {
        let book =
          open_event_store(&storage_key)
            .load();
        let mut next = (*state).clone();
        if next.open_event(&book, day, index)
        {
          state.set(next);
        }
      }
    )
  };

  let on_title_input = {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
      let input: web_sys::HtmlInputElement =
        e.target_unchecked_into();
      let mut next = (*state).clone();
      next.form.title = input.value();
      state.set(next);
    })
  };

  let on_time_input = {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
      let input: web_sys::HtmlInputElement =
        e.target_unchecked_into();
      let mut next = (*state).clone();
      next.form.time = input.value();
      state.set(next);
    })
  };

  let on_submit = {
    let state = state.clone();
    let storage_key = storage_key.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      let mut store =
        open_event_store(&storage_key);
      let mut next = (*state).clone();
      match next.submit(&mut store) {
        | Ok(outcome) => {
          tracing::debug!(
            ?outcome,
            "event form submitted"
          );
          state.set(next);
        }
        | Err(err) => {
          report_form_error(&err);
        }
      }
    })
  };

  let on_delete = {
    let state = state.clone();
    let storage_key = storage_key.clone();
    Callback::from(move |_: MouseEvent| {
      let mut store =
        open_event_store(&storage_key);
      let mut next = (*state).clone();
      match next.delete(&mut store, || {
        confirm(DELETE_CONFIRMATION)
      }) {
        | Ok(FormOutcome::Declined) => {}
        | Ok(outcome) => {
          tracing::debug!(
            ?outcome,
            "event form delete finished"
          );
          state.set(next);
        }
        | Err(err) => {
          report_form_error(&err);
        }
      }
    })
  };

  let on_close = {
    let state = state.clone();
    Callback::from(move |_: MouseEvent| {
      let mut next = (*state).clone();
      next.cancel();
      state.set(next);
    })
  };

  html! {
      <div class="calendar-shell">
          <CalendarNavActions
              label={label}
              on_prev={on_prev}
              on_next={on_next}
          />
          <MonthGridView
              grid={grid}
              selection={state.selection}
              on_day_click={on_day_click}
              on_event_click={on_event_click}
          />
          <EventModal
              form={state.form.clone()}
              on_title_input={on_title_input}
              on_time_input={on_time_input}
              on_submit={on_submit}
              on_delete={on_delete}
              on_close={on_close}
          />
      </div>
  }
}

fn load_calendar_config()
-> CalendarConfig {
  match CalendarConfig::from_toml(
    CALENDAR_CONFIG_TOML
  ) {
    | Ok(config) => {
      tracing::info!(
        version = config.version,
        storage_key = %config.storage_key(),
        week_start = %config.policies.week_start,
        "loaded calendar config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(error = %format!("{error:#}"), "failed parsing calendar config; using defaults");
      CalendarConfig::default()
    }
  }
}

fn report_form_error(err: &FormError) {
  match err {
    | FormError::EmptyTitle => {
      alert(&err.to_string());
    }
    | FormError::Store(store_err) => {
      tracing::error!(
        error = %store_err,
        "failed saving events"
      );
      alert(
        "Could not save your events. \
         Browser storage may be full \
         or disabled."
      );
    }
    | FormError::Closed
    | FormError::NotEditing => {
      tracing::warn!(
        error = %err,
        "ignoring form action"
      );
    }
  }
}
