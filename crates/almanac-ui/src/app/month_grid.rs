use almanac_core::{
  DayKey,
  MonthGrid
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct MonthGridViewProps {
  pub grid:           MonthGrid,
  pub selection:      Option<DayKey>,
  pub on_day_click:   Callback<DayKey>,
  pub on_event_click:
    Callback<(DayKey, usize)>
}

#[function_component(MonthGridView)]
pub fn month_grid_view(
  props: &MonthGridViewProps
) -> Html {
  let grid = &props.grid;

  html! {
      <div class="calendar-grid">
          {
              for grid.weekday_labels().into_iter().map(|label| html! {
                  <div class="calendar-weekday">{ label }</div>
              })
          }
          {
              for (0..grid.leading_blanks).map(|_| html! { <div class="day-blank"></div> })
          }
          {
              for grid.days.iter().map(|cell| {
                  let key = cell.key;
                  let selected = props.selection == Some(key);
                  let on_day_click = props.on_day_click.clone();
                  html! {
                      <div
                          class={classes!("day-cell", selected.then_some("day-selected"))}
                          data-date={key.to_string()}
                          onclick={Callback::from(move |_: MouseEvent| on_day_click.emit(key))}
                      >
                          <div class="day-number">{ cell.day }</div>
                          <div class="events-list">
                              {
                                  for cell.events.iter().map(|pill| {
                                      let index = pill.index;
                                      let on_event_click = props.on_event_click.clone();
                                      html! {
                                          <div
                                              class="event-pill"
                                              title={pill.tooltip()}
                                              onclick={Callback::from(move |e: MouseEvent| {
                                                  e.stop_propagation();
                                                  on_event_click.emit((key, index));
                                              })}
                                          >
                                              <div class="event-title">{ pill.title.clone() }</div>
                                              <div class="event-time">{ pill.time.clone() }</div>
                                          </div>
                                      }
                                  })
                              }
                          </div>
                      </div>
                  }
              })
          }
      </div>
  }
}
