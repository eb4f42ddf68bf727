use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct CalendarNavActionsProps {
  pub label:   String,
  pub on_prev: Callback<MouseEvent>,
  pub on_next: Callback<MouseEvent>
}

#[function_component(CalendarNavActions)]
pub fn calendar_nav_actions(
  props: &CalendarNavActionsProps
) -> Html {
  html! {
      <div class="calendar-header">
          <button type="button" class="btn" onclick={props.on_prev.clone()}>{ "Prev" }</button>
          <div class="calendar-month-label">{ props.label.clone() }</div>
          <button type="button" class="btn" onclick={props.on_next.clone()}>{ "Next" }</button>
      </div>
  }
}
