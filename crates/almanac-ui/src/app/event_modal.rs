use almanac_core::EventForm;
use yew::{
  Callback,
  Html,
  InputEvent,
  MouseEvent,
  Properties,
  SubmitEvent,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct EventModalProps {
  pub form:          EventForm,
  pub on_title_input:
    Callback<InputEvent>,
  pub on_time_input: Callback<InputEvent>,
  pub on_submit:     Callback<SubmitEvent>,
  pub on_delete:     Callback<MouseEvent>,
  pub on_close:      Callback<MouseEvent>
}

#[function_component(EventModal)]
pub fn event_modal(
  props: &EventModalProps
) -> Html {
  let form = &props.form;
  if !form.is_open() {
    return html! {};
  }

  let day_label = form
    .day()
    .map(|day| day.to_string())
    .unwrap_or_default();

  html! {
      <div class="modal-backdrop" onclick={props.on_close.clone()}>
          <div class="modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
              <div class="header">
                  <span>{ form.modal_title() }</span>
                  <button type="button" class="btn" aria-label="Close" onclick={props.on_close.clone()}>{ "×" }</button>
              </div>
              <form class="content" onsubmit={props.on_submit.clone()}>
                  <div class="field">
                      <label>{ day_label }</label>
                  </div>
                  <div class="field">
                      <label>{ "Title" }</label>
                      <input
                          id="event-title"
                          value={form.title.clone()}
                          oninput={props.on_title_input.clone()}
                      />
                  </div>
                  <div class="field">
                      <label>{ "Time" }</label>
                      <input
                          id="event-time"
                          type="time"
                          value={form.time.clone()}
                          oninput={props.on_time_input.clone()}
                      />
                  </div>
                  <div class="footer">
                      {
                          if form.shows_delete() {
                              html! {
                                  <button type="button" class="btn btn-danger" onclick={props.on_delete.clone()}>{ "Delete" }</button>
                              }
                          } else {
                              html! { <span></span> }
                          }
                      }
                      <div>
                          <button type="button" class="btn" onclick={props.on_close.clone()}>{ "Cancel" }</button>
                          <button type="submit" class="btn btn-primary">{ "Save" }</button>
                      </div>
                  </div>
              </form>
          </div>
      </div>
  }
}
