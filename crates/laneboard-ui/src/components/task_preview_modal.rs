use gloo::timers::callback::Timeout;
use laneboard_core::Endpoints;
use laneboard_core::format::{
  DateDisplay,
  format_date_display,
  format_timestamp,
  render_markdown
};
use laneboard_shared::TaskDto;
use wasm_bindgen::JsCast;
use web_sys::{
  HtmlTextAreaElement,
  InputEvent,
  SubmitEvent
};
use yew::{
  AttrValue,
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html,
  use_effect_with
};

#[derive(Properties, PartialEq)]
pub struct TaskPreviewModalProps {
  pub task:             Option<TaskDto>,
  pub date_display:     DateDisplay,
  pub endpoints:        Endpoints,
  pub pending_comment:  String,
  pub sending:          bool,
  pub on_comment_input:
    Callback<String>,
  pub on_submit:        Callback<()>,
  pub on_close:         Callback<()>
}

#[function_component(TaskPreviewModal)]
pub fn task_preview_modal(
  props: &TaskPreviewModalProps
) -> Html {
  let visible = props.task.is_some();
  let message_count = props
    .task
    .as_ref()
    .map(|task| task.followups.len())
    .unwrap_or_default();

  // Messages exist in the DOM only after
  // this render commits.
  use_effect_with(
    (visible, message_count),
    |(visible, _)| {
      if *visible {
        Timeout::new(
          0,
          scroll_to_last_message
        )
        .forget();
      }
      || ()
    }
  );

  let Some(task) = &props.task else {
    return html! {};
  };

  let on_close = {
    let on_close = props.on_close.clone();
    Callback::from(move |_| {
      on_close.emit(())
    })
  };

  let oninput = {
    let on_comment_input =
      props.on_comment_input.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlTextAreaElement =
          event.target_unchecked_into();
        on_comment_input
          .emit(input.value());
      }
    )
  };

  let onsubmit = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |event: SubmitEvent| {
        event.prevent_default();
        on_submit.emit(());
      }
    )
  };

  let created = task
    .created_on
    .as_deref()
    .map(|raw| {
      format_date_display(
        raw,
        props.date_display
      )
    });
  let content = Html::from_html_unchecked(
    AttrValue::from(render_markdown(
      &task.content
    ))
  );

  html! {
      <div class="modal-backdrop task-preview" onclick={on_close.clone()}>
          <div class="modal-dialog" onclick={|event: web_sys::MouseEvent| event.stop_propagation()}>
              <div class="modal-header">
                  <div class="modal-title">{ &task.intent }</div>
                  <button class="btn" onclick={on_close}>{ "×" }</button>
              </div>
              <div class="modal-body">
                  <div class="kv">
                      <strong>{ "statut" }</strong>
                      <div>{ task.status.label() }</div>
                  </div>
                  {
                      if let Some(created) = created {
                          html! {
                              <div class="kv">
                                  <strong>{ "créée le" }</strong>
                                  <div>{ created }</div>
                              </div>
                          }
                      } else {
                          html! {}
                      }
                  }
                  <div class="task-content">{ content }</div>
                  {
                      if let Some(resource_id) = task.resource_id {
                          html! {
                              <iframe class="resource-preview" src={props.endpoints.resource_preview(resource_id)}></iframe>
                          }
                      } else {
                          html! {}
                      }
                  }
                  <div class="messages">
                      {
                          for task.followups.iter().map(|followup| {
                              let author = followup
                                  .who
                                  .as_ref()
                                  .map(|who| who.display_name())
                                  .unwrap_or_default();
                              let when = followup
                                  .timestamp
                                  .as_deref()
                                  .map(format_timestamp)
                                  .unwrap_or_default();
                              let comment = Html::from_html_unchecked(AttrValue::from(
                                  render_markdown(&followup.comment),
                              ));
                              html! {
                                  <div class="message">
                                      <div class="message-meta">
                                          <span>{ author }</span>
                                          <span>{ when }</span>
                                      </div>
                                      <div class="message-body">{ comment }</div>
                                  </div>
                              }
                          })
                      }
                  </div>
                  <form class="comment-form" {onsubmit}>
                      <textarea
                          placeholder="Votre message"
                          value={props.pending_comment.clone()}
                          disabled={props.sending}
                          {oninput}
                      />
                      <button class="btn ok" type="submit" disabled={props.sending}>{ "Envoyer" }</button>
                  </form>
              </div>
              <div class="modal-footer">
                  <a class="btn" href={props.endpoints.task_update(task.id)}>{ "Modifier" }</a>
                  <a class="btn danger" href={props.endpoints.task_remind_delete(task.id)}>{ "Supprimer le rappel" }</a>
              </div>
          </div>
      </div>
  }
}

fn scroll_to_last_message() {
  let nodes = match gloo::utils::document()
    .query_selector_all(
      ".task-preview .message"
    ) {
    | Ok(nodes) => nodes,
    | Err(error) => {
      tracing::warn!(
        ?error,
        "message lookup failed"
      );
      return;
    }
  };

  let last = nodes
    .length()
    .checked_sub(1)
    .and_then(|index| nodes.item(index))
    .and_then(|node| {
      node.dyn_into::<web_sys::Element>().ok()
    });
  if let Some(element) = last {
    element.scroll_into_view();
  }
}
