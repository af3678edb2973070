use laneboard_core::BoardConfig;
use laneboard_core::board::{
  find_record,
  task_columns
};
use laneboard_core::format::{
  DateDisplay,
  format_date_display
};
use laneboard_core::sources::{
  CommentDraft,
  submit_comment
};
use laneboard_shared::TaskDto;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html,
  use_memo,
  use_state
};

use super::board_state::use_board;
use crate::api::task_source;
use crate::components::{
  BoardCard,
  BoardColumn,
  ErrorBanner,
  TaskPreviewModal
};

#[derive(Properties, PartialEq)]
pub struct TaskBoardProps {
  pub config:     BoardConfig,
  pub project_id: u64
}

#[function_component(TaskBoard)]
pub fn task_board(
  props: &TaskBoardProps
) -> Html {
  let columns =
    use_memo((), |_| task_columns());
  let make_source = {
    let config = props.config.clone();
    let project_id = props.project_id;
    move || task_source(&config, project_id)
  };
  let board = use_board(make_source.clone());
  let current_task_id =
    use_state(|| None::<u64>);
  let comment =
    use_state(CommentDraft::default);
  let date_display =
    props.config.date_display;

  let current_task = current_task_id
    .and_then(|id| {
      find_record(
        board.cards.as_slice(),
        id
      )
        .cloned()
    });

  let on_preview = {
    let current_task_id =
      current_task_id.clone();
    Callback::from(move |task_id: u64| {
      tracing::debug!(
        task_id,
        "opening task preview"
      );
      current_task_id.set(Some(task_id));
    })
  };

  let on_close_preview = {
    let current_task_id =
      current_task_id.clone();
    Callback::from(move |_: ()| {
      current_task_id.set(None)
    })
  };

  let on_comment_input = {
    let comment = comment.clone();
    Callback::from(
      move |value: String| {
        let mut next = (*comment).clone();
        if next.edit(value) {
          comment.set(next);
        }
      }
    )
  };

  let on_submit_comment = {
    let current_task_id =
      current_task_id.clone();
    let comment = comment.clone();
    let board = board.clone();
    let make_source = make_source.clone();
    Callback::from(move |_: ()| {
      let Some(task_id) = *current_task_id
      else {
        return;
      };
      let mut next = (*comment).clone();
      let Some(mut text) = next.begin()
      else {
        tracing::warn!(
          task_id,
          "comment already being sent"
        );
        return;
      };
      comment.set(next.clone());

      let source = make_source();
      let comment = comment.clone();
      let board = board.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          let outcome = submit_comment(
            &source, task_id, &mut text
          )
          .await;
          next.finish(text);
          comment.set(next);
          board.apply(outcome);
        }
      );
    })
  };

  let on_refresh = {
    let board = board.clone();
    Callback::from(move |_| {
      board.reload()
    })
  };

  html! {
      <div class="panel board-panel">
          <div class="header">
              <span>{ "Actions" }</span>
              <button class="btn" onclick={on_refresh}>{ "Rafraîchir" }</button>
          </div>
          {
              if let Some(err) = (*board.error).clone() {
                  html! { <ErrorBanner message={err.to_string()} on_dismiss={board.on_dismiss_error()} /> }
              } else {
                  html! {}
              }
          }
          <div class="board">
              {
                  for columns.iter().map(|column| {
                      let lane = column.status.to_string();
                      let cards = board.lane_cards(&column.status);
                      let on_drop = board.on_drop(
                          column.status,
                          make_source.clone(),
                      );
                      html! {
                          <BoardColumn
                              lane={lane.clone()}
                              title={column.title}
                              color_class={column.color_class}
                              card_count={cards.len()}
                              is_drop_hint={board.drag_over_lane.as_deref() == Some(lane.as_str())}
                              on_drag_over_lane={board.on_drag_over_lane()}
                              on_drag_leave_lane={board.on_drag_leave_lane()}
                              on_drop={on_drop.clone()}
                          >
                              {
                                  for cards.into_iter().map(|card| html! {
                                      <BoardCard
                                          key={card.uuid.to_string()}
                                          uuid={card.uuid}
                                          is_dragging={*board.dragging == Some(card.uuid)}
                                          on_drag_start={board.on_drag_start()}
                                          on_drag_end={board.on_drag_end()}
                                          on_drop={on_drop.clone()}
                                      >
                                          <TaskCardBody
                                              task={card.record}
                                              {date_display}
                                              on_preview={on_preview.clone()}
                                          />
                                      </BoardCard>
                                  })
                              }
                          </BoardColumn>
                      }
                  })
              }
          </div>
          <TaskPreviewModal
              task={current_task}
              {date_display}
              endpoints={props.config.endpoints()}
              pending_comment={comment.text().to_string()}
              sending={comment.is_sending()}
              on_comment_input={on_comment_input}
              on_submit={on_submit_comment}
              on_close={on_close_preview}
          />
      </div>
  }
}

#[derive(Properties, PartialEq)]
struct TaskCardBodyProps {
  task:         TaskDto,
  date_display: DateDisplay,
  on_preview:   Callback<u64>
}

#[function_component(TaskCardBody)]
fn task_card_body(
  props: &TaskCardBodyProps
) -> Html {
  let task = &props.task;
  let task_id = task.id;
  let created = task
    .created_on
    .as_deref()
    .map(|raw| {
      format_date_display(
        raw,
        props.date_display
      )
    })
    .unwrap_or_default();
  let on_preview = {
    let on_preview =
      props.on_preview.clone();
    Callback::from(move |_| {
      on_preview.emit(task_id)
    })
  };

  html! {
      <>
          <div class="board-card-title">{ &task.intent }</div>
          <div class="board-card-meta">
              <span class="badge">{ created }</span>
              {
                  if task.followups.is_empty() {
                      html! {}
                  } else {
                      html! { <span class="badge">{ format!("{} messages", task.followups.len()) }</span> }
                  }
              }
              {
                  if task.public {
                      html! {}
                  } else {
                      html! { <span class="badge">{ "brouillon" }</span> }
                  }
              }
          </div>
          <div class="board-card-actions">
              <button class="btn" onclick={on_preview}>{ "Aperçu" }</button>
          </div>
      </>
  }
}
