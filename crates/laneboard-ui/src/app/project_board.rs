use laneboard_core::BoardConfig;
use laneboard_core::board::project_columns;
use laneboard_core::format::{
  DateDisplay,
  format_date_display
};
use laneboard_shared::ProjectDto;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html,
  use_memo
};

use super::board_state::use_board;
use crate::api::project_source;
use crate::components::{
  BoardCard,
  BoardColumn,
  ErrorBanner
};

#[derive(Properties, PartialEq)]
pub struct ProjectBoardProps {
  pub config: BoardConfig
}

#[function_component(ProjectBoard)]
pub fn project_board(
  props: &ProjectBoardProps
) -> Html {
  let columns =
    use_memo((), |_| project_columns());
  let make_source = {
    let config = props.config.clone();
    move || project_source(&config)
  };
  let board = use_board(make_source.clone());
  let date_display =
    props.config.date_display;

  let on_refresh = {
    let board = board.clone();
    Callback::from(move |_| {
      board.reload()
    })
  };

  html! {
      <div class="panel board-panel">
          <div class="header">
              <span>{ "Projets" }</span>
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
                          column.status.clone(),
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
                                          <ProjectCardBody project={card.record} {date_display} />
                                      </BoardCard>
                                  })
                              }
                          </BoardColumn>
                      }
                  })
              }
          </div>
      </div>
  }
}

#[derive(Properties, PartialEq)]
struct ProjectCardBodyProps {
  project:      ProjectDto,
  date_display: DateDisplay
}

#[function_component(ProjectCardBody)]
fn project_card_body(
  props: &ProjectCardBodyProps
) -> Html {
  let project = &props.project;
  let created = project
    .created_on
    .as_deref()
    .map(|raw| {
      format_date_display(
        raw,
        props.date_display
      )
    })
    .unwrap_or_default();

  html! {
      <>
          <div class="board-card-title">{ &project.name }</div>
          <div class="board-card-meta">
              <span>{ project.org_name.clone().unwrap_or_default() }</span>
              <span class="badge">{ created }</span>
          </div>
      </>
  }
}
