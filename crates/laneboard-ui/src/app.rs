mod board_state;
mod project_board;
mod task_board;

use gloo::console::log;
use laneboard_core::{
  BoardConfig,
  BoardTarget
};
use yew::{
  Html,
  Properties,
  function_component,
  html
};

use self::project_board::ProjectBoard;
use self::task_board::TaskBoard;

#[derive(Properties, PartialEq)]
pub struct AppProps {
  pub config: BoardConfig
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
  match props.config.target() {
    | Ok(BoardTarget::Projects) => {
      ui_debug(
        "app.mounted",
        "project board"
      );
      html! { <ProjectBoard config={props.config.clone()} /> }
    }
    | Ok(BoardTarget::Tasks {
      project_id
    }) => {
      ui_debug(
        "app.mounted",
        &format!(
          "task board for project \
           {project_id}"
        )
      );
      html! { <TaskBoard config={props.config.clone()} {project_id} /> }
    }
    | Err(err) => {
      tracing::error!(error = %err, "invalid board configuration");
      html! { <div class="board-error">{ err.to_string() }</div> }
    }
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
