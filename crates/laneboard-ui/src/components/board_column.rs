use web_sys::DragEvent;
use yew::{
  AttrValue,
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::DroppedCard;
use super::drag::{
  dragged_card,
  finish_drop
};

#[derive(Properties, PartialEq)]
pub struct BoardColumnProps {
  pub lane:               AttrValue,
  pub title:              AttrValue,
  pub color_class:        AttrValue,
  pub card_count:         usize,
  pub is_drop_hint:       bool,
  pub on_drag_over_lane:
    Callback<String>,
  pub on_drag_leave_lane:
    Callback<String>,
  pub on_drop: Callback<DroppedCard>,
  #[prop_or_default]
  pub children:           Html
}

#[function_component(BoardColumn)]
pub fn board_column(
  props: &BoardColumnProps
) -> Html {
  let ondragover = {
    let on_drag_over_lane =
      props.on_drag_over_lane.clone();
    let lane = props.lane.to_string();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        on_drag_over_lane
          .emit(lane.clone());
      }
    )
  };

  let ondragenter = {
    let on_drag_over_lane =
      props.on_drag_over_lane.clone();
    let lane = props.lane.to_string();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        on_drag_over_lane
          .emit(lane.clone());
      }
    )
  };

  let ondragleave = {
    let on_drag_leave_lane =
      props.on_drag_leave_lane.clone();
    let lane = props.lane.to_string();
    Callback::from(
      move |_event: DragEvent| {
        on_drag_leave_lane
          .emit(lane.clone());
      }
    )
  };

  let ondrop = {
    let on_drop = props.on_drop.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        event.stop_propagation();
        if let Some(card) =
          dragged_card(&event)
        {
          on_drop.emit(DroppedCard {
            card,
            before: None
          });
        }
        finish_drop(&event);
      }
    )
  };

  html! {
      <div class={classes!("board-column", props.color_class.to_string())}>
          <div class="board-column-header">
              <span>{ props.title.clone() }</span>
              <span class="badge">{ props.card_count }</span>
          </div>
          <div
              class={classes!("board-column-body", props.is_drop_hint.then_some("bg-info"))}
              {ondragover}
              {ondragenter}
              {ondragleave}
              {ondrop}
          >
              {
                  if props.card_count == 0 {
                      html! { <div class="board-empty">{ "Aucun élément" }</div> }
                  } else {
                      props.children.clone()
                  }
              }
          </div>
      </div>
  }
}
