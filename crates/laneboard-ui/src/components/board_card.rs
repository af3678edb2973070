use uuid::Uuid;
use web_sys::DragEvent;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::DroppedCard;
use super::drag::{
  begin_drag,
  dragged_card,
  finish_drop
};

#[derive(Properties, PartialEq)]
pub struct BoardCardProps {
  pub uuid:          Uuid,
  pub is_dragging:   bool,
  pub on_drag_start: Callback<Uuid>,
  pub on_drag_end:   Callback<()>,
  /// Drops onto this card place the
  /// dragged card above it.
  pub on_drop: Callback<DroppedCard>,
  #[prop_or_default]
  pub children:      Html
}

#[function_component(BoardCard)]
pub fn board_card(
  props: &BoardCardProps
) -> Html {
  let card_id = props.uuid;

  let ondragstart = {
    let on_drag_start =
      props.on_drag_start.clone();
    Callback::from(
      move |event: DragEvent| {
        begin_drag(&event, card_id);
        on_drag_start.emit(card_id);
      }
    )
  };

  let ondragend = {
    let on_drag_end =
      props.on_drag_end.clone();
    Callback::from(move |_| {
      on_drag_end.emit(());
    })
  };

  let ondragover =
    Callback::from(|event: DragEvent| {
      event.prevent_default();
    });

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
            before: Some(card_id)
          });
        }
        finish_drop(&event);
      }
    )
  };

  html! {
      <div
          id={card_id.to_string()}
          class={classes!("board-card", props.is_dragging.then_some("bg-warning"))}
          draggable="true"
          {ondragstart}
          {ondragend}
          {ondragover}
          {ondrop}
      >
          { props.children.clone() }
      </div>
  }
}
