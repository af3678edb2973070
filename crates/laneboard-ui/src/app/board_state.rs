use laneboard_core::board::{
  BoardRecord,
  BoardSource,
  Card,
  DropRequest,
  FlowOutcome,
  StatusOf,
  drop_card,
  load_cards,
  relocate_card
};
use laneboard_core::BoardError;
use uuid::Uuid;
use yew::{
  Callback,
  UseStateHandle,
  hook,
  use_effect_with,
  use_state
};

use crate::components::DroppedCard;

/// State shared by both boards: the card
/// snapshot plus drag highlighting and
/// the last surfaced error.
pub struct BoardHandle<R> {
  pub cards:
    UseStateHandle<Vec<Card<R>>>,
  pub dragging:
    UseStateHandle<Option<Uuid>>,
  pub drag_over_lane:
    UseStateHandle<Option<String>>,
  pub error:
    UseStateHandle<Option<BoardError>>,
  refresh_tick: UseStateHandle<u64>
}

impl<R> Clone for BoardHandle<R> {
  fn clone(&self) -> Self {
    Self {
      cards:          self.cards.clone(),
      dragging:       self
        .dragging
        .clone(),
      drag_over_lane: self
        .drag_over_lane
        .clone(),
      error:          self.error.clone(),
      refresh_tick:   self
        .refresh_tick
        .clone()
    }
  }
}

/// Loads the board on mount and after
/// every `reload`.
#[hook]
pub fn use_board<S, F>(
  make_source: F
) -> BoardHandle<S::Record>
where
  S: BoardSource + 'static,
  S::Record: 'static,
  F: Fn() -> S + 'static
{
  let board = BoardHandle {
    cards:          use_state(Vec::new),
    dragging:       use_state(|| None),
    drag_over_lane: use_state(|| None),
    error:          use_state(|| None),
    refresh_tick:   use_state(|| 0_u64)
  };

  {
    let board = board.clone();
    use_effect_with(
      *board.refresh_tick,
      move |tick| {
        let tick = *tick;
        let source = make_source();
        wasm_bindgen_futures::spawn_local(
          async move {
            tracing::info!(tick, "refreshing board");
            match load_cards(&source).await
            {
              | Ok(cards) => {
                board.cards.set(cards)
              }
              | Err(err) => {
                tracing::error!(error = %err, "board load failed");
                board.error.set(Some(err));
              }
            }
          }
        );
        || ()
      }
    );
  }

  board
}

impl<R> BoardHandle<R>
where
  R: BoardRecord + 'static
{
  pub fn reload(&self) {
    self.refresh_tick.set(
      (*self.refresh_tick)
        .saturating_add(1)
    );
  }

  pub fn apply(
    &self,
    outcome: FlowOutcome<R>
  ) {
    if let Some(cards) = outcome.cards {
      self.cards.set(cards);
    }
    if let Some(err) = outcome.error {
      self.error.set(Some(err));
    }
  }

  pub fn lane_cards(
    &self,
    status: &StatusOf<R>
  ) -> Vec<Card<R>> {
    laneboard_core::board::lane_cards(
      self.cards.as_slice(),
      status
    )
    .cloned()
    .collect()
  }

  pub fn on_drag_start(
    &self
  ) -> Callback<Uuid> {
    let dragging = self.dragging.clone();
    Callback::from(move |uuid: Uuid| {
      tracing::debug!(
        %uuid,
        "board drag start"
      );
      dragging.set(Some(uuid));
    })
  }

  pub fn on_drag_end(
    &self
  ) -> Callback<()> {
    let dragging = self.dragging.clone();
    let drag_over_lane =
      self.drag_over_lane.clone();
    Callback::from(move |_| {
      dragging.set(None);
      drag_over_lane.set(None);
    })
  }

  pub fn on_drag_over_lane(
    &self
  ) -> Callback<String> {
    let drag_over_lane =
      self.drag_over_lane.clone();
    Callback::from(
      move |lane: String| {
        if (*drag_over_lane).as_deref()
          != Some(lane.as_str())
        {
          tracing::debug!(
            lane = %lane,
            "board drag over lane"
          );
          drag_over_lane.set(Some(lane));
        }
      }
    )
  }

  pub fn on_drag_leave_lane(
    &self
  ) -> Callback<String> {
    let drag_over_lane =
      self.drag_over_lane.clone();
    Callback::from(
      move |lane: String| {
        if (*drag_over_lane).as_deref()
          == Some(lane.as_str())
        {
          drag_over_lane.set(None);
        }
      }
    )
  }

  pub fn on_dismiss_error(
    &self
  ) -> Callback<()> {
    let error = self.error.clone();
    Callback::from(move |_| {
      error.set(None)
    })
  }

  /// Drop handler for one lane: clear the
  /// highlight, move the card locally,
  /// persist, then reload.
  pub fn on_drop<S, F>(
    &self,
    status: StatusOf<R>,
    make_source: F
  ) -> Callback<DroppedCard>
  where
    S: BoardSource<Record = R> + 'static,
    F: Fn() -> S + 'static
  {
    let board = self.clone();
    Callback::from(
      move |dropped: DroppedCard| {
        board.drag_over_lane.set(None);
        board.dragging.set(None);

        let request = DropRequest {
          card:   dropped.card,
          status: status.clone(),
          before: dropped.before
        };

        let snapshot =
          (*board.cards).clone();
        let mut local = snapshot.clone();
        if relocate_card(
          &mut local, &request
        ) {
          board.cards.set(local);
        }

        let source = make_source();
        let board = board.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            let outcome = drop_card(
              &source,
              snapshot.as_slice(),
              &request
            )
            .await;
            board.apply(outcome);
          }
        );
      }
    )
  }
}
