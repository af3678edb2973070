use tracing::{
  debug,
  error,
  info,
  warn
};
use uuid::Uuid;

use super::{
  BoardRecord,
  BoardSource,
  Card,
  find_card
};
use crate::error::BoardError;

/// A card released over a lane. `before`
/// is the card it was dropped onto.
#[derive(Debug, Clone, PartialEq)]
pub struct DropRequest<S> {
  pub card:   Uuid,
  pub status: S,
  pub before: Option<Uuid>
}

impl<S> DropRequest<S> {
  pub fn onto_self(&self) -> bool {
    self.before == Some(self.card)
  }
}

/// Result of a mutation followed by a
/// reload. `cards` is `None` when nothing
/// was reloaded.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowOutcome<R> {
  pub cards: Option<Vec<Card<R>>>,
  pub error: Option<BoardError>
}

/// Fetch, filter, sort, decorate, then
/// post-process.
#[tracing::instrument(skip_all)]
pub async fn load_cards<S>(
  source: &S
) -> Result<Vec<Card<S::Record>>, BoardError>
where
  S: BoardSource
{
  let mut records =
    source.fetch_data().await?;
  let fetched = records.len();

  records
    .retain(|record| source.filter(record));
  records
    .sort_by(|a, b| source.sort_cmp(a, b));

  let mut cards =
    super::decorate(records);
  source.post_process(&mut cards);

  info!(
    fetched,
    shown = cards.len(),
    "loaded board cards"
  );
  Ok(cards)
}

/// Moves the dropped card locally so the
/// board reflects the gesture before the
/// server answers. Returns `false` when
/// nothing moved.
pub fn relocate_card<R>(
  cards: &mut Vec<Card<R>>,
  drop: &DropRequest<R::Status>
) -> bool
where
  R: BoardRecord
{
  if drop.onto_self() {
    return false;
  }
  let Some(from) = cards
    .iter()
    .position(|card| {
      card.uuid == drop.card
    })
  else {
    return false;
  };

  let mut card = cards.remove(from);
  card
    .record
    .set_status(drop.status.clone());

  let to = drop
    .before
    .and_then(|before| {
      cards.iter().position(|other| {
        other.uuid == before
      })
    })
    .unwrap_or(cards.len());
  cards.insert(to, card);
  true
}

/// Resolves the dropped identifier and
/// persists the move. Returns `Ok(false)`
/// when the gesture needs no request.
#[tracing::instrument(skip_all, fields(card = %drop.card, status = %drop.status))]
pub async fn move_card<S>(
  source: &S,
  cards: &[Card<S::Record>],
  drop: &DropRequest<
    <S::Record as BoardRecord>::Status
  >
) -> Result<bool, BoardError>
where
  S: BoardSource
{
  if drop.onto_self() {
    debug!(
      "card dropped onto itself; \
       nothing to persist"
    );
    return Ok(false);
  }

  let Some(card) =
    find_card(cards, drop.card)
  else {
    warn!(
      "drop ignored because card is \
       not in current snapshot"
    );
    return Err(BoardError::UnknownCard(
      drop.card
    ));
  };

  let next = drop
    .before
    .and_then(|before| {
      find_card(cards, before)
    })
    .map(|card| &card.record);

  info!(
    record_id = card.record.record_id(),
    next_id = next.map(|r| r.record_id()),
    "persisting card move"
  );

  source
    .patch_data(
      &card.record,
      drop.status.clone(),
      next
    )
    .await?;
  Ok(true)
}

/// Persist then reload. The reload runs
/// even when the move failed so the board
/// resyncs with the server.
pub async fn drop_card<S>(
  source: &S,
  cards: &[Card<S::Record>],
  drop: &DropRequest<
    <S::Record as BoardRecord>::Status
  >
) -> FlowOutcome<S::Record>
where
  S: BoardSource
{
  let moved =
    move_card(source, cards, drop).await;

  let move_error = match moved {
    | Ok(false) => {
      return FlowOutcome {
        cards: None,
        error: None
      };
    }
    | Ok(true) => None,
    | Err(err) => {
      error!(error = %err, "card move failed");
      Some(err)
    }
  };

  reload_after(source, move_error).await
}

pub(crate) async fn reload_after<S>(
  source: &S,
  earlier: Option<BoardError>
) -> FlowOutcome<S::Record>
where
  S: BoardSource
{
  match load_cards(source).await {
    | Ok(cards) => {
      FlowOutcome {
        cards: Some(cards),
        error: earlier
      }
    }
    | Err(err) => {
      error!(error = %err, "board reload failed");
      FlowOutcome {
        cards: None,
        error: Some(
          earlier.unwrap_or(err)
        )
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use laneboard_shared::{
    TaskDto,
    TaskStatus
  };

  use super::*;
  use crate::board::decorate;

  fn task(
    id: u64,
    status: TaskStatus
  ) -> TaskDto {
    TaskDto {
      id,
      intent: format!("Action {id}"),
      content: String::new(),
      status,
      order: id as i64,
      created_on: None,
      public: true,
      resource_id: None,
      followups: vec![]
    }
  }

  #[test]
  fn relocate_inserts_above_target() {
    let mut cards = decorate(vec![
      task(1, TaskStatus::Proposed),
      task(2, TaskStatus::InProgress),
      task(3, TaskStatus::InProgress),
    ]);
    let dragged = cards[0].uuid;
    let target = cards[2].uuid;

    assert!(relocate_card(
      &mut cards,
      &DropRequest {
        card:   dragged,
        status: TaskStatus::InProgress,
        before: Some(target)
      }
    ));

    let ids: Vec<u64> = cards
      .iter()
      .map(|card| card.record.id)
      .collect();
    assert_eq!(ids, vec![2, 1, 3]);
    assert_eq!(
      cards[1].record.status,
      TaskStatus::InProgress
    );
  }

  #[test]
  fn relocate_appends_without_target() {
    let mut cards = decorate(vec![
      task(1, TaskStatus::Proposed),
      task(2, TaskStatus::Done),
    ]);
    let dragged = cards[0].uuid;

    assert!(relocate_card(
      &mut cards,
      &DropRequest {
        card:   dragged,
        status: TaskStatus::Done,
        before: None
      }
    ));
    assert_eq!(cards[1].record.id, 1);
    assert_eq!(
      cards[1].record.status,
      TaskStatus::Done
    );
  }

  #[test]
  fn relocate_ignores_self_and_strangers()
  {
    let mut cards = decorate(vec![task(
      1,
      TaskStatus::Proposed
    )]);
    let own = cards[0].uuid;

    assert!(!relocate_card(
      &mut cards,
      &DropRequest {
        card:   own,
        status: TaskStatus::Done,
        before: Some(own)
      }
    ));
    assert!(!relocate_card(
      &mut cards,
      &DropRequest {
        card:   Uuid::new_v4(),
        status: TaskStatus::Done,
        before: None
      }
    ));
    assert_eq!(
      cards[0].record.status,
      TaskStatus::Proposed
    );
  }
}
