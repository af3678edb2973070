//! Board model: static lanes, decorated
//! cards and the interaction flows that
//! move cards between lanes.

mod flow;
mod source;

use std::fmt;

use laneboard_shared::{
  ProjectDto,
  ProjectStatus,
  TaskDto,
  TaskStatus
};
use uuid::Uuid;

pub use flow::{
  DropRequest,
  FlowOutcome,
  drop_card,
  load_cards,
  move_card,
  relocate_card
};
pub(crate) use flow::reload_after;
pub use source::{
  BoardSource,
  StatusOf
};

/// A backend record that can sit on a
/// board.
pub trait BoardRecord: Clone {
  type Status: Clone
    + PartialEq
    + fmt::Debug
    + fmt::Display;

  fn record_id(&self) -> u64;

  fn status(&self) -> Self::Status;

  fn set_status(
    &mut self,
    status: Self::Status
  );
}

impl BoardRecord for ProjectDto {
  type Status = ProjectStatus;

  fn record_id(&self) -> u64 {
    self.id
  }

  fn status(&self) -> ProjectStatus {
    self.status.clone()
  }

  fn set_status(
    &mut self,
    status: ProjectStatus
  ) {
    self.status = status;
  }
}

impl BoardRecord for TaskDto {
  type Status = TaskStatus;

  fn record_id(&self) -> u64 {
    self.id
  }

  fn status(&self) -> TaskStatus {
    self.status
  }

  fn set_status(
    &mut self,
    status: TaskStatus
  ) {
    self.status = status;
  }
}

/// One visual lane.
#[derive(Debug, Clone, PartialEq)]
pub struct Column<S> {
  pub status:      S,
  pub title:       &'static str,
  pub color_class: &'static str
}

impl<S> Column<S> {
  const fn new(
    status: S,
    title: &'static str,
    color_class: &'static str
  ) -> Self {
    Self {
      status,
      title,
      color_class
    }
  }
}

pub fn project_columns()
-> Vec<Column<ProjectStatus>> {
  vec![
    Column::new(
      ProjectStatus::ToProcess,
      "A traiter",
      "border-secondary"
    ),
    Column::new(
      ProjectStatus::Questions,
      "En attente",
      "border-warning"
    ),
    Column::new(
      ProjectStatus::Ready,
      "Prêt à aiguiller",
      "border-success"
    ),
    Column::new(
      ProjectStatus::InProgress,
      "Recommandations en cours",
      "border-success"
    ),
    Column::new(
      ProjectStatus::Done,
      "Aiguillage terminé",
      "border-success"
    ),
  ]
}

pub fn task_columns()
-> Vec<Column<TaskStatus>> {
  vec![
    Column::new(
      TaskStatus::Proposed,
      "Nouvelles",
      "border-primary"
    ),
    Column::new(
      TaskStatus::InProgress,
      "En cours",
      "border-secondary"
    ),
    Column::new(
      TaskStatus::Blocked,
      "En attente",
      "border-warning"
    ),
    Column::new(
      TaskStatus::Done,
      "Archivées",
      "border-error"
    ),
  ]
}

/// A record decorated with the
/// identifier used for drag targeting.
/// The identifier lives only until the
/// next fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Card<R> {
  pub uuid:   Uuid,
  pub record: R
}

pub fn decorate<R>(
  records: Vec<R>
) -> Vec<Card<R>> {
  records
    .into_iter()
    .map(|record| {
      Card {
        uuid: Uuid::new_v4(),
        record
      }
    })
    .collect()
}

/// Cards of one lane, in board order.
pub fn lane_cards<'a, R>(
  cards: &'a [Card<R>],
  status: &'a R::Status
) -> impl Iterator<Item = &'a Card<R>> + 'a
where
  R: BoardRecord
{
  cards.iter().filter(move |card| {
    card.record.status() == *status
  })
}

/// Index of the lane holding `card`, if
/// its status has one.
pub fn lane_of<R>(
  card: &Card<R>,
  columns: &[Column<R::Status>]
) -> Option<usize>
where
  R: BoardRecord
{
  let status = card.record.status();
  columns
    .iter()
    .position(|column| {
      column.status == status
    })
}

pub fn find_card<R>(
  cards: &[Card<R>],
  uuid: Uuid
) -> Option<&Card<R>> {
  cards
    .iter()
    .find(|card| card.uuid == uuid)
}

pub fn find_record<R>(
  cards: &[Card<R>],
  record_id: u64
) -> Option<&R>
where
  R: BoardRecord
{
  cards
    .iter()
    .map(|card| &card.record)
    .find(|record| {
      record.record_id() == record_id
    })
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  fn project(
    id: u64,
    status: &str
  ) -> ProjectDto {
    ProjectDto {
      id,
      name: format!("Projet {id}"),
      status: ProjectStatus::from(
        status.to_string()
      ),
      created_on: None,
      org_name: None
    }
  }

  #[test]
  fn every_card_lands_in_at_most_one_lane()
  {
    let columns = project_columns();
    let cards = decorate(vec![
      project(1, "TO_PROCESS"),
      project(2, "READY"),
      project(3, "DRAFT"),
      project(4, "READY"),
    ]);

    let mut seen = HashSet::new();
    for column in &columns {
      for card in
        lane_cards(&cards, &column.status)
      {
        assert!(seen.insert(card.uuid));
      }
    }
    assert_eq!(seen.len(), 3);
    assert_eq!(
      lane_of(&cards[1], &columns),
      Some(2)
    );
    assert_eq!(
      lane_of(&cards[2], &columns),
      None
    );
  }

  #[test]
  fn decorate_issues_distinct_identifiers()
  {
    let first = decorate(vec![
      project(1, "READY"),
      project(2, "READY"),
    ]);
    let second = decorate(
      first
        .iter()
        .map(|card| card.record.clone())
        .collect()
    );
    assert_ne!(
      first[0].uuid,
      first[1].uuid
    );
    assert_ne!(
      first[0].uuid,
      second[0].uuid
    );
  }

  #[test]
  fn lanes_are_static_and_ordered() {
    let titles: Vec<_> = task_columns()
      .iter()
      .map(|column| column.title)
      .collect();
    assert_eq!(
      titles,
      vec![
        "Nouvelles",
        "En cours",
        "En attente",
        "Archivées"
      ]
    );
    assert_eq!(
      project_columns()[0].status,
      ProjectStatus::ToProcess
    );
  }

  #[test]
  fn finds_records_by_backend_id() {
    let cards = decorate(vec![
      project(5, "READY"),
      project(8, "DONE"),
    ]);
    assert_eq!(
      find_record(&cards, 8)
        .map(|p| p.status.clone()),
      Some(ProjectStatus::Done)
    );
    assert!(
      find_card(&cards, Uuid::nil())
        .is_none()
    );
  }
}
