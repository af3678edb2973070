use std::cmp::Ordering;

use super::{
  BoardRecord,
  Card
};
use crate::error::BoardError;

pub type StatusOf<R> =
  <R as BoardRecord>::Status;

/// Where a board gets its cards from and
/// how it writes moves back. Sorting,
/// filtering and post-processing are
/// hooks with pass-through defaults.
#[allow(async_fn_in_trait)]
pub trait BoardSource {
  type Record: BoardRecord;

  async fn fetch_data(
    &self
  ) -> Result<Vec<Self::Record>, BoardError>;

  /// Persists `status` for `record`.
  /// `next` is the card the record was
  /// dropped onto, if any.
  async fn patch_data(
    &self,
    record: &Self::Record,
    status: StatusOf<Self::Record>,
    next: Option<&Self::Record>
  ) -> Result<(), BoardError>;

  fn sort_cmp(
    &self,
    _a: &Self::Record,
    _b: &Self::Record
  ) -> Ordering {
    Ordering::Equal
  }

  fn filter(
    &self,
    _record: &Self::Record
  ) -> bool {
    true
  }

  fn post_process(
    &self,
    _cards: &mut [Card<Self::Record>]
  ) {
  }
}
