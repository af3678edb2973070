use laneboard_shared::{
  ProjectDto,
  ProjectStatus,
  StatusPatch
};
use tracing::debug;

use crate::board::{
  BoardSource,
  Card
};
use crate::endpoints::Endpoints;
use crate::error::BoardError;
use crate::format::truncate;
use crate::transport::Transport;

/// Board over every project visible to
/// the user, one lane per project status.
pub struct ProjectSource<T> {
  transport:     T,
  endpoints:     Endpoints,
  name_truncate: usize
}

impl<T> ProjectSource<T> {
  pub fn new(
    transport: T,
    endpoints: Endpoints,
    name_truncate: usize
  ) -> Self {
    Self {
      transport,
      endpoints,
      name_truncate
    }
  }
}

impl<T> BoardSource for ProjectSource<T>
where
  T: Transport
{
  type Record = ProjectDto;

  async fn fetch_data(
    &self
  ) -> Result<Vec<ProjectDto>, BoardError>
  {
    self
      .transport
      .get_json(&self.endpoints.projects())
      .await
  }

  async fn patch_data(
    &self,
    record: &ProjectDto,
    status: ProjectStatus,
    next: Option<&ProjectDto>
  ) -> Result<(), BoardError> {
    if let Some(next) = next {
      debug!(
        next_id = next.id,
        "project board has no ordering; \
         ignoring drop position"
      );
    }
    self
      .transport
      .patch_json(
        &self.endpoints.project(record.id),
        &StatusPatch { status }
      )
      .await
  }

  fn post_process(
    &self,
    cards: &mut [Card<ProjectDto>]
  ) {
    for card in cards {
      card.record.name = truncate(
        &card.record.name,
        self.name_truncate
      );
    }
  }
}
