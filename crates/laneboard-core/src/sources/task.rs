use std::cmp::Ordering;

use laneboard_shared::{
  StatusPatch,
  TaskDto,
  TaskStatus
};
use tracing::{
  error,
  info
};

use crate::board::{
  BoardSource,
  FlowOutcome
};
use crate::endpoints::Endpoints;
use crate::error::BoardError;
use crate::transport::{
  Transport,
  encode_form
};

/// Board over the tasks of one project,
/// ordered by their backend `order`.
pub struct TaskSource<T> {
  transport:  T,
  endpoints:  Endpoints,
  project_id: u64
}

impl<T> TaskSource<T> {
  pub fn new(
    transport: T,
    endpoints: Endpoints,
    project_id: u64
  ) -> Self {
    Self {
      transport,
      endpoints,
      project_id
    }
  }

  pub fn project_id(&self) -> u64 {
    self.project_id
  }
}

impl<T> TaskSource<T>
where
  T: Transport
{
  /// Posts a follow-up comment on a task.
  /// The text is sent as typed.
  pub async fn send_comment(
    &self,
    task_id: u64,
    comment: &str
  ) -> Result<(), BoardError> {
    info!(
      task_id,
      chars = comment.chars().count(),
      "sending task comment"
    );
    self
      .transport
      .post_form(
        &self
          .endpoints
          .task_followup(task_id),
        &encode_form(&[(
          "comment", comment
        )])
      )
      .await
  }
}

impl<T> BoardSource for TaskSource<T>
where
  T: Transport
{
  type Record = TaskDto;

  async fn fetch_data(
    &self
  ) -> Result<Vec<TaskDto>, BoardError> {
    self
      .transport
      .get_json(
        &self
          .endpoints
          .project_tasks(self.project_id)
      )
      .await
  }

  async fn patch_data(
    &self,
    record: &TaskDto,
    status: TaskStatus,
    next: Option<&TaskDto>
  ) -> Result<(), BoardError> {
    self
      .transport
      .patch_json(
        &self.endpoints.project_task(
          self.project_id,
          record.id
        ),
        &StatusPatch { status }
      )
      .await?;

    if let Some(next) = next {
      let above = next.id.to_string();
      self
        .transport
        .post_form(
          &self
            .endpoints
            .project_task_move(
              self.project_id,
              record.id
            ),
          &encode_form(&[(
            "above", &above
          )])
        )
        .await?;
    }
    Ok(())
  }

  fn sort_cmp(
    &self,
    a: &TaskDto,
    b: &TaskDto
  ) -> Ordering {
    a.order.cmp(&b.order)
  }
}

/// Sends the comment, empties the draft
/// once the backend accepted it, then
/// reloads the board.
pub async fn submit_comment<T>(
  source: &TaskSource<T>,
  task_id: u64,
  draft: &mut String
) -> FlowOutcome<TaskDto>
where
  T: Transport
{
  let sent = source
    .send_comment(task_id, draft)
    .await;

  let earlier = match sent {
    | Ok(()) => {
      draft.clear();
      None
    }
    | Err(err) => {
      error!(error = %err, task_id, "comment submission failed");
      Some(err)
    }
  };

  crate::board::reload_after(
    source, earlier
  )
  .await
}

/// Comment text being typed in the task
/// preview. Edits are refused while a
/// submission is in flight so the text
/// sent and the text shown never diverge.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct CommentDraft {
  text:      String,
  in_flight: bool
}

impl CommentDraft {
  pub fn text(&self) -> &str {
    &self.text
  }

  pub fn is_sending(&self) -> bool {
    self.in_flight
  }

  /// Replaces the text unless a send is
  /// pending. Returns whether it applied.
  pub fn edit(
    &mut self,
    text: String
  ) -> bool {
    if self.in_flight {
      return false;
    }
    self.text = text;
    true
  }

  /// Locks the draft and hands out the
  /// text to send. `None` while another
  /// send is pending.
  pub fn begin(
    &mut self
  ) -> Option<String> {
    if self.in_flight {
      return None;
    }
    self.in_flight = true;
    Some(self.text.clone())
  }

  /// Unlocks with what `submit_comment`
  /// left of the sent text: empty after
  /// success, unchanged after failure.
  pub fn finish(
    &mut self,
    remaining: String
  ) {
    self.text = remaining;
    self.in_flight = false;
  }
}

#[cfg(test)]
mod tests {
  use super::CommentDraft;

  #[test]
  fn edits_are_refused_while_sending() {
    let mut draft =
      CommentDraft::default();
    assert!(
      draft.edit("Bonjour".to_string())
    );

    let sent = draft
      .begin()
      .expect("first send starts");
    assert_eq!(sent, "Bonjour");
    assert!(draft.is_sending());
    assert!(
      !draft
        .edit("Bonjour, et".to_string())
    );
    assert!(draft.begin().is_none());
    assert_eq!(draft.text(), "Bonjour");
  }

  #[test]
  fn finish_keeps_what_the_send_left() {
    let mut draft =
      CommentDraft::default();
    draft.edit("Relance".to_string());

    let sent =
      draft.begin().expect("send starts");
    draft.finish(sent);
    assert_eq!(draft.text(), "Relance");
    assert!(!draft.is_sending());

    draft.begin().expect("send again");
    draft.finish(String::new());
    assert_eq!(draft.text(), "");
    assert!(
      draft.edit("Suite".to_string())
    );
  }
}
