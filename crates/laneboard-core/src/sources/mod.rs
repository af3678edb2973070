mod project;
mod task;

pub use project::ProjectSource;
pub use task::{
  CommentDraft,
  TaskSource,
  submit_comment
};
