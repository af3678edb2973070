use std::fmt;

use serde::{
  Deserialize,
  Serialize
};

/// Project status codes as the backend
/// stores them. Codes this client does
/// not know about are kept verbatim so a
/// reload never drops a project.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
  Draft,
  ToProcess,
  Questions,
  Ready,
  InProgress,
  ReviewRequest,
  Done,
  Stuck,
  Rejected,
  Other(String)
}

impl ProjectStatus {
  pub fn code(&self) -> &str {
    match self {
      | Self::Draft => "DRAFT",
      | Self::ToProcess => "TO_PROCESS",
      | Self::Questions => "QUESTIONS",
      | Self::Ready => "READY",
      | Self::InProgress => {
        "IN_PROGRESS"
      }
      | Self::ReviewRequest => {
        "REVIEW_REQUEST"
      }
      | Self::Done => "DONE",
      | Self::Stuck => "STUCK",
      | Self::Rejected => "REJECTED",
      | Self::Other(code) => code
    }
  }
}

impl From<String> for ProjectStatus {
  fn from(code: String) -> Self {
    match code.as_str() {
      | "DRAFT" => Self::Draft,
      | "TO_PROCESS" => Self::ToProcess,
      | "QUESTIONS" => Self::Questions,
      | "READY" => Self::Ready,
      | "IN_PROGRESS" => Self::InProgress,
      | "REVIEW_REQUEST" => {
        Self::ReviewRequest
      }
      | "DONE" => Self::Done,
      | "STUCK" => Self::Stuck,
      | "REJECTED" => Self::Rejected,
      | _ => Self::Other(code)
    }
  }
}

impl From<ProjectStatus> for String {
  fn from(status: ProjectStatus) -> Self {
    status.code().to_string()
  }
}

impl fmt::Display for ProjectStatus {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.code())
  }
}

/// Task status codes. The backend uses
/// small integers; unknown values are
/// preserved.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(from = "i64", into = "i64")]
pub enum TaskStatus {
  Proposed,
  InProgress,
  Blocked,
  Done,
  Rejected,
  Other(i64)
}

impl TaskStatus {
  pub fn code(self) -> i64 {
    match self {
      | Self::Proposed => 0,
      | Self::InProgress => 1,
      | Self::Blocked => 2,
      | Self::Done => 3,
      | Self::Rejected => 4,
      | Self::Other(code) => code
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Proposed => "proposé",
      | Self::InProgress => "en cours",
      | Self::Blocked => "blocage",
      | Self::Done => "terminé",
      | Self::Rejected => "refusé",
      | Self::Other(_) => "inconnu"
    }
  }
}

impl From<i64> for TaskStatus {
  fn from(code: i64) -> Self {
    match code {
      | 0 => Self::Proposed,
      | 1 => Self::InProgress,
      | 2 => Self::Blocked,
      | 3 => Self::Done,
      | 4 => Self::Rejected,
      | other => Self::Other(other)
    }
  }
}

impl From<TaskStatus> for i64 {
  fn from(status: TaskStatus) -> Self {
    status.code()
  }
}

impl fmt::Display for TaskStatus {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(f, "{}", self.code())
  }
}

/// One entry of `GET /api/projects/`.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct ProjectDto {
  pub id:         u64,
  #[serde(default)]
  pub name:       String,
  pub status:     ProjectStatus,
  #[serde(default)]
  pub created_on: Option<String>,
  #[serde(default)]
  pub org_name:   Option<String>
}

/// One entry of
/// `GET /api/projects/{id}/tasks`.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct TaskDto {
  pub id:          u64,
  #[serde(default)]
  pub intent:      String,
  #[serde(default)]
  pub content:     String,
  pub status:      TaskStatus,
  #[serde(default)]
  pub order:       i64,
  #[serde(default)]
  pub created_on:  Option<String>,
  #[serde(default)]
  pub public:      bool,
  #[serde(default)]
  pub resource_id: Option<u64>,
  #[serde(default)]
  pub followups:   Vec<FollowupDto>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct FollowupDto {
  #[serde(default)]
  pub id:        u64,
  #[serde(default)]
  pub comment:   String,
  #[serde(default)]
  pub who:       Option<FollowupAuthor>,
  #[serde(default)]
  pub timestamp: Option<String>
}

#[derive(
  Debug,
  Clone,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct FollowupAuthor {
  #[serde(default)]
  pub first_name: String,
  #[serde(default)]
  pub last_name:  String,
  #[serde(default)]
  pub email:      String
}

impl FollowupAuthor {
  /// Full name when known, otherwise the
  /// email address.
  pub fn display_name(&self) -> String {
    let full = format!(
      "{} {}",
      self.first_name.trim(),
      self.last_name.trim()
    );
    let full = full.trim();
    if full.is_empty() {
      self.email.clone()
    } else {
      full.to_string()
    }
  }
}

/// JSON body of the status PATCH calls.
#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct StatusPatch<S> {
  pub status: S
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn project_status_keeps_unknown_codes()
  {
    let dto: ProjectDto =
      serde_json::from_str(
        r#"{"id":7,"name":"Friche","status":"ARCHIVED","created_on":"2022-01-31T17:10:00+01:00","org_name":"Mairie"}"#,
      )
      .expect("decode project");

    assert_eq!(
      dto.status,
      ProjectStatus::Other(
        "ARCHIVED".to_string()
      )
    );
    assert_eq!(
      serde_json::to_value(&dto.status)
        .expect("encode status"),
      serde_json::json!("ARCHIVED")
    );
  }

  #[test]
  fn project_status_patch_is_plain_code()
  {
    let body = StatusPatch {
      status: ProjectStatus::InProgress
    };
    assert_eq!(
      serde_json::to_string(&body)
        .expect("encode patch"),
      r#"{"status":"IN_PROGRESS"}"#
    );
  }

  #[test]
  fn task_status_is_integer_on_the_wire()
  {
    let body = StatusPatch {
      status: TaskStatus::Blocked
    };
    assert_eq!(
      serde_json::to_string(&body)
        .expect("encode patch"),
      r#"{"status":2}"#
    );
    assert_eq!(
      TaskStatus::from(9),
      TaskStatus::Other(9)
    );
  }

  #[test]
  fn task_defaults_missing_fields() {
    let dto: TaskDto =
      serde_json::from_str(
        r#"{"id":3,"status":1,"followups":[{"comment":"ok","who":{"email":"a@b.fr"}}]}"#,
      )
      .expect("decode task");

    assert_eq!(
      dto.status,
      TaskStatus::InProgress
    );
    assert_eq!(dto.order, 0);
    assert!(dto.intent.is_empty());
    let who = dto.followups[0]
      .who
      .clone()
      .expect("author");
    assert_eq!(
      who.display_name(),
      "a@b.fr"
    );
  }
}
