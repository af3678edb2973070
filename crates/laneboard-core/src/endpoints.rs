//! URL builders for the backend routes
//! the boards talk to.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
  api_root:  String,
  site_root: String
}

impl Default for Endpoints {
  fn default() -> Self {
    Self::new("/api", "")
  }
}

impl Endpoints {
  pub fn new(
    api_root: &str,
    site_root: &str
  ) -> Self {
    Self {
      api_root:  api_root
        .trim_end_matches('/')
        .to_string(),
      site_root: site_root
        .trim_end_matches('/')
        .to_string()
    }
  }

  pub fn projects(&self) -> String {
    format!("{}/projects/", self.api_root)
  }

  pub fn project(
    &self,
    project_id: u64
  ) -> String {
    format!(
      "{}/projects/{project_id}/",
      self.api_root
    )
  }

  pub fn project_tasks(
    &self,
    project_id: u64
  ) -> String {
    format!(
      "{}/projects/{project_id}/tasks",
      self.api_root
    )
  }

  pub fn project_task(
    &self,
    project_id: u64,
    task_id: u64
  ) -> String {
    format!(
      "{}/projects/{project_id}/tasks/\
       {task_id}/",
      self.api_root
    )
  }

  pub fn project_task_move(
    &self,
    project_id: u64,
    task_id: u64
  ) -> String {
    format!(
      "{}move/",
      self.project_task(
        project_id, task_id
      )
    )
  }

  pub fn task_followup(
    &self,
    task_id: u64
  ) -> String {
    format!(
      "{}/task/{task_id}/followup/",
      self.site_root
    )
  }

  pub fn task_update(
    &self,
    task_id: u64
  ) -> String {
    format!(
      "{}/task/{task_id}/update/",
      self.site_root
    )
  }

  pub fn task_remind_delete(
    &self,
    task_id: u64
  ) -> String {
    format!(
      "{}/task/{task_id}/remind-delete/",
      self.site_root
    )
  }

  pub fn resource_preview(
    &self,
    resource_id: u64
  ) -> String {
    format!(
      "{}/ressource/{resource_id}/embed",
      self.site_root
    )
  }
}

#[cfg(test)]
mod tests {
  use super::Endpoints;

  #[test]
  fn default_routes_match_backend() {
    let urls = Endpoints::default();
    assert_eq!(
      urls.projects(),
      "/api/projects/"
    );
    assert_eq!(
      urls.project(4),
      "/api/projects/4/"
    );
    assert_eq!(
      urls.project_tasks(4),
      "/api/projects/4/tasks"
    );
    assert_eq!(
      urls.project_task(4, 9),
      "/api/projects/4/tasks/9/"
    );
    assert_eq!(
      urls.project_task_move(4, 9),
      "/api/projects/4/tasks/9/move/"
    );
    assert_eq!(
      urls.task_followup(9),
      "/task/9/followup/"
    );
    assert_eq!(
      urls.resource_preview(2),
      "/ressource/2/embed"
    );
  }

  #[test]
  fn roots_lose_trailing_slash() {
    let urls = Endpoints::new(
      "https://example.org/api/",
      "https://example.org/"
    );
    assert_eq!(
      urls.projects(),
      "https://example.org/api/projects/"
    );
    assert_eq!(
      urls.task_remind_delete(1),
      "https://example.org/task/1/remind-delete/"
    );
  }
}
