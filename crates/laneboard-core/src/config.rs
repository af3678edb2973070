use anyhow::{
  Context,
  anyhow,
  bail
};
use tracing::{
  debug,
  info,
  warn
};

use crate::endpoints::Endpoints;
use crate::format::{
  DEFAULT_TRUNCATE,
  DateDisplay
};

/// Which board a mount point shows.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum BoardKind {
  #[default]
  Projects,
  Tasks
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum BoardTarget {
  Projects,
  Tasks { project_id: u64 }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
  pub board:         BoardKind,
  pub project_id:    Option<u64>,
  pub api_root:      String,
  pub site_root:     String,
  pub csrf_cookie:   String,
  pub csrf_header:   String,
  pub date_display:  DateDisplay,
  pub name_truncate: usize
}

impl Default for BoardConfig {
  fn default() -> Self {
    Self {
      board:         BoardKind::Projects,
      project_id:    None,
      api_root:      "/api".to_string(),
      site_root:     String::new(),
      csrf_cookie:   "csrftoken"
        .to_string(),
      csrf_header:   "X-CSRFToken"
        .to_string(),
      date_display:  DateDisplay::default(),
      name_truncate: DEFAULT_TRUNCATE
    }
  }
}

impl BoardConfig {
  /// Builds the configuration from the
  /// mount element's `data-*` attributes
  /// (without the `data-` prefix).
  /// `config` holds a JSON object of
  /// further overrides; later keys win.
  #[tracing::instrument(skip_all)]
  pub fn load<I>(
    attributes: I
  ) -> anyhow::Result<Self>
  where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    let mut cfg = Self::default();

    for (key, value) in attributes {
      if normalize_key(&key) == "config" {
        let overrides =
          json_overrides(&value)?;
        cfg.apply_overrides(overrides)?;
      } else {
        cfg.apply_overrides([(
          key, value
        )])?;
      }
    }

    let target = cfg.target()?;
    info!(
      ?target,
      api_root = %cfg.api_root,
      "board configuration loaded"
    );
    Ok(cfg)
  }

  #[tracing::instrument(skip(
    self, overrides
  ))]
  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) -> anyhow::Result<()>
  where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    for (k, v) in overrides {
      let key = normalize_key(&k);
      debug!(key = %key, value = %v, "applying override");
      self.apply_one(&key, v.trim())?;
    }
    Ok(())
  }

  fn apply_one(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    match key {
      | "board" => {
        self.board = match value {
          | "projects" | "kanban" => {
            BoardKind::Projects
          }
          | "tasks" => BoardKind::Tasks,
          | other => {
            bail!(
              "unknown board kind: \
               {other}"
            )
          }
        };
      }
      | "project_id" => {
        let id = value
          .parse::<u64>()
          .with_context(|| {
            format!(
              "invalid project id: \
               {value}"
            )
          })?;
        self.project_id = Some(id);
      }
      | "api_root" => {
        self.api_root = value.to_string()
      }
      | "site_root" => {
        self.site_root =
          value.to_string()
      }
      | "csrf_cookie" => {
        self.csrf_cookie =
          value.to_string()
      }
      | "csrf_header" => {
        self.csrf_header =
          value.to_string()
      }
      | "date_display" => {
        self.date_display = value
          .parse()
          .map_err(|e: String| {
            anyhow!(e)
          })?;
      }
      | "name_truncate" => {
        self.name_truncate = value
          .parse::<usize>()
          .with_context(|| {
            format!(
              "invalid name_truncate: \
               {value}"
            )
          })?;
      }
      | other => {
        warn!(
          key = %other,
          "ignoring unknown board \
           setting"
        );
      }
    }
    Ok(())
  }

  pub fn target(
    &self
  ) -> anyhow::Result<BoardTarget> {
    match (self.board, self.project_id)
    {
      | (BoardKind::Projects, _) => {
        Ok(BoardTarget::Projects)
      }
      | (
        BoardKind::Tasks,
        Some(project_id)
      ) => {
        Ok(BoardTarget::Tasks {
          project_id
        })
      }
      | (BoardKind::Tasks, None) => {
        Err(anyhow!(
          "task board requires a \
           project id"
        ))
      }
    }
  }

  pub fn endpoints(&self) -> Endpoints {
    Endpoints::new(
      &self.api_root,
      &self.site_root
    )
  }
}

fn normalize_key(raw: &str) -> String {
  raw
    .trim()
    .trim_start_matches("data-")
    .replace('-', "_")
    .to_ascii_lowercase()
}

fn json_overrides(
  raw: &str
) -> anyhow::Result<Vec<(String, String)>>
{
  let value: serde_json::Value =
    serde_json::from_str(raw).context(
      "data-config is not valid JSON"
    )?;
  let serde_json::Value::Object(map) =
    value
  else {
    bail!(
      "data-config must be a JSON \
       object"
    );
  };

  Ok(
    map
      .into_iter()
      .map(|(key, value)| {
        let value = match value {
          | serde_json::Value::String(
            s
          ) => s,
          | other => other.to_string()
        };
        (key, value)
      })
      .collect()
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn attrs(
    pairs: &[(&str, &str)]
  ) -> Vec<(String, String)> {
    pairs
      .iter()
      .map(|(k, v)| {
        (k.to_string(), v.to_string())
      })
      .collect()
  }

  #[test]
  fn defaults_to_project_board() {
    let cfg = BoardConfig::load(
      Vec::<(String, String)>::new()
    )
    .expect("load defaults");
    assert_eq!(
      cfg.target().expect("target"),
      BoardTarget::Projects
    );
    assert_eq!(
      cfg.csrf_cookie,
      "csrftoken"
    );
    assert_eq!(
      cfg.endpoints().projects(),
      "/api/projects/"
    );
  }

  #[test]
  fn reads_task_board_from_data_attributes()
  {
    let cfg = BoardConfig::load(attrs(&[
      ("board", "tasks"),
      ("data-project-id", "42"),
    ]))
    .expect("load task board");
    assert_eq!(
      cfg.target().expect("target"),
      BoardTarget::Tasks {
        project_id: 42
      }
    );
  }

  #[test]
  fn json_config_overrides_attributes() {
    let cfg = BoardConfig::load(attrs(&[
      ("date-display", "locale_date"),
      (
        "config",
        r#"{"date_display":"date_string","name_truncate":12,"api_root":"/v2/api/"}"#,
      ),
    ]))
    .expect("load overrides");
    assert_eq!(
      cfg.date_display,
      DateDisplay::DateString
    );
    assert_eq!(cfg.name_truncate, 12);
    assert_eq!(
      cfg.endpoints().project(1),
      "/v2/api/projects/1/"
    );
  }

  #[test]
  fn task_board_without_project_is_rejected()
  {
    let err = BoardConfig::load(attrs(
      &[("board", "tasks")]
    ))
    .expect_err("missing project id");
    assert!(
      err
        .to_string()
        .contains("project id")
    );
  }

  #[test]
  fn bad_values_are_reported() {
    assert!(
      BoardConfig::load(attrs(&[(
        "project-id",
        "abc"
      )]))
      .is_err()
    );
    assert!(
      BoardConfig::load(attrs(&[(
        "config", "[1]"
      )]))
      .is_err()
    );
  }
}
